use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Requested active line count is outside `1..=9`.
    #[error("invalid lines: {0}")]
    InvalidLines(usize),

    /// Target return-to-player must be finite and strictly inside (0, 1).
    #[error("invalid target rtp: {0}")]
    InvalidRtp(f64),

    #[error("invalid stop {stop} for reel {reel}")]
    InvalidStop { reel: usize, stop: usize },

    /// The strip for `lines` cannot hold every win once and be padded with
    /// losses up to `len` slots.
    #[error("cannot fill strip for {lines} lines: {wins} wins, {len} slots")]
    Unfillable { lines: usize, wins: usize, len: usize },

    /// The target asks for a strip longer than `max` slots.
    #[error("strip for {lines} lines needs {slots} slots, limit is {max}")]
    Oversized { lines: usize, slots: f64, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
