//! # tripled
//!
//! Triple Diamond: a 3-reel, 3-row slot with up to nine paylines.
//!
//! The crate covers the payout engine and the RTP-targeted weighted
//! strips that production spins draw from:
//!
//! 1. **Scoring**: three reel stops resolve to a 3x3 [`Window`]; each active
//!    payline is scored by [`payout`] and collected into a [`SpinResult`].
//! 2. **Fair spins** with [`spin`]: one uniform stop per reel. This is the
//!    untuned baseline.
//! 3. **Weighted spins** with [`Dist::spin`]: a uniform draw from a
//!    prebuilt strip whose payback equals a target RTP.
//!
//! Randomness comes in through the [`Draw`] trait, which every
//! [`rand::Rng`] implements.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use rand::SeedableRng;
//! use rand_pcg::Pcg32;
//! use tripled::{Dist, DistConfig, render};
//!
//! # fn main() -> Result<(), tripled::Error> {
//! let dist = Dist::build(&DistConfig::default())?; // build once, share
//! let mut rng = Pcg32::seed_from_u64(12415);
//! let res = dist.spin(&mut rng, 9)?;
//! println!("{}", render(&res));
//! # Ok(()) }
//! ```
//!
//! ## Performance
//! * **Build**: 9 x 22^3 scored triples, line counts in parallel.
//! * **Spin**: O(1) draw plus scoring of at most nine lines.
//! * **Space**: one `Vec<[usize; 3]>` per line count (about 21k slots each
//!   at the default target).

extern crate self as tripled;

mod dist;
mod draw;
mod error;
mod lines;
mod reels;
mod result;
mod spin;
mod strip;
mod symbol;

pub use dist::{DEFAULT_RTP, DEFAULT_SEED, DEFAULT_SHUFFLES, Dist, DistConfig, MAX_SLOTS};
pub use draw::{Draw, Sequence};
pub use error::{Error, Result};
pub use lines::{
    CC, CE, CW, JACKPOT, LINES, MAX_LINES, NC, NE, NW, SC, SE, SW, payout, payout_tier,
};
pub use reels::{NUM_REELS, NUM_ROWS, REEL_LEN, REELS, Stops, Window, symbol_at};
pub use result::{SpinResult, render};
pub use spin::spin;
pub use strip::Strip;
pub use symbol::Symbol;

/// Derive macro imported from `tripled_macros`.
pub use tripled_macros::Glyphs;

/// Trait implemented by the `Glyphs` derive macro: a fieldless enum with a
/// display glyph per variant.
pub trait Glyphs: Sized + Copy + 'static {
    /// All variants in declaration order.
    const ALL: &'static [Self];

    /// Single-character display form.
    fn glyph(self) -> char;

    /// Variant name.
    fn name(self) -> &'static str;
}
