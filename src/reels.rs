//! Reel layouts and the visible 3x3 window.

use std::fmt;

use crate::error::{Error, Result};
use crate::symbol::Symbol::{self, Bar1, Bar2, Bar3, Blank, Diamond, Seven};

/// Stops per reel.
pub const REEL_LEN: usize = 22;

/// Number of reels (and window columns).
pub const NUM_REELS: usize = 3;

/// Visible rows: top, middle, bottom.
pub const NUM_ROWS: usize = 3;

/// Reel stop positions, one per reel; each names the middle-row symbol.
pub type Stops = [usize; NUM_REELS];

#[rustfmt::skip]
pub static REELS: [[Symbol; REEL_LEN]; NUM_REELS] = [
    [
        Blank, Bar1, Blank, Bar2, Blank, Bar1, Blank, Bar3, Blank, Bar1, Blank,
        Bar2, Blank, Bar1, Blank, Seven, Blank, Bar1, Blank, Bar1, Blank, Diamond,
    ],
    [
        Blank, Blank, Bar2, Blank, Bar1, Blank, Bar2, Blank, Bar3, Blank, Seven,
        Blank, Bar2, Blank, Bar2, Blank, Bar3, Blank, Bar2, Blank, Blank, Diamond,
    ],
    [
        Blank, Blank, Bar1, Blank, Bar2, Blank, Bar1, Blank, Bar3, Blank, Seven,
        Blank, Bar1, Blank, Bar1, Blank, Bar2, Blank, Bar1, Blank, Blank, Diamond,
    ],
];

/// Symbol shown on `reel` at `stop` shifted by `offset` rows, wrapping
/// around the reel in both directions.
#[inline]
pub fn symbol_at(reel: usize, stop: usize, offset: isize) -> Symbol {
    let strip = &REELS[reel];
    let idx = (stop as isize + offset).rem_euclid(strip.len() as isize) as usize;
    strip[idx]
}

/// Rejects any stop outside its reel.
pub fn check_stops(stops: &Stops) -> Result<()> {
    for (reel, &stop) in stops.iter().enumerate() {
        if stop >= REELS[reel].len() {
            return Err(Error::InvalidStop { reel, stop });
        }
    }
    Ok(())
}

/// The 3x3 grid of symbols visible for a set of stops, indexed
/// `column + row * 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window([Symbol; NUM_REELS * NUM_ROWS]);

impl Window {
    /// Resolve the window for in-range `stops`.
    pub fn new(stops: &Stops) -> Self {
        let mut cells = [Symbol::Blank; NUM_REELS * NUM_ROWS];
        for row in 0..NUM_ROWS {
            for (col, &stop) in stops.iter().enumerate() {
                cells[col + row * NUM_REELS] = symbol_at(col, stop, row as isize - 1);
            }
        }
        Self(cells)
    }

    pub const fn from_cells(cells: [Symbol; NUM_REELS * NUM_ROWS]) -> Self {
        Self(cells)
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Symbol {
        self.0[col + row * NUM_REELS]
    }

    #[inline]
    pub fn cells(&self) -> &[Symbol; NUM_REELS * NUM_ROWS] {
        &self.0
    }
}

/// Three rows of glyphs, no trailing newline.
impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.0.iter().enumerate() {
            if i != 0 && i % NUM_REELS == 0 {
                f.write_str("\n")?;
            }
            write!(f, "{s:#}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wraps_below_zero() {
        for reel in 0..NUM_REELS {
            assert_eq!(symbol_at(reel, 0, -1), REELS[reel][REEL_LEN - 1]);
        }
    }

    #[test]
    fn wraps_past_end() {
        for reel in 0..NUM_REELS {
            assert_eq!(symbol_at(reel, REEL_LEN - 1, 1), REELS[reel][0]);
        }
    }

    #[test]
    fn top_row_of_zero_stops_is_diamonds() {
        let w = Window::new(&[0, 0, 0]);
        for col in 0..NUM_REELS {
            assert_eq!(w.get(col, 0), Symbol::Diamond);
            assert_eq!(w.get(col, 1), Symbol::Blank);
        }
    }

    #[test]
    fn renders_rows() {
        let w = Window::new(&[12, 19, 17]);
        assert_eq!(w.to_string(), "===\n∙∙∙\n-∙-");
        let w = Window::new(&[0, 21, 0]);
        assert_eq!(w.to_string(), "◆∙◆\n∙◆∙\n-∙∙");
    }

    #[test]
    fn rejects_out_of_range_stop() {
        assert_eq!(
            check_stops(&[0, 22, 3]),
            Err(Error::InvalidStop { reel: 1, stop: 22 })
        );
        assert!(check_stops(&[21, 21, 21]).is_ok());
    }

    proptest! {
        #[test]
        fn rows_are_consecutive_reel_stops(
            a in 0..REEL_LEN, b in 0..REEL_LEN, c in 0..REEL_LEN
        ) {
            let stops = [a, b, c];
            let w = Window::new(&stops);
            for (col, &stop) in stops.iter().enumerate() {
                prop_assert_eq!(w.get(col, 0), REELS[col][(stop + REEL_LEN - 1) % REEL_LEN]);
                prop_assert_eq!(w.get(col, 1), REELS[col][stop]);
                prop_assert_eq!(w.get(col, 2), REELS[col][(stop + 1) % REEL_LEN]);
            }
        }
    }
}
