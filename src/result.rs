use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lines::{LINES, MAX_LINES, payout};
use crate::reels::{Stops, Window, check_stops};

/// Outcome of one spin at a given number of active lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    #[serde(rename = "pos")]
    stops: Stops,
    /// Payout per paying line, keyed by zero-based line index.
    lines: BTreeMap<usize, u32>,
    payout: u32,
}

/// Rejects line counts outside `1..=9`.
pub fn check_lines(lines: usize) -> Result<()> {
    if lines == 0 || lines > MAX_LINES {
        return Err(Error::InvalidLines(lines));
    }
    Ok(())
}

impl SpinResult {
    /// Score `stops` with the first `lines` paylines active.
    ///
    /// # Errors
    /// * [`Error::InvalidLines`] if `lines` is not in `1..=9`.
    /// * [`Error::InvalidStop`] if a stop is past the end of its reel.
    pub fn new(lines: usize, stops: Stops) -> Result<Self> {
        check_lines(lines)?;
        check_stops(&stops)?;
        Ok(Self::score(lines, stops))
    }

    /// Scoring for already validated input.
    pub(crate) fn score(lines: usize, stops: Stops) -> Self {
        let window = Window::new(&stops);
        let mut res = Self {
            stops,
            lines: BTreeMap::new(),
            payout: 0,
        };
        for (i, &mask) in LINES[..lines].iter().enumerate() {
            let p = payout(mask, &window);
            if p != 0 {
                res.lines.insert(i, p);
                res.payout += p;
            }
        }
        res
    }

    pub fn stops(&self) -> Stops {
        self.stops
    }

    pub fn lines(&self) -> &BTreeMap<usize, u32> {
        &self.lines
    }

    /// Total payout multiplier across all active lines.
    pub fn payout(&self) -> u32 {
        self.payout
    }

    pub fn is_win(&self) -> bool {
        self.payout != 0
    }

    pub fn window(&self) -> Window {
        Window::new(&self.stops)
    }
}

/// Text summary of a result: stops, the symbol grid, each paying line
/// (1-based) and the total.
pub fn render(res: &SpinResult) -> String {
    let mut out = String::new();
    let [a, b, c] = res.stops;
    // writing to a String cannot fail
    let _ = writeln!(out, "pos: {a} {b} {c}");
    let _ = writeln!(out, "{}", res.window());
    if !res.lines.is_empty() {
        out.push_str("lines:\n");
        for (k, p) in &res.lines {
            let _ = writeln!(out, "{:>2} payouts {p}x", k + 1);
        }
    }
    let _ = write!(out, "payout: {}x", res.payout);
    out
}
