//! Paylines and the per-line payout rules.

use crate::reels::Window;
use crate::symbol::Symbol;

/// Window cell bits, `column + row * 3`.
pub const NW: u16 = 1 << 0;
pub const NC: u16 = 1 << 1;
pub const NE: u16 = 1 << 2;
pub const CW: u16 = 1 << 3;
pub const CC: u16 = 1 << 4;
pub const CE: u16 = 1 << 5;
pub const SW: u16 = 1 << 6;
pub const SC: u16 = 1 << 7;
pub const SE: u16 = 1 << 8;

/// Payline masks in activation order: line `k` pays when more than `k`
/// lines are played.
pub const LINES: [u16; 9] = [
    CW | CC | CE,
    NW | NC | NE,
    SW | SC | SE,
    NW | CC | SE,
    SW | CC | NE,
    CW | NC | CE,
    CW | SC | CE,
    SW | CC | SE,
    NW | CC | NE,
];

pub const MAX_LINES: usize = LINES.len();

/// Three diamonds on a line.
pub const JACKPOT: u32 = 1199;

/// Multiplier applied per diamond standing in for the line symbol.
const WILD_FACTOR: u32 = 3;

/// Payout multiplier for the cells of `window` selected by `mask`.
///
/// Three diamonds always pay [`JACKPOT`]. A full line of sevens or of one
/// bar rank (or of mixed bars) pays its base, tripled per diamond on the
/// line. Anything else pays for lone diamonds only: 10 for two, 2 for one.
pub fn payout(mask: u16, window: &Window) -> u32 {
    let (mut d, mut s, mut b3, mut b2, mut b1, mut n) = (0u32, 0u32, 0u32, 0u32, 0u32, 0u32);
    for (i, &sym) in window.cells().iter().enumerate() {
        if sym.is_blank() || mask & (1 << i) == 0 {
            continue;
        }
        match sym {
            Symbol::Diamond => d += 1,
            Symbol::Seven => s += 1,
            Symbol::Bar3 => b3 += 1,
            Symbol::Bar2 => b2 += 1,
            Symbol::Bar1 => b1 += 1,
            Symbol::Blank => {}
        }
        n += 1;
    }

    if d == 3 {
        return JACKPOT;
    }
    if n == 3 {
        let mlt = WILD_FACTOR.pow(d);
        let r = n - d;
        let base = if r == s {
            Some(100)
        } else if r == b3 {
            Some(40)
        } else if r == b2 {
            Some(20)
        } else if r == b1 {
            Some(10)
        } else if r == b3 + b2 + b1 {
            Some(5)
        } else {
            None
        };
        if let Some(base) = base {
            return mlt * base;
        }
    }
    match d {
        2 => 10,
        1 => 2,
        _ => 0,
    }
}

/// Paytable tier a payout falls into: the largest of
/// 900, 300, 100, 40, 20, 10, 2 not above it, else 0.
pub fn payout_tier(payout: u32) -> u32 {
    const TIERS: [u32; 7] = [900, 300, 100, 40, 20, 10, 2];
    TIERS.into_iter().find(|&t| payout >= t).unwrap_or(0)
}
