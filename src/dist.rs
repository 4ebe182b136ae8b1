//! RTP-targeted weighted strips, one per active line count.
//!
//! For each line count the full 22^3 stop space is scored. Every winning
//! triple goes on the strip once; the strip is then padded with losing
//! triples until a uniform draw from it pays back the target fraction of
//! the wager, and finally shuffled with a fixed seed so every build is
//! identical.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::draw::Draw;
use crate::error::{Error, Result};
use crate::lines::MAX_LINES;
use crate::reels::{REELS, Stops};
use crate::result::{SpinResult, check_lines};
use crate::strip::Strip;

pub const DEFAULT_RTP: f64 = 0.97;
pub const DEFAULT_SHUFFLES: usize = 3;
/// Shuffle seed shared by every build.
pub const DEFAULT_SEED: u64 = 1_788_975;

/// Longest strip a build may allocate, about 100 MiB of stops.
pub const MAX_SLOTS: usize = 1 << 22;

/// Build parameters. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistConfig {
    /// Target return-to-player, strictly between 0 and 1.
    pub target_rtp: f64,
    /// Shuffle passes over each strip.
    pub shuffles: usize,
    pub seed: u64,
}

impl Default for DistConfig {
    fn default() -> Self {
        Self {
            target_rtp: DEFAULT_RTP,
            shuffles: DEFAULT_SHUFFLES,
            seed: DEFAULT_SEED,
        }
    }
}

impl DistConfig {
    /// # Errors
    /// [`Error::InvalidRtp`] unless `0 < target_rtp < 1`.
    pub fn validate(&self) -> Result<()> {
        if !(self.target_rtp > 0.0 && self.target_rtp < 1.0) {
            return Err(Error::InvalidRtp(self.target_rtp));
        }
        Ok(())
    }
}

/// Weighted strips for line counts 1 through 9. Immutable once built, so a
/// shared reference can serve any number of concurrent spins.
#[derive(Debug, Clone, PartialEq)]
pub struct Dist {
    config: DistConfig,
    strips: Vec<Strip>,
}

impl Dist {
    /// Build with `target_rtp` and the default shuffle count and seed.
    pub fn new(target_rtp: f64) -> Result<Self> {
        Self::build(&DistConfig {
            target_rtp,
            ..DistConfig::default()
        })
    }

    /// Build every strip.
    ///
    /// Line counts are built in parallel; each gets its own generator
    /// seeded from `config.seed`, so the result matches a sequential build.
    ///
    /// # Errors
    /// * [`Error::InvalidRtp`] for a target outside (0, 1).
    /// * [`Error::Unfillable`] if a strip cannot hold its wins and be
    ///   padded to length.
    /// * [`Error::Oversized`] if a target this low needs more than
    ///   [`MAX_SLOTS`] slots.
    pub fn build(config: &DistConfig) -> Result<Self> {
        config.validate()?;
        info!(
            target_rtp = config.target_rtp,
            shuffles = config.shuffles,
            seed = config.seed,
            "building weighted distribution"
        );
        let strips = (1..=MAX_LINES)
            .into_par_iter()
            .map(|lines| build_strip(lines, config))
            .collect::<Result<Vec<_>>>()?;
        info!(
            slots = strips.iter().map(Strip::len).sum::<usize>(),
            "weighted distribution ready"
        );
        Ok(Self {
            config: *config,
            strips,
        })
    }

    pub fn config(&self) -> &DistConfig {
        &self.config
    }

    /// Strip for `lines` active lines.
    pub fn strip(&self, lines: usize) -> Result<&Strip> {
        check_lines(lines)?;
        Ok(&self.strips[lines - 1])
    }

    pub fn strips(&self) -> &[Strip] {
        &self.strips
    }

    /// Spin with `lines` active lines: draw a slot from that line count's
    /// strip and score its stops.
    ///
    /// # Errors
    /// [`Error::InvalidLines`] if `lines` is not in `1..=9`.
    pub fn spin<D: Draw + ?Sized>(&self, rng: &mut D, lines: usize) -> Result<SpinResult> {
        let strip = self.strip(lines)?;
        Ok(SpinResult::score(lines, strip.sample(rng)))
    }
}

/// Enumerate, fill and shuffle the strip for one line count.
pub(crate) fn build_strip(lines: usize, config: &DistConfig) -> Result<Strip> {
    let mut wins = Vec::new();
    let mut losses = Vec::new();
    let mut win_payout = 0u64;
    for i in 0..REELS[0].len() {
        for j in 0..REELS[1].len() {
            for k in 0..REELS[2].len() {
                let res = SpinResult::score(lines, [i, j, k]);
                if res.is_win() {
                    wins.push(res.stops());
                    win_payout += u64::from(res.payout());
                } else {
                    losses.push(res.stops());
                }
            }
        }
    }

    let len = strip_len(lines, win_payout, config.target_rtp)?;
    let n_wins = wins.len();
    let mut items = fill(lines, wins, &losses, len)?;

    let mut rng = Pcg64::seed_from_u64(config.seed);
    for _ in 0..config.shuffles {
        items.shuffle(&mut rng);
    }

    debug!(
        lines,
        wins = n_wins,
        losses = losses.len(),
        win_payout,
        len,
        "built strip"
    );
    Ok(Strip::new(lines, n_wins, win_payout, items))
}

/// Slots needed so that `win_payout` over the strip pays back `target_rtp`
/// of a `lines` wager per spin. Checked against [`MAX_SLOTS`] before
/// anything is allocated.
fn strip_len(lines: usize, win_payout: u64, target_rtp: f64) -> Result<usize> {
    let slots = (win_payout as f64 / lines as f64 / target_rtp).ceil();
    if !slots.is_finite() || slots > MAX_SLOTS as f64 {
        return Err(Error::Oversized {
            lines,
            slots,
            max: MAX_SLOTS,
        });
    }
    Ok(slots as usize)
}

/// Wins once each, then losses cycled in order until `len` slots are used.
fn fill(lines: usize, wins: Vec<Stops>, losses: &[Stops], len: usize) -> Result<Vec<Stops>> {
    let n_wins = wins.len();
    if len == 0 || len < n_wins || (len > n_wins && losses.is_empty()) {
        return Err(Error::Unfillable {
            lines,
            wins: n_wins,
            len,
        });
    }
    let mut items = wins;
    items.reserve(len - n_wins);
    items.extend(losses.iter().copied().cycle().take(len - n_wins));
    Ok(items)
}
