use crate::draw::Draw;
use crate::reels::Stops;

/// A weighted reel strip for one line count: stop triples drawn with equal
/// odds, where every winning triple appears once and losing triples fill
/// the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    lines: usize,
    wins: usize,
    win_payout: u64,
    items: Vec<Stops>,
}

impl Strip {
    pub(crate) fn new(lines: usize, wins: usize, win_payout: u64, items: Vec<Stops>) -> Self {
        Self {
            lines,
            wins,
            win_payout,
            items,
        }
    }

    /// Active line count this strip was built for.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Number of distinct winning triples on the strip.
    pub fn wins(&self) -> usize {
        self.wins
    }

    /// Sum of payouts over the winning triples.
    pub fn win_payout(&self) -> u64 {
        self.win_payout
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw one slot.
    pub fn sample<D: Draw + ?Sized>(&self, rng: &mut D) -> Stops {
        self.items[rng.draw(self.items.len())]
    }

    /// Expected payback of a uniform draw from this strip, per line wagered.
    pub fn rtp(&self) -> f64 {
        self.win_payout as f64 / (self.lines * self.items.len()) as f64
    }

    pub fn as_slice(&self) -> &[Stops] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Sequence;

    #[test]
    fn samples_by_index() {
        let strip = Strip::new(1, 1, 2, vec![[0, 0, 0], [1, 2, 3], [4, 5, 6]]);
        let mut seq = Sequence::new([1, 2, 3]);
        assert_eq!(strip.sample(&mut seq), [1, 2, 3]);
        assert_eq!(strip.sample(&mut seq), [4, 5, 6]);
        assert_eq!(strip.sample(&mut seq), [0, 0, 0]);
    }

    #[test]
    fn rtp_is_payout_per_line_per_slot() {
        let strip = Strip::new(2, 1, 30, vec![[0, 0, 0]; 20]);
        assert!((strip.rtp() - 0.75).abs() < 1e-12);
        assert_eq!(strip.len(), 20);
        assert!(!strip.is_empty());
    }
}
