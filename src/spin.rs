//! Unweighted spins: every stop on every reel equally likely.

use crate::draw::Draw;
use crate::error::Result;
use crate::reels::{REELS, Stops};
use crate::result::{SpinResult, check_lines};

/// Spin the reels with a uniform stop per reel and score `lines` paylines.
///
/// This is the untuned machine; its payback is far above 100%. Use
/// [`Dist::spin`](crate::Dist::spin) for play.
///
/// # Errors
/// [`Error::InvalidLines`](crate::Error::InvalidLines) if `lines` is not
/// in `1..=9`; nothing is drawn in that case.
pub fn spin<D: Draw + ?Sized>(rng: &mut D, lines: usize) -> Result<SpinResult> {
    check_lines(lines)?;
    let mut stops: Stops = [0; 3];
    for (stop, reel) in stops.iter_mut().zip(REELS.iter()) {
        *stop = rng.draw(reel.len());
    }
    Ok(SpinResult::score(lines, stops))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Sequence;
    use crate::error::Error;
    use crate::reels::REEL_LEN;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use rstest::rstest;

    #[test]
    fn invalid_lines_draw_nothing() {
        let mut seq = Sequence::new([1, 2, 3]);
        assert_eq!(spin(&mut seq, 0), Err(Error::InvalidLines(0)));
        assert_eq!(spin(&mut seq, 10), Err(Error::InvalidLines(10)));
        assert_eq!(seq.served(), 0);
    }

    #[test]
    fn draws_one_stop_per_reel_in_order() {
        let mut seq = Sequence::new([16, 11, 11]);
        let res = spin(&mut seq, 9).unwrap();
        assert_eq!(res.stops(), [16, 11, 11]);
        assert_eq!(seq.served(), 3);
    }

    // stops and totals at nine lines
    #[rstest]
    #[case([1, 12, 17], 0)]
    #[case([12, 19, 17], 20)]
    #[case([21, 15, 15], 6)]
    #[case([7, 0, 8], 122)]
    #[case([16, 11, 11], 105)]
    #[case([0, 21, 0], 1313)]
    #[case([0, 21, 1], 136)]
    #[case([7, 9, 6], 5)]
    fn regression_vectors(#[case] stops: Stops, #[case] exp: u32) {
        let mut seq = Sequence::new(stops);
        let res = spin(&mut seq, 9).unwrap();
        assert_eq!(res.payout(), exp, "stops {stops:?}");
    }

    #[rstest]
    #[case(3702, [21, 6, 11], 6)]
    #[case(3554, [9, 17, 17], 0)]
    #[case(525, [3, 15, 14], 10)]
    #[case(7035, [3, 6, 9], 0)]
    #[case(1382, [16, 6, 4], 0)]
    #[case(15475, [9, 10, 8], 0)]
    #[case(61, [10, 20, 20], 186)]
    #[case(117, [8, 21, 0], 458)]
    #[case(196, [14, 9, 20], 304)]
    #[case(233, [20, 10, 20], 914)]
    fn seeded_fair_spins(#[case] seed: u64, #[case] stops: Stops, #[case] exp: u32) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let res = spin(&mut rng, 9).unwrap();
        assert_eq!(res.stops(), stops);
        assert_eq!(res.payout(), exp);
    }

    #[test]
    fn fair_machine_pays_back_its_enumeration() {
        // stepping each reel through every stop visits the full 22^3 space
        let mut total = 0u64;
        for i in 0..REEL_LEN {
            for j in 0..REEL_LEN {
                for k in 0..REEL_LEN {
                    let mut seq = Sequence::new([i, j, k]);
                    total += u64::from(spin(&mut seq, 1).unwrap().payout());
                }
            }
        }
        assert_eq!(total, 20_353);
    }
}
