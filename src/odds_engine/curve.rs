//! Theoretical "chance of winning" curve.
//!
//! Each card is idealised as an independent random set of numbers, so the
//! room-wide chance is `1 − (1 − p)^N` for a single-card chance `p`.

use crate::odds_engine::{
    combinatorics::combinations,
    models::{ChartPoint, Scope, TOTAL_BALLS},
};

/// Probability that a given set of `scope.size()` numbers has been fully
/// drawn after `draws` balls: `C(90 − s, k − s) / C(90, k)`, zero while
/// `k < s`.
pub fn single_card_probability(scope: Scope, draws: u8) -> f64 {
    let s = scope.size() as i64;
    let k = draws.min(TOTAL_BALLS) as i64;
    if k < s {
        return 0.0;
    }
    let total = TOTAL_BALLS as i64;
    (combinations(total - s, k - s) / combinations(total, k)).clamp(0.0, 1.0)
}

/// Chance that at least one of `cards` independent cards has won.
///
/// Evaluated as `−expm1(N · ln(1 − p))` so single-card chances far below
/// `f64::EPSILON` (early bingo draws) do not collapse to zero.
pub fn aggregate_probability(single: f64, cards: u32) -> f64 {
    let single = single.clamp(0.0, 1.0);
    match cards {
        0 => 0.0,
        1 => single,
        n => (-(n as f64 * (-single).ln_1p()).exp_m1()).clamp(0.0, 1.0),
    }
}

/// The 90-point chart for a room of `cards` cards, draw 1 first.
pub fn theoretical_curve(cards: u32) -> Vec<ChartPoint> {
    (1..=TOTAL_BALLS)
        .map(|k| ChartPoint {
            draw_index: k,
            line_probability: aggregate_probability(single_card_probability(Scope::Line, k), cards),
            bingo_probability: aggregate_probability(single_card_probability(Scope::Bingo, k), cards),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_before_threshold() {
        for k in 0..5 {
            assert_eq!(single_card_probability(Scope::Line, k), 0.0);
        }
        for k in 0..15 {
            assert_eq!(single_card_probability(Scope::Bingo, k), 0.0);
        }
        assert!(single_card_probability(Scope::Line, 5) > 0.0);
        assert!(single_card_probability(Scope::Bingo, 15) > 0.0);
    }

    #[test]
    fn first_possible_draw_is_one_over_choose() {
        let p = single_card_probability(Scope::Line, 5);
        assert!((p - 1.0 / 43_949_268.0).abs() < 1e-18);
    }

    #[test]
    fn reaches_one_at_last_ball() {
        assert!((single_card_probability(Scope::Line, 90) - 1.0).abs() < 1e-12);
        assert!((single_card_probability(Scope::Bingo, 90) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn aggregate_handles_edge_counts() {
        assert_eq!(aggregate_probability(0.3, 0), 0.0);
        assert!((aggregate_probability(0.3, 1) - 0.3).abs() < 1e-12);
        assert!((aggregate_probability(0.5, 2) - 0.75).abs() < 1e-12);
        assert_eq!(aggregate_probability(1.0, 50), 1.0);
    }

    #[test]
    fn aggregate_keeps_tiny_probabilities_alive() {
        let p = single_card_probability(Scope::Bingo, 15);
        assert!(p > 0.0 && p < f64::EPSILON);
        let room = aggregate_probability(p, 100);
        assert!(room > p, "room={room} single={p}");
    }

    #[test]
    fn curve_has_ninety_ordered_points() {
        let curve = theoretical_curve(10);
        assert_eq!(curve.len(), 90);
        for (i, pt) in curve.iter().enumerate() {
            assert_eq!(pt.draw_index as usize, i + 1);
        }
    }
}
