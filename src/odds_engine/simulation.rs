//! Monte-Carlo cross-check for the theoretical curve.
//!
//! Plays `trials` seeded pouches to the end and records the draw on which a
//! target first completes. The cumulative share of trials gives the
//! empirical completion chance after each draw.

use rand::Rng;

use crate::odds_engine::{
    models::{Card, ChartPoint, TOTAL_BALLS},
    pouch::Pouch,
};

/// Empirical chance, for each draw `k = 1..=90`, that every number in
/// `numbers` has been called. Index 0 holds draw 1.
pub fn simulate_completion<R: Rng>(numbers: &[u8], trials: usize, rng: &mut R) -> Vec<f64> {
    let mut completed_at = vec![0usize; TOTAL_BALLS as usize];
    for _ in 0..trials {
        let pos = call_positions(rng);
        let valid = numbers.iter().copied().filter(|n| (1..=TOTAL_BALLS).contains(n));
        let draw = completion_draw(&pos, valid).unwrap_or(1);
        completed_at[draw as usize - 1] += 1;
    }
    cumulative_share(&completed_at, trials)
}

/// Empirical line (any full row) and bingo curve for one concrete card.
pub fn simulate_card<R: Rng>(card: &Card, trials: usize, rng: &mut R) -> Vec<ChartPoint> {
    let mut line_at = vec![0usize; TOTAL_BALLS as usize];
    let mut bingo_at = vec![0usize; TOTAL_BALLS as usize];
    for _ in 0..trials {
        let pos = call_positions(rng);
        let line = card
            .rows()
            .filter(|row| row.is_full())
            .filter_map(|row| completion_draw(&pos, row.numbers()))
            .min()
            .unwrap_or(TOTAL_BALLS);
        let bingo = completion_draw(&pos, card.numbers()).unwrap_or(1);
        line_at[line as usize - 1] += 1;
        bingo_at[bingo as usize - 1] += 1;
    }

    let line = cumulative_share(&line_at, trials);
    let bingo = cumulative_share(&bingo_at, trials);
    (1..=TOTAL_BALLS)
        .zip(line.into_iter().zip(bingo))
        .map(|(k, (l, b))| ChartPoint { draw_index: k, line_probability: l, bingo_probability: b })
        .collect()
}

/// Shuffle a fresh pouch and return, for each ball, the draw it came out on.
fn call_positions<R: Rng>(rng: &mut R) -> [u8; TOTAL_BALLS as usize + 1] {
    let mut pouch = Pouch::new_shuffled(rng);
    let mut pos = [0u8; TOTAL_BALLS as usize + 1];
    let mut k = 0u8;
    while let Some(ball) = pouch.draw() {
        k += 1;
        pos[ball as usize] = k;
    }
    pos
}

/// Draw on which the last of `numbers` came out. Numbers that are never
/// in the pouch are skipped.
fn completion_draw(pos: &[u8], numbers: impl Iterator<Item = u8>) -> Option<u8> {
    numbers
        .filter_map(|n| pos.get(n as usize).copied())
        .filter(|&draw| draw > 0)
        .max()
}

fn cumulative_share(counts: &[usize], trials: usize) -> Vec<f64> {
    if trials == 0 {
        return vec![0.0; counts.len()];
    }
    let mut running = 0usize;
    counts
        .iter()
        .map(|&c| {
            running += c;
            running as f64 / trials as f64
        })
        .collect()
}
