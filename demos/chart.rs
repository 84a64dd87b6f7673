//! Theoretical chance-of-winning chart.
//!
//! Run with: `cargo run --example chart -- 120`
//!
//! Prints, for a room of N cards (default 100), the chance that somebody has
//! a line and somebody has a full house after each ball, next to a
//! Monte-Carlo estimate for a single fixed row as a sanity check.
//! Set `RUST_LOG=bingo_odds=debug` to see engine events.

use bingo_odds::odds_engine::{
    adapter::chart_to_json,
    curve::{single_card_probability, theoretical_curve},
    simulation::simulate_completion,
};
use bingo_odds::{OddsResult, Scope};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

fn main() -> OddsResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cards: u32 = std::env::args()
        .nth(1)
        .and_then(|a| a.parse().ok())
        .unwrap_or(100);

    let curve = theoretical_curve(cards);
    let mut rng = StdRng::seed_from_u64(7);
    let sim = simulate_completion(&[4, 18, 37, 62, 85], 10_000, &mut rng);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Room of {cards} cards");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {:>4}  {:>9}  {:>9}  {:>11}  {:>11}", "ball", "line", "bingo", "1 row calc", "1 row sim");
    for pt in curve.iter().filter(|p| p.draw_index % 5 == 0) {
        let k = pt.draw_index;
        println!(
            "  {:>4}  {:>8.2}%  {:>8.2}%  {:>10.3}%  {:>10.3}%",
            k,
            pt.line_probability * 100.0,
            pt.bingo_probability * 100.0,
            single_card_probability(Scope::Line, k) * 100.0,
            sim[k as usize - 1] * 100.0,
        );
    }

    let json = chart_to_json(cards, &curve)?;
    println!();
    println!("  JSON payload: {} points", json["points"].as_array().map_or(0, |p| p.len()));
    Ok(())
}
