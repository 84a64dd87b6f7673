//! A seeded game played ball by ball.
//!
//! Run with: `cargo run --example live_game`
//!
//! Two cards are parsed from the JSON a photo recogniser would produce, then
//! a shuffled pouch is drawn until one of them completes a line. After each
//! ball the live snapshot is printed; once a card is one ball away the
//! next-draw estimates appear, with and without the opponent discount.

use bingo_odds::odds_engine::adapter::{card_from_str, game_context_from_json, snapshot_to_json};
use bingo_odds::odds_engine::pouch::Pouch;
use bingo_odds::{live_snapshot, OddsResult, OpponentModel};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

const CARD_A: &str = r#"{"grid": [
    [3, 15, null, null, 42, null, 67, null, 90],
    [8, null, 21, 33, null, 55, null, null, 80],
    [1, 19, null, null, 48, null, null, 71, 89]
]}"#;

const CARD_B: &str = r#"[
    [2, null, 24, 36, null, 51, null, 77, null],
    [9, 17, null, null, 44, null, 62, null, 85],
    [6, null, 28, 39, null, 58, null, 73, null]
]"#;

fn main() -> OddsResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cards = [card_from_str(CARD_A)?, card_from_str(CARD_B)?];
    let ctx = game_context_from_json(r#"{"total_cards_in_play": 80}"#)?;
    let naive = ctx.with_opponent_model(OpponentModel::Ignore);

    for (i, card) in cards.iter().enumerate() {
        println!("Card {}:\n{card}\n", i + 1);
    }

    let mut rng = StdRng::seed_from_u64(2024);
    let mut pouch = Pouch::new_shuffled(&mut rng);

    while let Some(ball) = pouch.draw() {
        let snapshot = live_snapshot(&cards, pouch.called(), &ctx);
        let (Some(line), Some(bingo)) = (snapshot.needed_for_line, snapshot.needed_for_bingo) else {
            println!("ball {:>2} → {ball:>2}   pouch empty, no estimate", pouch.called().len());
            break;
        };
        print!("ball {:>2} → {ball:>2}   line needs {line}  bingo needs {bingo:>2}", pouch.called().len());

        if snapshot.is_one_away(bingo_odds::Scope::Line) {
            let plain = live_snapshot(&cards, pouch.called(), &naive);
            let outs: Vec<String> = snapshot.line_outs.iter().map(|n| n.to_string()).collect();
            print!(
                "   outs [{}]  hit {:.2}%  win {:.2}% (ignoring room: {:.2}%)",
                outs.join(" "),
                snapshot.prob_hit_line_out * 100.0,
                snapshot.prob_user_wins_line_next_draw * 100.0,
                plain.prob_user_wins_line_next_draw * 100.0,
            );
        }
        println!();

        if line == 0 {
            println!("\nLine after {} balls.", pouch.called().len());
            println!("{}", snapshot_to_json(&snapshot)?);
            break;
        }
    }
    Ok(())
}
