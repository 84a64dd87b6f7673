//! Live win estimate for an in-progress game.
//!
//! Every call is a pure function of the user's cards, the numbers called so
//! far, and the room context. Nothing is cached between calls.
//!
//! ## Passes
//!
//! 1. **Minimum needed**: the fewest undrawn numbers separating any full row
//!    from a line, and any card from bingo.
//! 2. **Outs**: the undrawn numbers on every row/card sitting at that
//!    minimum. Stored as a set, so a number shared by several rows counts once.
//! 3. **Next draw**: only when the minimum is exactly one. The chance the
//!    next ball is an out, discounted by the chance some opponent card
//!    completes on the same ball.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::odds_engine::{
    hypergeometric::hypergeometric,
    models::{
        Card, GameContext, OpponentModel, ProgressSnapshot, Scope, LINES_PER_CARD,
        NUMBERS_PER_CARD, NUMBERS_PER_LINE, Row, TOTAL_BALLS,
    },
};

/// Membership mask over the numbers called so far.
struct DrawnMask {
    called: [bool; TOTAL_BALLS as usize + 1],
    count: u8,
}

impl DrawnMask {
    fn from_calls(calls: &[u8]) -> Self {
        let mut called = [false; TOTAL_BALLS as usize + 1];
        let mut count = 0u8;
        for &n in calls {
            if !(1..=TOTAL_BALLS).contains(&n) {
                warn!(
                    target: "bingo_odds::live",
                    number = n,
                    message = "ignoring called number outside 1..=90"
                );
                continue;
            }
            if !called[n as usize] {
                called[n as usize] = true;
                count += 1;
            }
        }
        DrawnMask { called, count }
    }

    fn contains(&self, n: u8) -> bool {
        self.called.get(n as usize).copied().unwrap_or(false)
    }

    fn remaining(&self) -> u8 {
        TOTAL_BALLS - self.count
    }
}

/// Compute the progress snapshot for `cards` after the numbers in `drawn`
/// have been called.
///
/// `drawn` is the call history; order and repeats do not matter. With no
/// cards, or with every ball already out, the default snapshot comes back.
pub fn live_snapshot(cards: &[Card], drawn: &[u8], ctx: &GameContext) -> ProgressSnapshot {
    let mask = DrawnMask::from_calls(drawn);
    let remaining = mask.remaining();

    if cards.is_empty() || remaining == 0 {
        debug!(
            target: "bingo_odds::live",
            cards = cards.len(),
            drawn = mask.count,
            message = "nothing to estimate; returning default snapshot"
        );
        return ProgressSnapshot::default();
    }

    // Pass 1: minimum needed.
    let mut needed_for_line = NUMBERS_PER_LINE;
    let mut needed_for_bingo = NUMBERS_PER_CARD;
    for card in cards {
        needed_for_bingo = needed_for_bingo.min(card_needed(card, &mask));
        for needed in card.rows().filter_map(|row| row_needed(row, &mask)) {
            needed_for_line = needed_for_line.min(needed);
        }
    }

    // Pass 2: outs at that minimum.
    let mut line_outs = BTreeSet::new();
    let mut bingo_outs = BTreeSet::new();
    for card in cards {
        if (1..=NUMBERS_PER_LINE).contains(&needed_for_line) {
            for row in card.rows() {
                if row_needed(row, &mask) == Some(needed_for_line) {
                    line_outs.extend(row.numbers().filter(|&n| !mask.contains(n)));
                }
            }
        }
        if (1..=NUMBERS_PER_CARD).contains(&needed_for_bingo)
            && card_needed(card, &mask) == needed_for_bingo
        {
            bingo_outs.extend(card.numbers().filter(|&n| !mask.contains(n)));
        }
    }

    let opponents = ctx.opponent_cards(cards.len());
    let (prob_hit_line_out, prob_user_wins_line_next_draw) = next_draw_odds(
        Scope::Line, needed_for_line, line_outs.len(), &mask, opponents, ctx.opponent_model,
    );
    let (prob_hit_bingo_out, prob_user_wins_bingo_next_draw) = next_draw_odds(
        Scope::Bingo, needed_for_bingo, bingo_outs.len(), &mask, opponents, ctx.opponent_model,
    );

    debug!(
        target: "bingo_odds::live",
        drawn = mask.count,
        needed_for_line,
        needed_for_bingo,
        line_outs = line_outs.len(),
        bingo_outs = bingo_outs.len(),
        opponents,
        prob_user_wins_line_next_draw,
        prob_user_wins_bingo_next_draw,
        message = "snapshot computed"
    );

    ProgressSnapshot {
        needed_for_line: Some(needed_for_line),
        needed_for_bingo: Some(needed_for_bingo),
        line_outs,
        bingo_outs,
        prob_hit_line_out,
        prob_hit_bingo_out,
        prob_user_wins_line_next_draw,
        prob_user_wins_bingo_next_draw,
    }
}

/// Undrawn numbers left on `row`, or `None` if it is not a full
/// five-number row.
fn row_needed(row: Row<'_>, mask: &DrawnMask) -> Option<u8> {
    if !row.is_full() {
        return None;
    }
    let hits = row.numbers().filter(|&n| mask.contains(n)).count() as u8;
    Some(NUMBERS_PER_LINE - hits)
}

fn card_needed(card: &Card, mask: &DrawnMask) -> u8 {
    let hits = card.numbers().filter(|&n| mask.contains(n)).count() as u8;
    NUMBERS_PER_CARD.saturating_sub(hits)
}

/// `(prob_hit, prob_user_wins)` for the next ball. Both zero unless the
/// user is exactly one number away.
fn next_draw_odds(
    scope: Scope,
    needed: u8,
    outs: usize,
    mask: &DrawnMask,
    opponents: u32,
    model: OpponentModel,
) -> (f64, f64) {
    if needed != 1 {
        return (0.0, 0.0);
    }
    let remaining = mask.remaining() as f64;
    let prob_hit = (outs as f64 / remaining).clamp(0.0, 1.0);
    let prob_opponent = match model {
        OpponentModel::ReadyOpponents => {
            let expected = expected_ready_opponents(scope, mask.count, opponents);
            opponent_win_probability(expected, mask.remaining())
        }
        OpponentModel::Ignore => 0.0,
    };
    let prob_win = (prob_hit * (1.0 - prob_opponent)).clamp(0.0, 1.0);
    (prob_hit, prob_win)
}

/// Expected number of opponent lines/cards sitting one number away after
/// `drawn` balls.
///
/// Each opponent card is treated as a random ticket: the chance a given
/// line (or the whole card) has exactly `size − 1` of its numbers drawn is
/// hypergeometric. Lines count three per card.
pub fn expected_ready_opponents(scope: Scope, drawn: u8, opponent_cards: u32) -> f64 {
    let size = scope.size() as i64;
    let p_ready = hypergeometric(TOTAL_BALLS as i64, size, drawn as i64, size - 1);
    let per_card = match scope {
        Scope::Line  => LINES_PER_CARD as f64,
        Scope::Bingo => 1.0,
    };
    p_ready * opponent_cards as f64 * per_card
}

/// Chance that at least one of `expected_ready` opponents completes on the
/// next ball, each waiting on one number drawn uniformly from `remaining`.
///
/// Opponents sharing the same missing number are not modelled.
pub fn opponent_win_probability(expected_ready: f64, remaining: u8) -> f64 {
    if remaining == 0 || expected_ready <= 0.0 {
        return 0.0;
    }
    let miss = 1.0 - 1.0 / remaining as f64;
    (1.0 - miss.powf(expected_ready)).clamp(0.0, 1.0)
}
