//! # bingo_odds
//!
//! Win probabilities for 90-ball bingo, both as a theoretical chart and as a
//! live estimate while a game is running.
//!
//! ## How it works
//!
//! 1. Call [`theoretical_curve`] with the number of cards in the room to get
//!    90 points: the chance that at least one card has a line / a full house
//!    after each draw.
//! 2. During a game, call [`live_snapshot`] with the user's [`Card`]s, the
//!    numbers called so far and a [`GameContext`]. The returned
//!    [`ProgressSnapshot`] says how many numbers the closest line and card
//!    still need, which numbers would get there ("outs"), and, when one ball
//!    away, the chance of winning on the very next ball.
//!
//! ## Key features
//!
//! - **Stateless**: every call is a pure function of its inputs. Recompute
//!   on each new ball; identical inputs give bit-identical output.
//! - **Opponent-aware**: the next-draw estimate is discounted by the chance
//!   that some opponent card completes on the same ball. Pass
//!   `OpponentModel::Ignore` to get the raw hit chance instead.
//! - **Exact where it matters**: the log-factorial table keeps ratios of
//!   coefficients over the full 90-ball population finite.
//!
//! ## Quick start
//!
//! ```rust
//! use bingo_odds::{live_snapshot, theoretical_curve, Card, GameContext};
//!
//! let chart = theoretical_curve(100);
//! println!("line by ball 30: {:.1}%", chart[29].line_probability * 100.0);
//!
//! let card = Card::from_rows([
//!     [3, 15, 42, 67, 90],
//!     [8, 21, 33, 55, 80],
//!     [1, 19, 48, 71, 89],
//! ])
//! .expect("valid card");
//!
//! let snapshot = live_snapshot(&[card], &[3, 15, 42, 67], &GameContext::new(100));
//! assert_eq!(snapshot.needed_for_line, Some(1));
//! assert!(snapshot.line_outs.contains(&90));
//! println!("win next ball: {:.2}%", snapshot.prob_user_wins_line_next_draw * 100.0);
//! ```

pub mod odds_engine;

// Convenience re-exports so callers can use `bingo_odds::live_snapshot`
// directly without reaching into `odds_engine::`.
pub use odds_engine::{
    live_snapshot, theoretical_curve, Card, ChartPoint, GameContext, OddsError,
    OddsResult, OpponentModel, ProgressSnapshot, Scope,
};
