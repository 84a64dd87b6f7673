//! Probability engine: combinatorics, the theoretical chart, and the live
//! next-draw estimate.
//!
//! ## Module overview
//!
//! | Module           | Purpose |
//! |------------------|---------|
//! | `models`         | Shared types: cards, room context, chart points, live snapshot |
//! | `combinatorics`  | `C(n, k)` in product and log form, log-factorial table |
//! | `hypergeometric` | Sampling-without-replacement probability mass |
//! | `curve`          | Theoretical line/bingo chart for a room of N cards |
//! | `live`           | Needed counts, outs, and opponent-aware next-draw odds |
//! | `pouch`          | Seeded 90-ball pouch for driving games |
//! | `simulation`     | Monte-Carlo cross-check of the chart |
//! | `adapter`        | JSON in (recognised cards, config) and out (chart, live panel) |
//! | `error`          | Errors raised at the JSON boundary |

pub mod adapter;
pub mod combinatorics;
pub mod curve;
pub mod error;
pub mod hypergeometric;
pub mod live;
pub mod models;
pub mod pouch;
pub mod simulation;

// Re-export the public API surface so callers can use
// `odds_engine::live_snapshot` without reaching into sub-modules.
pub use curve::theoretical_curve;
pub use error::{OddsError, OddsResult};
pub use live::live_snapshot;
pub use models::{
    Card, ChartPoint, GameContext, OpponentModel, ProgressSnapshot, Scope,
};
