use std::collections::BTreeSet;
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::odds_engine::error::{OddsError, OddsResult};

// ---------------------------------------------------------------------------
// Game constants
// ---------------------------------------------------------------------------

/// Balls in the pouch of a 90-ball game.
pub const TOTAL_BALLS: u8 = 90;
pub const ROWS: usize = 3;
pub const COLUMNS: usize = 9;
/// Numbered cells on a well-formed row.
pub const NUMBERS_PER_LINE: u8 = 5;
/// Numbered cells on a well-formed card.
pub const NUMBERS_PER_CARD: u8 = 15;
/// Rows per card that can independently be one ball away from a line.
pub const LINES_PER_CARD: u8 = ROWS as u8;

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// A 3×9 ticket. `None` marks an empty cell.
///
/// Shape is trusted as delivered by the upstream recogniser; the engine
/// only skips rows that do not carry exactly five numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub grid: [[Option<u8>; COLUMNS]; ROWS],
}

impl Card {
    pub fn new(grid: [[Option<u8>; COLUMNS]; ROWS]) -> Self {
        Card { grid }
    }

    /// Build a card from five numbers per row, dropping each into the
    /// column its tens digit selects (1-9 → 0, 10-19 → 1, …, 80-90 → 8).
    ///
    /// Rejects numbers outside 1..=90, two numbers in one column of a row,
    /// and any number used twice on the card.
    pub fn from_rows(rows: [[u8; NUMBERS_PER_LINE as usize]; ROWS]) -> OddsResult<Self> {
        let mut grid = [[None; COLUMNS]; ROWS];
        let mut seen = [false; TOTAL_BALLS as usize + 1];
        for (r, row) in rows.iter().enumerate() {
            for &n in row {
                if !(1..=TOTAL_BALLS).contains(&n) {
                    return Err(OddsError::NumberOutOfRange { row: r, value: n as i64 });
                }
                if seen[n as usize] {
                    return Err(OddsError::DuplicateNumber(n));
                }
                let col = column_for(n);
                if grid[r][col].is_some() {
                    return Err(OddsError::ColumnClash { row: r, column: col });
                }
                seen[n as usize] = true;
                grid[r][col] = Some(n);
            }
        }
        Ok(Card { grid })
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.grid.iter().map(|cells| Row { cells })
    }

    pub fn row(&self, r: usize) -> Row<'_> {
        Row { cells: &self.grid[r] }
    }

    /// Numbers present on row `r`, left to right.
    pub fn row_numbers(&self, r: usize) -> impl Iterator<Item = u8> + '_ {
        self.row(r).numbers()
    }

    /// Count of numbered cells on row `r`.
    pub fn numbered_cells(&self, r: usize) -> usize {
        self.row(r).numbered_cells()
    }

    /// A row only competes for a line when it carries exactly five numbers.
    pub fn is_full_row(&self, r: usize) -> bool {
        self.row(r).is_full()
    }

    /// Every number on the card, row by row.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows().flat_map(|row| row.numbers())
    }
}

/// Borrowed view of one card row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    cells: &'a [Option<u8>; COLUMNS],
}

impl<'a> Row<'a> {
    /// Numbers on the row, left to right.
    pub fn numbers(self) -> impl Iterator<Item = u8> + 'a {
        let cells: &'a [Option<u8>; COLUMNS] = self.cells;
        cells.iter().filter_map(|c| *c)
    }

    pub fn numbered_cells(self) -> usize {
        self.numbers().count()
    }

    pub fn is_full(self) -> bool {
        self.numbered_cells() == NUMBERS_PER_LINE as usize
    }
}

/// Column that holds `n` on a standard ticket.
pub fn column_for(n: u8) -> usize {
    ((n / 10) as usize).min(COLUMNS - 1)
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|c| match c {
                    Some(n) => format!("{n:>2}"),
                    None => " .".to_string(),
                })
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Game context / configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Line,
    Bingo,
}

impl Scope {
    /// Numbers that must be drawn to complete this scope.
    pub fn size(self) -> u8 {
        match self {
            Scope::Line  => NUMBERS_PER_LINE,
            Scope::Bingo => NUMBERS_PER_CARD,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Line  => write!(f, "line"),
            Scope::Bingo => write!(f, "bingo"),
        }
    }
}

/// How the next-draw estimate treats the rest of the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentModel {
    /// Discount the hit chance by the chance a ready opponent also completes.
    #[default]
    ReadyOpponents,
    /// Report the raw hit chance as the win chance.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameContext {
    /// Cards in play across the whole room, the user's included.
    pub total_cards_in_play: u32,
    pub opponent_model: OpponentModel,
}

impl GameContext {
    /// Opponent-aware context for a room of `total_cards_in_play` cards.
    pub fn new(total_cards_in_play: u32) -> Self {
        GameContext { total_cards_in_play, opponent_model: OpponentModel::default() }
    }

    pub fn with_opponent_model(mut self, model: OpponentModel) -> Self {
        self.opponent_model = model;
        self
    }

    /// Cards held by everyone else; never negative.
    pub fn opponent_cards(&self, user_cards: usize) -> u32 {
        self.total_cards_in_play.saturating_sub(user_cards as u32)
    }
}

impl Default for GameContext {
    fn default() -> Self {
        GameContext::new(1)
    }
}

// ---------------------------------------------------------------------------
// Engine outputs
// ---------------------------------------------------------------------------

/// One point of the theoretical "chance of winning" chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Balls drawn so far, 1..=90.
    pub draw_index: u8,
    pub line_probability: f64,
    pub bingo_probability: f64,
}

/// Live progress for the user's cards against the current draw.
///
/// Rebuilt from scratch on every call; `None` in either `needed_*` field
/// means nothing qualified (no cards, or the pouch is empty).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub needed_for_line: Option<u8>,
    pub needed_for_bingo: Option<u8>,
    pub line_outs: BTreeSet<u8>,
    pub bingo_outs: BTreeSet<u8>,
    pub prob_hit_line_out: f64,
    pub prob_hit_bingo_out: f64,
    pub prob_user_wins_line_next_draw: f64,
    pub prob_user_wins_bingo_next_draw: f64,
}

impl ProgressSnapshot {
    pub fn needed(&self, scope: Scope) -> Option<u8> {
        match scope {
            Scope::Line  => self.needed_for_line,
            Scope::Bingo => self.needed_for_bingo,
        }
    }

    pub fn outs(&self, scope: Scope) -> &BTreeSet<u8> {
        match scope {
            Scope::Line  => &self.line_outs,
            Scope::Bingo => &self.bingo_outs,
        }
    }

    /// True when a single ball would complete the given scope.
    pub fn is_one_away(&self, scope: Scope) -> bool {
        self.needed(scope) == Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_places_numbers_by_tens() {
        let card = Card::from_rows([
            [3, 15, 42, 67, 90],
            [8, 21, 33, 55, 80],
            [1, 19, 48, 71, 89],
        ])
        .unwrap();
        assert_eq!(card.grid[0][0], Some(3));
        assert_eq!(card.grid[0][1], Some(15));
        assert_eq!(card.grid[0][8], Some(90));
        assert_eq!(card.grid[1][8], Some(80));
        assert_eq!(card.grid[0][2], None);
        assert_eq!(card.numbers().count(), 15);
        assert!((0..ROWS).all(|r| card.is_full_row(r)));
    }

    #[test]
    fn from_rows_rejects_two_numbers_in_one_column() {
        let err = Card::from_rows([
            [3, 5, 42, 67, 90],
            [8, 21, 33, 55, 80],
            [1, 19, 48, 71, 89],
        ])
        .unwrap_err();
        assert!(matches!(err, OddsError::ColumnClash { row: 0, column: 0 }));
    }

    #[test]
    fn from_rows_rejects_a_number_repeated_on_another_row() {
        let err = Card::from_rows([
            [3, 15, 42, 67, 90],
            [8, 21, 33, 55, 90],
            [1, 19, 48, 71, 89],
        ])
        .unwrap_err();
        assert!(matches!(err, OddsError::DuplicateNumber(90)));
    }

    #[test]
    fn rows_walk_the_grid_top_to_bottom() {
        let card = Card::from_rows([
            [3, 15, 42, 67, 90],
            [8, 21, 33, 55, 80],
            [1, 19, 48, 71, 89],
        ])
        .unwrap();
        let rows: Vec<Vec<u8>> = card.rows().map(|row| row.numbers().collect()).collect();
        assert_eq!(rows[1], vec![8, 21, 33, 55, 80]);
        assert_eq!(rows.len(), ROWS);
        assert!(card.rows().all(|row| row.is_full()));

        let mut short = card;
        short.grid[2][0] = None;
        assert_eq!(short.row(2).numbered_cells(), 4);
        assert!(!short.rows().nth(2).unwrap().is_full());
    }

    #[test]
    fn from_rows_rejects_zero() {
        let err = Card::from_rows([
            [0, 15, 42, 67, 90],
            [8, 21, 33, 55, 80],
            [1, 19, 48, 71, 89],
        ])
        .unwrap_err();
        assert!(matches!(err, OddsError::NumberOutOfRange { row: 0, value: 0 }));
    }

    #[test]
    fn opponent_cards_saturate_at_zero() {
        let ctx = GameContext::new(3);
        assert_eq!(ctx.opponent_cards(1), 2);
        assert_eq!(ctx.opponent_cards(5), 0);
    }

    #[test]
    fn game_context_fills_defaults_from_partial_json() {
        let ctx: GameContext = serde_json::from_str(r#"{"total_cards_in_play": 40}"#).unwrap();
        assert_eq!(ctx.total_cards_in_play, 40);
        assert_eq!(ctx.opponent_model, OpponentModel::ReadyOpponents);

        let ctx: GameContext = serde_json::from_str(r#"{"opponent_model": "ignore"}"#).unwrap();
        assert_eq!(ctx.total_cards_in_play, 1);
        assert_eq!(ctx.opponent_model, OpponentModel::Ignore);
    }

    #[test]
    fn default_snapshot_has_no_needed_counts() {
        let s = ProgressSnapshot::default();
        assert_eq!(s.needed(Scope::Line), None);
        assert!(s.outs(Scope::Bingo).is_empty());
        assert!(!s.is_one_away(Scope::Line));
    }
}
