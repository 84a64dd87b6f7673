use serde_json::{json, Value};

use crate::odds_engine::{
    error::{OddsError, OddsResult},
    models::{Card, ChartPoint, GameContext, ProgressSnapshot, COLUMNS, ROWS, TOTAL_BALLS},
};

// ---------------------------------------------------------------------------
// Inbound: recognised card payloads and room config
// ---------------------------------------------------------------------------

/// Parse a card as delivered by the photo recogniser.
///
/// Accepts either a bare 3×9 array or an object carrying it under `"grid"`
/// or `"rows"`. Cells are numbers or `null`.
pub fn card_from_json(payload: &Value) -> OddsResult<Card> {
    let rows = payload
        .get("grid")
        .or_else(|| payload.get("rows"))
        .unwrap_or(payload);
    let rows: Vec<Value> = serde_json::from_value(rows.clone())?;
    if rows.len() != ROWS {
        return Err(OddsError::RowCount(rows.len()));
    }

    let mut grid = [[None; COLUMNS]; ROWS];
    let mut seen = [false; TOTAL_BALLS as usize + 1];
    for (r, row) in rows.iter().enumerate() {
        let cells = row.as_array().ok_or(OddsError::RowNotArray(r))?;
        if cells.len() != COLUMNS {
            return Err(OddsError::RowLength { row: r, len: cells.len() });
        }
        for (c, cell) in cells.iter().enumerate() {
            if cell.is_null() {
                continue;
            }
            let value = cell.as_i64().ok_or(OddsError::NotANumber { row: r, column: c })?;
            if !(1..=TOTAL_BALLS as i64).contains(&value) {
                return Err(OddsError::NumberOutOfRange { row: r, value });
            }
            let n = value as u8;
            if seen[n as usize] {
                return Err(OddsError::DuplicateNumber(n));
            }
            seen[n as usize] = true;
            grid[r][c] = Some(n);
        }
    }
    Ok(Card::new(grid))
}

pub fn card_from_str(payload: &str) -> OddsResult<Card> {
    let value: Value = serde_json::from_str(payload)?;
    card_from_json(&value)
}

/// Load the room context; missing fields take their defaults.
pub fn game_context_from_json(payload: &str) -> OddsResult<GameContext> {
    Ok(serde_json::from_str(payload)?)
}

// ---------------------------------------------------------------------------
// Outbound: chart and live panel
// ---------------------------------------------------------------------------

/// Chart series for a room of `cards` cards. Points carry
/// `drawIndex`/`lineProbability`/`bingoProbability`.
pub fn chart_to_json(cards: u32, curve: &[ChartPoint]) -> OddsResult<Value> {
    Ok(json!({
        "cards": cards,
        "points": serde_json::to_value(curve)?
    }))
}

/// Live panel payload: the snapshot as one flat camelCase record, with
/// `null` for the "nothing qualified" needed counts.
pub fn snapshot_to_json(snapshot: &ProgressSnapshot) -> OddsResult<Value> {
    Ok(serde_json::to_value(snapshot)?)
}
