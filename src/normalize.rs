//! Flattening of the Cricbuzz generic table payload
//! `{"headers": [..], "values": [{"values": [..]}, ..]}` into a [`StatsTable`].
//!
//! Third-party payloads are unpredictable, so every shape problem degrades to
//! an empty table instead of an error.

use serde::Serialize;
use serde_json::Value;

/// Header labels plus positionally aligned rows of raw JSON scalars.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl StatsTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose cell count differs from the header count.
    pub fn ragged_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.len() != self.headers.len())
            .count()
    }
}

/// Result of normalizing one payload.
///
/// `Absent` covers missing, `null`, and structurally wrong input; `Parsed` may
/// still hold zero rows. Both render the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum TableOutcome {
    Absent,
    Parsed(StatsTable),
}

impl TableOutcome {
    pub fn into_table(self) -> StatsTable {
        match self {
            TableOutcome::Absent => StatsTable::default(),
            TableOutcome::Parsed(table) => table,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, TableOutcome::Absent)
    }
}

/// Normalize a stats payload into a table, reporting whether the shape was recognized.
pub fn normalize(payload: Option<&Value>) -> TableOutcome {
    let Some(obj) = payload.and_then(Value::as_object) else {
        return TableOutcome::Absent;
    };
    let (Some(headers), Some(entries)) = (
        obj.get("headers").and_then(Value::as_array),
        obj.get("values").and_then(Value::as_array),
    ) else {
        return TableOutcome::Absent;
    };

    let headers = headers.iter().map(header_label).collect();
    let rows = entries
        .iter()
        .map(|entry| {
            entry
                .get("values")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default()
        })
        .collect();

    TableOutcome::Parsed(StatsTable { headers, rows })
}

/// Shorthand for callers that only render: absent and zero-row collapse to empty.
pub fn stats_table(payload: Option<&Value>) -> StatsTable {
    normalize(payload).into_table()
}

fn header_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render a JSON scalar for a text cell; `None` for JSON null.
pub fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
