pub mod mysql;
pub mod schema;

use crate::error::CricError;
use serde::Serialize;

/// Metadata for a single result column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnMeta {
    pub name: String,
    pub type_name: String,
}

/// A single cell value from a query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Null,
}

impl CellValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Null => None,
        }
    }
}

/// The materialized output of one query execution.
#[derive(Debug, Default, Serialize)]
pub struct QueryResult {
    pub columns: Vec<ColumnMeta>,
    pub rows: Vec<Vec<CellValue>>,
    pub truncated: bool,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build a text-only result from column names and string rows.
    pub fn from_text_rows(columns: &[&str], rows: Vec<Vec<Option<String>>>) -> Self {
        let columns = columns
            .iter()
            .map(|name| ColumnMeta {
                name: name.to_string(),
                type_name: "STRING".to_string(),
            })
            .collect();
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| match cell {
                        Some(s) => CellValue::Text(s),
                        None => CellValue::Null,
                    })
                    .collect()
            })
            .collect();
        QueryResult {
            columns,
            rows,
            truncated: false,
        }
    }
}

/// A connection target that can run one SQL statement and hand back its rows.
pub trait Backend {
    fn execute(
        &self,
        sql: &str,
        limit: Option<usize>,
        timeout_secs: Option<u64>,
    ) -> impl std::future::Future<Output = Result<QueryResult, CricError>> + Send;
}
