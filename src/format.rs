use crate::catalog::CatalogEntry;
use crate::db::{CellValue, QueryResult};
use crate::error::CricError;
use crate::normalize::{StatsTable, cell_text};
use crate::players::CandidateSet;
use crate::profile::{CareerEntry, RankingTable};

/// Convert a QueryResult to a TOON-formatted string.
pub fn to_toon(result: &QueryResult) -> Result<String, CricError> {
    // toon_format can't infer columns from an empty array, so write the header by hand
    if result.rows.is_empty() && !result.columns.is_empty() {
        let col_names = result
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(",");
        return Ok(format!("[0]{{{}}}:\n", col_names));
    }

    let array: Vec<serde_json::Value> = result
        .rows
        .iter()
        .map(|row| {
            let mut map = serde_json::Map::new();
            for (i, col) in result.columns.iter().enumerate() {
                let json_val = match row.get(i).unwrap_or(&CellValue::Null) {
                    CellValue::Text(s) => serde_json::Value::String(s.clone()),
                    CellValue::Null => serde_json::Value::Null,
                };
                map.insert(col.name.clone(), json_val);
            }
            serde_json::Value::Object(map)
        })
        .collect();

    toon_format::encode_default(&serde_json::Value::Array(array))
        .map_err(|e| CricError::Format { message: e.to_string() })
}

/// Key-value lines, `key: value`, for profile fields and summaries.
pub fn to_toon_kv<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}: {}", k.as_ref(), v.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stats table as a text QueryResult. Rows keep their own length.
pub fn stats_to_result(table: &StatsTable) -> QueryResult {
    let headers: Vec<&str> = table.headers.iter().map(String::as_str).collect();
    let rows = table
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    QueryResult::from_text_rows(&headers, rows)
}

pub fn career_to_result(career: &[CareerEntry]) -> QueryResult {
    let rows = career
        .iter()
        .map(|e| vec![e.format.clone(), e.debut.clone(), e.last_played.clone()])
        .collect();
    QueryResult::from_text_rows(&["Format", "Debut", "Last Played"], rows)
}

pub fn rankings_to_result(table: &RankingTable) -> QueryResult {
    let rows = table
        .iter()
        .map(|(k, v)| vec![Some(k.clone()), Some(v.clone())])
        .collect();
    QueryResult::from_text_rows(&["category", "value"], rows)
}

pub fn candidates_to_result(candidates: &CandidateSet) -> QueryResult {
    let rows = candidates
        .values()
        .map(|c| {
            vec![
                Some(c.id.clone()),
                Some(c.name.clone()),
                c.team_name.clone(),
                c.dob.clone(),
            ]
        })
        .collect();
    QueryResult::from_text_rows(&["id", "name", "team", "dob"], rows)
}

pub fn catalog_to_result(entries: &[CatalogEntry]) -> QueryResult {
    let rows = entries
        .iter()
        .map(|e| vec![Some(e.id.to_string()), Some(e.title.to_string())])
        .collect();
    QueryResult::from_text_rows(&["id", "title"], rows)
}
