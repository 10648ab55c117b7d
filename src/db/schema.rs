//! Read-only browsing of the configured database: base tables, their columns and row previews.

use crate::db::{Backend, QueryResult};
use crate::error::CricError;

pub const LIST_TABLES_SQL: &str = "SHOW FULL TABLES WHERE Table_type = 'BASE TABLE'";

pub const DEFAULT_PREVIEW_ROWS: usize = 200;
pub const MAX_PREVIEW_ROWS: usize = 1000;

/// Quote a MySQL identifier with backticks, doubling any embedded backtick.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Quote a value as a MySQL string literal, escaping backslashes and single quotes.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "''"))
}

/// Column metadata for `table` in the connection's current database, in ordinal order.
pub fn columns_sql(table: &str) -> String {
    format!(
        "SELECT COLUMN_NAME AS `column`, COLUMN_TYPE AS `type`, IS_NULLABLE AS `nullable`, \
         COLUMN_KEY AS `key`, COLUMN_DEFAULT AS `default`, EXTRA AS `extra` \
         FROM INFORMATION_SCHEMA.COLUMNS \
         WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = {} \
         ORDER BY ORDINAL_POSITION;",
        quote_literal(table)
    )
}

/// Build the preview statement for `table`, clamping the limit to 1..=MAX_PREVIEW_ROWS.
pub fn preview_sql(table: &str, limit: Option<usize>) -> String {
    let limit = limit
        .unwrap_or(DEFAULT_PREVIEW_ROWS)
        .clamp(1, MAX_PREVIEW_ROWS);
    format!("SELECT * FROM {} LIMIT {};", quote_identifier(table), limit)
}

/// Names of all base tables (views excluded), in server order.
pub async fn list_tables<B: Backend>(backend: &B) -> Result<Vec<String>, CricError> {
    let result = backend.execute(LIST_TABLES_SQL, None, None).await?;
    Ok(table_names(&result))
}

/// First column of a `SHOW FULL TABLES` result, skipping nulls.
pub fn table_names(result: &QueryResult) -> Vec<String> {
    result
        .rows
        .iter()
        .filter_map(|row| row.first().and_then(|c| c.as_str()).map(str::to_string))
        .collect()
}

fn require_table(table: &str) -> Result<(), CricError> {
    if table.trim().is_empty() {
        return Err(CricError::Config {
            message: "no table name given".to_string(),
        });
    }
    Ok(())
}

/// Name, type, nullability, key, default and extra for each column of `table`.
///
/// An unknown table yields an empty result rather than an error.
pub async fn table_columns<B: Backend>(backend: &B, table: &str) -> Result<QueryResult, CricError> {
    require_table(table)?;
    let sql = columns_sql(table);
    tracing::debug!(%sql, "describing table");
    backend.execute(&sql, None, None).await
}

pub async fn preview_table<B: Backend>(
    backend: &B,
    table: &str,
    limit: Option<usize>,
) -> Result<QueryResult, CricError> {
    require_table(table)?;
    let sql = preview_sql(table, limit);
    tracing::debug!(%sql, "previewing table");
    backend.execute(&sql, None, None).await
}
