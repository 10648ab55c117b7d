use crate::stubs::RecordingBackend;
use cricstats::db::QueryResult;
use cricstats::db::schema::{
    LIST_TABLES_SQL, columns_sql, list_tables, preview_sql, preview_table, quote_identifier,
    quote_literal, table_columns, table_names,
};
use cricstats::error::CricError;

fn show_tables() -> Result<QueryResult, CricError> {
    Ok(QueryResult::from_text_rows(
        &["Tables_in_cricket", "Table_type"],
        vec![
            vec![Some("players".to_string()), Some("BASE TABLE".to_string())],
            vec![None, Some("BASE TABLE".to_string())],
            vec![Some("venues".to_string()), Some("BASE TABLE".to_string())],
        ],
    ))
}

fn empty() -> Result<QueryResult, CricError> {
    Ok(QueryResult::default())
}

#[test]
fn identifiers_are_backtick_quoted() {
    assert_eq!(quote_identifier("players"), "`players`");
    assert_eq!(quote_identifier("odd`name"), "`odd``name`");
}

#[test]
fn preview_sql_defaults_and_clamps_limit() {
    assert_eq!(preview_sql("players", None), "SELECT * FROM `players` LIMIT 200;");
    assert_eq!(preview_sql("players", Some(0)), "SELECT * FROM `players` LIMIT 1;");
    assert_eq!(preview_sql("players", Some(50_000)), "SELECT * FROM `players` LIMIT 1000;");
}

#[test]
fn table_names_take_first_column_and_skip_nulls() {
    let result = show_tables().unwrap();
    assert_eq!(table_names(&result), vec!["players", "venues"]);
}

#[tokio::test]
async fn list_tables_runs_show_full_tables() {
    let backend = RecordingBackend::new(show_tables);
    let tables = list_tables(&backend).await.unwrap();

    assert_eq!(tables, vec!["players", "venues"]);
    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].sql, LIST_TABLES_SQL);
}

#[tokio::test]
async fn preview_table_sends_quoted_select() {
    let backend = RecordingBackend::new(empty);
    preview_table(&backend, "batting_data", Some(25)).await.unwrap();

    assert_eq!(backend.calls()[0].sql, "SELECT * FROM `batting_data` LIMIT 25;");
}

#[tokio::test]
async fn preview_blank_table_is_rejected_without_query() {
    let backend = RecordingBackend::new(empty);
    let err = preview_table(&backend, "  ", None).await.unwrap_err();

    assert_eq!(err.category(), "config");
    assert!(backend.calls().is_empty());
}

fn player_columns() -> Result<QueryResult, CricError> {
    let row = |cells: [Option<&str>; 6]| -> Vec<Option<String>> {
        cells.into_iter().map(|c| c.map(str::to_string)).collect()
    };
    Ok(QueryResult::from_text_rows(
        &["column", "type", "nullable", "key", "default", "extra"],
        vec![
            row([Some("player_id"), Some("int"), Some("NO"), Some("PRI"), None, Some("auto_increment")]),
            row([Some("player_name"), Some("varchar(100)"), Some("YES"), Some(""), None, Some("")]),
        ],
    ))
}

#[test]
fn literals_escape_quotes_and_backslashes() {
    assert_eq!(quote_literal("players"), "'players'");
    assert_eq!(quote_literal("o'brien"), "'o''brien'");
    assert_eq!(quote_literal(r"a\b"), r"'a\\b'");
}

#[test]
fn columns_sql_filters_current_database() {
    let sql = columns_sql("batting_data");
    assert!(sql.contains("FROM INFORMATION_SCHEMA.COLUMNS"));
    assert!(sql.contains("TABLE_SCHEMA = DATABASE() AND TABLE_NAME = 'batting_data'"));
    assert!(sql.ends_with("ORDER BY ORDINAL_POSITION;"));
}

#[test]
fn columns_sql_cannot_break_out_of_the_literal() {
    let sql = columns_sql("x' OR '1'='1");
    assert!(sql.contains("TABLE_NAME = 'x'' OR ''1''=''1'"));
}

#[tokio::test]
async fn table_columns_returns_metadata_rows() {
    let backend = RecordingBackend::new(player_columns);
    let result = table_columns(&backend, "players").await.unwrap();

    let names: Vec<&str> = result.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["column", "type", "nullable", "key", "default", "extra"]);
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0][0].as_str(), Some("player_id"));

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].sql, columns_sql("players"));
    assert_eq!(calls[0].limit, None);
}

#[tokio::test]
async fn table_columns_rejects_blank_name() {
    let backend = RecordingBackend::new(empty);
    let err = table_columns(&backend, "  ").await.unwrap_err();

    assert_eq!(err.category(), "config");
    assert!(backend.calls().is_empty());
}
