use cricstats::catalog;
use cricstats::validation::{Classification, WriteKind, classify};

fn assert_read_only(sql: &str) {
    match classify(sql) {
        Classification::ReadOnly => {}
        other => panic!("Expected ReadOnly for '{}', got {:?}", sql, other),
    }
}

fn assert_modifying(sql: &str, expected: WriteKind) {
    match classify(sql) {
        Classification::Modifying { findings } => {
            assert!(!findings.is_empty(), "Expected findings for '{}'", sql);
            assert_eq!(findings[0].kind, expected, "wrong kind for '{}'", sql);
        }
        other => panic!("Expected Modifying for '{}', got {:?}", sql, other),
    }
}

// --- Reads ---

#[test]
fn test_select_is_read_only() {
    assert_read_only("SELECT 1");
}

#[test]
fn test_select_with_join_is_read_only() {
    assert_read_only(
        "SELECT p.full_name, s.runs FROM players p JOIN players_stats s ON p.player_id = s.player_id",
    );
}

#[test]
fn test_select_with_cte_is_read_only() {
    assert_read_only(
        "WITH wins AS (SELECT match_winner, COUNT(*) AS n FROM combined_matches GROUP BY match_winner) \
         SELECT * FROM wins ORDER BY n DESC",
    );
}

#[test]
fn test_union_is_read_only() {
    assert_read_only("SELECT team1 FROM recent_matches UNION SELECT team2 FROM recent_matches");
}

#[test]
fn test_show_tables_is_read_only() {
    assert_read_only("SHOW TABLES");
}

#[test]
fn test_use_is_read_only() {
    assert_read_only("USE cricket");
}

// --- Writes ---

#[test]
fn test_insert_is_modifying() {
    assert_modifying(
        "INSERT INTO players (full_name, country) VALUES ('Test Player', 'India')",
        WriteKind::WriteStatement,
    );
}

#[test]
fn test_update_is_modifying() {
    assert_modifying(
        "UPDATE players SET playing_role = 'Bowler' WHERE player_id = 1",
        WriteKind::WriteStatement,
    );
}

#[test]
fn test_delete_is_modifying() {
    assert_modifying("DELETE FROM players WHERE player_id = 1", WriteKind::WriteStatement);
}

#[test]
fn test_drop_table_is_modifying() {
    assert_modifying("DROP TABLE players", WriteKind::WriteStatement);
}

#[test]
fn test_select_into_is_modifying() {
    assert_modifying("SELECT * INTO players_backup FROM players", WriteKind::SelectInto);
}

#[test]
fn test_cte_wrapped_insert_is_modifying() {
    assert_modifying(
        "WITH cte AS (SELECT 1 AS id) INSERT INTO players (player_id) SELECT id FROM cte",
        WriteKind::CteWrappedWrite,
    );
}

#[test]
fn test_call_is_modifying() {
    assert_modifying("CALL refresh_stats()", WriteKind::StoredProcedure);
}

#[test]
fn test_warning_names_the_statement() {
    let warning = classify("DELETE FROM players").warning().unwrap();
    assert!(warning.contains("DELETE"), "warning: {warning}");
}

// --- Multi-statement batch ---

#[test]
fn test_multi_statement_all_select_is_read_only() {
    assert_read_only("SELECT 1; SELECT 2; SELECT 3");
}

#[test]
fn test_multi_statement_reports_write_position() {
    match classify("SELECT 1; DELETE FROM players; SELECT 2") {
        Classification::Modifying { findings } => {
            assert_eq!(findings.len(), 1);
            assert_eq!(findings[0].statement_index, 1);
        }
        other => panic!("Expected Modifying, got {:?}", other),
    }
}

// --- Parse failure is advisory only ---

#[test]
fn test_unparseable_sql_has_no_warning() {
    let result = classify("THIS IS NOT VALID SQL !!!");
    assert!(matches!(result, Classification::Unparsed { .. }));
    assert!(result.warning().is_none());
}

#[test]
fn test_catalog_queries_raise_no_warning() {
    for entry in catalog::entries() {
        assert!(
            classify(entry.sql()).warning().is_none(),
            "{} should not be flagged as modifying",
            entry.id
        );
    }
}
