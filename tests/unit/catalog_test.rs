use cricstats::catalog::{entries, get, known_tables, resolve_sql};
use std::collections::HashSet;

#[test]
fn catalog_has_twenty_five_entries_in_order() {
    let ids: Vec<&str> = entries().iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 25);
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(*id, format!("Q{}", i + 1));
    }
}

#[test]
fn titles_and_sql_are_unique_and_non_empty() {
    let mut titles = HashSet::new();
    for entry in entries() {
        assert!(!entry.title.trim().is_empty(), "{} has no title", entry.id);
        assert!(!entry.sql().is_empty(), "{} has no SQL", entry.id);
        assert!(titles.insert(entry.title), "duplicate title {}", entry.title);
    }
}

#[test]
fn sql_is_trimmed() {
    for entry in entries() {
        assert_eq!(entry.sql(), entry.sql().trim());
    }
}

#[test]
fn get_by_id_is_case_insensitive() {
    assert_eq!(get("Q3").unwrap().id, "Q3");
    assert_eq!(get("q3").unwrap().id, "Q3");
    assert_eq!(get(" Q12 ").unwrap().id, "Q12");
}

#[test]
fn get_by_title_and_label() {
    let q3 = get("Q3").unwrap();
    assert_eq!(get(q3.title).unwrap().id, "Q3");
    assert_eq!(get(&q3.label()).unwrap().id, "Q3");
}

#[test]
fn get_unknown_is_none() {
    assert!(get("Q26").is_none());
    assert!(get("").is_none());
}

#[test]
fn top_odi_scorers_query_is_limited_and_ordered() {
    let sql = get("Q3").unwrap().sql();
    assert!(sql.contains("FROM top_odi_runs"));
    assert!(sql.contains("ORDER BY total_runs DESC"));
    assert!(sql.contains("LIMIT 10"));
}

#[test]
fn resolve_sql_prefers_edited_text() {
    assert_eq!(resolve_sql(Some("Q1"), Some("SELECT 1")), Some("SELECT 1"));
}

#[test]
fn resolve_sql_blank_edit_falls_back_to_selection() {
    let resolved = resolve_sql(Some("Q1"), Some("   \n")).unwrap();
    assert_eq!(resolved, get("Q1").unwrap().sql());
}

#[test]
fn resolve_sql_nothing_to_run() {
    assert_eq!(resolve_sql(None, Some("  ")), None);
    assert_eq!(resolve_sql(Some("Q99"), None), None);
}

#[test]
fn known_tables_cover_catalog_sources() {
    let names: Vec<&str> = known_tables().iter().map(|t| t.name).collect();
    assert_eq!(names.len(), 13);
    for table in ["players", "recent_matches", "top_odi_runs", "venues", "combined_matches"] {
        assert!(names.contains(&table), "missing {table}");
    }
}

#[test]
fn entries_serialize_with_trimmed_sql() {
    let json = serde_json::to_value(get("Q1").unwrap()).unwrap();
    assert_eq!(json["id"], "Q1");
    let sql = json["sql"].as_str().unwrap();
    assert!(sql.starts_with("SELECT"));
    assert!(sql.ends_with(';'));
}
