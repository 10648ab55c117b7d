use std::path::Path;

use cricstats::output::{print_summary, print_warning, summary_toon, write_file};

#[test]
fn print_summary_toon_file_succeeds() {
    let path = Path::new("/tmp/top_scorers.toon");
    let result = print_summary(10, path, false);
    assert!(result.is_ok(), "print_summary for .toon file should succeed");
}

#[test]
fn summary_truncated_output_is_decodable_toon() {
    let toon = summary_toon(500, Path::new("/tmp/matches.csv"), true).unwrap();
    let decoded: serde_json::Value = toon_format::decode_no_coerce(&toon).unwrap();
    let obj = decoded.as_object().expect("should be a TOON object");

    assert_eq!(obj.get("rows_written").unwrap(), 500);
    assert_eq!(obj.get("file").unwrap(), "/tmp/matches.csv");
    assert_eq!(obj.get("truncated").unwrap(), true);
}

#[test]
fn summary_non_truncated_output() {
    let toon = summary_toon(25, Path::new("/tmp/venues.csv"), false).unwrap();
    let decoded: serde_json::Value = toon_format::decode_no_coerce(&toon).unwrap();
    let obj = decoded.as_object().expect("should be a TOON object");

    assert_eq!(obj.get("rows_written").unwrap(), 25);
    assert_eq!(obj.get("truncated").unwrap(), false);
}

#[test]
fn write_file_writes_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.toon");
    write_file("[0]{id}:\n", &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[0]{id}:\n");
}

#[test]
fn write_file_missing_parent_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.toon");
    let err = write_file("x", &path).unwrap_err();
    assert_eq!(err.category(), "io");
    assert!(err.to_string().contains("parent directory does not exist"));
}

#[test]
fn print_warning_does_not_panic() {
    print_warning("No players found. Try another name.");
}
