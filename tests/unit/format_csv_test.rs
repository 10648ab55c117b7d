use cricstats::db::{CellValue, ColumnMeta, QueryResult};
use cricstats::format_csv::{write_csv, write_csv_to_writer};

fn make_column(name: &str) -> ColumnMeta {
    ColumnMeta {
        name: name.to_string(),
        type_name: "VARCHAR".to_string(),
    }
}

fn make_result(columns: Vec<ColumnMeta>, rows: Vec<Vec<CellValue>>) -> QueryResult {
    QueryResult {
        columns,
        rows,
        truncated: false,
    }
}

fn to_csv(result: &QueryResult) -> String {
    let mut buf = Vec::new();
    write_csv_to_writer(result, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn basic_output_header_and_data_rows() {
    let result = make_result(
        vec![make_column("team"), make_column("wins")],
        vec![
            vec![CellValue::Text("India".into()), CellValue::Text("42".into())],
            vec![CellValue::Text("Australia".into()), CellValue::Text("39".into())],
        ],
    );

    assert_eq!(to_csv(&result), "team,wins\r\nIndia,42\r\nAustralia,39\r\n");
}

#[test]
fn null_values_produce_empty_fields() {
    let result = make_result(
        vec![make_column("a"), make_column("b"), make_column("c")],
        vec![
            vec![
                CellValue::Text("x".into()),
                CellValue::Null,
                CellValue::Text("z".into()),
            ],
            vec![CellValue::Null, CellValue::Null, CellValue::Null],
        ],
    );

    assert_eq!(to_csv(&result), "a,b,c\r\nx,,z\r\n,,\r\n");
}

#[test]
fn rfc4180_escaping_commas_quotes_newlines() {
    let result = make_result(
        vec![make_column("capacity")],
        vec![
            vec![CellValue::Text("132,000".into())],
            vec![CellValue::Text("the \"G\"".into())],
            vec![CellValue::Text("line1\nline2".into())],
        ],
    );

    let expected = "capacity\r\n\
                    \"132,000\"\r\n\
                    \"the \"\"G\"\"\"\r\n\
                    \"line1\nline2\"\r\n";
    assert_eq!(to_csv(&result), expected);
}

#[test]
fn empty_result_set_produces_header_only() {
    let result = make_result(vec![make_column("col1"), make_column("col2")], vec![]);
    assert_eq!(to_csv(&result), "col1,col2\r\n");
}

#[test]
fn ragged_rows_are_written_as_is() {
    let result = make_result(
        vec![make_column("ROWHEADER"), make_column("Test"), make_column("ODI")],
        vec![vec![CellValue::Text("Runs".into()), CellValue::Text("8848".into())]],
    );

    assert_eq!(to_csv(&result), "ROWHEADER,Test,ODI\r\nRuns,8848\r\n");
}

#[test]
fn write_csv_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wins.csv");
    let result = make_result(
        vec![make_column("team")],
        vec![vec![CellValue::Text("India".into())]],
    );

    write_csv(&result, &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "team\r\nIndia\r\n");
}
