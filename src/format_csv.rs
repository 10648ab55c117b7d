use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::db::{CellValue, QueryResult};
use crate::error::CricError;

/// Write query results as RFC 4180 CSV (CRLF line endings, NULL as empty field).
pub fn write_csv_to_writer<W: Write>(result: &QueryResult, writer: W) -> Result<(), CricError> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .flexible(true)
        .from_writer(writer);

    let map_err = |e: csv::Error| CricError::Format {
        message: format!("csv write failed: {}", e),
    };

    wtr.write_record(result.columns.iter().map(|c| c.name.as_str()))
        .map_err(map_err)?;

    for row in &result.rows {
        wtr.write_record(row.iter().map(|cell| match cell {
            CellValue::Text(s) => s.as_str(),
            CellValue::Null => "",
        }))
        .map_err(map_err)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_csv(result: &QueryResult, path: &Path) -> Result<(), CricError> {
    let file = File::create(path)?;
    write_csv_to_writer(result, file)
}
