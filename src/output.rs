use crate::error::CricError;
use std::path::Path;

/// Print TOON (or plain text) to stdout.
pub fn print_result(text: &str) {
    print!("{}", text);
    if !text.is_empty() && !text.ends_with('\n') {
        println!();
    }
}

/// Print a section heading between blocks of player output.
pub fn print_section(title: &str) {
    println!("\n# {}", title);
}

/// Print error to stderr as `error: <category>: <message>`.
pub fn print_error(err: &CricError) {
    eprintln!("error: {}", err);
}

/// Print a non-fatal warning to stderr.
pub fn print_warning(message: &str) {
    eprintln!("warning: {}", message);
}

/// Summary object printed after writing a file.
pub fn summary_toon(rows: usize, path: &Path, truncated: bool) -> Result<String, CricError> {
    let mut map = serde_json::Map::new();
    map.insert("rows_written".to_string(), serde_json::Value::from(rows));
    map.insert(
        "file".to_string(),
        serde_json::Value::String(path.display().to_string()),
    );
    map.insert("truncated".to_string(), serde_json::Value::Bool(truncated));

    toon_format::encode_default(&serde_json::Value::Object(map)).map_err(|e| CricError::Format {
        message: e.to_string(),
    })
}

pub fn print_summary(rows: usize, path: &Path, truncated: bool) -> Result<(), CricError> {
    print_result(&summary_toon(rows, path, truncated)?);
    Ok(())
}

/// Write a string to a file; the parent directory must already exist.
pub fn write_file(contents: &str, path: &Path) -> Result<(), CricError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(CricError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("parent directory does not exist: {}", parent.display()),
        )));
    }
    std::fs::write(path, contents)?;
    Ok(())
}
