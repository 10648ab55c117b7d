use std::path::{Path, PathBuf};

use crate::error::CricError;

const SUPPORTED: &str = ".toon, .txt, .csv";

/// File formats `run --output` can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Toon,
    Csv,
}

impl OutputFormat {
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Toon => "TOON",
            OutputFormat::Csv => "CSV",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "toon" | "txt" => Some(OutputFormat::Toon),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

/// Pick the output format from the file extension (case-insensitive).
///
/// A path without an extension gets `.toon` appended.
pub fn detect_format(path: &Path) -> Result<(OutputFormat, PathBuf), CricError> {
    let Some(ext) = path.extension() else {
        return Ok((OutputFormat::Toon, path.with_extension("toon")));
    };

    let ext = ext.to_string_lossy();
    OutputFormat::from_extension(&ext)
        .map(|format| (format, path.to_path_buf()))
        .ok_or_else(|| CricError::Format {
            message: format!("unsupported output format \".{ext}\" — supported: {SUPPORTED}"),
        })
}
