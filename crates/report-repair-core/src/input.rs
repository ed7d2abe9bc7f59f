//! Report input parsing.
//!
//! The input format is line-oriented text, one decimal integer per line.
//! Surrounding whitespace is trimmed and blank lines are skipped.

use std::num::ParseIntError;
use std::path::Path;

use tracing::debug;

/// Error type for report input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input file could not be read.
    #[error("failed to read {path}")]
    Io {
        /// Path that was being read.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A line failed integer parsing.
    #[error("invalid entry {text:?} on line {line}")]
    InvalidLine {
        /// 1-based line number of the offending line.
        line: usize,
        /// The offending line, trimmed.
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse line-oriented report text into entries.
pub fn parse_report(text: &str) -> Result<Vec<i64>, InputError> {
    let mut entries = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry = line
            .parse::<i64>()
            .map_err(|source| InputError::InvalidLine {
                line: idx + 1,
                text: line.to_string(),
                source,
            })?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Read and parse a report file.
pub fn read_report(path: &Path) -> Result<Vec<i64>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let entries = parse_report(&text)?;
    debug!(path = %path.display(), entries = entries.len(), "report parsed");
    Ok(entries)
}
