//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Write a product to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, product: i64) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{product}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_seconds() {
        let s = format_duration(Duration::from_secs_f64(3.14));
        assert_eq!(s, "3.140s");
    }

    #[test]
    fn write_product() {
        let dir = std::env::temp_dir().join("report-repair-output-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("product.txt");
        write_to_file(&path, 514_579).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "514579");
        std::fs::remove_file(&path).ok();
    }
}
