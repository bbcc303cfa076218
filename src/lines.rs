use anyhow::{Context, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Adjusts a raw line count for an optional header row.
///
/// Non-positive counts yield 0 regardless of `has_header`, so the result is
/// never negative.
pub fn processed_line_count(raw: i64, has_header: bool) -> i64 {
    if raw <= 0 {
        return 0;
    }
    if has_header {
        raw - 1
    } else {
        raw
    }
}

/// Counts the lines in `reader`.
///
/// A trailing line without a newline still counts. Bytes need not be UTF-8.
pub fn count_lines<R: BufRead>(mut reader: R) -> Result<i64> {
    let mut buf = Vec::new();
    let mut count: i64 = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read line")?;
        if read == 0 {
            break;
        }
        count += 1;
    }

    Ok(count)
}

/// Counts the lines in the file at `path`.
pub fn count_file_lines(path: &Path) -> Result<i64> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let count = count_lines(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Counted {} raw lines in {}", count, path.display());

    Ok(count)
}

/// Counts the data lines in the file at `path`, excluding the header if present.
pub fn data_line_count(path: &Path, has_header: bool) -> Result<i64> {
    let raw = count_file_lines(path)?;
    Ok(processed_line_count(raw, has_header))
}
