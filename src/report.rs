use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::lines::processed_line_count;

/// Line counts for a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineReport {
    pub file: String,
    pub has_header: bool,
    pub raw_lines: i64,
    pub data_lines: i64,
}

impl LineReport {
    pub fn new(file: impl Into<String>, raw_lines: i64, has_header: bool) -> Self {
        Self {
            file: file.into(),
            has_header,
            raw_lines,
            data_lines: processed_line_count(raw_lines, has_header),
        }
    }

    pub fn to_json(&self) -> Result<Value> {
        serde_json::to_value(self).context("Failed to serialize line report")
    }
}

impl fmt::Display for LineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} data lines ({} raw, header: {})",
            self.file,
            self.data_lines,
            self.raw_lines,
            if self.has_header { "yes" } else { "no" }
        )
    }
}
