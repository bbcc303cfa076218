use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A CSV-like file in its own temporary directory, removed on drop.
pub struct FixtureFile {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl FixtureFile {
    /// Create a file with an optional header row followed by `records` data rows.
    pub fn csv(records: usize, with_header: bool) -> Result<Self> {
        let mut contents = String::new();
        if with_header {
            contents.push_str("id,name,value\n");
        }
        for i in 0..records {
            contents.push_str(&format!("{},item{},{}\n", i, i, i * 10));
        }

        Self::with_contents("data.csv", &contents)
    }

    /// Create a file named `name` holding exactly `contents`.
    pub fn with_contents(name: &str, contents: &str) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(name);
        fs::write(&path, contents)?;

        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Get the path to the file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
