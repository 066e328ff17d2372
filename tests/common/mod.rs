//! Common test utilities and helpers

use bytediff::{Comparator, ReportLimits, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture manager for creating temporary comparison trees
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        Ok(Self { temp_dir })
    }

    /// Get the root path of the test fixture
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file with the given relative path and content, creating
    /// parent directories as needed
    pub fn create_file(&self, relative: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Create an empty directory with the given relative path
    pub fn create_dir(&self, relative: &str) -> Result<PathBuf> {
        let path = self.root().join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }
}

/// Run a full comparison with default limits, capturing the report text
pub fn compare_with_output(path1: &Path, path2: &Path) -> Result<(bool, String)> {
    compare_with_limits(path1, path2, &ReportLimits::default())
}

/// Run a full comparison with the given limits, capturing the report text
pub fn compare_with_limits(
    path1: &Path,
    path2: &Path,
    limits: &ReportLimits,
) -> Result<(bool, String)> {
    let mut comparator = Comparator::new(limits, Vec::new());
    let equal = comparator.run(path1, path2)?;
    let output = String::from_utf8(comparator.into_sink())
        .unwrap_or_else(|bytes| String::from_utf8_lossy(bytes.as_bytes()).into_owned());
    Ok((equal, output))
}
