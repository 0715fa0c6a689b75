use crate::error::{LocalizeError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a clear run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearReport {
    /// Directories that were deleted
    pub removed: Vec<PathBuf>,
    /// Directories left in place because their language is expected
    pub kept: Vec<PathBuf>,
}

/// Removes language directories that are no longer expected
#[derive(Debug, Clone)]
pub struct Cleaner {
    directory: PathBuf,
}

impl Cleaner {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Immediate subdirectories of the export root, sorted by name.
    ///
    /// A missing root has no language directories.
    pub fn language_directories(&self) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist, nothing to clear", self.directory.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(LocalizeError::filesystem(&self.directory, e)),
        };

        let mut directories = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| LocalizeError::filesystem(&self.directory, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| LocalizeError::filesystem(entry.path(), e))?;
            if file_type.is_dir() {
                directories.push(entry.path());
            }
        }

        directories.sort();
        Ok(directories)
    }

    /// Recursively delete every language directory whose name is not expected.
    ///
    /// All stale directories are attempted even if one fails; failures are
    /// reported together as [`LocalizeError::Cleanup`].
    pub fn clear<F>(&self, is_expected: F) -> Result<ClearReport>
    where
        F: Fn(&str) -> bool,
    {
        let mut report = ClearReport::default();
        let mut failures = Vec::new();

        for directory in self.language_directories()? {
            let expected = directory
                .file_name()
                .map(|name| is_expected(&name.to_string_lossy()))
                .unwrap_or(false);

            if expected {
                report.kept.push(directory);
                continue;
            }

            match fs::remove_dir_all(&directory) {
                Ok(()) => {
                    debug!("Removed {}", directory.display());
                    report.removed.push(directory);
                }
                Err(e) => failures.push((directory, e)),
            }
        }

        if !failures.is_empty() {
            return Err(LocalizeError::Cleanup { failures });
        }

        info!(
            "✓ Removed {} stale language director{} from {}",
            report.removed.len(),
            if report.removed.len() == 1 { "y" } else { "ies" },
            self.directory.display()
        );
        Ok(report)
    }
}
