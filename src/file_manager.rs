//! # File Management Module
//!
//! Expands the command-line inputs into the list of files to optimize.
//!
//! - a file is kept as given
//! - a directory is walked recursively with `walkdir`, files only, in
//!   sorted order so runs are reproducible
//!
//! No filtering by extension happens here: the media type is decided later
//! by content, and files no optimizer accepts are simply skipped.
//! Paths that do not exist are kept so the orchestrator reports them.
//! Entries the walk cannot read are logged and skipped.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Manages input discovery
pub struct FileManager;

impl FileManager {
    /// Expand every input path, preserving argument order
    pub fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for input in inputs {
            if input.is_dir() {
                files.extend(Self::find_files(input)?);
            } else {
                files.push(input.clone());
            }
        }

        Ok(files)
    }

    /// Find all regular files below a directory
    pub fn find_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                    continue;
                }
            };
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}
