//! JourneyMap waypoint export
//!
//! Writes one waypoint file per entry into a JourneyMap waypoint directory.
//! A file that cannot be written or removed is logged and skipped; only
//! problems with the directory itself abort the export.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::waypoint::{is_waypoint_file, Waypoint};
use crate::Entry;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Outcome of an export run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Stale waypoint files deleted before writing
    pub removed: usize,
    /// Distinct waypoint files written
    pub written: usize,
    /// Entries that mapped to a file already written in this run
    pub duplicates: usize,
    /// Entries whose file could not be written
    pub skipped: usize,
}

/// Waypoint writer bound to one directory
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    /// Bind to an existing directory
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ExportError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(ExportError::NotADirectory(dir));
        }
        Ok(Self { dir })
    }

    /// Delete every `MT-*.json` file left by a previous export
    ///
    /// Returns how many files were removed.
    pub fn remove_stale(&self) -> Result<usize, ExportError> {
        let mut removed = 0;

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !is_waypoint_file(name) || !entry.file_type()?.is_file() {
                continue;
            }

            match fs::remove_file(entry.path()) {
                Ok(()) => {
                    tracing::debug!("Removed stale waypoint {}", name);
                    removed += 1;
                }
                Err(e) => tracing::error!("Unable to delete {}: {}", name, e),
            }
        }

        Ok(removed)
    }

    /// Write one waypoint
    pub fn write(&self, waypoint: &Waypoint) -> Result<PathBuf, ExportError> {
        let path = self.dir.join(waypoint.filename());
        let json = waypoint.to_json()?;
        fs::write(&path, &json)?;
        tracing::debug!("Wrote {} bytes to {}", json.len(), path.display());
        Ok(path)
    }

    /// Export entries as waypoints, optionally clearing stale files first
    pub fn write_all(&self, entries: &[Entry], clean: bool) -> Result<ExportReport, ExportError> {
        let mut report = ExportReport::default();

        if clean {
            report.removed = self.remove_stale()?;
        }

        let mut seen = HashSet::new();
        for entry in entries {
            let waypoint = Waypoint::from_entry(entry);
            match self.write(&waypoint) {
                Ok(path) if seen.insert(path.clone()) => report.written += 1,
                Ok(path) => {
                    tracing::debug!("{} written again by a duplicate entry", path.display());
                    report.duplicates += 1;
                }
                Err(e) => {
                    tracing::error!("Unable to write waypoint {}: {}, skipping", waypoint.name, e);
                    report.skipped += 1;
                }
            }
        }

        Ok(report)
    }
}
