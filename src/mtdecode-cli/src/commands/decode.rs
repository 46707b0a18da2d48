//! Decode command: read a log, print entries, export waypoints

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use mtdecode::{Entry, Exporter, Options, DEFAULT_MIN_DISTANCE};

use crate::cli::Cli;
use crate::config::Config;

/// Where and how to export waypoints
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// Absolute waypoint directory
    pub dir: PathBuf,
    /// Remove stale `MT-*.json` files first
    pub clean: bool,
}

/// Fully resolved run settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub print: bool,
    pub options: Options,
    pub export: Option<ExportSettings>,
}

impl Settings {
    /// Merge command-line flags over the config file
    ///
    /// Fails before anything is decoded if export is requested without a
    /// usable directory.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let min_distance = if cli.no_filter {
            None
        } else {
            Some(
                cli.min_distance
                    .or(config.min_distance)
                    .map_or(DEFAULT_MIN_DISTANCE, f64::from),
            )
        };

        let export = if cli.export {
            let Some(dir) = cli.export_dir.as_ref().or(config.export_dir.as_ref()) else {
                bail!("--export requires --export-dir (or export_dir in the config file)");
            };
            let dir = fs::canonicalize(dir)
                .with_context(|| format!("Failed to resolve export directory {}", dir.display()))?;
            tracing::debug!("Export directory resolved to {}", dir.display());

            Some(ExportSettings {
                dir,
                clean: !cli.no_clean,
            })
        } else {
            None
        };

        Ok(Self {
            input: cli.input.clone(),
            print: !cli.no_output,
            options: Options { min_distance },
            export,
        })
    }
}

/// Print entries as `<name>: <X>,<Z>`, one per line
pub fn print_entries(out: &mut impl Write, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}

/// Handle the decode run
pub fn handle(settings: &Settings) -> Result<()> {
    tracing::info!("Decoding {}", settings.input.display());

    let outcome = mtdecode::run_file(&settings.input, &settings.options)
        .with_context(|| format!("Failed to decode {}", settings.input.display()))?;
    tracing::info!(
        "Decoded {} entries, {} kept after filtering",
        outcome.decoded,
        outcome.entries.len()
    );
    let entries = outcome.entries;

    if settings.print {
        let stdout = io::stdout();
        print_entries(&mut stdout.lock(), &entries).context("Failed to write to stdout")?;
    }

    if let Some(export) = &settings.export {
        let exporter = Exporter::new(&export.dir).context("Failed to open export directory")?;
        let report = exporter
            .write_all(&entries, export.clean)
            .context("Failed to export waypoints")?;

        tracing::info!(
            "Wrote {} waypoints to {} ({} skipped, {} duplicates, {} stale removed)",
            report.written,
            export.dir.display(),
            report.skipped,
            report.duplicates,
            report.removed
        );
    }

    Ok(())
}
