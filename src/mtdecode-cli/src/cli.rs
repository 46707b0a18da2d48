//! CLI argument definitions for mtdecode

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mtdecode")]
#[command(about = "Decode Mineral Tracker logs", long_about = None)]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Path to the Mineral Tracker log file
    pub input: PathBuf,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long)]
    pub debug: bool,

    /// Do not print decoded entries to stdout
    #[arg(long)]
    pub no_output: bool,

    /// Keep entries that are close to an earlier entry of the same ore
    #[arg(short = 'n', long)]
    pub no_filter: bool,

    /// Minimum distance between kept entries of the same ore [default: 50]
    #[arg(short = 'd', long, value_name = "BLOCKS")]
    pub min_distance: Option<u32>,

    /// Export entries as JourneyMap waypoints
    #[arg(long)]
    pub export: bool,

    /// JourneyMap waypoint directory (uses configured default if not provided)
    #[arg(long, value_name = "DIR", env = "MTDECODE_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,

    /// Keep waypoint files left by previous exports
    #[arg(long)]
    pub no_clean: bool,

    /// Config file (defaults to <config dir>/mtdecode/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
