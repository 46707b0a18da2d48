//! Mineral Tracker log decoder
//!
//! The Mineral Tracker mod records every ore vein the player discovers into a
//! small binary log. This crate recovers those records, optionally collapses
//! near-duplicate sightings, and exports them as JourneyMap waypoints.
//!
//! # Format Overview
//!
//! ## File header
//! - Bytes 0-2: Preamble (`00 00 00`)
//! - Byte 3: Unused
//! - Bytes 4-11: First entry marker
//!
//! ## Entry (`00 00 00 01 00 00 00 00` marker)
//! - Bytes 0-7: Entry marker
//! - Bytes 8-11: X coordinate (i32, big-endian)
//! - Bytes 12-15: Z coordinate (i32, big-endian)
//! - Bytes 16-17: Unknown
//! - Bytes 18+: Ore name, raw bytes up to the next marker or end of file
//!
//! The file carries no vertical position; decoded coordinates use
//! [`DEFAULT_Y`] instead.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = mtdecode::Options::default();
//! for entry in mtdecode::run_file("minerals.dat", &options)?.entries {
//!     println!("{}", entry);
//! }
//! # Ok(())
//! # }
//! ```

mod coord;
mod decoder;
mod entry;
pub mod export;
pub mod filter;
pub mod header;
pub mod pipeline;
mod scanner;
pub mod waypoint;

pub use coord::Coordinate;
pub use decoder::Decoder;
pub use entry::Entry;
pub use export::{ExportError, ExportReport, Exporter};
pub use filter::filter_nearby;
pub use pipeline::{run, run_file, Options, Outcome};
pub use scanner::Scanner;
pub use waypoint::Waypoint;

/// File preamble (bytes 0-2)
pub const PREAMBLE: [u8; 3] = [0x00, 0x00, 0x00];

/// Marker opening every entry
pub const ENTRY_MARKER: [u8; 8] = [0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00];

/// Offset of the first entry marker
pub const FIRST_MARKER_OFFSET: usize = 4;

/// Minimum file size: preamble, unused byte and the first marker
pub const HEADER_SIZE: usize = FIRST_MARKER_OFFSET + ENTRY_MARKER.len();

/// Minimum entry size: marker, X, Z and the unknown field
pub const ENTRY_MIN_SIZE: usize = ENTRY_MARKER.len() + 10;

/// Placeholder Y for every decoded coordinate; the format has no Y field
pub const DEFAULT_Y: i32 = 144;

/// Default proximity filter threshold in blocks
pub const DEFAULT_MIN_DISTANCE: f64 = 50.0;

/// Errors from Mineral Tracker decoding
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("File too short: need {needed} bytes, got {actual}")]
    FileTooShort { needed: usize, actual: usize },

    #[error("Invalid preamble: expected 00 00 00, got {0:02x} {1:02x} {2:02x}")]
    InvalidPreamble(u8, u8, u8),

    #[error("Missing entry marker at offset 4")]
    MissingEntryMarker,

    #[error("Entry at offset {offset} too short: need {needed} bytes, got {actual}")]
    EntryTooShort {
        offset: usize,
        needed: usize,
        actual: usize,
    },

    #[error("Entry at offset {offset} does not start with an entry marker")]
    InvalidEntryMarker { offset: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The file was rejected before any entry was produced
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::FileTooShort { .. } | Error::InvalidPreamble(..) | Error::MissingEntryMarker
        )
    }

    /// A single entry was malformed and the scan was aborted
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::EntryTooShort { .. } | Error::InvalidEntryMarker { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
