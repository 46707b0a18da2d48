//! Single entry decoding

use std::fmt;

use byteorder::{BigEndian, ByteOrder};

use crate::{Coordinate, Error, Result, ENTRY_MARKER, ENTRY_MIN_SIZE};

// Field offsets relative to the start of the marker
const X_OFFSET: usize = ENTRY_MARKER.len();
const Z_OFFSET: usize = X_OFFSET + 4;
const UNKNOWN_OFFSET: usize = Z_OFFSET + 4;
const NAME_OFFSET: usize = UNKNOWN_OFFSET + 2;

/// One discovered ore location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Ore name as written by the mod (e.g., "Gold", "Diamond")
    pub name: String,
    /// Position; Y is always [`crate::DEFAULT_Y`]
    pub coords: Coordinate,
    /// Two bytes between Z and the name, kept as-is
    pub unknown: [u8; 2],
}

impl Entry {
    pub fn new(name: impl Into<String>, coords: Coordinate) -> Self {
        Self {
            name: name.into(),
            coords,
            unknown: [0; 2],
        }
    }

    /// Decode an entry window
    ///
    /// The window must start with the entry marker and end right before the
    /// next marker (or at end of file). `offset` is the window's position in
    /// the file and is only used for error reporting.
    pub fn from_bytes(window: &[u8], offset: usize) -> Result<Self> {
        if window.len() < ENTRY_MIN_SIZE {
            return Err(Error::EntryTooShort {
                offset,
                needed: ENTRY_MIN_SIZE,
                actual: window.len(),
            });
        }

        if window[..X_OFFSET] != ENTRY_MARKER {
            return Err(Error::InvalidEntryMarker { offset });
        }

        let x = BigEndian::read_i32(&window[X_OFFSET..Z_OFFSET]);
        let z = BigEndian::read_i32(&window[Z_OFFSET..UNKNOWN_OFFSET]);
        let unknown = [window[UNKNOWN_OFFSET], window[UNKNOWN_OFFSET + 1]];

        // No declared encoding; the mod writes plain ASCII in practice
        let name = String::from_utf8_lossy(&window[NAME_OFFSET..]).into_owned();

        Ok(Self {
            name,
            coords: Coordinate::from_xz(x, z),
            unknown,
        })
    }

    /// Planar distance to another entry
    pub fn distance_to(&self, other: &Entry) -> f64 {
        self.coords.distance(&other.coords)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {},{}", self.name, self.coords.x, self.coords.z)
    }
}
