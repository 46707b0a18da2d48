//! JourneyMap waypoint records
//!
//! JourneyMap stores one JSON file per waypoint. Waypoints created from a
//! Mineral Tracker log get the [`WAYPOINT_PREFIX`] on both the name and the
//! file name so a later export can find and replace them.

use serde::{Deserialize, Serialize};

use crate::{Coordinate, Entry};

/// Prefix on waypoint names and file names
pub const WAYPOINT_PREFIX: &str = "MT-";

/// Extension of waypoint files
pub const WAYPOINT_EXTENSION: &str = ".json";

const DEFAULT_ICON: &str = "waypoint-normal.png";

/// A JourneyMap waypoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub enable: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub origin: String,
    pub dimensions: Vec<i32>,
    pub persistent: bool,
}

impl Waypoint {
    /// Build a red, disabled, overworld waypoint for an ore entry
    pub fn from_entry(entry: &Entry) -> Self {
        let name = format!("{}{}", WAYPOINT_PREFIX, entry.name);
        let Coordinate { x, y, z } = entry.coords;

        Self {
            id: format!("{}_{}", name, entry.coords),
            name,
            icon: DEFAULT_ICON.to_string(),
            x,
            y,
            z,
            r: 255,
            g: 0,
            b: 0,
            enable: false,
            kind: "Normal".to_string(),
            origin: String::new(),
            dimensions: vec![0],
            persistent: true,
        }
    }

    /// File name JourneyMap expects for this waypoint
    pub fn filename(&self) -> String {
        format!("{}{}", self.id, WAYPOINT_EXTENSION)
    }

    /// Pretty-printed JSON with 4-space indentation
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Parse a waypoint file's contents
    pub fn from_json(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }
}

/// Check if a file name belongs to a waypoint written by this crate
pub fn is_waypoint_file(name: &str) -> bool {
    name.starts_with(WAYPOINT_PREFIX) && name.ends_with(WAYPOINT_EXTENSION)
}
