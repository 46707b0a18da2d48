//! Block coordinates

use std::fmt;

use crate::DEFAULT_Y;

/// A block position in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Coordinate from a decoded X/Z pair, Y set to [`DEFAULT_Y`]
    pub const fn from_xz(x: i32, z: i32) -> Self {
        Self::new(x, DEFAULT_Y, z)
    }

    /// Planar (X/Z) Euclidean distance; Y is ignored
    pub fn distance(&self, other: &Coordinate) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dz = f64::from(self.z) - f64::from(other.z);
        dx.hypot(dz)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}
