//! Map coordinates.

use std::fmt;

/// A node position on the map: `0 <= x < width`, `0 <= y < height`.
///
/// A `MapPoint` is always in range for the map it was produced by. Any
/// arithmetic that can leave the map is done on [`RawPoint`] and folded
/// back by the geometry layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapPoint {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl MapPoint {
    /// Create a point. No range check happens here.
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// True for points on odd rows, which are shifted half a node east.
    pub const fn odd_row(self) -> bool {
        self.y & 1 == 1
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An unwrapped integer coordinate, possibly outside the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawPoint {
    /// Column, may be negative or past the right edge.
    pub x: i32,
    /// Row, may be negative or past the bottom edge.
    pub y: i32,
}

impl RawPoint {
    /// Create a raw point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<MapPoint> for RawPoint {
    fn from(pt: MapPoint) -> Self {
        Self {
            x: pt.x as i32,
            y: pt.y as i32,
        }
    }
}

impl fmt::Display for RawPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
