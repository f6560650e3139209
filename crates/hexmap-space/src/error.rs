//! Error types for map geometry construction.

use std::fmt;

/// Errors arising from building a [`HexTorus`](crate::HexTorus).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a map with zero nodes.
    EmptySpace,
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// The row count is odd. Shifted rows only tile a torus with an even
    /// number of rows.
    OddHeight {
        /// The requested height.
        height: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "map must have at least one node"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::OddHeight { height } => {
                write!(f, "map height must be even, got {height}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
