//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] holds the tunables of a session; the map itself arrives
//! as [`MapData`](crate::MapData) from the map loader. Both are checked by
//! [`World::new`](crate::World::new) before anything is built.

use std::error::Error;
use std::fmt;

use hexmap_core::{MapPoint, MAX_PLAYERS};
use hexmap_space::SpaceError;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a configuration or map input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Map dimensions are unusable.
    Space(SpaceError),
    /// `player_count` is zero.
    NoPlayers,
    /// `player_count` exceeds [`MAX_PLAYERS`].
    TooManyPlayers {
        /// The configured count.
        count: u8,
        /// The supported maximum.
        max: usize,
    },
    /// `military_square_size` is zero.
    ZeroSquareSize,
    /// The node list does not match `width * height`.
    NodeCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the node list.
        got: usize,
    },
    /// A harbor position lies outside the map.
    HarborOutOfBounds {
        /// The offending position.
        pos: MapPoint,
    },
    /// The same harbor position was registered twice.
    DuplicateHarbor {
        /// The repeated position.
        pos: MapPoint,
    },
    /// The map splits into more seas than a [`SeaId`](hexmap_core::SeaId)
    /// can name.
    TooManySeas {
        /// Largest usable sea id.
        max: u16,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "map geometry: {e}"),
            Self::NoPlayers => write!(f, "player_count must be at least 1"),
            Self::TooManyPlayers { count, max } => {
                write!(f, "player_count {count} exceeds maximum of {max}")
            }
            Self::ZeroSquareSize => write!(f, "military_square_size must be at least 1"),
            Self::NodeCountMismatch { expected, got } => {
                write!(f, "map has {got} nodes, expected {expected}")
            }
            Self::HarborOutOfBounds { pos } => write!(f, "harbor {pos} outside the map"),
            Self::DuplicateHarbor { pos } => write!(f, "harbor {pos} registered twice"),
            Self::TooManySeas { max } => write!(f, "map has more than {max} seas"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Session tunables for a [`World`](crate::World).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Number of players. Default: 2. Range: `1..=8`.
    pub player_count: u8,
    /// Seed for randomized route tie-breaking. Default: 0.
    pub seed: u64,
    /// A sea needs more nodes than this to count for coastal queries.
    /// Default: 20.
    pub navigable_sea_threshold: u32,
    /// Harbors closer than this to a target are in sea-attack range.
    /// Default: 15.
    pub sea_attack_distance: u32,
    /// How far from a launch harbor military buildings send soldiers on a
    /// sea attack. Default: 15.
    pub muster_radius: u32,
    /// Edge length of the military-building index cells. Default: 20.
    pub military_square_size: u16,
    /// Allies share what they see. Default: true.
    pub team_visibility: bool,
    /// Route budget for ship paths when the caller passes none. Default: 200.
    pub max_ship_route: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            seed: 0,
            navigable_sea_threshold: 20,
            sea_attack_distance: 15,
            muster_radius: 15,
            military_square_size: 20,
            team_visibility: true,
            max_ship_route: 200,
        }
    }
}

impl WorldConfig {
    /// Check all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.player_count as usize > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                count: self.player_count,
                max: MAX_PLAYERS,
            });
        }
        if self.military_square_size == 0 {
            return Err(ConfigError::ZeroSquareSize);
        }
        Ok(())
    }
}
