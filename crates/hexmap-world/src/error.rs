//! Errors for rejected world mutations.

use hexmap_core::{MapPoint, PlayerId};
use std::error::Error;
use std::fmt;

/// A mutation the world refused to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The node already holds an object.
    NodeOccupied {
        /// The occupied node.
        pos: MapPoint,
    },
    /// The node holds no object to act on.
    NoObject {
        /// The empty node.
        pos: MapPoint,
    },
    /// The player id is not part of this session.
    InvalidPlayer {
        /// The rejected id.
        player: PlayerId,
        /// Number of players in the session.
        player_count: u8,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeOccupied { pos } => write!(f, "node {pos} is already occupied"),
            Self::NoObject { pos } => write!(f, "node {pos} holds no object"),
            Self::InvalidPlayer {
                player,
                player_count,
            } => write!(f, "player {player} out of range (session has {player_count})"),
        }
    }
}

impl Error for WorldError {}
