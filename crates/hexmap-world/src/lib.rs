//! Authoritative world model for hexmap.
//!
//! [`World`] owns the dense node store and everything derived from it:
//! cached building qualities, shading, territory, the sea and harbor graph,
//! fog of war and the military-building index. Every mutating method
//! brings the derived state back in line before it returns, so queries
//! never see stale values.
//!
//! Reads take `&self` and may run from several threads at once. Path
//! searches reuse scratch buffers owned by the world behind a mutex;
//! parallel workers can instead bring their own [`PathFinder`].
//!
//! Outward notifications go two ways: [`ScriptEvent`]s are published on
//! channels returned by [`World::subscribe_events`], and terrain changes
//! are reported synchronously to an installed [`TerrainObserver`].
//!
//! Player ids outside the session never panic. Mutations that return a
//! `Result` reject them with [`WorldError::InvalidPlayer`], other updates
//! ignore them, and queries answer as for a player with nothing: no
//! visibility, no buildings, nowhere to build.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod events;
pub mod map_data;
pub(crate) mod military;
pub mod node;
pub mod object;
pub mod pathfind;
pub mod players;
pub mod quality;
mod roads;
pub mod sea;
pub mod sea_attack;
mod shading;
mod territory;
mod visibility;
mod world;

pub use config::{ConfigError, WorldConfig};
pub use error::WorldError;
pub use events::{ScriptEvent, TerrainObserver};
pub use map_data::{MapData, NodeInit};
pub use node::{FogState, MapNode, RoadSlot};
pub use object::{
    BlockingManner, Building, BuildingSite, CharburnerPile, EnvObject, Flag, FowObject, FowRoads, Granite,
    MapObject, ObjectKind, ObjectRole, Soldier, StaticObject, Tree,
};
pub use pathfind::{HumanRules, MoveRules, PathFinder, PathOptions, PathResult, RoadRules, ShipRoute, ShipRules};
pub use players::NewBuilding;
pub use quality::{BQ_REFRESH_RADIUS, HOSTILE_MILITARY_RADIUS, OWN_MILITARY_RADIUS};
pub use sea::{HarborNeighbor, HarborPos, Sea, HARBOR_CLAIM_RADIUS};
pub use sea_attack::SeaAttacker;
pub use world::World;
