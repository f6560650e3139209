//! Core types for the hexmap world model.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate types, strongly-typed identifiers and the closed enumerations
//! (directions, terrain, road types, building qualities, visibility states)
//! that every other hexmap crate builds on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod building;
pub mod direction;
pub mod id;
pub mod point;
pub mod quality;
pub mod road;
pub mod terrain;
pub mod visibility;

pub use building::BuildingKind;
pub use direction::{Direction, ShipDirection};
pub use id::{HarborId, PlayerId, SeaId, SoldierId, MAX_PLAYERS};
pub use point::{MapPoint, RawPoint};
pub use quality::BuildingQuality;
pub use road::RoadType;
pub use terrain::{Resource, ResourceKind, TerrainBq, TerrainType};
pub use visibility::Visibility;
