//! Hexmap: the world model of a hexagonal-grid real-time strategy game.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! hexmap sub-crates. For most users, adding `hexmap` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hexmap::prelude::*;
//!
//! // A 32x32 map with a sea along the northern rows and one harbor point.
//! let mut map = MapData::filled(32, 32, TerrainType::Meadow1, 10);
//! map.set_rows(0..=4, TerrainType::Water);
//! let map = map.with_harbor(MapPoint::new(8, 6));
//!
//! let mut world = World::new(WorldConfig::default(), map).unwrap();
//! assert_eq!(world.sea_count(), 1);
//! assert_eq!(world.sea_ids(HarborId(1)).as_slice(), &[SeaId(1)]);
//!
//! // Give player 0 some land and ask what it could build.
//! let land: Vec<MapPoint> = world.geometry().points_in_radius(MapPoint::new(16, 16), 6);
//! world
//!     .set_owners(land.into_iter().chain([MapPoint::new(16, 16)]).map(|pt| (pt, Some(PlayerId(0)))))
//!     .unwrap();
//! assert_eq!(world.bq_for(MapPoint::new(16, 16), PlayerId(0), false), BuildingQuality::Castle);
//!
//! let route = world
//!     .find_human_path(MapPoint::new(12, 16), MapPoint::new(20, 16), &PathOptions::default())
//!     .unwrap();
//! assert_eq!(route.length, 8);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hexmap-core` | IDs, points, directions, terrain, qualities |
//! | [`space`] | `hexmap-space` | Toroidal hex geometry and radius scans |
//! | [`world`] | `hexmap-world` | The world model: nodes, derived state, seas, paths, fog |
//! | [`script`] | `hexmap-script` | Command table for a scripting engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and IDs (`hexmap-core`).
pub use hexmap_core as types;

/// Toroidal hex geometry (`hexmap-space`).
///
/// [`space::HexTorus`] answers neighbour, distance and radius queries;
/// [`space::CrossBorders`] records map edges crossed by a route.
pub use hexmap_space as space;

/// The world model (`hexmap-world`).
///
/// [`world::World`] owns every node and keeps building qualities, shading,
/// territory, the sea graph and fog of war consistent.
pub use hexmap_world as world;

/// Scripting bridge (`hexmap-script`).
///
/// Resolve commands through a [`script::CommandTable`] and implement
/// [`script::ScriptHost`] for everything outside the map.
pub use hexmap_script as script;

/// Common imports for typical hexmap usage.
///
/// ```rust
/// use hexmap::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use hexmap_core::{
        BuildingKind, BuildingQuality, Direction, HarborId, MapPoint, PlayerId, RawPoint, RoadType, SeaId,
        ShipDirection, TerrainType, Visibility,
    };

    // Geometry
    pub use hexmap_space::{CrossBorders, HexTorus};

    // World
    pub use hexmap_world::{
        Building, ConfigError, MapData, MapObject, PathOptions, PathResult, ScriptEvent, TerrainObserver, World,
        WorldConfig, WorldError,
    };

    // Scripting
    pub use hexmap_script::{CommandTable, ScriptContext, ScriptError, ScriptHost, ScriptValue};
}
