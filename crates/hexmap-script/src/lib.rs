//! Scripting bridge for hexmap worlds.
//!
//! A scripting engine resolves command names through a [`CommandTable`]
//! and calls them with dynamically typed [`ScriptValue`] arguments.
//! Commands act on the [`World`](hexmap_world::World) directly and forward
//! everything the world does not own (inventories, chat, AI players) to a
//! [`ScriptHost`].
//!
//! ```
//! use hexmap_core::{PlayerId, TerrainType};
//! use hexmap_script::{CommandTable, ScriptContext, ScriptValue};
//! # use hexmap_core::{BuildingKind, MapPoint};
//! # use hexmap_script::ScriptHost;
//! # use hexmap_world::NewBuilding;
//! use hexmap_world::{MapData, World, WorldConfig};
//! # struct Quiet;
//! # impl ScriptHost for Quiet {
//! #     fn add_wares(&mut self, _: PlayerId, _: u32, _: u32) -> bool { true }
//! #     fn add_people(&mut self, _: PlayerId, _: u32, _: u32) -> bool { true }
//! #     fn ware_count(&self, _: PlayerId, _: u32) -> u32 { 0 }
//! #     fn people_count(&self, _: PlayerId, _: u32) -> u32 { 0 }
//! #     fn chat(&mut self, _: Option<PlayerId>, _: &str) {}
//! #     fn mission_statement(&mut self, _: PlayerId, _: &str, _: &str) {}
//! #     fn post_message(&mut self, _: PlayerId, _: &str, _: Option<MapPoint>) {}
//! #     fn ai_construction_order(&mut self, _: PlayerId, _: MapPoint, _: BuildingKind) -> bool { false }
//! #     fn new_building(&mut self, _: PlayerId, _: NewBuilding) {}
//! # }
//!
//! let mut world = World::new(
//!     WorldConfig::default(),
//!     MapData::filled(16, 16, TerrainType::Meadow1, 10),
//! )
//! .unwrap();
//! let mut host = Quiet;
//! let table = CommandTable::with_builtins();
//! let mut ctx = ScriptContext { world: &mut world, host: &mut host };
//!
//! let args = [ScriptValue::Int(1), ScriptValue::from("woodcutter")];
//! table.call("DisableBuilding", &mut ctx, &args).unwrap();
//! assert_eq!(table.call("GetPlayerCount", &mut ctx, &[]), Ok(ScriptValue::Int(2)));
//! assert!(!world.is_building_enabled(PlayerId(1), hexmap_core::BuildingKind::Woodcutter));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod builtins;
pub mod error;
pub mod host;
pub mod table;
pub mod value;

pub use builtins::DEFAULT_OBJECT_FILE;
pub use error::ScriptError;
pub use host::ScriptHost;
pub use table::{CommandFn, CommandTable, ScriptContext};
pub use value::{ScriptArgs, ScriptValue};
