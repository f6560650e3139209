//! The collaborator that owns everything scripts reach beyond the map.
//!
//! Warehouses, settlers, chat, mission texts and AI players live outside
//! the world model. Built-in commands forward to a [`ScriptHost`]; a
//! session plugs in its own implementation.

use hexmap_core::{BuildingKind, MapPoint, PlayerId};
use hexmap_world::NewBuilding;
use tracing::info;

/// Economy, messaging and AI side of a game session.
pub trait ScriptHost {
    /// Put `count` wares of `ware` into the first warehouse of `player`.
    /// Returns false if the player has no warehouse.
    fn add_wares(&mut self, player: PlayerId, ware: u32, count: u32) -> bool;

    /// Put `count` settlers of `job` into the first warehouse of `player`.
    /// Returns false if the player has no warehouse.
    fn add_people(&mut self, player: PlayerId, job: u32, count: u32) -> bool;

    /// Wares of `ware` in the inventory of `player`.
    fn ware_count(&self, player: PlayerId, ware: u32) -> u32;

    /// Settlers of `job` in the inventory of `player`.
    fn people_count(&self, player: PlayerId, job: u32) -> u32;

    /// Show a chat line from the script to `player`, or to everyone.
    fn chat(&mut self, player: Option<PlayerId>, text: &str);

    /// Show a mission statement window to `player`.
    fn mission_statement(&mut self, player: PlayerId, title: &str, text: &str);

    /// Deliver a message to the inbox of `player`, optionally pointing at
    /// a map location.
    fn post_message(&mut self, player: PlayerId, text: &str, location: Option<MapPoint>);

    /// Ask the AI of `player` to build `kind` at `pt`. Returns false if
    /// the player is not computer controlled.
    fn ai_construction_order(&mut self, player: PlayerId, pt: MapPoint, kind: BuildingKind) -> bool;

    /// A building of `player` was finished and is being reported to the
    /// script.
    fn new_building(&mut self, player: PlayerId, building: NewBuilding);

    /// A line from the script's `Log` command.
    fn log(&mut self, text: &str) {
        info!(target: "hexmap_script", "{text}");
    }
}
