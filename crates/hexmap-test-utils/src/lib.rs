//! Test utilities and mock collaborators for hexmap development.
//!
//! Provides ready-made maps ([`fixtures`]) and recording implementations
//! of the collaborator traits ([`RecordingObserver`] for
//! [`TerrainObserver`], [`RecordingHost`] for [`ScriptHost`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use hexmap_core::{BuildingKind, MapPoint, PlayerId};
use hexmap_script::ScriptHost;
use hexmap_world::{NewBuilding, TerrainObserver};

/// A terrain observer callback, as recorded by [`RecordingObserver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerrainChange {
    Altitude(MapPoint),
    Visibility(MapPoint, PlayerId),
}

/// Observer that records every callback.
///
/// Clones share the log, so keep one clone for assertions and hand the
/// other to [`World::set_observer`](hexmap_world::World::set_observer).
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    log: Arc<Mutex<Vec<TerrainChange>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn changes(&self) -> Vec<TerrainChange> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Drain the log.
    pub fn take(&self) -> Vec<TerrainChange> {
        std::mem::take(&mut *self.log.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn push(&self, change: TerrainChange) {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).push(change);
    }
}

impl TerrainObserver for RecordingObserver {
    fn altitude_changed(&mut self, pt: MapPoint) {
        self.push(TerrainChange::Altitude(pt));
    }

    fn visibility_changed(&mut self, pt: MapPoint, player: PlayerId) {
        self.push(TerrainChange::Visibility(pt, player));
    }
}

/// A message posted through [`ScriptHost::post_message`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostedMessage {
    pub player: PlayerId,
    pub text: String,
    pub location: Option<MapPoint>,
}

/// Script host backed by in-memory inventories that records everything
/// sent to it.
///
/// Only players listed in `warehouses` accept wares and people; only
/// players in `ai_players` accept construction orders.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    pub warehouses: Vec<PlayerId>,
    pub ai_players: Vec<PlayerId>,
    pub wares: HashMap<(PlayerId, u32), u32>,
    pub people: HashMap<(PlayerId, u32), u32>,
    pub chats: Vec<(Option<PlayerId>, String)>,
    pub missions: Vec<(PlayerId, String, String)>,
    pub messages: Vec<PostedMessage>,
    pub orders: Vec<(PlayerId, MapPoint, BuildingKind)>,
    pub new_buildings: Vec<(PlayerId, NewBuilding)>,
    pub log_lines: Vec<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host where every listed player has a warehouse.
    pub fn with_warehouses(players: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            warehouses: players.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl ScriptHost for RecordingHost {
    fn add_wares(&mut self, player: PlayerId, ware: u32, count: u32) -> bool {
        if !self.warehouses.contains(&player) {
            return false;
        }
        *self.wares.entry((player, ware)).or_insert(0) += count;
        true
    }

    fn add_people(&mut self, player: PlayerId, job: u32, count: u32) -> bool {
        if !self.warehouses.contains(&player) {
            return false;
        }
        *self.people.entry((player, job)).or_insert(0) += count;
        true
    }

    fn ware_count(&self, player: PlayerId, ware: u32) -> u32 {
        self.wares.get(&(player, ware)).copied().unwrap_or(0)
    }

    fn people_count(&self, player: PlayerId, job: u32) -> u32 {
        self.people.get(&(player, job)).copied().unwrap_or(0)
    }

    fn chat(&mut self, player: Option<PlayerId>, text: &str) {
        self.chats.push((player, text.to_owned()));
    }

    fn mission_statement(&mut self, player: PlayerId, title: &str, text: &str) {
        self.missions.push((player, title.to_owned(), text.to_owned()));
    }

    fn post_message(&mut self, player: PlayerId, text: &str, location: Option<MapPoint>) {
        self.messages.push(PostedMessage {
            player,
            text: text.to_owned(),
            location,
        });
    }

    fn ai_construction_order(&mut self, player: PlayerId, pt: MapPoint, kind: BuildingKind) -> bool {
        if !self.ai_players.contains(&player) {
            return false;
        }
        self.orders.push((player, pt, kind));
        true
    }

    fn new_building(&mut self, player: PlayerId, building: NewBuilding) {
        self.new_buildings.push((player, building));
    }

    fn log(&mut self, text: &str) {
        self.log_lines.push(text.to_owned());
    }
}
