//! The world: dense node store plus the state derived from it.

use std::sync::Mutex;

use indexmap::IndexMap;
use tracing::debug;

use crate::config::{ConfigError, WorldConfig};
use crate::error::WorldError;
use crate::events::{EventBus, ScriptEvent, TerrainObserver};
use crate::map_data::MapData;
use crate::military::MilitaryIndex;
use crate::node::MapNode;
use crate::object::{BlockingManner, MapObject, ObjectKind, ObjectRole};
use crate::pathfind::PathFinder;
use crate::players::{NewBuilding, PlayerTable};
use crate::sea::{HarborPos, Sea};
use hexmap_core::{
    BuildingKind, BuildingQuality, Direction, MapPoint, PlayerId, RawPoint, Resource, TerrainType,
};
use hexmap_space::HexTorus;

/// The authoritative map model.
///
/// Owns every node, the sea and harbor tables, the player table and the
/// long-lived path finders. Queries take `&self` and are safe to run from
/// several threads at once. Mutations take `&mut self` and bring all
/// derived state (building quality, shading, visibility, military index)
/// up to date before they return.
pub struct World {
    pub(crate) config: WorldConfig,
    pub(crate) torus: HexTorus,
    pub(crate) nodes: Vec<MapNode>,
    pub(crate) seas: Vec<Sea>,
    pub(crate) harbors: Vec<HarborPos>,
    pub(crate) players: PlayerTable,
    pub(crate) military: MilitaryIndex,
    /// Buildings granting vision: owner and radius.
    pub(crate) vision_sources: IndexMap<MapPoint, (PlayerId, u32)>,
    pub(crate) frame: u64,
    pub(crate) events: EventBus,
    pub(crate) observer: Option<Box<dyn TerrainObserver>>,
    pub(crate) free_path_finder: Mutex<PathFinder>,
    pub(crate) road_path_finder: Mutex<PathFinder>,
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("config", &self.config)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

impl World {
    /// Build a world from loaded map data.
    ///
    /// Computes shading, flood-fills the seas, registers the harbor points
    /// and links them into the harbor graph.
    pub fn new(config: WorldConfig, map: MapData) -> Result<Self, ConfigError> {
        config.validate()?;
        let torus = HexTorus::new(map.width, map.height)?;
        if map.nodes.len() != torus.node_count() {
            return Err(ConfigError::NodeCountMismatch {
                expected: torus.node_count(),
                got: map.nodes.len(),
            });
        }
        let players = config.player_count as usize;
        let nodes = map
            .nodes
            .iter()
            .map(|n| MapNode::new(n.terrain, n.altitude, n.resource, players))
            .collect();
        let mut world = World {
            military: MilitaryIndex::new(map.width, map.height, config.military_square_size),
            players: PlayerTable::new(config.player_count),
            config,
            torus,
            nodes,
            seas: Vec::new(),
            harbors: Vec::new(),
            vision_sources: IndexMap::new(),
            frame: 0,
            events: EventBus::default(),
            observer: None,
            free_path_finder: Mutex::new(PathFinder::new()),
            road_path_finder: Mutex::new(PathFinder::new()),
        };
        for pt in torus.points() {
            world.recalc_shadow(pt);
        }
        world.build_seas()?;
        world.build_harbors(&map.harbors)?;
        world.recalc_all_bq();
        debug!(
            width = map.width,
            height = map.height,
            seas = world.seas.len(),
            harbors = world.harbors.len(),
            "world initialised"
        );
        Ok(world)
    }

    // ── Geometry ───────────────────────────────────────────────────

    /// The session configuration.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Map geometry.
    pub fn geometry(&self) -> &HexTorus {
        &self.torus
    }

    /// Number of columns.
    pub fn width(&self) -> u16 {
        self.torus.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u16 {
        self.torus.height()
    }

    /// Neighbour of `pt` in `dir`.
    pub fn neighbour(&self, pt: MapPoint, dir: Direction) -> MapPoint {
        self.torus.neighbour(pt, dir)
    }

    /// Second-ring neighbour `index` (`0..12`) of `pt`.
    pub fn neighbour2(&self, pt: MapPoint, index: usize) -> MapPoint {
        self.torus.neighbour2(pt, index)
    }

    /// Step distance between two nodes.
    pub fn distance(&self, a: MapPoint, b: MapPoint) -> u32 {
        self.torus.distance(a, b)
    }

    /// Fold a raw coordinate onto the map.
    pub fn make_point(&self, raw: RawPoint) -> MapPoint {
        self.torus.make_point(raw)
    }

    // ── Node access ────────────────────────────────────────────────

    /// The node at `pt`.
    pub fn node(&self, pt: MapPoint) -> &MapNode {
        &self.nodes[self.torus.index(pt)]
    }

    pub(crate) fn node_mut(&mut self, pt: MapPoint) -> &mut MapNode {
        let idx = self.torus.index(pt);
        &mut self.nodes[idx]
    }

    /// The neighbour node of `pt` in `dir`.
    pub fn neighbour_node(&self, pt: MapPoint, dir: Direction) -> &MapNode {
        self.node(self.neighbour(pt, dir))
    }

    /// Triangle `index` (`0..6`) around `pt`, clockwise from the one
    /// between the west and north-west edges.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`.
    pub fn terrain_around(&self, pt: MapPoint, index: usize) -> TerrainType {
        match index {
            0 => self.neighbour_node(pt, Direction::NorthWest).t1(),
            1 => self.neighbour_node(pt, Direction::NorthWest).t2(),
            2 => self.neighbour_node(pt, Direction::NorthEast).t1(),
            3 => self.node(pt).t2(),
            4 => self.node(pt).t1(),
            5 => self.neighbour_node(pt, Direction::West).t2(),
            _ => panic!("terrain index {index} out of range"),
        }
    }

    /// The six triangles around `pt`.
    pub fn terrains_around(&self, pt: MapPoint) -> [TerrainType; 6] {
        std::array::from_fn(|i| self.terrain_around(pt, i))
    }

    /// Triangle on the clockwise side of the edge from `pt` towards `dir`.
    pub fn walking_terrain_forward(&self, pt: MapPoint, dir: Direction) -> TerrainType {
        self.terrain_around(pt, dir.index())
    }

    /// Triangle on the counter-clockwise side of the edge from `pt`
    /// towards `dir`.
    pub fn walking_terrain_backward(&self, pt: MapPoint, dir: Direction) -> TerrainType {
        self.terrain_around(pt, (dir.index() + 5) % 6)
    }

    /// True if all six triangles around `pt` are navigable water.
    pub fn is_sea_point(&self, pt: MapPoint) -> bool {
        (0..6).all(|i| self.terrain_around(pt, i).is_shippable())
    }

    /// The object at `pt`, if any.
    pub fn object(&self, pt: MapPoint) -> Option<&MapObject> {
        self.node(pt).object.as_ref()
    }

    /// Kind of the object at `pt`; [`ObjectKind::Nothing`] for empty nodes.
    pub fn object_kind(&self, pt: MapPoint) -> ObjectKind {
        self.object(pt).map_or(ObjectKind::Nothing, MapObject::kind)
    }

    /// The object at `pt` if it is a `T`.
    pub fn object_as<T: ObjectRole>(&self, pt: MapPoint) -> Option<&T> {
        self.object(pt).and_then(T::from_object)
    }

    /// The object at `pt` if it is a `T`, mutably.
    ///
    /// Callers may change the object's contents but not its footprint;
    /// use [`World::replace_object`] for that.
    pub fn object_as_mut<T: ObjectRole>(&mut self, pt: MapPoint) -> Option<&mut T> {
        self.node_mut(pt).object.as_mut().and_then(T::from_object_mut)
    }

    /// Blocking manner of the object at `pt`.
    pub fn blocking_manner(&self, pt: MapPoint) -> BlockingManner {
        self.object(pt)
            .map_or(BlockingManner::NotBlocking, MapObject::blocking_manner)
    }

    // ── Objects ────────────────────────────────────────────────────

    /// Put `object` on the empty node `pt`.
    pub fn place_object(&mut self, pt: MapPoint, object: impl Into<MapObject>) -> Result<(), WorldError> {
        let object = object.into();
        if let Some(owner) = object.owner() {
            self.check_player(owner)?;
        }
        if self.node(pt).object.is_some() {
            return Err(WorldError::NodeOccupied { pos: pt });
        }
        let military = object.is_military();
        let finished = match &object {
            MapObject::Building(b) => Some((b.kind, b.owner)),
            _ => None,
        };
        self.node_mut(pt).object = Some(object);
        if military {
            self.military.add(pt);
        }
        if let Some((kind, owner)) = finished {
            self.players.building_added(owner, pt, kind);
            let radius = kind.vision_radius();
            self.vision_sources.insert(pt, (owner, radius));
            self.make_visible_around(pt, radius, owner);
        }
        self.refresh_bq_around([pt]);
        Ok(())
    }

    /// Take the object off `pt`.
    pub fn remove_object(&mut self, pt: MapPoint) -> Option<MapObject> {
        let object = self.node_mut(pt).object.take()?;
        if object.is_military() {
            self.military.remove(pt);
        }
        if let MapObject::Building(b) = &object {
            self.players.building_removed(b.owner, pt, b.kind);
            if let Some((owner, radius)) = self.vision_sources.shift_remove(&pt) {
                self.recalc_visibility_around(pt, radius, owner);
            }
        }
        self.refresh_bq_around([pt]);
        Some(object)
    }

    /// Swap the object at `pt` for `object`, returning the previous one.
    pub fn replace_object(
        &mut self,
        pt: MapPoint,
        object: impl Into<MapObject>,
    ) -> Result<Option<MapObject>, WorldError> {
        let object = object.into();
        if let Some(owner) = object.owner() {
            self.check_player(owner)?;
        }
        let old = self.remove_object(pt);
        self.place_object(pt, object)?;
        Ok(old)
    }

    // ── Resources ──────────────────────────────────────────────────

    /// Set the resource deposit at `pt`.
    pub fn set_resource(&mut self, pt: MapPoint, resource: Resource) {
        self.node_mut(pt).resource = resource;
    }

    /// Remove any resource deposit at `pt`.
    pub fn clear_resources(&mut self, pt: MapPoint) {
        self.node_mut(pt).resource = Resource::NONE;
    }

    /// Announce that `player` found the deposit at `pt`.
    pub fn report_resource_found(&mut self, player: PlayerId, pt: MapPoint) {
        let resource = self.node(pt).resource;
        if resource.is_empty() || !self.players.contains(player) {
            return;
        }
        self.events.emit(ScriptEvent::ResourceFound {
            player,
            pt,
            kind: resource.kind,
            quantity: resource.amount,
        });
    }

    // ── Players ────────────────────────────────────────────────────

    /// Number of players.
    pub fn player_count(&self) -> u8 {
        self.players.count()
    }

    pub(crate) fn check_player(&self, player: PlayerId) -> Result<(), WorldError> {
        if self.players.contains(player) {
            Ok(())
        } else {
            Err(WorldError::InvalidPlayer {
                player,
                player_count: self.players.count(),
            })
        }
    }

    /// Make two players allies or enemies.
    pub fn set_alliance(&mut self, a: PlayerId, b: PlayerId, allied: bool) -> Result<(), WorldError> {
        self.check_player(a)?;
        self.check_player(b)?;
        self.players.set_alliance(a, b, allied);
        self.recalc_all_bq();
        Ok(())
    }

    /// True if `player` and `other` are allied.
    pub fn is_ally(&self, player: PlayerId, other: PlayerId) -> bool {
        self.players.is_ally(player, other)
    }

    /// Restrict where `player` may build to `polygon`. An empty polygon
    /// lifts the restriction.
    pub fn set_restricted_area(&mut self, player: PlayerId, polygon: Vec<MapPoint>) -> Result<(), WorldError> {
        self.check_player(player)?;
        self.players.set_restricted_area(player, polygon);
        self.recalc_all_bq();
        Ok(())
    }

    /// True if `pt` is inside the player's allowed build area. An unknown
    /// player may build nowhere.
    pub fn is_in_restricted_area(&self, player: PlayerId, pt: MapPoint) -> bool {
        self.players.is_in_restricted_area(player, pt)
    }

    /// Allow or forbid `player` to build `kind`.
    pub fn set_building_enabled(
        &mut self,
        player: PlayerId,
        kind: BuildingKind,
        enabled: bool,
    ) -> Result<(), WorldError> {
        self.check_player(player)?;
        self.players.set_building_enabled(player, kind, enabled);
        Ok(())
    }

    /// True unless `kind` was disabled for `player`.
    pub fn is_building_enabled(&self, player: PlayerId, kind: BuildingKind) -> bool {
        self.players.contains(player) && self.players.is_building_enabled(player, kind)
    }

    /// True if `player` may put a `kind` building site at `pt` now.
    pub fn can_build(&self, pt: MapPoint, player: PlayerId, kind: BuildingKind) -> bool {
        self.is_building_enabled(player, kind) && self.bq_for(pt, player, false).allows(kind.size())
    }

    /// Number of finished `kind` buildings owned by `player`.
    pub fn building_count(&self, player: PlayerId, kind: BuildingKind) -> u32 {
        if !self.players.contains(player) {
            return 0;
        }
        self.players.building_count(player, kind)
    }

    /// Buildings `player` finished since the last call.
    pub fn take_new_buildings(&mut self, player: PlayerId) -> Vec<NewBuilding> {
        if !self.players.contains(player) {
            return Vec::new();
        }
        self.players.take_new_buildings(player)
    }

    // ── Session ────────────────────────────────────────────────────

    /// Current game frame.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Announce the session start.
    pub fn start(&mut self) {
        self.events.emit(ScriptEvent::Start);
    }

    /// Advance the frame counter and announce the new frame.
    pub fn advance_frame(&mut self) -> u64 {
        self.frame += 1;
        self.events.emit(ScriptEvent::Frame(self.frame));
        self.frame
    }

    /// Receive every script event emitted from now on.
    pub fn subscribe_events(&mut self) -> crossbeam_channel::Receiver<ScriptEvent> {
        self.events.subscribe()
    }

    /// Install the terrain observer, returning the previous one.
    pub fn set_observer(&mut self, observer: Box<dyn TerrainObserver>) -> Option<Box<dyn TerrainObserver>> {
        self.observer.replace(observer)
    }

    /// Remove the terrain observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn TerrainObserver>> {
        self.observer.take()
    }

    pub(crate) fn recalc_all_bq(&mut self) {
        for idx in 0..self.nodes.len() {
            let pt = self.torus.point(idx);
            self.recalc_and_set_bq(pt);
        }
    }

    /// Best building quality currently cached for `player` at `pt`.
    pub fn bq_for(&self, pt: MapPoint, player: PlayerId, visual: bool) -> BuildingQuality {
        let node = self.node(pt);
        if node.owner == Some(player) {
            node.bq(visual)
        } else {
            BuildingQuality::Nothing
        }
    }
}
