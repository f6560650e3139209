//! What each player sees.
//!
//! A node is invisible until a player first sees it. Buildings are vision
//! sources: placing one makes everything within its vision radius visible,
//! removing one downgrades nodes no other own building covers to fog of
//! war. Fogged nodes keep a snapshot of the object, owner and roads seen
//! last.
//!
//! A player outside the session has seen nothing: queries answer as for an
//! unexplored node and updates for it are ignored.

use tracing::trace;

use crate::events::ScriptEvent;
use crate::object::FowObject;
use crate::world::World;
use hexmap_core::{Direction, MapPoint, PlayerId, RoadType, Visibility};

impl World {
    /// Visibility of `pt` for `player` alone.
    pub fn visibility(&self, pt: MapPoint, player: PlayerId) -> Visibility {
        self.node(pt)
            .fog(player)
            .map_or(Visibility::Invisible, |fog| fog.visibility)
    }

    /// Visibility of `pt` for `player`, upgraded by what its allies see
    /// when team visibility is on.
    pub fn calc_visibility_with_ally(&self, pt: MapPoint, player: PlayerId) -> Visibility {
        let own = self.visibility(pt, player);
        if !self.config.team_visibility || own == Visibility::Visible {
            return own;
        }
        self.players
            .allies(player)
            .map(|ally| self.visibility(pt, ally))
            .fold(own, Visibility::max)
    }

    /// Make everything within `radius` of `pt` visible to `player`.
    pub fn make_visible_around(&mut self, pt: MapPoint, radius: u32, player: PlayerId) {
        if !self.players.contains(player) {
            trace!(%player, "visibility update for unknown player ignored");
            return;
        }
        self.set_visible(pt, player);
        let torus = self.torus;
        for (q, _) in torus.scan(pt, radius) {
            self.set_visible(q, player);
        }
    }

    /// Downgrade nodes within `radius` of `pt` that none of `player`'s
    /// buildings can see any more to fog of war.
    pub fn recalc_visibility_around(&mut self, pt: MapPoint, radius: u32, player: PlayerId) {
        if !self.players.contains(player) {
            trace!(%player, "visibility update for unknown player ignored");
            return;
        }
        self.recalc_visibility(pt, player);
        let torus = self.torus;
        for (q, _) in torus.scan(pt, radius) {
            self.recalc_visibility(q, player);
        }
    }

    fn set_visible(&mut self, pt: MapPoint, player: PlayerId) {
        let frame = self.frame;
        let fog = &mut self.node_mut(pt).fog[player.index()];
        let before = fog.visibility;
        fog.last_seen = frame;
        if before == Visibility::Visible {
            return;
        }
        fog.visibility = Visibility::Visible;
        if before == Visibility::Invisible {
            self.events.emit(ScriptEvent::Explored { player, pt });
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.visibility_changed(pt, player);
        }
    }

    fn recalc_visibility(&mut self, pt: MapPoint, player: PlayerId) {
        if self.visibility(pt, player) != Visibility::Visible || self.has_vision_at(pt, player) {
            return;
        }
        let node = self.node(pt);
        let object = FowObject::of(node.object.as_ref());
        let owner = node.owner;
        let roads = node.roads.map(|slot| slot.built);
        let frame = self.frame;
        let fog = &mut self.node_mut(pt).fog[player.index()];
        fog.visibility = Visibility::FogOfWar;
        fog.object = object;
        fog.owner = owner;
        fog.roads = roads;
        fog.last_seen = frame;
        if let Some(observer) = self.observer.as_mut() {
            observer.visibility_changed(pt, player);
        }
    }

    fn has_vision_at(&self, pt: MapPoint, player: PlayerId) -> bool {
        self.vision_sources
            .iter()
            .any(|(&src, &(owner, radius))| owner == player && self.torus.distance(src, pt) <= radius)
    }

    /// Object `player` remembers at `pt`. Only meaningful under fog.
    pub fn fow_object(&self, pt: MapPoint, player: PlayerId) -> &FowObject {
        self.node(pt).fog(player).map_or(&FowObject::Nothing, |fog| &fog.object)
    }

    /// Owner `player` remembers at `pt`.
    pub fn fow_owner(&self, pt: MapPoint, player: PlayerId) -> Option<PlayerId> {
        self.node(pt).fog(player).and_then(|fog| fog.owner)
    }

    /// Road `player` remembers leaving `pt` towards `dir`.
    pub fn fow_road(&self, pt: MapPoint, dir: Direction, player: PlayerId) -> RoadType {
        let (owner, slot) = self.road_slot_of(pt, dir);
        self.node(owner)
            .fog(player)
            .map_or(RoadType::None, |fog| fog.roads[slot])
    }
}
