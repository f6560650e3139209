//! Per-player settings the world model consults: alliances, restricted
//! build areas, disabled building kinds, building statistics.

use hexmap_core::{BuildingKind, MapPoint, PlayerId};
use indexmap::{IndexMap, IndexSet};

/// A building finished since the scripting layer last asked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewBuilding {
    /// Where it stands.
    pub pos: MapPoint,
    /// What it is.
    pub kind: BuildingKind,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct PlayerState {
    allies: u16,
    restricted_area: Vec<MapPoint>,
    disabled: IndexSet<BuildingKind>,
    building_counts: IndexMap<BuildingKind, u32>,
    new_buildings: Vec<NewBuilding>,
}

/// Player table owned by the world.
#[derive(Clone, Debug)]
pub(crate) struct PlayerTable {
    players: Vec<PlayerState>,
}

impl PlayerTable {
    pub(crate) fn new(count: u8) -> Self {
        Self {
            players: vec![PlayerState::default(); count as usize],
        }
    }

    pub(crate) fn count(&self) -> u8 {
        self.players.len() as u8
    }

    pub(crate) fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.players.len()
    }

    // ── Alliances ──────────────────────────────────────────────────

    pub(crate) fn set_alliance(&mut self, a: PlayerId, b: PlayerId, allied: bool) {
        if a == b {
            return;
        }
        let (bit_a, bit_b) = (1u16 << a.0, 1u16 << b.0);
        if allied {
            self.players[a.index()].allies |= bit_b;
            self.players[b.index()].allies |= bit_a;
        } else {
            self.players[a.index()].allies &= !bit_b;
            self.players[b.index()].allies &= !bit_a;
        }
    }

    /// Allied with `other`. A player is not its own ally.
    pub(crate) fn is_ally(&self, player: PlayerId, other: PlayerId) -> bool {
        self.players
            .get(player.index())
            .is_some_and(|p| p.allies & (1 << other.0) != 0)
    }

    pub(crate) fn allies(&self, player: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        let mask = self.players.get(player.index()).map_or(0, |p| p.allies);
        (0..self.count())
            .filter(move |i| mask & (1 << i) != 0)
            .map(PlayerId)
    }

    // ── Build restrictions ─────────────────────────────────────────

    pub(crate) fn set_restricted_area(&mut self, player: PlayerId, polygon: Vec<MapPoint>) {
        self.players[player.index()].restricted_area = polygon;
    }

    /// True if `pt` lies inside the player's restricted area, or if no area
    /// is set. False for a player outside the table. Uses the even-odd rule on map coordinates.
    pub(crate) fn is_in_restricted_area(&self, player: PlayerId, pt: MapPoint) -> bool {
        let Some(state) = self.players.get(player.index()) else {
            return false;
        };
        let polygon = &state.restricted_area;
        if polygon.len() < 3 {
            return true;
        }
        let (px, py) = (pt.x as f64, pt.y as f64);
        let mut inside = false;
        let mut j = polygon.len() - 1;
        for i in 0..polygon.len() {
            let (xi, yi) = (polygon[i].x as f64, polygon[i].y as f64);
            let (xj, yj) = (polygon[j].x as f64, polygon[j].y as f64);
            if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    pub(crate) fn set_building_enabled(&mut self, player: PlayerId, kind: BuildingKind, enabled: bool) {
        let disabled = &mut self.players[player.index()].disabled;
        if enabled {
            disabled.shift_remove(&kind);
        } else {
            disabled.insert(kind);
        }
    }

    pub(crate) fn is_building_enabled(&self, player: PlayerId, kind: BuildingKind) -> bool {
        !self.players[player.index()].disabled.contains(&kind)
    }

    // ── Statistics ─────────────────────────────────────────────────

    pub(crate) fn building_added(&mut self, player: PlayerId, pos: MapPoint, kind: BuildingKind) {
        let state = &mut self.players[player.index()];
        *state.building_counts.entry(kind).or_insert(0) += 1;
        state.new_buildings.push(NewBuilding { pos, kind });
    }

    pub(crate) fn building_removed(&mut self, player: PlayerId, pos: MapPoint, kind: BuildingKind) {
        let state = &mut self.players[player.index()];
        if let Some(count) = state.building_counts.get_mut(&kind) {
            *count = count.saturating_sub(1);
        }
        state
            .new_buildings
            .retain(|b| !(b.pos == pos && b.kind == kind));
    }

    pub(crate) fn building_count(&self, player: PlayerId, kind: BuildingKind) -> u32 {
        self.players[player.index()]
            .building_counts
            .get(&kind)
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn take_new_buildings(&mut self, player: PlayerId) -> Vec<NewBuilding> {
        std::mem::take(&mut self.players[player.index()].new_buildings)
    }
}
