//! Building quality: what may be built where.
//!
//! The quality of a node depends on the terrain of its six triangles, the
//! objects on it, on its first ring and on its second ring, the heights of
//! both rings, roads through it, ownership of it and its neighbours, and on
//! whether a flag could go on its south-east neighbour. The furthest of
//! these inputs sits [`BQ_REFRESH_RADIUS`] nodes away, so every mutation
//! refreshes the cached quality of all nodes within that radius.

use indexmap::IndexSet;
use tracing::trace;

use crate::object::BlockingManner;
use crate::world::World;
use hexmap_core::{BuildingQuality, Direction, MapPoint, PlayerId, TerrainBq};

/// Radius around a changed node whose cached qualities may change.
pub const BQ_REFRESH_RADIUS: u32 = 3;

/// Hostile military buildings this close limit building to flags.
pub const HOSTILE_MILITARY_RADIUS: u32 = 3;

/// Radius searched by [`World::is_military_building_near_node`].
pub const OWN_MILITARY_RADIUS: u32 = 4;

/// Largest height step to a neighbour that still allows a building.
const MAX_RING1_SLOPE: u8 = 3;
/// Largest height step to the second ring that still allows a castle.
const MAX_RING2_SLOPE: u8 = 2;

impl World {
    /// Compute the building quality of `pt` for `player`.
    ///
    /// With `flag_only` the result is `Flag` or `Nothing`, and `Nothing`
    /// whenever [`World::road_available`] is false. With `visual` planned
    /// roads count as built. With `ignore_player` ownership, territory,
    /// restricted areas and hostile buildings are not considered.
    pub fn calc_bq(
        &self,
        pt: MapPoint,
        player: PlayerId,
        flag_only: bool,
        visual: bool,
        ignore_player: bool,
    ) -> BuildingQuality {
        use BuildingQuality::*;

        if !ignore_player {
            if !self.players.contains(player)
                || self.node(pt).owner != Some(player)
                || !self.is_player_territory(pt)
                || !self.players.is_in_restricted_area(player, pt)
            {
                return Nothing;
            }
        }
        if flag_only && !self.road_available(pt, false, visual) {
            return Nothing;
        }

        // ── Terrain ──
        let (mut castle_hits, mut mine_hits, mut flag_hits) = (0, 0, 0);
        for terrain in self.terrains_around(pt) {
            match terrain.bq() {
                TerrainBq::Castle => castle_hits += 1,
                TerrainBq::Mine => mine_hits += 1,
                TerrainBq::Flag => flag_hits += 1,
                TerrainBq::Danger => return Nothing,
                TerrainBq::Nothing => {}
            }
        }
        let mut bq = if flag_hits > 0 {
            Flag
        } else if mine_hits == 6 {
            Mine
        } else if mine_hits > 0 {
            Flag
        } else if castle_hits == 6 {
            Castle
        } else if castle_hits > 0 {
            Flag
        } else {
            return Nothing;
        };

        // ── Objects ──
        if self.blocking_manner(pt) != BlockingManner::NotBlocking {
            return Nothing;
        }
        let ring = self.torus.neighbours(pt);
        if ring
            .iter()
            .any(|&n| self.blocking_manner(n) == BlockingManner::CharburnerPile)
        {
            return Nothing;
        }
        if flag_only {
            return if self.flag_near(pt) { Nothing } else { Flag };
        }

        if bq != Flag {
            for n in ring {
                match self.blocking_manner(n) {
                    BlockingManner::Tree => bq = bq.capped(Hut),
                    BlockingManner::Granite => bq = Flag,
                    _ => {}
                }
            }
        }
        if bq == Castle
            && (0..12).any(|i| {
                self.blocking_manner(self.torus.neighbour2(pt, i))
                    .is_building()
            })
        {
            bq = House;
        }
        // Buildings to the west and north overlap the footprint.
        for dir in [Direction::West, Direction::NorthWest, Direction::NorthEast] {
            if self.blocking_manner(ring[dir.index()]).is_building() {
                bq = Flag;
            }
        }

        // ── Heights ──
        if bq.is_building_size() {
            let alt = self.node(pt).altitude;
            if ring
                .iter()
                .any(|&n| self.node(n).altitude.abs_diff(alt) > MAX_RING1_SLOPE)
            {
                bq = Flag;
            } else if bq == Castle
                && (0..12).any(|i| {
                    self.node(self.torus.neighbour2(pt, i)).altitude.abs_diff(alt) > MAX_RING2_SLOPE
                })
            {
                bq = House;
            }
        }

        // ── Roads and hazards ──
        if self.has_road_at(pt, visual) {
            bq = Flag;
        }
        if !ignore_player && bq != Flag && self.hostile_military_near(pt, player) {
            bq = Flag;
        }

        // ── The building's own flag ──
        if bq != Flag {
            let se = ring[Direction::SouthEast.index()];
            if self.blocking_manner(se) != BlockingManner::Flag
                && self.calc_bq(se, player, true, visual, ignore_player) == Nothing
            {
                bq = Flag;
            }
        }
        if bq == Flag {
            return if self.flag_near(pt) { Nothing } else { Flag };
        }

        if bq == Castle && self.node(pt).harbor_id.is_some() {
            bq = Harbor;
        }
        bq
    }

    /// Recompute and store both cached qualities of `pt` for its owner.
    pub fn recalc_and_set_bq(&mut self, pt: MapPoint) {
        let (bq, bq_visual) = match self.node(pt).owner {
            Some(owner) => (
                self.calc_bq(pt, owner, false, false, false),
                self.calc_bq(pt, owner, false, true, false),
            ),
            None => (BuildingQuality::Nothing, BuildingQuality::Nothing),
        };
        let node = self.node_mut(pt);
        node.bq = bq;
        node.bq_visual = bq_visual;
    }

    /// Refresh cached qualities around every point in `touched`.
    pub(crate) fn refresh_bq_around<I>(&mut self, touched: I)
    where
        I: IntoIterator<Item = MapPoint>,
    {
        let torus = self.torus;
        let mut dirty = IndexSet::new();
        for pt in touched {
            dirty.insert(pt);
            dirty.extend(torus.scan(pt, BQ_REFRESH_RADIUS).map(|(p, _)| p));
        }
        trace!(nodes = dirty.len(), "refreshing building quality");
        for pt in dirty {
            self.recalc_and_set_bq(pt);
        }
    }

    /// True if a flag stands on a neighbour of `pt`.
    pub fn flag_near(&self, pt: MapPoint) -> bool {
        self.torus
            .neighbours(pt)
            .iter()
            .any(|&n| self.blocking_manner(n) == BlockingManner::Flag)
    }

    /// True if a military building or military building site stands at `pt`.
    pub fn is_military_building(&self, pt: MapPoint) -> bool {
        self.object(pt).is_some_and(|o| o.is_military())
    }

    /// True if `player` owns a military building within
    /// [`OWN_MILITARY_RADIUS`] of `pt`.
    pub fn is_military_building_near_node(&self, pt: MapPoint, player: PlayerId) -> bool {
        self.torus
            .any_in_radius(pt, OWN_MILITARY_RADIUS, false, |q, _| {
                self.object(q)
                    .is_some_and(|o| o.is_military() && o.owner() == Some(player))
            })
    }

    fn hostile_military_near(&self, pt: MapPoint, player: PlayerId) -> bool {
        self.torus
            .any_in_radius(pt, HOSTILE_MILITARY_RADIUS, false, |q, _| {
                self.object(q).is_some_and(|o| {
                    o.is_military()
                        && o.owner()
                            .is_some_and(|owner| owner != player && !self.players.is_ally(player, owner))
                })
            })
    }
}
