//! Seas, harbor points and the harbor graph.
//!
//! Seas are flood-filled once at load time. Each registered harbor point
//! records which sea its six neighbours are coastal to, and a list of the
//! other harbors reachable by ship, bucketed by the heading a ship would
//! leave in and sorted by sailing distance.

use std::collections::VecDeque;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::ConfigError;
use crate::world::World;
use hexmap_core::{BuildingQuality, Direction, HarborId, MapPoint, PlayerId, SeaId, ShipDirection};

/// Radius around a harbor point in which foreign territory makes it
/// unavailable.
pub const HARBOR_CLAIM_RADIUS: u32 = 4;

/// A connected body of navigable water.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sea {
    pub(crate) nodes_count: u32,
}

impl Sea {
    /// Number of sea points in this sea.
    pub fn node_count(&self) -> u32 {
        self.nodes_count
    }
}

/// Another harbor reachable by ship.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HarborNeighbor {
    /// The other harbor.
    pub id: HarborId,
    /// Sailing distance, counting the steps from and to the harbors.
    pub distance: u32,
}

/// A registered harbor point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarborPos {
    pub(crate) pos: MapPoint,
    pub(crate) cps: [Option<SeaId>; 6],
    pub(crate) neighbors: [Vec<HarborNeighbor>; 6],
}

impl HarborPos {
    /// Position of the harbor point.
    pub fn pos(&self) -> MapPoint {
        self.pos
    }

    /// Sea the neighbour in `dir` is coastal to.
    pub fn coastal_sea(&self, dir: Direction) -> Option<SeaId> {
        self.cps[dir.index()]
    }

    /// Harbors reachable when leaving towards `dir`, nearest first.
    pub fn neighbors(&self, dir: ShipDirection) -> &[HarborNeighbor] {
        &self.neighbors[dir.index()]
    }
}

impl World {
    // ── Construction ───────────────────────────────────────────────

    pub(crate) fn build_seas(&mut self) -> Result<(), ConfigError> {
        let torus = self.torus;
        let mut queue = VecDeque::new();
        for start in torus.points() {
            if self.node(start).sea_id.is_some() || !self.is_sea_point(start) {
                continue;
            }
            let id = SeaId::from_slot(self.seas.len())
                .ok_or(ConfigError::TooManySeas { max: u16::MAX })?;
            let mut count = 0;
            self.node_mut(start).sea_id = Some(id);
            queue.push_back(start);
            while let Some(pt) = queue.pop_front() {
                count += 1;
                for n in self.torus.neighbours(pt) {
                    if self.node(n).sea_id.is_none() && self.is_sea_point(n) {
                        self.node_mut(n).sea_id = Some(id);
                        queue.push_back(n);
                    }
                }
            }
            trace!(sea = %id, nodes = count, "sea found");
            self.seas.push(Sea { nodes_count: count });
        }
        Ok(())
    }

    pub(crate) fn build_harbors(&mut self, positions: &[MapPoint]) -> Result<(), ConfigError> {
        for (slot, &pos) in positions.iter().enumerate() {
            if !self.torus.contains(pos) {
                return Err(ConfigError::HarborOutOfBounds { pos });
            }
            if self.node(pos).harbor_id.is_some() {
                return Err(ConfigError::DuplicateHarbor { pos });
            }
            self.node_mut(pos).harbor_id = Some(HarborId::from_slot(slot));
            let cps = Direction::ALL.map(|d| self.coastal_point(self.torus.neighbour(pos, d)));
            self.harbors.push(HarborPos {
                pos,
                cps,
                neighbors: Default::default(),
            });
        }
        self.link_harbors();
        Ok(())
    }

    /// Fill the per-harbor neighbour lists from ship distances.
    fn link_harbors(&mut self) {
        let mut dist = vec![u32::MAX; self.nodes.len()];
        let mut queue = VecDeque::new();
        let mut links = 0;
        for from in 0..self.harbors.len() {
            dist.fill(u32::MAX);
            for pt in self.dock_points(from) {
                dist[self.torus.index(pt)] = 0;
                queue.push_back(pt);
            }
            while let Some(pt) = queue.pop_front() {
                let d = dist[self.torus.index(pt)];
                for dir in Direction::ALL {
                    if !self.is_ship_edge(pt, dir) {
                        continue;
                    }
                    let n = self.torus.neighbour(pt, dir);
                    let slot = &mut dist[self.torus.index(n)];
                    if *slot == u32::MAX {
                        *slot = d + 1;
                        queue.push_back(n);
                    }
                }
            }

            let origin = self.harbors[from].pos;
            let mut buckets: [Vec<HarborNeighbor>; 6] = Default::default();
            for to in 0..self.harbors.len() {
                if to == from {
                    continue;
                }
                let Some(d) = self
                    .dock_points(to)
                    .map(|pt| dist[self.torus.index(pt)])
                    .min()
                    .filter(|&d| d != u32::MAX)
                else {
                    continue;
                };
                let (dx, dy) = self.torus.delta(origin, self.harbors[to].pos);
                buckets[ShipDirection::from_delta(dx, dy).index()].push(HarborNeighbor {
                    id: HarborId::from_slot(to),
                    distance: d + 2,
                });
                links += 1;
            }
            for bucket in &mut buckets {
                bucket.sort_by_key(|n| (n.distance, n.id));
            }
            self.harbors[from].neighbors = buckets;
        }
        debug!(harbors = self.harbors.len(), links, "harbor graph built");
    }

    /// Neighbours of harbor `slot` that touch a sea.
    fn dock_points(&self, slot: usize) -> impl Iterator<Item = MapPoint> + '_ {
        let harbor = &self.harbors[slot];
        Direction::ALL
            .into_iter()
            .filter(|d| harbor.cps[d.index()].is_some())
            .map(|d| self.torus.neighbour(harbor.pos, d))
    }

    /// True if a ship may sail from `pt` towards `dir`.
    pub fn is_ship_edge(&self, pt: MapPoint, dir: Direction) -> bool {
        self.walking_terrain_forward(pt, dir).is_shippable()
            && self.walking_terrain_backward(pt, dir).is_shippable()
    }

    // ── Seas ───────────────────────────────────────────────────────

    /// Number of seas.
    pub fn sea_count(&self) -> usize {
        self.seas.len()
    }

    /// The sea with `id`, or `None` for an unknown id.
    pub fn sea(&self, id: SeaId) -> Option<&Sea> {
        let sea = self.seas.get(id.slot());
        if sea.is_none() {
            trace!(sea = %id, "unknown sea id");
        }
        sea
    }

    /// Sea reachable from the land point `pt`.
    ///
    /// `pt` must not be a sea point itself and must touch a sea with more
    /// than the configured number of nodes.
    pub fn coastal_point(&self, pt: MapPoint) -> Option<SeaId> {
        if self.node(pt).sea_id.is_some() {
            return None;
        }
        self.torus.neighbours(pt).into_iter().find_map(|n| {
            self.node(n)
                .sea_id
                .filter(|id| self.seas[id.slot()].nodes_count > self.config.navigable_sea_threshold)
        })
    }

    /// Like [`World::coastal_point`], but only for seas with at least one
    /// harbor point.
    pub fn coastal_point_to_sea_with_harbor(&self, pt: MapPoint) -> Option<SeaId> {
        let sea = self.coastal_point(pt)?;
        (1..=self.harbors.len() as u32)
            .any(|id| self.is_at_this_sea(HarborId(id), sea))
            .then_some(sea)
    }

    // ── Harbor points ──────────────────────────────────────────────

    fn harbor(&self, id: HarborId) -> Option<&HarborPos> {
        let harbor = self.harbors.get(id.slot());
        if harbor.is_none() {
            trace!(harbor = %id, "unknown harbor id");
        }
        harbor
    }

    /// Number of registered harbor points.
    pub fn harbor_point_count(&self) -> usize {
        self.harbors.len()
    }

    /// The harbor point with `id`.
    pub fn harbor_pos(&self, id: HarborId) -> Option<&HarborPos> {
        self.harbor(id)
    }

    /// Position of harbor point `id`.
    pub fn harbor_point(&self, id: HarborId) -> Option<MapPoint> {
        self.harbor(id).map(|h| h.pos)
    }

    /// Harbor point registered at `pt`.
    pub fn harbor_point_id(&self, pt: MapPoint) -> Option<HarborId> {
        self.node(pt).harbor_id
    }

    /// The distinct seas harbor `id` touches, in direction order.
    pub fn sea_ids(&self, id: HarborId) -> SmallVec<[SeaId; 2]> {
        let mut seas = SmallVec::new();
        if let Some(harbor) = self.harbor(id) {
            for sea in harbor.cps.iter().flatten() {
                if !seas.contains(sea) {
                    seas.push(*sea);
                }
            }
        }
        seas
    }

    /// True if harbor `id` touches `sea`.
    pub fn is_at_this_sea(&self, id: HarborId, sea: SeaId) -> bool {
        self.harbor(id)
            .is_some_and(|h| h.cps.contains(&Some(sea)))
    }

    /// The neighbour of harbor `id` where ships on `sea` dock.
    pub fn coastal_point_of_harbor(&self, id: HarborId, sea: SeaId) -> Option<MapPoint> {
        let harbor = self.harbor(id)?;
        Direction::ALL
            .into_iter()
            .find(|d| harbor.cps[d.index()] == Some(sea))
            .map(|d| self.torus.neighbour(harbor.pos, d))
    }

    /// Sailing distance between two harbors, `Some(0)` for the same one
    /// and `None` if no ship can get from one to the other.
    pub fn calc_harbor_distance(&self, a: HarborId, b: HarborId) -> Option<u32> {
        let harbor = self.harbor(a)?;
        self.harbor(b)?;
        if a == b {
            return Some(0);
        }
        harbor
            .neighbors
            .iter()
            .flatten()
            .find(|n| n.id == b)
            .map(|n| n.distance)
    }

    /// Distance from `pos` to the nearest harbor point.
    pub fn calc_distance_to_nearest_harbor(&self, pos: MapPoint) -> Option<u32> {
        self.harbors
            .iter()
            .map(|h| self.torus.distance(pos, h.pos))
            .min()
    }

    /// True if soldiers at `pos` can walk to a harbor point within the sea
    /// attack distance.
    pub fn is_a_harbor_in_sea_attack_distance(&self, pos: MapPoint) -> bool {
        let range = self.config.sea_attack_distance;
        self.harbors.iter().any(|h| {
            self.torus.distance(pos, h.pos) < range && self.human_path_exists(pos, h.pos, range)
        })
    }

    /// True if `player` could build a harbor at harbor point `id` on `sea`.
    ///
    /// Unless both the harbor point and its flag point belong to `player`,
    /// no other player may own land within [`HARBOR_CLAIM_RADIUS`]. The
    /// point must also still allow a harbor.
    pub fn is_harbor_point_free(&self, id: HarborId, player: PlayerId, sea: SeaId) -> bool {
        let Some(harbor) = self.harbor(id) else {
            return false;
        };
        if !self.is_at_this_sea(id, sea) {
            return false;
        }
        let pos = harbor.pos;
        let flag = self.torus.neighbour(pos, Direction::SouthEast);
        let ours = self.node(pos).owner == Some(player) && self.node(flag).owner == Some(player);
        if !ours
            && self.torus.any_in_radius(pos, HARBOR_CLAIM_RADIUS, true, |q, _| {
                self.node(q).owner.is_some_and(|o| o != player)
            })
        {
            return false;
        }
        self.calc_bq(pos, player, false, false, !ours) == BuildingQuality::Harbor
    }

    /// Next harbor a ship docked at `pt` next to harbor `origin` would
    /// reach heading `dir`, among those on the same sea accepted by
    /// `accept(world, harbor, player, sea)`.
    pub fn next_harbor_point<F>(
        &self,
        pt: MapPoint,
        origin: HarborId,
        dir: ShipDirection,
        player: PlayerId,
        mut accept: F,
    ) -> Option<HarborId>
    where
        F: FnMut(&World, HarborId, PlayerId, SeaId) -> bool,
    {
        let harbor = self.harbor(origin)?;
        let Some(sea) = Direction::ALL
            .into_iter()
            .find(|&d| self.torus.neighbour(harbor.pos, d) == pt)
            .and_then(|d| harbor.cps[d.index()])
        else {
            trace!(%pt, harbor = %origin, "not a coastal point of the harbor");
            return None;
        };
        harbor.neighbors[dir.index()]
            .iter()
            .map(|n| n.id)
            .find(|&id| self.is_at_this_sea(id, sea) && accept(self, id, player, sea))
    }

    /// [`World::next_harbor_point`] restricted to harbor points free for
    /// `player`.
    pub fn next_free_harbor_point(
        &self,
        pt: MapPoint,
        origin: HarborId,
        dir: ShipDirection,
        player: PlayerId,
    ) -> Option<HarborId> {
        self.next_harbor_point(pt, origin, dir, player, |w, id, player, sea| {
            w.is_harbor_point_free(id, player, sea)
        })
    }

    /// [`World::next_harbor_point`] accepting any harbor point on the sea.
    pub fn next_harbor_point_at_sea(
        &self,
        pt: MapPoint,
        origin: HarborId,
        dir: ShipDirection,
        player: PlayerId,
    ) -> Option<HarborId> {
        self.next_harbor_point(pt, origin, dir, player, |_, _, _, _| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::map_data::MapData;
    use hexmap_core::TerrainType;
    use proptest::prelude::*;

    fn p(x: u16, y: u16) -> MapPoint {
        MapPoint::new(x, y)
    }

    /// 10x10, water triangles on rows 0 to 4, sea points on rows 1 to 4.
    fn bay() -> MapData {
        let mut map = MapData::filled(10, 10, TerrainType::Meadow1, 10);
        map.set_rows(0..=4, TerrainType::Water);
        map
    }

    #[test]
    fn flood_fill_counts_sea_points() {
        let w = World::new(WorldConfig::default(), bay()).unwrap();
        assert_eq!(w.sea_count(), 1);
        assert_eq!(w.sea(SeaId(1)).map(Sea::node_count), Some(40));
        assert_eq!(w.node(p(3, 2)).sea_id(), Some(SeaId(1)));
        assert_eq!(w.node(p(3, 0)).sea_id(), None);
        assert_eq!(w.node(p(3, 5)).sea_id(), None);
        assert!(w.sea(SeaId(2)).is_none());
        assert!(w.sea(SeaId(0)).is_none());
    }

    #[test]
    fn small_seas_are_not_coastal() {
        let mut map = MapData::filled(10, 10, TerrainType::Meadow1, 10);
        map.set_rows(2..=3, TerrainType::Water);
        let w = World::new(WorldConfig::default(), map).unwrap();
        // Only row 3 holds sea points: ten of them.
        assert_eq!(w.sea(SeaId(1)).map(Sea::node_count), Some(10));
        assert_eq!(w.coastal_point(p(4, 4)), None);
        let w = World::new(
            WorldConfig {
                navigable_sea_threshold: 9,
                ..WorldConfig::default()
            },
            {
                let mut map = MapData::filled(10, 10, TerrainType::Meadow1, 10);
                map.set_rows(2..=3, TerrainType::Water);
                map
            },
        )
        .unwrap();
        assert_eq!(w.coastal_point(p(4, 4)), Some(SeaId(1)));
    }

    #[test]
    fn harbor_records_coastal_seas() {
        let w = World::new(WorldConfig::default(), bay().with_harbor(p(4, 6))).unwrap();
        let id = HarborId(1);
        assert_eq!(w.harbor_point_count(), 1);
        assert_eq!(w.harbor_point(id), Some(p(4, 6)));
        assert_eq!(w.harbor_point_id(p(4, 6)), Some(id));
        assert_eq!(w.sea_ids(id).as_slice(), &[SeaId(1)]);
        assert!(w.is_at_this_sea(id, SeaId(1)));
        assert!(!w.is_at_this_sea(id, SeaId(2)));
        assert!(!w.is_at_this_sea(HarborId(0), SeaId(1)));
        let dock = w.coastal_point_of_harbor(id, SeaId(1)).unwrap();
        assert_eq!(dock.y, 5);
        assert_eq!(w.coastal_point(dock), Some(SeaId(1)));
        assert_eq!(w.coastal_point_to_sea_with_harbor(p(8, 5)), Some(SeaId(1)));
        assert_eq!(w.coastal_point_to_sea_with_harbor(p(8, 7)), None);
    }

    #[test]
    fn bad_harbor_positions_are_rejected() {
        let err = World::new(WorldConfig::default(), bay().with_harbor(p(10, 6))).unwrap_err();
        assert!(matches!(err, ConfigError::HarborOutOfBounds { .. }));
        let err = World::new(
            WorldConfig::default(),
            bay().with_harbor(p(4, 6)).with_harbor(p(4, 6)),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateHarbor { .. }));
    }

    #[test]
    fn harbors_on_one_sea_are_linked_both_ways() {
        let mut map = MapData::filled(20, 20, TerrainType::Meadow1, 10);
        map.set_rows(0..=6, TerrainType::Water);
        let map = map.with_harbor(p(2, 8)).with_harbor(p(12, 8));
        let w = World::new(WorldConfig::default(), map).unwrap();
        let (a, b) = (HarborId(1), HarborId(2));
        let ab = w.calc_harbor_distance(a, b).unwrap();
        assert_eq!(w.calc_harbor_distance(b, a), Some(ab));
        assert_eq!(w.calc_harbor_distance(a, a), Some(0));
        assert_eq!(w.calc_harbor_distance(a, HarborId(3)), None);
        // Ten columns along the coast plus the step from and to each harbor.
        assert_eq!(ab, 12);
        let east = ShipDirection::from_delta(10, 0);
        assert_eq!(w.harbor_pos(a).unwrap().neighbors(east)[0].id, b);
    }

    #[test]
    fn harbors_on_separate_seas_are_not_linked() {
        let mut map = MapData::filled(20, 20, TerrainType::Meadow1, 10);
        map.set_rows(0..=4, TerrainType::Water);
        map.set_rows(10..=14, TerrainType::Water);
        let map = map.with_harbor(p(4, 6)).with_harbor(p(4, 16));
        let w = World::new(WorldConfig::default(), map).unwrap();
        assert_eq!(w.sea_count(), 2);
        assert_eq!(w.calc_harbor_distance(HarborId(1), HarborId(2)), None);
        assert_eq!(w.calc_distance_to_nearest_harbor(p(4, 10)), Some(4));
    }

    #[test]
    fn next_harbor_point_filters_by_sea_and_predicate() {
        let mut map = MapData::filled(20, 20, TerrainType::Meadow1, 10);
        map.set_rows(0..=6, TerrainType::Water);
        let map = map
            .with_harbor(p(2, 8))
            .with_harbor(p(8, 8))
            .with_harbor(p(12, 8));
        let w = World::new(WorldConfig::default(), map).unwrap();
        let dock = w.coastal_point_of_harbor(HarborId(1), SeaId(1)).unwrap();
        let east = ShipDirection::from_delta(10, 0);
        assert_eq!(
            w.next_harbor_point_at_sea(dock, HarborId(1), east, PlayerId(0)),
            Some(HarborId(2))
        );
        assert_eq!(
            w.next_harbor_point(dock, HarborId(1), east, PlayerId(0), |_, id, _, _| id != HarborId(2)),
            Some(HarborId(3))
        );
        assert_eq!(
            w.next_harbor_point_at_sea(p(2, 12), HarborId(1), east, PlayerId(0)),
            None
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn harbor_distance_is_symmetric(
            spots in prop::collection::btree_set((0u16..40, any::<bool>()), 2..=4),
        ) {
            // Two seas; harbors on the south coast of either one.
            let mut map = MapData::filled(40, 40, TerrainType::Meadow1, 10);
            map.set_rows(0..=4, TerrainType::Water);
            map.set_rows(16..=20, TerrainType::Water);
            for &(x, north) in &spots {
                map = map.with_harbor(p(x, if north { 6 } else { 22 }));
            }
            let w = World::new(WorldConfig::default(), map).unwrap();
            let ids: Vec<HarborId> = (0..spots.len()).map(HarborId::from_slot).collect();
            for &a in &ids {
                for &b in &ids {
                    prop_assert_eq!(w.calc_harbor_distance(a, b), w.calc_harbor_distance(b, a));
                }
            }
        }
    }
}
