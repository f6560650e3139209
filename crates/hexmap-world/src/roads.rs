//! Roads on node edges.
//!
//! Each edge is stored once: a node keeps the roads leaving it towards E,
//! SE and SW, and a road towards W, NW or NE is read from the neighbour's
//! slot in the opposite direction. Both ends of an edge therefore always
//! see the same value.
//!
//! A slot carries the committed road and the road shown to the player. The
//! shown value differs only while a road is being planned.

use crate::object::BlockingManner;
use crate::world::World;
use hexmap_core::{Direction, MapPoint, RoadType, TerrainBq};

impl World {
    pub(crate) fn road_slot_of(&self, pt: MapPoint, dir: Direction) -> (MapPoint, usize) {
        if dir.is_stored_locally() {
            (pt, dir.index() - 3)
        } else {
            (self.torus.neighbour(pt, dir), dir.index())
        }
    }

    /// Road leaving `pt` towards `dir`; with `visual` planned roads count.
    pub fn road(&self, pt: MapPoint, dir: Direction, visual: bool) -> RoadType {
        let (owner, slot) = self.road_slot_of(pt, dir);
        self.node(owner).roads[slot].get(visual)
    }

    /// True if any road touches `pt`.
    pub fn has_road_at(&self, pt: MapPoint, visual: bool) -> bool {
        Direction::ALL
            .iter()
            .any(|&dir| self.road(pt, dir, visual).is_some())
    }

    /// True if a road may pass through `pt`.
    ///
    /// The node must be free of blocking objects and roads, must not touch
    /// a charburner pile and must not be surrounded by hazardous terrain.
    /// Land roads need one triangle a flag could stand on, boat roads need
    /// one shippable triangle.
    pub fn road_available(&self, pt: MapPoint, boat_road: bool, visual: bool) -> bool {
        if self.blocking_manner(pt) != BlockingManner::NotBlocking {
            return false;
        }
        for dir in Direction::ALL {
            if self.blocking_manner(self.torus.neighbour(pt, dir)) == BlockingManner::CharburnerPile {
                return false;
            }
            if self.road(pt, dir, visual).is_some() {
                return false;
            }
        }
        let terrains = self.terrains_around(pt);
        if boat_road {
            return terrains.iter().any(|t| t.is_shippable());
        }
        let mut flag_possible = false;
        for t in terrains {
            match t.bq() {
                TerrainBq::Danger => return false,
                TerrainBq::Nothing => {}
                _ => flag_possible = true,
            }
        }
        flag_possible
    }

    /// True if every segment of `route` from `start` already carries a
    /// committed road of the requested kind.
    pub fn road_already_built(&self, start: MapPoint, route: &[Direction], boat_road: bool) -> bool {
        if route.is_empty() {
            return false;
        }
        let wanted = if boat_road { RoadType::Boat } else { RoadType::Normal };
        let mut pt = start;
        for &dir in route {
            if self.road(pt, dir, false) != wanted {
                return false;
            }
            pt = self.torus.neighbour(pt, dir);
        }
        true
    }

    /// Show a planned road on one edge without committing it.
    pub fn set_virtual_road(&mut self, pt: MapPoint, dir: Direction, road: RoadType) {
        self.write_road(pt, dir, road, false);
        self.refresh_bq_around([pt, self.torus.neighbour(pt, dir)]);
    }

    /// Show a planned road along `route` from `start`.
    pub fn set_virtual_route(&mut self, start: MapPoint, route: &[Direction], road: RoadType) {
        let touched = self.write_route(start, route, road, false);
        self.refresh_bq_around(touched);
    }

    /// Drop the planned road along `route`, restoring what is built.
    pub fn remove_visual_road(&mut self, start: MapPoint, route: &[Direction]) {
        let mut touched = Vec::with_capacity(route.len() + 1);
        let mut pt = start;
        touched.push(pt);
        for &dir in route {
            let (owner, slot) = self.road_slot_of(pt, dir);
            let road = &mut self.node_mut(owner).roads[slot];
            road.shown = road.built;
            pt = self.torus.neighbour(pt, dir);
            touched.push(pt);
        }
        self.refresh_bq_around(touched);
    }

    /// Build a road along `route` from `start`.
    pub fn commit_road(&mut self, start: MapPoint, route: &[Direction], road: RoadType) {
        let touched = self.write_route(start, route, road, true);
        self.refresh_bq_around(touched);
    }

    /// Tear down the road along `route` from `start`.
    pub fn remove_road(&mut self, start: MapPoint, route: &[Direction]) {
        let touched = self.write_route(start, route, RoadType::None, true);
        self.refresh_bq_around(touched);
    }

    fn write_road(&mut self, pt: MapPoint, dir: Direction, road: RoadType, commit: bool) {
        let (owner, slot) = self.road_slot_of(pt, dir);
        let slot = &mut self.node_mut(owner).roads[slot];
        slot.shown = road;
        if commit {
            slot.built = road;
        }
    }

    fn write_route(&mut self, start: MapPoint, route: &[Direction], road: RoadType, commit: bool) -> Vec<MapPoint> {
        let mut touched = Vec::with_capacity(route.len() + 1);
        let mut pt = start;
        touched.push(pt);
        for &dir in route {
            self.write_road(pt, dir, road, commit);
            pt = self.torus.neighbour(pt, dir);
            touched.push(pt);
        }
        touched
    }

    /// Follow the committed road through `pt` to the flag at its end.
    ///
    /// `came_from` is the direction at `pt` that leads back and is not
    /// taken. Returns the flag position and the direction at the flag that
    /// points back along the road.
    pub fn road_flag(&self, pt: MapPoint, came_from: Option<Direction>) -> Option<(MapPoint, Direction)> {
        let mut pt = pt;
        let mut came_from = came_from;
        for _ in 0..self.nodes.len() {
            let dir = Direction::ALL
                .into_iter()
                .find(|&d| Some(d) != came_from && self.road(pt, d, false).is_some())?;
            pt = self.torus.neighbour(pt, dir);
            if self.blocking_manner(pt) == BlockingManner::Flag {
                return Some((pt, dir.opposite()));
            }
            came_from = Some(dir.opposite());
        }
        None
    }

    /// True if a figure may walk from `pt` towards `dir`.
    ///
    /// Land roads are always walkable; otherwise one of the two triangles
    /// flanking the edge must be walkable.
    pub fn is_node_to_node_for_figure(&self, pt: MapPoint, dir: Direction) -> bool {
        if self.road(pt, dir, false) == RoadType::Normal {
            return true;
        }
        self.walking_terrain_forward(pt, dir).is_walkable()
            || self.walking_terrain_backward(pt, dir).is_walkable()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::WorldConfig;
    use crate::map_data::MapData;
    use crate::object::{CharburnerPile, Flag, Tree};
    use crate::world::World;
    use hexmap_core::{Direction, MapPoint, PlayerId, RoadType, TerrainType};
    use proptest::prelude::*;

    use Direction::*;

    fn p(x: u16, y: u16) -> MapPoint {
        MapPoint::new(x, y)
    }

    fn meadow() -> World {
        World::new(
            WorldConfig::default(),
            MapData::filled(16, 16, TerrainType::Meadow1, 10),
        )
        .unwrap()
    }

    #[test]
    fn virtual_roads_are_shown_but_not_built() {
        let mut w = meadow();
        w.set_virtual_road(p(4, 4), East, RoadType::Normal);
        assert_eq!(w.road(p(4, 4), East, true), RoadType::Normal);
        assert_eq!(w.road(p(4, 4), East, false), RoadType::None);
        assert_eq!(w.road(p(5, 4), West, true), RoadType::Normal);
        assert!(w.has_road_at(p(5, 4), true));
        assert!(!w.has_road_at(p(5, 4), false));
    }

    #[test]
    fn removing_visual_road_restores_built_state() {
        let mut w = meadow();
        let route = [East, SouthEast, East];
        w.commit_road(p(2, 2), &route[..1], RoadType::Normal);
        w.set_virtual_route(p(2, 2), &route, RoadType::Normal);
        assert!(w.has_road_at(p(4, 3), true));
        w.remove_visual_road(p(2, 2), &route);
        assert_eq!(w.road(p(2, 2), East, true), RoadType::Normal);
        assert!(!w.has_road_at(p(4, 3), true));
    }

    #[test]
    fn road_already_built_checks_every_segment() {
        let mut w = meadow();
        let route = [East, East, SouthWest];
        assert!(!w.road_already_built(p(3, 3), &route, false));
        w.commit_road(p(3, 3), &route[..2], RoadType::Normal);
        assert!(!w.road_already_built(p(3, 3), &route, false));
        w.commit_road(p(3, 3), &route, RoadType::Normal);
        assert!(w.road_already_built(p(3, 3), &route, false));
        assert!(!w.road_already_built(p(3, 3), &route, true));
        assert!(!w.road_already_built(p(3, 3), &[], false));
        w.remove_road(p(3, 3), &route);
        assert!(!w.has_road_at(p(4, 3), true));
    }

    #[test]
    fn road_availability_rules() {
        let mut w = meadow();
        assert!(w.road_available(p(6, 6), false, false));
        assert!(!w.road_available(p(6, 6), true, false));
        w.place_object(p(6, 6), Tree { species: 0 }).unwrap();
        assert!(!w.road_available(p(6, 6), false, false));
        w.place_object(p(9, 9), CharburnerPile { owner: PlayerId(0) }).unwrap();
        assert!(!w.road_available(p(10, 9), false, false));
        w.set_virtual_road(p(3, 10), East, RoadType::Normal);
        assert!(!w.road_available(p(3, 10), false, true));
        assert!(w.road_available(p(3, 10), false, false));
    }

    #[test]
    fn hazardous_terrain_blocks_roads() {
        let mut map = MapData::filled(16, 16, TerrainType::Meadow1, 10);
        map.set_terrain(p(5, 5), TerrainType::Lava);
        map.set_rows(10..=11, TerrainType::Water);
        let w = World::new(WorldConfig::default(), map).unwrap();
        assert!(!w.road_available(p(5, 5), false, false));
        assert!(!w.road_available(p(5, 11), false, false));
        assert!(w.road_available(p(5, 11), true, false));
    }

    #[test]
    fn road_flag_follows_the_road() {
        let mut w = meadow();
        w.place_object(p(2, 2), Flag { owner: PlayerId(0) }).unwrap();
        w.place_object(p(5, 2), Flag { owner: PlayerId(0) }).unwrap();
        w.commit_road(p(2, 2), &[East, East, East], RoadType::Normal);
        assert_eq!(w.road_flag(p(3, 2), Some(West)), Some((p(5, 2), West)));
        assert_eq!(w.road_flag(p(3, 2), Some(East)), Some((p(2, 2), East)));
        assert_eq!(w.road_flag(p(8, 8), None), None);
    }

    #[test]
    fn figures_cross_water_on_land_roads_only() {
        let mut map = MapData::filled(16, 16, TerrainType::Meadow1, 10);
        map.set_rows(6..=9, TerrainType::Water);
        let mut w = World::new(WorldConfig::default(), map).unwrap();
        let pt = p(4, 8);
        assert!(!w.is_node_to_node_for_figure(pt, East));
        w.commit_road(pt, &[East], RoadType::Boat);
        assert!(!w.is_node_to_node_for_figure(pt, East));
        w.commit_road(pt, &[East], RoadType::Normal);
        assert!(w.is_node_to_node_for_figure(pt, East));
        assert!(w.is_node_to_node_for_figure(p(4, 2), SouthWest));
    }

    proptest! {
        #[test]
        fn both_ends_of_an_edge_agree(
            x in 0u16..16,
            y in 0u16..16,
            dir in 0usize..6,
            road in prop_oneof![Just(RoadType::Normal), Just(RoadType::Boat), Just(RoadType::None)],
        ) {
            let mut w = meadow();
            let pt = p(x, y);
            let dir = Direction::ALL[dir];
            w.set_virtual_road(pt, dir, road);
            let other = w.neighbour(pt, dir);
            prop_assert_eq!(w.road(other, dir.opposite(), true), road);
            prop_assert_eq!(w.road(pt, dir, true), road);
        }
    }
}
