//! Movement rules for the three kinds of travellers.

use crate::world::World;
use hexmap_core::{Direction, MapPoint, RoadType};

/// Which edges and nodes a traveller may use.
pub trait MoveRules {
    /// True if the traveller may cross the edge from `from` towards `dir`.
    fn edge_allowed(&self, world: &World, from: MapPoint, dir: Direction) -> bool;

    /// True if the traveller may enter `pt` on the way to `goal`.
    fn node_allowed(&self, world: &World, pt: MapPoint, goal: MapPoint) -> bool {
        let _ = (world, pt, goal);
        true
    }
}

/// People walking freely over land.
///
/// Edges follow [`World::is_node_to_node_for_figure`]. Nodes with blocking
/// objects can only be entered as the goal.
#[derive(Clone, Copy, Debug, Default)]
pub struct HumanRules;

impl MoveRules for HumanRules {
    fn edge_allowed(&self, world: &World, from: MapPoint, dir: Direction) -> bool {
        world.is_node_to_node_for_figure(from, dir)
    }

    fn node_allowed(&self, world: &World, pt: MapPoint, goal: MapPoint) -> bool {
        pt == goal || world.blocking_manner(pt).is_passable()
    }
}

/// Ships: both triangles beside an edge must be navigable water.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShipRules;

impl MoveRules for ShipRules {
    fn edge_allowed(&self, world: &World, from: MapPoint, dir: Direction) -> bool {
        world.is_ship_edge(from, dir)
    }
}

/// Carriers and wares travelling on built roads.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoadRules {
    /// Wares may also be ferried over boat roads.
    pub ware_mode: bool,
}

impl MoveRules for RoadRules {
    fn edge_allowed(&self, world: &World, from: MapPoint, dir: Direction) -> bool {
        match world.road(from, dir, false) {
            RoadType::Normal => true,
            RoadType::Boat => self.ware_mode,
            RoadType::None => false,
        }
    }
}
