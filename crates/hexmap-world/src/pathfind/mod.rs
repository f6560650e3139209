//! Route search over the wrapping hex grid.
//!
//! One A* core serves pedestrians, ships and road traffic; what differs is
//! the [`MoveRules`] passed in. Every step costs one, and the heuristic is
//! the wrapping hex distance, which never overestimates.
//!
//! A [`PathFinder`] keeps its scratch buffers between searches and tells
//! stale entries apart with a generation counter, so reusing one does not
//! leak state from one query into the next.

mod rules;

pub use rules::{HumanRules, MoveRules, RoadRules, ShipRules};

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::PoisonError;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::world::World;
use hexmap_core::{Direction, MapPoint};
use hexmap_space::CrossBorders;

/// Search limits and output options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathOptions {
    /// Longest route accepted, in steps. `None` is unbounded.
    pub max_length: Option<u32>,
    /// Break ties between equally long routes pseudo-randomly. The choice
    /// is a function of the world seed and the endpoints.
    pub random_route: bool,
    /// Return the full route, not just its first step.
    pub record_route: bool,
}

impl PathOptions {
    /// Routes of at most `max_length` steps.
    pub fn within(max_length: u32) -> Self {
        Self {
            max_length: Some(max_length),
            ..Self::default()
        }
    }

    /// Also return the full route.
    pub fn recorded(mut self) -> Self {
        self.record_route = true;
        self
    }

    /// Break ties pseudo-randomly.
    pub fn randomized(mut self) -> Self {
        self.random_route = true;
        self
    }
}

/// A route that was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
    /// First step, `None` when start and goal coincide.
    pub first_dir: Option<Direction>,
    /// Number of steps.
    pub length: u32,
    /// Every step, when requested.
    pub route: Vec<Direction>,
}

/// A ship route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShipRoute {
    /// Every step.
    pub route: Vec<Direction>,
    /// Number of steps.
    pub length: u32,
    /// Map borders the route crosses.
    pub crossed: CrossBorders,
}

type OpenEntry = Reverse<(u32, u32, u32, usize)>;

/// Reusable A* search state.
#[derive(Debug, Default)]
pub struct PathFinder {
    generation: u32,
    seen: Vec<u32>,
    closed: Vec<u32>,
    cost: Vec<u32>,
    parent: Vec<Option<Direction>>,
    open: BinaryHeap<OpenEntry>,
}

impl PathFinder {
    /// An empty path finder; buffers grow on first use.
    pub fn new() -> Self {
        Self::default()
    }

    fn prepare(&mut self, nodes: usize) {
        if self.seen.len() != nodes {
            self.seen = vec![0; nodes];
            self.closed = vec![0; nodes];
            self.cost = vec![0; nodes];
            self.parent = vec![None; nodes];
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.seen.fill(0);
            self.closed.fill(0);
            self.generation = 1;
        }
        self.open.clear();
    }

    /// Search a route from `start` to `goal` under `rules`.
    ///
    /// Returns `None` if no route within the length limit exists. A search
    /// from a point to itself succeeds with an empty route.
    pub fn find<R: MoveRules>(
        &mut self,
        world: &World,
        start: MapPoint,
        goal: MapPoint,
        rules: &R,
        options: &PathOptions,
    ) -> Option<PathResult> {
        if start == goal {
            return Some(PathResult {
                first_dir: None,
                length: 0,
                route: Vec::new(),
            });
        }
        let torus = world.geometry();
        let max = options.max_length.unwrap_or(u32::MAX);
        let h0 = torus.distance(start, goal);
        if h0 > max {
            return None;
        }
        self.prepare(torus.node_count());
        let stamp = self.generation;
        let mut rng = options
            .random_route
            .then(|| ChaCha8Rng::seed_from_u64(world.config().seed ^ route_key(start, goal)));

        let s = torus.index(start);
        self.seen[s] = stamp;
        self.cost[s] = 0;
        self.parent[s] = None;
        let mut seq = 0u32;
        self.open.push(Reverse((h0, h0, seq, s)));

        while let Some(Reverse((_, _, _, idx))) = self.open.pop() {
            if self.closed[idx] == stamp {
                continue;
            }
            self.closed[idx] = stamp;
            let pt = torus.point(idx);
            if pt == goal {
                return Some(self.route_to(world, start, goal, options.record_route));
            }
            let g = self.cost[idx];
            let first = rng.as_mut().map_or(0, |r| r.random_range(0..Direction::COUNT));
            for k in 0..Direction::COUNT {
                let dir = Direction::ALL[(first + k) % Direction::COUNT];
                if !rules.edge_allowed(world, pt, dir) {
                    continue;
                }
                let n = torus.neighbour(pt, dir);
                if !rules.node_allowed(world, n, goal) {
                    continue;
                }
                let ni = torus.index(n);
                if self.closed[ni] == stamp {
                    continue;
                }
                let ng = g + 1;
                let h = torus.distance(n, goal);
                if ng.saturating_add(h) > max {
                    continue;
                }
                if self.seen[ni] == stamp && self.cost[ni] <= ng {
                    continue;
                }
                self.seen[ni] = stamp;
                self.cost[ni] = ng;
                self.parent[ni] = Some(dir);
                seq += 1;
                self.open.push(Reverse((ng + h, h, seq, ni)));
            }
        }
        trace!(%start, %goal, max_length = ?options.max_length, "no route");
        None
    }

    fn route_to(&self, world: &World, start: MapPoint, goal: MapPoint, record: bool) -> PathResult {
        let torus = world.geometry();
        let mut route = Vec::with_capacity(self.cost[torus.index(goal)] as usize);
        let mut pt = goal;
        while pt != start {
            let Some(dir) = self.parent[torus.index(pt)] else {
                break;
            };
            route.push(dir);
            pt = torus.neighbour(pt, dir.opposite());
        }
        route.reverse();
        PathResult {
            first_dir: route.first().copied(),
            length: route.len() as u32,
            route: if record { route } else { Vec::new() },
        }
    }
}

/// Mixes the endpoints into the route seed.
fn route_key(start: MapPoint, goal: MapPoint) -> u64 {
    let pack = |p: MapPoint| ((p.x as u64) << 16) | p.y as u64;
    ((pack(start) << 32) | pack(goal)).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

impl World {
    /// Route for a person walking from `start` to `goal`.
    pub fn find_human_path(&self, start: MapPoint, goal: MapPoint, options: &PathOptions) -> Option<PathResult> {
        self.free_path_finder
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .find(self, start, goal, &HumanRules, options)
    }

    /// True if a person can walk from `start` to `goal` in at most
    /// `max_length` steps.
    pub fn human_path_exists(&self, start: MapPoint, goal: MapPoint, max_length: u32) -> bool {
        self.find_human_path(start, goal, &PathOptions::within(max_length))
            .is_some()
    }

    /// Route for a ship from `start` to `goal`, at most `max_length` steps
    /// or the configured ship route limit.
    pub fn find_ship_path(&self, start: MapPoint, goal: MapPoint, max_length: Option<u32>) -> Option<ShipRoute> {
        let options = PathOptions::within(max_length.unwrap_or(self.config.max_ship_route)).recorded();
        let found = self
            .free_path_finder
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .find(self, start, goal, &ShipRules, &options)?;
        let mut crossed = CrossBorders::default();
        let mut pt = start;
        for &dir in &found.route {
            let (next, step) = self.torus.step(pt, dir);
            crossed |= step;
            pt = next;
        }
        Some(ShipRoute {
            length: found.length,
            route: found.route,
            crossed,
        })
    }

    /// Route along built roads. Boat roads are used only in `ware_mode`.
    pub fn find_road_path(
        &self,
        start: MapPoint,
        goal: MapPoint,
        ware_mode: bool,
        options: &PathOptions,
    ) -> Option<PathResult> {
        self.road_path_finder
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .find(self, start, goal, &RoadRules { ware_mode }, options)
    }
}
