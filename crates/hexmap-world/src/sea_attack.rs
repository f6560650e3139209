//! Support queries for attacks launched across the sea.
//!
//! A sea attack targets an enemy military building near a harbor point.
//! The attacker needs a harbor building on one of the seas those harbor
//! points touch. Soldiers come from the garrisons of the launching harbors
//! and from the attacker's military buildings within the muster radius of
//! a launching harbor; each such building keeps one soldier at home.

use indexmap::IndexMap;
use tracing::trace;

use crate::object::{Building, MapObject};
use crate::world::World;
use hexmap_core::{BuildingKind, HarborId, MapPoint, PlayerId, SeaId, SoldierId};

/// A soldier that could join a sea attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeaAttacker {
    /// The soldier.
    pub soldier: SoldierId,
    /// Its rank.
    pub rank: u8,
    /// Building it is stationed in.
    pub building: MapPoint,
    /// Harbor it would embark at.
    pub harbor: HarborId,
    /// Distance from its building to that harbor.
    pub distance: u32,
}

impl World {
    /// Harbor points from which the military building at `pt` can be
    /// reached on foot within the sea attack distance.
    pub fn harbor_points_around_military_building(&self, pt: MapPoint) -> Vec<HarborId> {
        let range = self.config.sea_attack_distance;
        self.harbors
            .iter()
            .enumerate()
            .filter(|(_, h)| {
                h.pos == pt
                    || (self.torus.distance(h.pos, pt) <= range && self.human_path_exists(pt, h.pos, range))
            })
            .map(|(slot, _)| HarborId::from_slot(slot))
            .collect()
    }

    /// Seas from which `attacker` could attack the building at `target`:
    /// seas of the harbor points around the target on which the attacker
    /// has a harbor building.
    pub fn valid_sea_ids_for_attack(&self, attacker: PlayerId, target: MapPoint) -> Vec<SeaId> {
        let own = self.harbor_buildings_of(attacker);
        let mut seas = Vec::new();
        for id in self.harbor_points_around_military_building(target) {
            for sea in self.sea_ids(id) {
                if !seas.contains(&sea) && own.iter().any(|&h| self.is_at_this_sea(h, sea)) {
                    seas.push(sea);
                }
            }
        }
        seas
    }

    /// Soldiers `attacker` could send across the sea against `target`,
    /// nearest first and by soldier id among equals.
    ///
    /// Empty unless `target` holds a finished military building of a
    /// player that is neither `attacker` nor one of its allies.
    pub fn available_soldiers_for_sea_attack(&self, attacker: PlayerId, target: MapPoint) -> Vec<SeaAttacker> {
        if !self.is_attackable(attacker, target) {
            trace!(%attacker, %target, "not a sea attack target");
            return Vec::new();
        }
        let seas = self.valid_sea_ids_for_attack(attacker, target);
        if seas.is_empty() {
            return Vec::new();
        }
        let launch = self.launch_harbors(attacker, &seas);
        self.gather_sea_attackers(attacker, &launch)
    }

    /// Strength `attacker` can muster at `sea`: the number of soldiers or,
    /// unless `count_only`, the sum of their ranks plus their number.
    pub fn sea_attack_strength_at_sea(&self, attacker: PlayerId, sea: SeaId, count_only: bool) -> u32 {
        let launch = self.launch_harbors(attacker, &[sea]);
        let soldiers = self.gather_sea_attackers(attacker, &launch);
        let count = soldiers.len() as u32;
        if count_only {
            count
        } else {
            soldiers.iter().map(|s| s.rank as u32).sum::<u32>() + count
        }
    }

    fn is_attackable(&self, attacker: PlayerId, target: MapPoint) -> bool {
        match self.object(target) {
            Some(MapObject::Building(b)) => {
                b.kind.is_military() && b.owner != attacker && !self.players.is_ally(attacker, b.owner)
            }
            _ => false,
        }
    }

    /// Harbor points carrying a harbor building of `player`.
    fn harbor_buildings_of(&self, player: PlayerId) -> Vec<HarborId> {
        self.harbors
            .iter()
            .enumerate()
            .filter(|(_, h)| {
                self.object_as::<Building>(h.pos)
                    .is_some_and(|b| b.kind == BuildingKind::HarborBuilding && b.owner == player)
            })
            .map(|(slot, _)| HarborId::from_slot(slot))
            .collect()
    }

    fn launch_harbors(&self, attacker: PlayerId, seas: &[SeaId]) -> Vec<HarborId> {
        self.harbor_buildings_of(attacker)
            .into_iter()
            .filter(|&h| seas.iter().any(|&sea| self.is_at_this_sea(h, sea)))
            .collect()
    }

    fn gather_sea_attackers(&self, attacker: PlayerId, launch: &[HarborId]) -> Vec<SeaAttacker> {
        let radius = self.config.muster_radius;
        // Each building musters at its nearest launching harbor.
        let mut assigned: IndexMap<MapPoint, (u32, HarborId)> = IndexMap::new();
        let mut offer = |pt: MapPoint, distance: u32, harbor: HarborId| {
            let entry = assigned.entry(pt).or_insert((distance, harbor));
            if (distance, harbor) < *entry {
                *entry = (distance, harbor);
            }
        };
        for &harbor in launch {
            let Some(hpos) = self.harbor_point(harbor) else {
                continue;
            };
            offer(hpos, 0, harbor);
            for pt in self.military_buildings_within(hpos, radius) {
                if pt == hpos {
                    continue;
                }
                let Some(b) = self.object_as::<Building>(pt) else {
                    continue;
                };
                if b.owner != attacker {
                    continue;
                }
                let distance = self.torus.distance(pt, hpos);
                if distance <= radius && self.human_path_exists(pt, hpos, radius) {
                    offer(pt, distance, harbor);
                }
            }
        }

        let mut attackers = Vec::new();
        for (pt, (distance, harbor)) in assigned {
            let Some(b) = self.object_as::<Building>(pt) else {
                continue;
            };
            let home_guard = usize::from(distance > 0);
            attackers.extend(b.soldiers.iter().skip(home_guard).map(|s| SeaAttacker {
                soldier: s.id,
                rank: s.rank,
                building: pt,
                harbor,
                distance,
            }));
        }
        attackers.sort_by_key(|a| (a.distance, a.soldier));
        attackers
    }
}
