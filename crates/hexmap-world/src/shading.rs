//! Altitude changes and terrain shading.
//!
//! A node's shadow depends only on the heights of the node and its six
//! neighbours, so an altitude change re-shades the node and its first ring.

use crate::world::World;
use hexmap_core::{Direction, MapPoint};

/// Shadow of a flat node.
const FLAT_SHADOW: i32 = 64;
const MAX_SHADOW: i32 = 128;

impl World {
    /// Shadow of `pt` from the current heights.
    pub fn calc_shadow(&self, pt: MapPoint) -> u8 {
        let alt = self.node(pt).altitude as i32;
        let rise = |dir| self.neighbour_node(pt, dir).altitude as i32 - alt;
        let shade = FLAT_SHADOW + 9 * rise(Direction::NorthEast)
            - 3 * rise(Direction::SouthEast)
            - 6 * rise(Direction::West)
            - 9 * rise(Direction::SouthWest);
        shade.clamp(0, MAX_SHADOW) as u8
    }

    /// Recompute and store the shadow of `pt`.
    pub fn recalc_shadow(&mut self, pt: MapPoint) {
        let shadow = self.calc_shadow(pt);
        self.node_mut(pt).shadow = shadow;
    }

    /// Set the altitude of `pt`.
    ///
    /// Re-shades `pt` and its neighbours, refreshes building qualities and
    /// then tells the observer.
    pub fn change_altitude(&mut self, pt: MapPoint, altitude: u8) {
        self.node_mut(pt).altitude = altitude;
        self.recalc_shadow(pt);
        for n in self.torus.neighbours(pt) {
            self.recalc_shadow(n);
        }
        self.refresh_bq_around([pt]);
        if let Some(observer) = self.observer.as_mut() {
            observer.altitude_changed(pt);
        }
    }
}
