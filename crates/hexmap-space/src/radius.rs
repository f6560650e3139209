//! Lazy ring-by-ring walk around a point.

use crate::torus::HexTorus;
use hexmap_core::{Direction, MapPoint};
use std::iter::FusedIterator;

/// Iterator over all points within a radius of a center, excluding the
/// center, yielding `(point, ring)`.
///
/// Ring `r` starts `r` steps west of the center and walks `r` steps in each
/// direction, beginning north-east and turning clockwise, so every ring is
/// visited in full before the next one starts. No distances are computed
/// and nothing is allocated.
///
/// # Examples
///
/// ```
/// use hexmap_core::MapPoint;
/// use hexmap_space::HexTorus;
///
/// let map = HexTorus::new(20, 20).unwrap();
/// let scan = map.scan(MapPoint::new(10, 10), 2);
/// assert_eq!(scan.len(), 18);
/// ```
#[derive(Clone, Debug)]
pub struct RadiusScan<'a> {
    torus: &'a HexTorus,
    radius: u32,
    ring: u32,
    side: usize,
    step: u32,
    ring_start: MapPoint,
    current: MapPoint,
    remaining: usize,
}

impl<'a> RadiusScan<'a> {
    pub(crate) fn new(torus: &'a HexTorus, center: MapPoint, radius: u32) -> Self {
        let start = torus.neighbour(center, Direction::West);
        let r = radius as usize;
        Self {
            torus,
            radius,
            ring: 1,
            side: 0,
            step: 0,
            ring_start: start,
            current: start,
            remaining: 3 * r * (r + 1),
        }
    }
}

impl Iterator for RadiusScan<'_> {
    type Item = (MapPoint, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.ring > self.radius {
            return None;
        }
        let out = (self.current, self.ring);
        // Sides run NE, E, SE, SW, W, NW.
        let dir = Direction::ALL[(self.side + 2) % 6];
        self.current = self.torus.neighbour(self.current, dir);
        self.step += 1;
        if self.step == self.ring {
            self.step = 0;
            self.side += 1;
            if self.side == 6 {
                self.side = 0;
                self.ring += 1;
                self.ring_start = self.torus.neighbour(self.ring_start, Direction::West);
                self.current = self.ring_start;
            }
        }
        self.remaining -= 1;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RadiusScan<'_> {}

impl FusedIterator for RadiusScan<'_> {}
