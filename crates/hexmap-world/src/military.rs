//! Square-bucket index of military buildings.
//!
//! The map is cut into squares of `square_size` nodes. Each square lists
//! the military buildings (and their sites) standing in it, so "which
//! military buildings are around here" touches a handful of squares
//! instead of scanning a radius node by node.

use hexmap_core::MapPoint;
use indexmap::IndexSet;

use crate::world::World;

#[derive(Clone, Debug)]
pub(crate) struct MilitaryIndex {
    square_size: u16,
    width: u16,
    height: u16,
    cols: u16,
    rows: u16,
    squares: Vec<Vec<MapPoint>>,
}

impl MilitaryIndex {
    pub(crate) fn new(width: u16, height: u16, square_size: u16) -> Self {
        let cols = width.div_ceil(square_size);
        let rows = height.div_ceil(square_size);
        Self {
            square_size,
            width,
            height,
            cols,
            rows,
            squares: vec![Vec::new(); cols as usize * rows as usize],
        }
    }

    fn square_of(&self, pt: MapPoint) -> (u16, u16) {
        (pt.x / self.square_size, pt.y / self.square_size)
    }

    fn slot(&self, col: u16, row: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    pub(crate) fn add(&mut self, pt: MapPoint) {
        let (c, r) = self.square_of(pt);
        let slot = self.slot(c, r);
        if !self.squares[slot].contains(&pt) {
            self.squares[slot].push(pt);
        }
    }

    pub(crate) fn remove(&mut self, pt: MapPoint) {
        let (c, r) = self.square_of(pt);
        let slot = self.slot(c, r);
        self.squares[slot].retain(|p| *p != pt);
    }

    /// Buildings in the squares within `radius` squares of the square
    /// containing `pt`, wrapping around the map. Each building appears once.
    pub(crate) fn around(&self, pt: MapPoint, radius: u16) -> Vec<MapPoint> {
        let (c, r) = self.square_of(pt);
        let reach_x = radius.min(self.cols / 2) as i32;
        let reach_y = radius.min(self.rows / 2) as i32;
        let mut found = IndexSet::new();
        for dy in -reach_y..=reach_y {
            let row = (r as i32 + dy).rem_euclid(self.rows as i32) as u16;
            for dx in -reach_x..=reach_x {
                let col = (c as i32 + dx).rem_euclid(self.cols as i32) as u16;
                found.extend(self.squares[self.slot(col, row)].iter().copied());
            }
        }
        found.into_iter().collect()
    }

    /// Buildings in every square that holds a node within `radius` nodes
    /// of `pt` along both axes, wrapping around the map.
    ///
    /// Squares are counted from node offsets, so the narrow last square of
    /// a map whose size is not a multiple of the square size is covered.
    pub(crate) fn within(&self, pt: MapPoint, radius: u16) -> Vec<MapPoint> {
        let cols = self.axis_squares(pt.x, radius, self.width, self.cols);
        let rows = self.axis_squares(pt.y, radius, self.height, self.rows);
        let mut found = IndexSet::new();
        for &row in &rows {
            for &col in &cols {
                found.extend(self.squares[self.slot(col, row)].iter().copied());
            }
        }
        found.into_iter().collect()
    }

    fn axis_squares(&self, v: u16, reach: u16, len: u16, count: u16) -> Vec<u16> {
        if 2 * u32::from(reach) + 1 >= u32::from(len) {
            return (0..count).collect();
        }
        let mut squares = Vec::new();
        for d in -i32::from(reach)..=i32::from(reach) {
            let node = (i32::from(v) + d).rem_euclid(i32::from(len)) as u16;
            let square = node / self.square_size;
            if !squares.contains(&square) {
                squares.push(square);
            }
        }
        squares
    }
}

impl World {
    /// Military buildings and military building sites in the index squares
    /// within `square_radius` squares of the one holding `pt`.
    pub fn look_for_military_buildings(&self, pt: MapPoint, square_radius: u16) -> Vec<MapPoint> {
        self.military.around(pt, square_radius)
    }

    /// Military buildings and sites within `radius` nodes of `pt` along
    /// each axis. May include buildings further away by hex distance.
    pub(crate) fn military_buildings_within(&self, pt: MapPoint, radius: u32) -> Vec<MapPoint> {
        let radius = radius.min(u32::from(u16::MAX)) as u16;
        self.military.within(pt, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_buildings_in_neighbouring_squares() {
        let mut idx = MilitaryIndex::new(100, 100, 20);
        idx.add(MapPoint::new(5, 5));
        idx.add(MapPoint::new(45, 5));
        idx.add(MapPoint::new(95, 95));
        let near = idx.around(MapPoint::new(10, 10), 1);
        assert!(near.contains(&MapPoint::new(5, 5)));
        // Wraps to the opposite corner square.
        assert!(near.contains(&MapPoint::new(95, 95)));
        assert!(!near.contains(&MapPoint::new(45, 5)));
        assert_eq!(idx.around(MapPoint::new(10, 10), 2).len(), 3);
    }

    #[test]
    fn small_maps_do_not_duplicate() {
        let mut idx = MilitaryIndex::new(30, 30, 20);
        idx.add(MapPoint::new(3, 3));
        idx.add(MapPoint::new(3, 3));
        assert_eq!(idx.around(MapPoint::new(25, 25), 5), vec![MapPoint::new(3, 3)]);
        idx.remove(MapPoint::new(3, 3));
        assert!(idx.around(MapPoint::new(3, 3), 1).is_empty());
    }

    #[test]
    fn node_reach_covers_the_narrow_seam_square() {
        // 61 wide: squares 0..=2 are 20 wide, square 3 holds column 60 only.
        let mut idx = MilitaryIndex::new(61, 40, 20);
        idx.add(MapPoint::new(9, 6));
        idx.add(MapPoint::new(60, 6));
        idx.add(MapPoint::new(30, 6));
        let near = idx.within(MapPoint::new(55, 6), 15);
        assert!(near.contains(&MapPoint::new(9, 6)));
        assert!(near.contains(&MapPoint::new(60, 6)));
        assert!(!near.contains(&MapPoint::new(30, 6)));
    }

    #[test]
    fn node_reach_spanning_the_map_takes_every_square() {
        let mut idx = MilitaryIndex::new(21, 21, 4);
        idx.add(MapPoint::new(0, 0));
        idx.add(MapPoint::new(20, 20));
        idx.add(MapPoint::new(10, 10));
        assert_eq!(idx.within(MapPoint::new(5, 5), 10).len(), 3);
        assert_eq!(idx.within(MapPoint::new(5, 5), 0), Vec::<MapPoint>::new());
    }
}
