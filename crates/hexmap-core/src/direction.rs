//! Hex directions and ship headings.

use std::fmt;

/// One of the six directions from a node to its neighbours.
///
/// The numbering is fixed and used as an index in per-node tables:
/// `W = 0` and then clockwise. Odd rows are shifted half a node east, so the
/// column offset of the diagonal directions depends on row parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// West.
    West = 0,
    /// North-west.
    NorthWest = 1,
    /// North-east.
    NorthEast = 2,
    /// East.
    East = 3,
    /// South-east.
    SouthEast = 4,
    /// South-west.
    SouthWest = 5,
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; 6] = [
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Number of directions.
    pub const COUNT: usize = 6;

    /// The direction with the given index, or `None` if `index >= 6`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Index in `0..6`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing back.
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }

    /// Rotate clockwise by `steps` sixths of a turn.
    pub fn rotate_cw(self, steps: usize) -> Self {
        Self::ALL[(self.index() + steps) % 6]
    }

    /// Rotate counter-clockwise by `steps` sixths of a turn.
    pub fn rotate_ccw(self, steps: usize) -> Self {
        Self::ALL[(self.index() + 6 - steps % 6) % 6]
    }

    /// True for the three directions whose road is stored at the node itself
    /// (east, south-east, south-west).
    pub fn is_stored_locally(self) -> bool {
        self.index() >= 3
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::West => "W",
            Direction::NorthWest => "NW",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
        };
        f.write_str(s)
    }
}

/// Coarse heading used to bucket harbor neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ShipDirection {
    /// North.
    North = 0,
    /// North-east.
    NorthEast = 1,
    /// South-east.
    SouthEast = 2,
    /// South.
    South = 3,
    /// South-west.
    SouthWest = 4,
    /// North-west.
    NorthWest = 5,
}

impl ShipDirection {
    /// All headings in index order.
    pub const ALL: [ShipDirection; 6] = [
        ShipDirection::North,
        ShipDirection::NorthEast,
        ShipDirection::SouthEast,
        ShipDirection::South,
        ShipDirection::SouthWest,
        ShipDirection::NorthWest,
    ];

    /// Index in `0..6`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The heading with the given index, or `None` if `index >= 6`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Heading for a displacement of `dx` columns and `dy` rows (rows grow
    /// southwards). Each heading covers a 60 degree sector centred on its
    /// nominal angle. A zero displacement maps to `North`.
    pub fn from_delta(dx: i32, dy: i32) -> Self {
        if dx == 0 && dy == 0 {
            return ShipDirection::North;
        }
        // Rows are closer together than columns on a hex grid.
        let fx = dx as f64;
        let fy = -(dy as f64) * 0.866_025_403_784_438_6;
        let mut angle = fy.atan2(fx).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }
        match angle {
            a if (60.0..120.0).contains(&a) => ShipDirection::North,
            a if (0.0..60.0).contains(&a) => ShipDirection::NorthEast,
            a if (300.0..360.0).contains(&a) => ShipDirection::SouthEast,
            a if (240.0..300.0).contains(&a) => ShipDirection::South,
            a if (180.0..240.0).contains(&a) => ShipDirection::SouthWest,
            _ => ShipDirection::NorthWest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn opposite_pairs() {
        assert_eq!(Direction::West.opposite(), Direction::East);
        assert_eq!(Direction::NorthWest.opposite(), Direction::SouthEast);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(Direction::from_index(5), Some(Direction::SouthWest));
        assert_eq!(Direction::from_index(6), None);
        assert_eq!(ShipDirection::from_index(6), None);
    }

    #[test]
    fn locally_stored_directions_are_east_half() {
        let local: Vec<_> = Direction::ALL
            .into_iter()
            .filter(|d| d.is_stored_locally())
            .collect();
        assert_eq!(
            local,
            vec![Direction::East, Direction::SouthEast, Direction::SouthWest]
        );
    }

    #[test]
    fn ship_direction_from_axis_deltas() {
        assert_eq!(ShipDirection::from_delta(0, -5), ShipDirection::North);
        assert_eq!(ShipDirection::from_delta(0, 5), ShipDirection::South);
        assert_eq!(ShipDirection::from_delta(5, -1), ShipDirection::NorthEast);
        assert_eq!(ShipDirection::from_delta(5, 1), ShipDirection::SouthEast);
        assert_eq!(ShipDirection::from_delta(-5, 1), ShipDirection::SouthWest);
        assert_eq!(ShipDirection::from_delta(-5, -1), ShipDirection::NorthWest);
        assert_eq!(ShipDirection::from_delta(0, 0), ShipDirection::North);
    }

    proptest! {
        #[test]
        fn opposite_is_involution(i in 0usize..6) {
            let d = Direction::ALL[i];
            prop_assert_eq!(d.opposite().opposite(), d);
            prop_assert_ne!(d.opposite(), d);
        }

        #[test]
        fn rotations_cancel(i in 0usize..6, steps in 0usize..12) {
            let d = Direction::ALL[i];
            prop_assert_eq!(d.rotate_cw(steps).rotate_ccw(steps), d);
        }
    }
}
