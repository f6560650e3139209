//! The wrapping hex grid.

use crate::edge::{Border, CrossBorders};
use crate::error::SpaceError;
use crate::radius::RadiusScan;
use hexmap_core::{Direction, MapPoint, RawPoint};

/// Second-ring offsets `(dx, dy)` for even rows, starting two nodes west and
/// walking clockwise. On odd rows the entries for `dy = ±1` move one column
/// east.
const RING2_OFFSETS: [(i32, i32); 12] = [
    (-2, 0),
    (-2, -1),
    (-1, -2),
    (0, -2),
    (1, -2),
    (1, -1),
    (2, 0),
    (1, 1),
    (1, 2),
    (0, 2),
    (-1, 2),
    (-2, 1),
];

/// A `width * height` hex grid that wraps on both axes.
///
/// Nodes are addressed by [`MapPoint`] and stored row-major, so the dense
/// index of `(x, y)` is `y * width + x`. Odd rows are shifted half a node
/// east; the height must therefore be even for the wrap to line up.
///
/// # Examples
///
/// ```
/// use hexmap_core::{Direction, MapPoint};
/// use hexmap_space::HexTorus;
///
/// let map = HexTorus::new(10, 10).unwrap();
/// assert_eq!(map.node_count(), 100);
///
/// // West of the left column is the right column.
/// let left = MapPoint::new(0, 4);
/// assert_eq!(map.neighbour(left, Direction::West), MapPoint::new(9, 4));
/// assert_eq!(map.distance(left, MapPoint::new(9, 4)), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexTorus {
    width: u16,
    height: u16,
}

impl HexTorus {
    /// Maximum size of either dimension. Keeps doubled coordinates in `i32`.
    pub const MAX_DIM: u16 = i16::MAX as u16;

    /// Create a grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds
    /// [`HexTorus::MAX_DIM`], or `Err(SpaceError::OddHeight)` for an odd
    /// row count.
    pub fn new(width: u16, height: u16) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value > Self::MAX_DIM {
                return Err(SpaceError::DimensionTooLarge {
                    name,
                    value: value as u32,
                    max: Self::MAX_DIM as u32,
                });
            }
        }
        if height % 2 != 0 {
            return Err(SpaceError::OddHeight {
                height: height as u32,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True if `pt` lies on this map.
    pub fn contains(&self, pt: MapPoint) -> bool {
        pt.x < self.width && pt.y < self.height
    }

    /// Dense row-major index of `pt`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `pt` is off the map.
    pub fn index(&self, pt: MapPoint) -> usize {
        debug_assert!(self.contains(pt), "point {pt} outside {self:?}");
        pt.y as usize * self.width as usize + pt.x as usize
    }

    /// Inverse of [`HexTorus::index`].
    pub fn point(&self, index: usize) -> MapPoint {
        let w = self.width as usize;
        MapPoint::new((index % w) as u16, (index / w) as u16)
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = MapPoint> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| MapPoint::new(x, y)))
    }

    /// Fold an arbitrary integer coordinate onto the map.
    pub fn make_point(&self, raw: RawPoint) -> MapPoint {
        MapPoint::new(
            raw.x.rem_euclid(self.width as i32) as u16,
            raw.y.rem_euclid(self.height as i32) as u16,
        )
    }

    /// Unwrapped coordinate of the neighbour in `dir`.
    pub fn neighbour_raw(&self, pt: MapPoint, dir: Direction) -> RawPoint {
        let x = pt.x as i32;
        let y = pt.y as i32;
        let odd = pt.odd_row() as i32;
        let even = 1 - odd;
        match dir {
            Direction::West => RawPoint::new(x - 1, y),
            Direction::NorthWest => RawPoint::new(x - even, y - 1),
            Direction::NorthEast => RawPoint::new(x + odd, y - 1),
            Direction::East => RawPoint::new(x + 1, y),
            Direction::SouthEast => RawPoint::new(x + odd, y + 1),
            Direction::SouthWest => RawPoint::new(x - even, y + 1),
        }
    }

    /// The neighbour of `pt` in `dir`.
    pub fn neighbour(&self, pt: MapPoint, dir: Direction) -> MapPoint {
        self.make_point(self.neighbour_raw(pt, dir))
    }

    /// All six neighbours in direction order.
    pub fn neighbours(&self, pt: MapPoint) -> [MapPoint; 6] {
        Direction::ALL.map(|d| self.neighbour(pt, d))
    }

    /// The neighbour of `pt` in `dir`, plus the borders the step crossed.
    pub fn step(&self, pt: MapPoint, dir: Direction) -> (MapPoint, CrossBorders) {
        let raw = self.neighbour_raw(pt, dir);
        let mut crossed = CrossBorders::default();
        if raw.x < 0 {
            crossed.record(Border::Left);
        } else if raw.x >= self.width as i32 {
            crossed.record(Border::Right);
        }
        if raw.y < 0 {
            crossed.record(Border::Top);
        } else if raw.y >= self.height as i32 {
            crossed.record(Border::Bottom);
        }
        (self.make_point(raw), crossed)
    }

    /// Node `index` of the second ring around `pt` (`0..12`, starting two
    /// nodes west and going clockwise).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 12`.
    pub fn neighbour2(&self, pt: MapPoint, index: usize) -> MapPoint {
        let (dx, dy) = RING2_OFFSETS[index];
        let shift = if dy % 2 != 0 && pt.odd_row() { 1 } else { 0 };
        self.make_point(RawPoint::new(
            pt.x as i32 + dx + shift,
            pt.y as i32 + dy,
        ))
    }

    /// Shortest column distance, going around the border if that is shorter.
    pub fn wrap_distance_x(&self, x1: u16, x2: u16) -> u16 {
        let d = x1.abs_diff(x2);
        d.min(self.width - d)
    }

    /// Shortest row distance, going around the border if that is shorter.
    pub fn wrap_distance_y(&self, y1: u16, y2: u16) -> u16 {
        let d = y1.abs_diff(y2);
        d.min(self.height - d)
    }

    /// Signed shortest displacement `(dx, dy)` from `from` to `to`.
    pub fn delta(&self, from: MapPoint, to: MapPoint) -> (i32, i32) {
        fn axis(a: u16, b: u16, size: u16) -> i32 {
            let size = size as i32;
            let mut d = b as i32 - a as i32;
            if d > size / 2 {
                d -= size;
            } else if d < -(size / 2) {
                d += size;
            }
            d
        }
        (
            axis(from.x, to.x, self.width),
            axis(from.y, to.y, self.height),
        )
    }

    /// Number of steps between two nodes on the wrapping grid.
    ///
    /// Works in doubled column coordinates where row parity is exact, takes
    /// the shorter way around on each axis and then applies the hex metric.
    pub fn distance(&self, a: MapPoint, b: MapPoint) -> u32 {
        let w = self.width as i32;
        let h = self.height as i32;
        let mut dx = ((a.x as i32 - b.x as i32) * 2 + (a.y & 1) as i32 - (b.y & 1) as i32).abs();
        let mut dy = (a.y as i32 - b.y as i32).abs() * 2;
        if dy > h {
            dy = 2 * h - dy;
        }
        if dx > w {
            dx = 2 * w - dx;
        }
        dx -= dy / 2;
        ((dy + dx.max(0)) / 2) as u32
    }

    /// Lazily walk all points within `radius` of `center`, ring by ring,
    /// excluding the center.
    pub fn scan(&self, center: MapPoint, radius: u32) -> RadiusScan<'_> {
        RadiusScan::new(self, center, radius)
    }

    /// All points within `radius` of `center`, excluding the center.
    pub fn points_in_radius(&self, center: MapPoint, radius: u32) -> Vec<MapPoint> {
        self.scan(center, radius).map(|(pt, _)| pt).collect()
    }

    /// The `6 * radius` points at ring distance `radius`.
    pub fn ring(&self, center: MapPoint, radius: u32) -> Vec<MapPoint> {
        if radius == 0 {
            return vec![center];
        }
        let first = 3 * radius as usize * (radius as usize - 1);
        self.scan(center, radius)
            .skip(first)
            .map(|(pt, _)| pt)
            .collect()
    }

    /// Map every point within `radius` through `transform` and keep the
    /// results accepted by `is_valid`.
    ///
    /// `transform` receives the point and its ring number. The scan stops
    /// once `max_results` values were collected; 0 means unbounded.
    pub fn collect_in_radius<T, F, P>(
        &self,
        center: MapPoint,
        radius: u32,
        max_results: usize,
        mut transform: F,
        mut is_valid: P,
    ) -> Vec<T>
    where
        F: FnMut(MapPoint, u32) -> T,
        P: FnMut(&T) -> bool,
    {
        let mut out = Vec::new();
        for (pt, ring) in self.scan(center, radius) {
            let value = transform(pt, ring);
            if is_valid(&value) {
                out.push(value);
                if max_results != 0 && out.len() >= max_results {
                    break;
                }
            }
        }
        out
    }

    /// True if `pred` holds for any point within `radius` of `center`.
    ///
    /// With `include_center` the center is tested first (as ring 0).
    pub fn any_in_radius<P>(
        &self,
        center: MapPoint,
        radius: u32,
        include_center: bool,
        mut pred: P,
    ) -> bool
    where
        P: FnMut(MapPoint, u32) -> bool,
    {
        if include_center && pred(center, 0) {
            return true;
        }
        self.scan(center, radius).any(|(pt, ring)| pred(pt, ring))
    }
}
