use hexmap_core::{Direction, MapPoint, RawPoint};
use hexmap_space::HexTorus;
use proptest::prelude::*;

#[test]
fn full_ring_has_six_r_distinct_points() {
    let map = HexTorus::new(64, 64).unwrap();
    let center = MapPoint::new(31, 30);
    for r in 1..=12u32 {
        let ring: Vec<MapPoint> =
            map.collect_in_radius(center, r, 0, |pt, ring| (pt, ring), |(_, ring)| *ring == r)
                .into_iter()
                .map(|(pt, _)| pt)
                .collect();
        let mut dedup = ring.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(ring.len(), 6 * r as usize);
        assert_eq!(dedup.len(), ring.len());
    }
}

#[test]
fn radius_scan_wraps_around_corner() {
    let map = HexTorus::new(16, 16).unwrap();
    let corner = MapPoint::new(0, 0);
    let pts = map.points_in_radius(corner, 2);
    assert_eq!(pts.len(), 18);
    assert!(pts.contains(&MapPoint::new(15, 0)));
    assert!(pts.contains(&MapPoint::new(14, 0)));
    assert!(pts.contains(&MapPoint::new(0, 14)));
    for pt in pts {
        assert!(map.distance(corner, pt) <= 2);
    }
}

#[test]
fn second_ring_matches_ring_two_of_scan() {
    let map = HexTorus::new(20, 20).unwrap();
    let c = MapPoint::new(7, 9);
    let mut from_scan = map.ring(c, 2);
    let mut from_index: Vec<MapPoint> = (0..12).map(|i| map.neighbour2(c, i)).collect();
    from_scan.sort();
    from_index.sort();
    assert_eq!(from_scan, from_index);
}

#[test]
fn step_west_across_border_marks_left() {
    let map = HexTorus::new(8, 8).unwrap();
    let (pt, crossed) = map.step(MapPoint::new(0, 3), Direction::West);
    assert_eq!(pt, MapPoint::new(7, 3));
    assert!(crossed.left);
    assert!(!crossed.top && !crossed.right && !crossed.bottom);
}

proptest! {
    #[test]
    fn ring_points_sit_at_their_ring_distance(
        cx in 0i32..50,
        cy in 0i32..50,
        r in 1u32..10,
    ) {
        let map = HexTorus::new(50, 50).unwrap();
        let center = map.make_point(RawPoint::new(cx, cy));
        for (pt, ring) in map.scan(center, r) {
            prop_assert_eq!(map.distance(center, pt), ring);
        }
    }
}
