//! Geometry invariant helpers.
//!
//! These functions check the contract every caller of [`HexTorus`] relies
//! on. Each walks the whole map, so keep the maps small.

use crate::torus::HexTorus;
use hexmap_core::{Direction, MapPoint};
use indexmap::IndexSet;

/// Assert `neighbour(neighbour(p, d), opposite(d)) == p` for all points.
pub fn assert_neighbour_round_trip(map: &HexTorus) {
    for pt in map.points() {
        for dir in Direction::ALL {
            let n = map.neighbour(pt, dir);
            assert!(map.contains(n), "neighbour({pt}, {dir}) = {n} off map");
            let back = map.neighbour(n, dir.opposite());
            assert_eq!(back, pt, "round trip {pt} -> {dir} -> {n} -> {back}");
        }
    }
}

/// Assert `distance(a, a) == 0` for all points.
pub fn assert_distance_reflexive(map: &HexTorus) {
    for pt in map.points() {
        assert_eq!(map.distance(pt, pt), 0, "distance({pt}, {pt}) != 0");
    }
}

/// Assert `distance(a, b) == distance(b, a)` for all pairs.
pub fn assert_distance_symmetric(map: &HexTorus) {
    let pts: Vec<MapPoint> = map.points().collect();
    for &a in &pts {
        for &b in &pts {
            let dab = map.distance(a, b);
            let dba = map.distance(b, a);
            assert_eq!(dab, dba, "distance({a}, {b}) = {dab} != {dba}");
        }
    }
}

/// Assert `d(a, c) <= d(a, b) + d(b, c)` for all triples.
pub fn assert_distance_triangle_inequality(map: &HexTorus) {
    let pts: Vec<MapPoint> = map.points().collect();
    for &a in &pts {
        for &b in &pts {
            let dab = map.distance(a, b);
            for &c in &pts {
                let dac = map.distance(a, c);
                let dbc = map.distance(b, c);
                assert!(
                    dac <= dab + dbc,
                    "triangle inequality violated: d({a},{c})={dac} > d({a},{b})={dab} + d({b},{c})={dbc}"
                );
            }
        }
    }
}

/// Assert that every distinct neighbour is at distance 1 and that distance
/// agrees with breadth-first search over the neighbour graph.
pub fn assert_distance_is_graph_distance(map: &HexTorus) {
    for start in map.points() {
        let mut dist = vec![u32::MAX; map.node_count()];
        dist[map.index(start)] = 0;
        let mut frontier = vec![start];
        let mut level = 0;
        while !frontier.is_empty() {
            level += 1;
            let mut next = Vec::new();
            for pt in frontier {
                for n in map.neighbours(pt) {
                    let slot = &mut dist[map.index(n)];
                    if *slot == u32::MAX {
                        *slot = level;
                        next.push(n);
                    }
                }
            }
            frontier = next;
        }
        for pt in map.points() {
            assert_eq!(
                map.distance(start, pt),
                dist[map.index(pt)],
                "distance({start}, {pt}) disagrees with BFS"
            );
        }
    }
}

/// Assert that ring `r` holds exactly `6 * r` distinct points, all at
/// distance `r`, for every `r` up to `max_radius`.
pub fn assert_ring_sizes(map: &HexTorus, max_radius: u32) {
    let center = MapPoint::new(map.width() / 2, map.height() / 2);
    let mut all = IndexSet::new();
    for r in 1..=max_radius {
        let ring = map.ring(center, r);
        let distinct: IndexSet<MapPoint> = ring.iter().copied().collect();
        assert_eq!(ring.len(), 6 * r as usize, "ring {r} size");
        assert_eq!(distinct.len(), ring.len(), "ring {r} has duplicates");
        for pt in &ring {
            assert_eq!(map.distance(center, *pt), r, "{pt} not on ring {r}");
        }
        all.extend(distinct);
    }
    assert!(!all.contains(&center));
    assert_eq!(
        all.len(),
        map.points_in_radius(center, max_radius).len(),
        "points_in_radius disagrees with union of rings"
    );
}

/// Run every geometry check on `map`.
pub fn run_full_compliance(map: &HexTorus) {
    assert_neighbour_round_trip(map);
    assert_distance_reflexive(map);
    assert_distance_symmetric(map);
    assert_distance_triangle_inequality(map);
    assert_distance_is_graph_distance(map);
}
