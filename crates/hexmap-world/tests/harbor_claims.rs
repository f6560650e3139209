//! Integration test: claiming harbor points.
//!
//! Walks one harbor point on the coastal fixture through its life: free
//! on unowned land, still free once its player owns the coast, claimed
//! by nobody else while foreign land is near, and taken once a harbor
//! stands on it.

use hexmap_core::{BuildingKind, BuildingQuality, HarborId, MapPoint, PlayerId, SeaId};
use hexmap_test_utils::fixtures::{self, COASTAL_HARBOR};
use hexmap_world::{Building, World};

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);
const H1: HarborId = HarborId(1);
const SEA: SeaId = SeaId(1);

fn coast() -> World {
    fixtures::world(fixtures::coastal_map(), fixtures::config(2))
}

fn give_map_to(world: &mut World, player: PlayerId) {
    let points: Vec<MapPoint> = world.geometry().points().collect();
    world
        .set_owners(points.into_iter().map(|pt| (pt, Some(player))))
        .unwrap();
}

#[test]
fn coast_touches_one_navigable_sea() {
    let w = coast();
    assert_eq!(w.sea_count(), 1);
    assert_eq!(w.sea(SEA).map(|s| s.node_count()), Some(40));
    assert_eq!(w.harbor_point_id(COASTAL_HARBOR), Some(H1));
    assert_eq!(w.sea_ids(H1).as_slice(), &[SEA]);
    assert_eq!(w.coastal_point(MapPoint::new(7, 5)), Some(SEA));
    assert_eq!(w.coastal_point(MapPoint::new(7, 8)), None);
    assert_eq!(w.coastal_point_to_sea_with_harbor(MapPoint::new(7, 5)), Some(SEA));
}

#[test]
fn unowned_harbor_point_is_free_for_anyone() {
    let w = coast();
    assert!(w.is_harbor_point_free(H1, P0, SEA));
    assert!(w.is_harbor_point_free(H1, P1, SEA));
    assert!(!w.is_harbor_point_free(H1, P0, SeaId(2)));
    assert!(!w.is_harbor_point_free(HarborId(9), P0, SEA));
}

#[test]
fn owned_coast_is_free_only_for_its_owner() {
    let mut w = coast();
    give_map_to(&mut w, P0);
    assert_eq!(w.bq_for(COASTAL_HARBOR, P0, false), BuildingQuality::Harbor);
    assert!(w.is_harbor_point_free(H1, P0, SEA));
    assert!(!w.is_harbor_point_free(H1, P1, SEA));
}

#[test]
fn built_harbor_takes_the_point() {
    let mut w = coast();
    give_map_to(&mut w, P0);
    w.place_object(COASTAL_HARBOR, Building::new(BuildingKind::HarborBuilding, P0))
        .unwrap();
    assert!(!w.is_harbor_point_free(H1, P0, SEA));
    assert_eq!(w.bq_for(COASTAL_HARBOR, P0, false), BuildingQuality::Nothing);
    assert!(w.is_military_building(COASTAL_HARBOR));
    assert_eq!(w.look_for_military_buildings(COASTAL_HARBOR, 1), vec![COASTAL_HARBOR]);
    assert_eq!(w.building_count(P0, BuildingKind::HarborBuilding), 1);
}
