//! Integration test: a scripted mission start.
//!
//! Runs the kind of command sequence a mission script issues on its
//! first frame against a real world and a recording host.

use hexmap_core::{BuildingKind, MapPoint, PlayerId};
use hexmap_script::{CommandTable, ScriptContext, ScriptError, ScriptValue};
use hexmap_test_utils::fixtures;
use hexmap_test_utils::{PostedMessage, RecordingHost};
use hexmap_world::{Building, NewBuilding, ObjectKind, World};

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);

fn int(v: i64) -> ScriptValue {
    ScriptValue::Int(v)
}

fn call(
    table: &CommandTable,
    world: &mut World,
    host: &mut RecordingHost,
    name: &str,
    args: &[ScriptValue],
) -> Result<ScriptValue, ScriptError> {
    let mut ctx = ScriptContext { world, host };
    table.call(name, &mut ctx, args)
}

#[test]
fn mission_setup() {
    let table = CommandTable::with_builtins();
    let mut world = fixtures::world(fixtures::meadow_map(32, 32), fixtures::config(3));
    let mut host = RecordingHost::with_warehouses([P0]);
    host.ai_players.push(P1);

    assert_eq!(call(&table, &mut world, &mut host, "GetPlayerCount", &[]), Ok(int(3)));

    call(&table, &mut world, &mut host, "DisableBuilding", &[int(0)]).unwrap();
    let enable = [int(0), "woodcutter".into(), "quarry".into()];
    call(&table, &mut world, &mut host, "EnableBuilding", &enable).unwrap();
    assert!(world.is_building_enabled(P0, BuildingKind::Woodcutter));
    assert!(!world.is_building_enabled(P0, BuildingKind::Farm));

    let wares = [int(0), int(1), int(20), int(5), int(8)];
    assert_eq!(call(&table, &mut world, &mut host, "AddWares", &wares), Ok(true.into()));
    assert_eq!(call(&table, &mut world, &mut host, "GetWareCount", &[int(0), int(1)]), Ok(int(20)));
    let people = [int(2), int(0), int(3)];
    assert_eq!(call(&table, &mut world, &mut host, "AddPeople", &people), Ok(false.into()));
    assert_eq!(call(&table, &mut world, &mut host, "GetPeopleCount", &[int(2), int(0)]), Ok(int(0)));

    let mission = [int(0), "Chapter 1".into(), "Build a port.".into()];
    call(&table, &mut world, &mut host, "MissionStatement", &mission).unwrap();
    let msg = [int(0), "Scouts report land".into(), int(40), int(-3)];
    call(&table, &mut world, &mut host, "PostMessageWithLocation", &msg).unwrap();
    call(&table, &mut world, &mut host, "Log", &["mission started".into()]).unwrap();
    assert_eq!(host.missions.len(), 1);
    assert_eq!(
        host.messages,
        vec![PostedMessage {
            player: P0,
            text: "Scouts report land".into(),
            location: Some(MapPoint::new(8, 29)),
        }]
    );
    assert_eq!(host.log_lines, vec!["mission started".to_string()]);

    let order = [int(1), int(6), int(6), "sawmill".into()];
    assert_eq!(call(&table, &mut world, &mut host, "AIConstructionOrder", &order), Ok(true.into()));
    let order = [int(0), int(6), int(6), "sawmill".into()];
    assert_eq!(call(&table, &mut world, &mut host, "AIConstructionOrder", &order), Ok(false.into()));
    assert_eq!(host.orders, vec![(P1, MapPoint::new(6, 6), BuildingKind::Sawmill)]);
}

#[test]
fn scenery_and_new_buildings() {
    let table = CommandTable::with_builtins();
    let mut world = fixtures::meadow_world(32, 32);
    let mut host = RecordingHost::new();

    let rock = [int(8), int(8), int(500), int(3), int(2)];
    assert_eq!(call(&table, &mut world, &mut host, "AddStaticObject", &rock), Ok(true.into()));
    assert_eq!(world.object_kind(MapPoint::new(8, 8)), ObjectKind::Static);
    assert!(!world.road_available(MapPoint::new(8, 8), false, false));

    world
        .place_object(MapPoint::new(20, 20), Building::new(BuildingKind::Sawmill, P0))
        .unwrap();
    world
        .place_object(MapPoint::new(24, 20), Building::new(BuildingKind::Farm, P0))
        .unwrap();
    let posted = call(&table, &mut world, &mut host, "PostNewBuildings", &[int(0)]);
    assert_eq!(posted, Ok(int(2)));
    assert_eq!(
        host.new_buildings,
        vec![
            (P0, NewBuilding { pos: MapPoint::new(20, 20), kind: BuildingKind::Sawmill }),
            (P0, NewBuilding { pos: MapPoint::new(24, 20), kind: BuildingKind::Farm }),
        ]
    );
    let count = [int(0), "sawmill".into()];
    assert_eq!(call(&table, &mut world, &mut host, "GetBuildingCount", &count), Ok(int(1)));
    let env = [int(20), int(20), int(4)];
    assert_eq!(call(&table, &mut world, &mut host, "AddEnvObject", &env), Ok(false.into()));
}

#[test]
fn bad_calls_leave_the_world_alone() {
    let table = CommandTable::with_builtins();
    let mut world = fixtures::meadow_world(16, 16);
    let mut host = RecordingHost::new();

    assert_eq!(
        call(&table, &mut world, &mut host, "DisableBuilding", &[int(7)]),
        Err(ScriptError::InvalidPlayer { player: 7 })
    );
    assert!(matches!(
        call(&table, &mut world, &mut host, "SetRestrictedArea", &[int(0), "x".into(), int(1)]),
        Err(ScriptError::BadArgument { index: 1, .. })
    ));
    assert!(world.is_in_restricted_area(P0, MapPoint::new(15, 15)));
    assert!(matches!(
        call(&table, &mut world, &mut host, "Chat", &[int(0)]),
        Err(ScriptError::Arity { min: 2, max: 2, got: 1, .. })
    ));
    assert!(host.chats.is_empty());
}
