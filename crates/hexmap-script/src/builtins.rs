//! The built-in command set.
//!
//! Coordinates come in as two integers and are folded onto the map, so
//! scripts may pass values outside the map bounds. Player numbers are
//! checked against the session.

use tracing::debug;

use hexmap_core::{BuildingKind, MapPoint, PlayerId};
use hexmap_world::{EnvObject, ObjectKind, StaticObject};

use crate::error::ScriptError;
use crate::table::{CommandTable, ScriptContext};
use crate::value::{ScriptArgs, ScriptValue};

/// File id used when a script does not name a graphic file.
pub const DEFAULT_OBJECT_FILE: u16 = 0xFFFF;

type Outcome = Result<ScriptValue, ScriptError>;

pub(crate) fn register_all(table: &mut CommandTable) {
    table.register("DisableBuilding", disable_building);
    table.register("EnableBuilding", enable_building);
    table.register("SetRestrictedArea", set_restricted_area);
    table.register("ClearResources", clear_resources);
    table.register("AddWares", add_wares);
    table.register("AddPeople", add_people);
    table.register("GetGF", get_gf);
    table.register("Log", log);
    table.register("Chat", chat);
    table.register("MissionStatement", mission_statement);
    table.register("PostMessage", post_message);
    table.register("PostMessageWithLocation", post_message_with_location);
    table.register("GetPlayerCount", get_player_count);
    table.register("GetBuildingCount", get_building_count);
    table.register("GetWareCount", get_ware_count);
    table.register("GetPeopleCount", get_people_count);
    table.register("AddEnvObject", add_env_object);
    table.register("AIConstructionOrder", ai_construction_order);
    table.register("AddStaticObject", add_static_object);
    table.register("PostNewBuildings", post_new_buildings);
}

// ── Building permissions ───────────────────────────────────────────

fn set_buildings_enabled(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>, enabled: bool) -> Outcome {
    let player = args.player(0, ctx.world)?;
    let kinds: Vec<BuildingKind> = if args.len() == 1 {
        BuildingKind::ALL.to_vec()
    } else {
        (1..args.len()).map(|i| args.building(i)).collect::<Result<_, _>>()?
    };
    for kind in kinds {
        ctx.world.set_building_enabled(player, kind, enabled)?;
    }
    Ok(ScriptValue::Nil)
}

/// `DisableBuilding(player, [kind...])`: no kinds disables every kind.
fn disable_building(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(1, usize::MAX)?;
    set_buildings_enabled(ctx, args, false)
}

/// `EnableBuilding(player, [kind...])`: no kinds enables every kind.
fn enable_building(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(1, usize::MAX)?;
    set_buildings_enabled(ctx, args, true)
}

/// `SetRestrictedArea(player, [x, y]...)`: polygon corners; none lifts
/// the restriction.
fn set_restricted_area(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(1, usize::MAX)?;
    let player = args.player(0, ctx.world)?;
    if args.len() % 2 == 0 {
        return Err(ScriptError::BadArgument {
            command: args.command().to_owned(),
            index: args.len() - 1,
            expected: "a y coordinate",
        });
    }
    let polygon = (1..args.len())
        .step_by(2)
        .map(|i| args.point(i, ctx.world))
        .collect::<Result<Vec<_>, _>>()?;
    ctx.world.set_restricted_area(player, polygon)?;
    Ok(ScriptValue::Nil)
}

/// `ClearResources([x, y])`: one node, or the whole map.
fn clear_resources(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    if args.is_empty() {
        let torus = *ctx.world.geometry();
        for pt in torus.points() {
            ctx.world.clear_resources(pt);
        }
        debug!(nodes = torus.node_count(), "cleared all resources");
    } else {
        args.expect_len(2, 2)?;
        let pt = args.point(0, ctx.world)?;
        ctx.world.clear_resources(pt);
    }
    Ok(ScriptValue::Nil)
}

// ── Inventory ──────────────────────────────────────────────────────

/// Parse `(id, count)` pairs following the player argument.
fn id_count_pairs(args: &ScriptArgs<'_>) -> Result<Vec<(u32, u32)>, ScriptError> {
    if args.len() % 2 == 0 {
        return Err(ScriptError::BadArgument {
            command: args.command().to_owned(),
            index: args.len() - 1,
            expected: "a count",
        });
    }
    (1..args.len())
        .step_by(2)
        .map(|i| Ok((args.uint(i, u32::MAX)?, args.uint(i + 1, u32::MAX)?)))
        .collect()
}

/// `AddWares(player, [ware, count]...)`.
fn add_wares(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(1, usize::MAX)?;
    let player = args.player(0, ctx.world)?;
    let mut ok = true;
    for (ware, count) in id_count_pairs(args)? {
        ok &= ctx.host.add_wares(player, ware, count);
    }
    Ok(ok.into())
}

/// `AddPeople(player, [job, count]...)`.
fn add_people(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(1, usize::MAX)?;
    let player = args.player(0, ctx.world)?;
    let mut ok = true;
    for (job, count) in id_count_pairs(args)? {
        ok &= ctx.host.add_people(player, job, count);
    }
    Ok(ok.into())
}

/// `GetWareCount(player, ware)`.
fn get_ware_count(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(2, 2)?;
    let player = args.player(0, ctx.world)?;
    let ware = args.uint(1, u32::MAX)?;
    Ok(ctx.host.ware_count(player, ware).into())
}

/// `GetPeopleCount(player, job)`.
fn get_people_count(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(2, 2)?;
    let player = args.player(0, ctx.world)?;
    let job = args.uint(1, u32::MAX)?;
    Ok(ctx.host.people_count(player, job).into())
}

/// `GetBuildingCount(player, kind)`: finished buildings only.
fn get_building_count(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(2, 2)?;
    let player = args.player(0, ctx.world)?;
    let kind = args.building(1)?;
    Ok(ctx.world.building_count(player, kind).into())
}

// ── Session ────────────────────────────────────────────────────────

/// `GetGF()`: the current game frame.
fn get_gf(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(0, 0)?;
    let frame = i64::try_from(ctx.world.frame()).unwrap_or(i64::MAX);
    Ok(ScriptValue::Int(frame))
}

/// `GetPlayerCount()`.
fn get_player_count(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(0, 0)?;
    Ok(i64::from(ctx.world.player_count()).into())
}

/// `Log(text)`.
fn log(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(1, 1)?;
    ctx.host.log(args.str(0)?);
    Ok(ScriptValue::Nil)
}

/// `Chat(player, text)`: player -1 talks to everyone.
fn chat(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(2, 2)?;
    let player = if args.int(0)? == -1 {
        None
    } else {
        Some(args.player(0, ctx.world)?)
    };
    ctx.host.chat(player, args.str(1)?);
    Ok(ScriptValue::Nil)
}

/// `MissionStatement(player, title, text)`.
fn mission_statement(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(3, 3)?;
    let player = args.player(0, ctx.world)?;
    ctx.host.mission_statement(player, args.str(1)?, args.str(2)?);
    Ok(ScriptValue::Nil)
}

/// `PostMessage(player, text)`.
fn post_message(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(2, 2)?;
    let player = args.player(0, ctx.world)?;
    ctx.host.post_message(player, args.str(1)?, None);
    Ok(ScriptValue::Nil)
}

/// `PostMessageWithLocation(player, text, x, y)`.
fn post_message_with_location(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(4, 4)?;
    let player = args.player(0, ctx.world)?;
    let pt = args.point(2, ctx.world)?;
    ctx.host.post_message(player, args.str(1)?, Some(pt));
    Ok(ScriptValue::Nil)
}

/// `PostNewBuildings(player)`: hand the buildings finished since the last
/// call to the host. Returns how many there were.
fn post_new_buildings(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(1, 1)?;
    let player = args.player(0, ctx.world)?;
    let buildings = ctx.world.take_new_buildings(player);
    let count = buildings.len() as u32;
    for b in buildings {
        ctx.host.new_building(player, b);
    }
    Ok(count.into())
}

/// `AIConstructionOrder(player, x, y, kind)`.
fn ai_construction_order(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(4, 4)?;
    let player: PlayerId = args.player(0, ctx.world)?;
    let pt = args.point(1, ctx.world)?;
    let kind = args.building(3)?;
    Ok(ctx.host.ai_construction_order(player, pt, kind).into())
}

// ── Scenery ────────────────────────────────────────────────────────

/// Scenery may only replace nothing or other scenery.
fn scenery_fits(ctx: &ScriptContext<'_>, pt: MapPoint) -> bool {
    matches!(
        ctx.world.object_kind(pt),
        ObjectKind::Nothing | ObjectKind::Environment | ObjectKind::Static
    )
}

fn graphic_file(args: &ScriptArgs<'_>, index: usize) -> Result<u16, ScriptError> {
    let file = args.int_or(index, i64::from(DEFAULT_OBJECT_FILE))?;
    u16::try_from(file).map_err(|_| ScriptError::BadArgument {
        command: args.command().to_owned(),
        index,
        expected: "a file id",
    })
}

/// `AddEnvObject(x, y, id, [file])`: returns false if the node holds
/// something other than scenery.
fn add_env_object(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(3, 4)?;
    let pt = args.point(0, ctx.world)?;
    let id = args.uint(2, u16::MAX.into())? as u16;
    let file = graphic_file(args, 3)?;
    if !scenery_fits(ctx, pt) {
        return Ok(false.into());
    }
    ctx.world.replace_object(pt, EnvObject { id, file })?;
    Ok(true.into())
}

/// `AddStaticObject(x, y, id, [file], [size])`: size 0 to 2, default 1.
/// Returns false if the node holds something other than scenery.
fn add_static_object(ctx: &mut ScriptContext<'_>, args: &ScriptArgs<'_>) -> Outcome {
    args.expect_len(3, 5)?;
    let pt = args.point(0, ctx.world)?;
    let id = args.uint(2, u16::MAX.into())? as u16;
    let file = graphic_file(args, 3)?;
    let size = match args.int_or(4, 1)? {
        s @ 0..=2 => s as u8,
        _ => {
            return Err(ScriptError::BadArgument {
                command: args.command().to_owned(),
                index: 4,
                expected: "a size from 0 to 2",
            })
        }
    };
    if !scenery_fits(ctx, pt) {
        return Ok(false.into());
    }
    ctx.world.replace_object(pt, StaticObject { id, file, size })?;
    Ok(true.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ScriptHost;
    use hexmap_core::{Resource, ResourceKind, TerrainType};
    use hexmap_world::{Building, MapData, NewBuilding, Tree, World, WorldConfig};

    #[derive(Default)]
    struct Inbox {
        wares: Vec<(PlayerId, u32, u32)>,
        chats: Vec<(Option<PlayerId>, String)>,
        messages: Vec<(PlayerId, String, Option<MapPoint>)>,
        built: Vec<NewBuilding>,
    }

    impl ScriptHost for Inbox {
        fn add_wares(&mut self, player: PlayerId, ware: u32, count: u32) -> bool {
            self.wares.push((player, ware, count));
            player == PlayerId(0)
        }
        fn add_people(&mut self, _: PlayerId, _: u32, _: u32) -> bool {
            true
        }
        fn ware_count(&self, player: PlayerId, ware: u32) -> u32 {
            self.wares
                .iter()
                .filter(|w| w.0 == player && w.1 == ware)
                .map(|w| w.2)
                .sum()
        }
        fn people_count(&self, _: PlayerId, _: u32) -> u32 {
            0
        }
        fn chat(&mut self, player: Option<PlayerId>, text: &str) {
            self.chats.push((player, text.to_owned()));
        }
        fn mission_statement(&mut self, _: PlayerId, _: &str, _: &str) {}
        fn post_message(&mut self, player: PlayerId, text: &str, location: Option<MapPoint>) {
            self.messages.push((player, text.to_owned(), location));
        }
        fn ai_construction_order(&mut self, _: PlayerId, _: MapPoint, _: BuildingKind) -> bool {
            false
        }
        fn new_building(&mut self, _: PlayerId, building: NewBuilding) {
            self.built.push(building);
        }
    }

    fn world() -> World {
        World::new(
            WorldConfig::default(),
            MapData::filled(16, 16, TerrainType::Meadow1, 10),
        )
        .unwrap()
    }

    fn run(world: &mut World, host: &mut Inbox, name: &str, args: &[ScriptValue]) -> Outcome {
        let table = CommandTable::with_builtins();
        let mut ctx = ScriptContext { world, host };
        table.call(name, &mut ctx, args)
    }

    fn ints(values: &[i64]) -> Vec<ScriptValue> {
        values.iter().copied().map(ScriptValue::Int).collect()
    }

    #[test]
    fn disable_and_enable_buildings() {
        let (mut w, mut h) = (world(), Inbox::default());
        let args = [ScriptValue::Int(1), ScriptValue::from("farm"), ScriptValue::Int(0)];
        run(&mut w, &mut h, "DisableBuilding", &args).unwrap();
        assert!(!w.is_building_enabled(PlayerId(1), BuildingKind::Farm));
        assert!(!w.is_building_enabled(PlayerId(1), BuildingKind::ALL[0]));
        assert!(w.is_building_enabled(PlayerId(0), BuildingKind::Farm));

        run(&mut w, &mut h, "DisableBuilding", &ints(&[0])).unwrap();
        assert!(BuildingKind::ALL.iter().all(|&k| !w.is_building_enabled(PlayerId(0), k)));
        run(&mut w, &mut h, "EnableBuilding", &ints(&[0])).unwrap();
        assert!(BuildingKind::ALL.iter().all(|&k| w.is_building_enabled(PlayerId(0), k)));

        let bad = [ScriptValue::Int(0), ScriptValue::from("castle in the sky")];
        assert!(matches!(
            run(&mut w, &mut h, "EnableBuilding", &bad),
            Err(ScriptError::BadArgument { index: 1, .. })
        ));
    }

    #[test]
    fn restricted_area_polygon() {
        let (mut w, mut h) = (world(), Inbox::default());
        run(&mut w, &mut h, "SetRestrictedArea", &ints(&[0, 2, 2, 10, 2, 10, 10, 2, 10])).unwrap();
        assert!(w.is_in_restricted_area(PlayerId(0), MapPoint::new(5, 5)));
        assert!(!w.is_in_restricted_area(PlayerId(0), MapPoint::new(12, 12)));
        assert!(matches!(
            run(&mut w, &mut h, "SetRestrictedArea", &ints(&[0, 2, 2, 10])),
            Err(ScriptError::BadArgument { .. })
        ));
        run(&mut w, &mut h, "SetRestrictedArea", &ints(&[0])).unwrap();
        assert!(w.is_in_restricted_area(PlayerId(0), MapPoint::new(12, 12)));
    }

    #[test]
    fn clear_resources_one_or_all() {
        let (mut w, mut h) = (world(), Inbox::default());
        let gold = Resource::new(ResourceKind::Gold, 5);
        w.set_resource(MapPoint::new(3, 3), gold);
        w.set_resource(MapPoint::new(7, 7), gold);
        // (19, 3) folds onto (3, 3).
        run(&mut w, &mut h, "ClearResources", &ints(&[19, 3])).unwrap();
        assert!(w.node(MapPoint::new(3, 3)).resource().is_empty());
        assert!(!w.node(MapPoint::new(7, 7)).resource().is_empty());
        run(&mut w, &mut h, "ClearResources", &[]).unwrap();
        assert!(w.node(MapPoint::new(7, 7)).resource().is_empty());
    }

    #[test]
    fn inventory_goes_through_the_host() {
        let (mut w, mut h) = (world(), Inbox::default());
        let out = run(&mut w, &mut h, "AddWares", &ints(&[0, 3, 10, 4, 2])).unwrap();
        assert_eq!(out, ScriptValue::Bool(true));
        assert_eq!(run(&mut w, &mut h, "GetWareCount", &ints(&[0, 3])), Ok(ScriptValue::Int(10)));
        let out = run(&mut w, &mut h, "AddWares", &ints(&[1, 3, 1])).unwrap();
        assert_eq!(out, ScriptValue::Bool(false));
        assert!(matches!(
            run(&mut w, &mut h, "AddWares", &ints(&[0, 3])),
            Err(ScriptError::BadArgument { .. })
        ));
        assert_eq!(
            run(&mut w, &mut h, "AddPeople", &ints(&[5, 1, 1])),
            Err(ScriptError::InvalidPlayer { player: 5 })
        );
    }

    #[test]
    fn messages_and_chat() {
        let (mut w, mut h) = (world(), Inbox::default());
        run(&mut w, &mut h, "Chat", &[ScriptValue::Int(-1), "hello".into()]).unwrap();
        run(&mut w, &mut h, "Chat", &[ScriptValue::Int(1), "psst".into()]).unwrap();
        assert_eq!(
            h.chats,
            vec![(None, String::from("hello")), (Some(PlayerId(1)), String::from("psst"))]
        );

        let args = [ScriptValue::Int(0), "look".into(), ScriptValue::Int(-1), ScriptValue::Int(2)];
        run(&mut w, &mut h, "PostMessageWithLocation", &args).unwrap();
        assert_eq!(
            h.messages,
            vec![(PlayerId(0), String::from("look"), Some(MapPoint::new(15, 2)))]
        );
        assert!(matches!(
            run(&mut w, &mut h, "PostMessage", &ints(&[0, 1])),
            Err(ScriptError::BadArgument { index: 1, .. })
        ));
    }

    #[test]
    fn session_queries() {
        let (mut w, mut h) = (world(), Inbox::default());
        w.advance_frame();
        w.advance_frame();
        assert_eq!(run(&mut w, &mut h, "GetGF", &[]), Ok(ScriptValue::Int(2)));
        assert_eq!(run(&mut w, &mut h, "GetPlayerCount", &[]), Ok(ScriptValue::Int(2)));
        assert!(matches!(
            run(&mut w, &mut h, "GetGF", &ints(&[1])),
            Err(ScriptError::Arity { got: 1, .. })
        ));
        assert_eq!(
            run(&mut w, &mut h, "Teleport", &[]),
            Err(ScriptError::UnknownCommand { name: "Teleport".into() })
        );
    }

    #[test]
    fn new_buildings_are_posted_once() {
        let (mut w, mut h) = (world(), Inbox::default());
        w.place_object(MapPoint::new(4, 4), Building::new(BuildingKind::Farm, PlayerId(0)))
            .unwrap();
        let count = [ScriptValue::Int(0), ScriptValue::from("farm")];
        assert_eq!(run(&mut w, &mut h, "GetBuildingCount", &count), Ok(ScriptValue::Int(1)));
        assert_eq!(run(&mut w, &mut h, "PostNewBuildings", &ints(&[0])), Ok(ScriptValue::Int(1)));
        assert_eq!(h.built, vec![NewBuilding { pos: MapPoint::new(4, 4), kind: BuildingKind::Farm }]);
        assert_eq!(run(&mut w, &mut h, "PostNewBuildings", &ints(&[0])), Ok(ScriptValue::Int(0)));
    }

    #[test]
    fn scenery_only_replaces_scenery() {
        let (mut w, mut h) = (world(), Inbox::default());
        let pt = MapPoint::new(6, 6);
        assert_eq!(run(&mut w, &mut h, "AddEnvObject", &ints(&[6, 6, 12])), Ok(true.into()));
        assert_eq!(w.object_kind(pt), ObjectKind::Environment);
        assert_eq!(run(&mut w, &mut h, "AddStaticObject", &ints(&[6, 6, 3, 1, 2])), Ok(true.into()));
        assert_eq!(w.object_kind(pt), ObjectKind::Static);
        assert_eq!(w.object_as::<StaticObject>(pt).map(|s| s.size), Some(2));

        w.place_object(MapPoint::new(9, 9), Tree { species: 1 }).unwrap();
        assert_eq!(run(&mut w, &mut h, "AddEnvObject", &ints(&[9, 9, 12])), Ok(false.into()));
        assert!(matches!(
            run(&mut w, &mut h, "AddStaticObject", &ints(&[2, 2, 3, 1, 5])),
            Err(ScriptError::BadArgument { index: 4, .. })
        ));
    }
}
