//! Ready-made maps.
//!
//! - [`meadow_map`]: flat grassland, nothing else.
//! - [`coastal_map`]: a 10x10 map with a sea in the north and one harbor.
//! - [`two_seas_map`]: two separate seas, each with harbors.

use hexmap_core::{MapPoint, TerrainType};
use hexmap_world::{MapData, World, WorldConfig};

/// Altitude of every fixture node.
pub const BASE_ALTITUDE: u8 = 10;

/// Flat meadow.
pub fn meadow_map(width: u16, height: u16) -> MapData {
    MapData::filled(width, height, TerrainType::Meadow1, BASE_ALTITUDE)
}

/// Water on rows 0 to 4 of a 10x10 map, giving a 40-node sea on rows 1
/// to 4, and a harbor point at [`COASTAL_HARBOR`].
pub fn coastal_map() -> MapData {
    let mut map = meadow_map(10, 10);
    map.set_rows(0..=4, TerrainType::Water);
    map.with_harbor(COASTAL_HARBOR)
}

/// Harbor point of [`coastal_map`].
pub const COASTAL_HARBOR: MapPoint = MapPoint::new(4, 6);

/// A 32x32 map with water on rows 0 to 4 and rows 16 to 20. Harbors 1 and
/// 2 lie on the northern sea, harbor 3 on the southern one.
pub fn two_seas_map() -> MapData {
    let mut map = meadow_map(32, 32);
    map.set_rows(0..=4, TerrainType::Water);
    map.set_rows(16..=20, TerrainType::Water);
    map.with_harbor(MapPoint::new(4, 6))
        .with_harbor(MapPoint::new(20, 6))
        .with_harbor(MapPoint::new(10, 22))
}

/// Default configuration for `players` players.
pub fn config(players: u8) -> WorldConfig {
    WorldConfig {
        player_count: players,
        ..WorldConfig::default()
    }
}

/// Build a world, panicking on invalid input.
pub fn world(map: MapData, config: WorldConfig) -> World {
    World::new(config, map).expect("fixture map is valid")
}

/// A two-player meadow world.
pub fn meadow_world(width: u16, height: u16) -> World {
    world(meadow_map(width, height), config(2))
}
