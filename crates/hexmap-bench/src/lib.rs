//! Benchmark maps and utilities for the hexmap world model.
//!
//! - [`reference_map`]: 256x256 map with a lake, a mountain ridge and
//!   scattered harbor points
//! - [`reference_world`]: the reference map loaded for four players
//! - [`sample_points`]: deterministic point samples via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hexmap_core::{MapPoint, TerrainType};
use hexmap_world::{ConfigError, MapData, World, WorldConfig};

/// Side length of the reference map.
pub const REFERENCE_SIZE: u16 = 256;

/// Build the reference benchmark map.
///
/// Rows 100 to 139 hold a lake spanning columns 40 to 215, leaving land
/// bridges at both ends. Column 128 is a mountain ridge from row 10 to
/// row 80. Harbor points line both lake shores every 16 columns.
pub fn reference_map() -> MapData {
    let mut map = MapData::filled(REFERENCE_SIZE, REFERENCE_SIZE, TerrainType::Meadow1, 10);
    for y in 100..=139 {
        for x in 40..=215 {
            map.set_terrain(MapPoint::new(x, y), TerrainType::Water);
        }
    }
    for y in 10..=80 {
        map.set_terrain(MapPoint::new(128, y), TerrainType::Mountain1);
        map.node_mut(MapPoint::new(128, y)).altitude = 20;
    }
    for x in (48..=208).step_by(16) {
        map = map.with_harbor(MapPoint::new(x, 99)).with_harbor(MapPoint::new(x, 141));
    }
    map
}

/// Load [`reference_map`] for four players.
pub fn reference_world(seed: u64) -> Result<World, ConfigError> {
    let config = WorldConfig {
        player_count: 4,
        seed,
        ..WorldConfig::default()
    };
    World::new(config, reference_map())
}

/// `n` deterministic points on a `width` x `height` map.
pub fn sample_points(width: u16, height: u16, n: usize, seed: u64) -> Vec<MapPoint> {
    (0..n as u64)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            let x = (h >> 16) % width as u64;
            let y = (h >> 40) % height as u64;
            MapPoint::new(x as u16, y as u16)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_world_loads() {
        let world = reference_world(42).unwrap();
        assert_eq!(world.width(), REFERENCE_SIZE);
        assert_eq!(world.harbor_point_count(), 22);
        assert!(world.sea_count() >= 1);
    }

    #[test]
    fn samples_are_deterministic_and_in_bounds() {
        let a = sample_points(100, 80, 50, 7);
        assert_eq!(a, sample_points(100, 80, 50, 7));
        assert!(a.iter().all(|p| p.x < 100 && p.y < 80));
    }
}
