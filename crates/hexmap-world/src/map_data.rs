//! Map input handed over by the map loader.

use hexmap_core::{MapPoint, Resource, TerrainType};

/// Initial state of one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeInit {
    /// The node's two triangles: `[t1, t2]`, below-right and right.
    pub terrain: [TerrainType; 2],
    /// Height.
    pub altitude: u8,
    /// Resource deposit.
    pub resource: Resource,
}

impl Default for NodeInit {
    fn default() -> Self {
        Self {
            terrain: [TerrainType::Meadow1; 2],
            altitude: 10,
            resource: Resource::NONE,
        }
    }
}

/// A fully parsed map: dimensions, node list (row-major) and the registered
/// harbor positions. Harbor ids are assigned in list order, starting at 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapData {
    /// Number of columns.
    pub width: u16,
    /// Number of rows.
    pub height: u16,
    /// `width * height` nodes, row-major.
    pub nodes: Vec<NodeInit>,
    /// Harbor positions.
    pub harbors: Vec<MapPoint>,
}

impl MapData {
    /// A map where every triangle has `terrain` and every node `altitude`.
    pub fn filled(width: u16, height: u16, terrain: TerrainType, altitude: u8) -> Self {
        let node = NodeInit {
            terrain: [terrain; 2],
            altitude,
            resource: Resource::NONE,
        };
        Self {
            width,
            height,
            nodes: vec![node; width as usize * height as usize],
            harbors: Vec::new(),
        }
    }

    /// Mutable access to the node at `pt`.
    ///
    /// # Panics
    ///
    /// Panics if `pt` is outside the map.
    pub fn node_mut(&mut self, pt: MapPoint) -> &mut NodeInit {
        assert!(pt.x < self.width && pt.y < self.height, "{pt} outside map");
        &mut self.nodes[pt.y as usize * self.width as usize + pt.x as usize]
    }

    /// Set both triangles of the node at `pt`.
    pub fn set_terrain(&mut self, pt: MapPoint, terrain: TerrainType) {
        self.node_mut(pt).terrain = [terrain; 2];
    }

    /// Set both triangles of every node in `rows`.
    pub fn set_rows(&mut self, rows: std::ops::RangeInclusive<u16>, terrain: TerrainType) {
        for y in rows {
            for x in 0..self.width {
                self.set_terrain(MapPoint::new(x, y), terrain);
            }
        }
    }

    /// Register a harbor position.
    pub fn with_harbor(mut self, pos: MapPoint) -> Self {
        self.harbors.push(pos);
        self
    }
}
