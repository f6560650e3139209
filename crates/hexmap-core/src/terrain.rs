//! Terrain triangles and node resources.

/// What a single terrain triangle allows to be built next to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerrainBq {
    /// Nothing can be placed on a node touching this triangle.
    Danger,
    /// Contributes nothing (water, swamp).
    Nothing,
    /// Flags only.
    Flag,
    /// Mines.
    Mine,
    /// Any building size.
    Castle,
}

/// The terrain of one map triangle.
///
/// Each node owns two triangles; the six triangles around a node come from
/// the node itself and its west, north-west and north-east neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TerrainType {
    /// Impassable snow.
    Snow,
    /// Lava.
    Lava,
    /// Navigable water.
    Water,
    /// Water ships cannot use.
    WaterNoShip,
    /// Swamp.
    Swamp,
    /// Desert.
    Desert,
    /// Mountain, first variant.
    Mountain1,
    /// Mountain, second variant.
    Mountain2,
    /// Mountain, third variant.
    Mountain3,
    /// Mountain, fourth variant.
    Mountain4,
    /// Buildable meadow high up in the mountains.
    MountainMeadow,
    /// Savannah.
    Savannah,
    /// Meadow, first variant.
    #[default]
    Meadow1,
    /// Meadow, second variant.
    Meadow2,
    /// Meadow, third variant.
    Meadow3,
    /// Meadow with flowers.
    MeadowFlowers,
    /// Steppe.
    Steppe,
    /// Shallow water that can be walked on and built on.
    BuildableWater,
    /// Mountain that can be built on like a meadow.
    BuildableMountain,
}

impl TerrainType {
    /// Building contribution of this triangle.
    pub fn bq(self) -> TerrainBq {
        use TerrainType::*;
        match self {
            Snow | Lava => TerrainBq::Danger,
            Water | WaterNoShip | Swamp => TerrainBq::Nothing,
            Desert => TerrainBq::Flag,
            Mountain1 | Mountain2 | Mountain3 | Mountain4 => TerrainBq::Mine,
            MountainMeadow | Savannah | Meadow1 | Meadow2 | Meadow3 | MeadowFlowers | Steppe
            | BuildableWater | BuildableMountain => TerrainBq::Castle,
        }
    }

    /// Whether figures can walk across this triangle.
    pub fn is_walkable(self) -> bool {
        !matches!(
            self,
            TerrainType::Snow
                | TerrainType::Lava
                | TerrainType::Water
                | TerrainType::WaterNoShip
                | TerrainType::Swamp
        )
    }

    /// Whether ships can sail across this triangle.
    pub fn is_shippable(self) -> bool {
        self == TerrainType::Water
    }

    /// Whether the triangle is any kind of water.
    pub fn is_water(self) -> bool {
        matches!(
            self,
            TerrainType::Water | TerrainType::WaterNoShip | TerrainType::BuildableWater
        )
    }
}

/// Kind of natural resource found at a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// No resource.
    #[default]
    Nothing,
    /// Gold ore.
    Gold,
    /// Iron ore.
    Iron,
    /// Coal.
    Coal,
    /// Granite.
    Granite,
    /// Ground water.
    Water,
    /// Fish.
    Fish,
}

/// A resource deposit: what and how much.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Resource {
    /// Deposit kind.
    pub kind: ResourceKind,
    /// Remaining amount.
    pub amount: u8,
}

impl Resource {
    /// The empty deposit.
    pub const NONE: Resource = Resource {
        kind: ResourceKind::Nothing,
        amount: 0,
    };

    /// Create a deposit.
    pub const fn new(kind: ResourceKind, amount: u8) -> Self {
        Self { kind, amount }
    }

    /// True if nothing is left to extract.
    pub fn is_empty(self) -> bool {
        self.kind == ResourceKind::Nothing || self.amount == 0
    }
}
