//! Building quality tiers.

/// What, if anything, may be built at a node.
///
/// The size tiers are ordered `Nothing < Flag < Hut < House < Castle`.
/// `Mine` and `Harbor` are special tiers: a mine spot allows only mines and
/// flags, a harbor spot allows everything a castle spot does plus harbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuildingQuality {
    /// Nothing may be placed.
    #[default]
    Nothing,
    /// Only a flag.
    Flag,
    /// Small buildings.
    Hut,
    /// Medium buildings.
    House,
    /// Large buildings.
    Castle,
    /// Mines.
    Mine,
    /// Large buildings and harbors.
    Harbor,
}

impl BuildingQuality {
    /// True if a spot of this quality can host something that needs `needed`.
    pub fn allows(self, needed: BuildingQuality) -> bool {
        use BuildingQuality::*;
        match (self, needed) {
            (_, Nothing) => true,
            (Nothing, _) => false,
            (Mine, Mine | Flag) => true,
            (Mine, _) | (_, Mine) => false,
            (Harbor, _) => true,
            (_, Harbor) => false,
            (have, need) => have >= need,
        }
    }

    /// True for hut, house and castle.
    pub fn is_building_size(self) -> bool {
        matches!(
            self,
            BuildingQuality::Hut | BuildingQuality::House | BuildingQuality::Castle
        )
    }

    /// Lower this quality to at most `limit`.
    ///
    /// A mine spot stays a mine unless capped below hut size.
    pub fn capped(self, limit: BuildingQuality) -> BuildingQuality {
        match self {
            BuildingQuality::Mine if limit >= BuildingQuality::Hut => BuildingQuality::Mine,
            BuildingQuality::Mine => limit,
            other => other.min(limit),
        }
    }
}
