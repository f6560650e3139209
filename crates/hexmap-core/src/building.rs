//! Building kinds and their static properties.

use crate::quality::BuildingQuality;
use std::fmt;

/// The closed set of building kinds.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuildingKind {
    Headquarters,
    Barracks,
    Guardhouse,
    Watchtower,
    Fortress,
    GraniteMine,
    CoalMine,
    IronMine,
    GoldMine,
    LookoutTower,
    Catapult,
    Woodcutter,
    Fishery,
    Quarry,
    Forester,
    Slaughterhouse,
    Hunter,
    Brewery,
    Armory,
    Metalworks,
    Ironsmelter,
    Charburner,
    PigFarm,
    Storehouse,
    Mill,
    Bakery,
    Sawmill,
    Mint,
    Well,
    Shipyard,
    Farm,
    DonkeyBreeder,
    HarborBuilding,
}

impl BuildingKind {
    /// Every kind in declaration order; the position is the script index.
    pub const ALL: [BuildingKind; 33] = [
        BuildingKind::Headquarters,
        BuildingKind::Barracks,
        BuildingKind::Guardhouse,
        BuildingKind::Watchtower,
        BuildingKind::Fortress,
        BuildingKind::GraniteMine,
        BuildingKind::CoalMine,
        BuildingKind::IronMine,
        BuildingKind::GoldMine,
        BuildingKind::LookoutTower,
        BuildingKind::Catapult,
        BuildingKind::Woodcutter,
        BuildingKind::Fishery,
        BuildingKind::Quarry,
        BuildingKind::Forester,
        BuildingKind::Slaughterhouse,
        BuildingKind::Hunter,
        BuildingKind::Brewery,
        BuildingKind::Armory,
        BuildingKind::Metalworks,
        BuildingKind::Ironsmelter,
        BuildingKind::Charburner,
        BuildingKind::PigFarm,
        BuildingKind::Storehouse,
        BuildingKind::Mill,
        BuildingKind::Bakery,
        BuildingKind::Sawmill,
        BuildingKind::Mint,
        BuildingKind::Well,
        BuildingKind::Shipyard,
        BuildingKind::Farm,
        BuildingKind::DonkeyBreeder,
        BuildingKind::HarborBuilding,
    ];

    /// The kind at `index` in [`BuildingKind::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position in [`BuildingKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a lower-case name as produced by [`BuildingKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Lower-case identifier.
    pub fn name(self) -> &'static str {
        use BuildingKind::*;
        match self {
            Headquarters => "headquarters",
            Barracks => "barracks",
            Guardhouse => "guardhouse",
            Watchtower => "watchtower",
            Fortress => "fortress",
            GraniteMine => "granitemine",
            CoalMine => "coalmine",
            IronMine => "ironmine",
            GoldMine => "goldmine",
            LookoutTower => "lookouttower",
            Catapult => "catapult",
            Woodcutter => "woodcutter",
            Fishery => "fishery",
            Quarry => "quarry",
            Forester => "forester",
            Slaughterhouse => "slaughterhouse",
            Hunter => "hunter",
            Brewery => "brewery",
            Armory => "armory",
            Metalworks => "metalworks",
            Ironsmelter => "ironsmelter",
            Charburner => "charburner",
            PigFarm => "pigfarm",
            Storehouse => "storehouse",
            Mill => "mill",
            Bakery => "bakery",
            Sawmill => "sawmill",
            Mint => "mint",
            Well => "well",
            Shipyard => "shipyard",
            Farm => "farm",
            DonkeyBreeder => "donkeybreeder",
            HarborBuilding => "harborbuilding",
        }
    }

    /// The building quality a site needs for this kind.
    pub fn size(self) -> BuildingQuality {
        use BuildingKind::*;
        match self {
            GraniteMine | CoalMine | IronMine | GoldMine => BuildingQuality::Mine,
            HarborBuilding => BuildingQuality::Harbor,
            Headquarters | Fortress | PigFarm | Farm | DonkeyBreeder | Charburner => {
                BuildingQuality::Castle
            }
            Barracks | Guardhouse | LookoutTower | Catapult | Woodcutter | Fishery | Quarry
            | Forester | Hunter | Well => BuildingQuality::Hut,
            _ => BuildingQuality::House,
        }
    }

    /// Buildings that hold soldiers or define territory.
    pub fn is_military(self) -> bool {
        matches!(
            self,
            BuildingKind::Headquarters
                | BuildingKind::Barracks
                | BuildingKind::Guardhouse
                | BuildingKind::Watchtower
                | BuildingKind::Fortress
                | BuildingKind::HarborBuilding
        )
    }

    /// Radius of the territory claimed by this building (0 for civil ones).
    pub fn military_radius(self) -> u32 {
        match self {
            BuildingKind::Barracks => 8,
            BuildingKind::Guardhouse => 9,
            BuildingKind::Watchtower => 10,
            BuildingKind::Fortress => 11,
            BuildingKind::Headquarters => 9,
            BuildingKind::HarborBuilding => 8,
            _ => 0,
        }
    }

    /// How far the building lets its owner see.
    pub fn vision_radius(self) -> u32 {
        match self {
            BuildingKind::LookoutTower => 20,
            kind if kind.military_radius() > 0 => kind.military_radius() + 3,
            _ => 4,
        }
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
