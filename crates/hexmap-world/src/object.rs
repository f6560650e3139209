//! Objects that can occupy a node.
//!
//! A node holds at most one [`MapObject`]. The set of object kinds is
//! closed; code that needs a specific kind asks for it through
//! [`ObjectRole`] and gets `None` on mismatch.

use hexmap_core::{BuildingKind, BuildingQuality, PlayerId, RoadType, SoldierId};

/// How an object restricts what may be placed on and around its node.
///
/// Ordered roughly by footprint; the four building sizes are contiguous.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockingManner {
    /// Does not block anything.
    NotBlocking,
    /// A tree.
    Tree,
    /// A granite block.
    Granite,
    /// A flag.
    Flag,
    /// A charcoal pile.
    CharburnerPile,
    /// Blocks only its own node.
    Single,
    /// A small building.
    Hut,
    /// A medium building.
    House,
    /// A large building.
    Castle,
    /// A mine.
    Mine,
}

impl BlockingManner {
    /// True for the building footprints.
    pub fn is_building(self) -> bool {
        matches!(
            self,
            BlockingManner::Hut | BlockingManner::House | BlockingManner::Castle | BlockingManner::Mine
        )
    }

    /// True if figures may walk onto a node with this blocking manner.
    pub fn is_passable(self) -> bool {
        matches!(
            self,
            BlockingManner::NotBlocking | BlockingManner::Tree | BlockingManner::Flag
        )
    }

    fn for_building(kind: BuildingKind) -> Self {
        match kind.size() {
            BuildingQuality::Mine => BlockingManner::Mine,
            BuildingQuality::Castle | BuildingQuality::Harbor => BlockingManner::Castle,
            BuildingQuality::House => BlockingManner::House,
            _ => BlockingManner::Hut,
        }
    }
}

/// Discriminant of a node's content, with `Nothing` for empty nodes.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Nothing,
    Tree,
    Granite,
    Flag,
    Building,
    BuildingSite,
    CharburnerPile,
    Environment,
    Static,
}

/// A tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    /// Species index.
    pub species: u8,
}

/// A granite block that stonemasons can quarry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Granite {
    /// Remaining size, 0 to 5.
    pub size: u8,
}

/// A road flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flag {
    /// Owning player.
    pub owner: PlayerId,
}

/// A soldier stationed in a building.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Soldier {
    /// Stable identity.
    pub id: SoldierId,
    /// Rank, 0 to 4.
    pub rank: u8,
}

/// A finished building.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Building {
    /// Which building.
    pub kind: BuildingKind,
    /// Owning player.
    pub owner: PlayerId,
    /// Soldiers inside, in arrival order.
    pub soldiers: Vec<Soldier>,
}

impl Building {
    /// A building with no soldiers.
    pub fn new(kind: BuildingKind, owner: PlayerId) -> Self {
        Self {
            kind,
            owner,
            soldiers: Vec::new(),
        }
    }

    /// Add a garrison.
    pub fn with_soldiers(mut self, soldiers: impl IntoIterator<Item = Soldier>) -> Self {
        self.soldiers.extend(soldiers);
        self
    }
}

/// A building under construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildingSite {
    /// The building being built.
    pub kind: BuildingKind,
    /// Owning player.
    pub owner: PlayerId,
}

/// A charcoal pile tended by a charburner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharburnerPile {
    /// Owning player.
    pub owner: PlayerId,
}

/// Decoration that does not block anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvObject {
    /// Graphic id.
    pub id: u16,
    /// Graphic file.
    pub file: u16,
}

/// Static scenery, optionally blocking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticObject {
    /// Graphic id.
    pub id: u16,
    /// Graphic file.
    pub file: u16,
    /// 0: decoration, 1: blocks its node, 2: blocks like a large building.
    pub size: u8,
}

/// Content of a node.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapObject {
    Tree(Tree),
    Granite(Granite),
    Flag(Flag),
    Building(Building),
    BuildingSite(BuildingSite),
    CharburnerPile(CharburnerPile),
    Environment(EnvObject),
    Static(StaticObject),
}

impl MapObject {
    /// Discriminant.
    pub fn kind(&self) -> ObjectKind {
        match self {
            MapObject::Tree(_) => ObjectKind::Tree,
            MapObject::Granite(_) => ObjectKind::Granite,
            MapObject::Flag(_) => ObjectKind::Flag,
            MapObject::Building(_) => ObjectKind::Building,
            MapObject::BuildingSite(_) => ObjectKind::BuildingSite,
            MapObject::CharburnerPile(_) => ObjectKind::CharburnerPile,
            MapObject::Environment(_) => ObjectKind::Environment,
            MapObject::Static(_) => ObjectKind::Static,
        }
    }

    /// How this object blocks its surroundings.
    pub fn blocking_manner(&self) -> BlockingManner {
        match self {
            MapObject::Tree(_) => BlockingManner::Tree,
            MapObject::Granite(_) => BlockingManner::Granite,
            MapObject::Flag(_) => BlockingManner::Flag,
            MapObject::Building(b) => BlockingManner::for_building(b.kind),
            MapObject::BuildingSite(s) => BlockingManner::for_building(s.kind),
            MapObject::CharburnerPile(_) => BlockingManner::CharburnerPile,
            MapObject::Environment(_) => BlockingManner::NotBlocking,
            MapObject::Static(s) => match s.size {
                0 => BlockingManner::NotBlocking,
                1 => BlockingManner::Single,
                _ => BlockingManner::Castle,
            },
        }
    }

    /// Owning player, for player objects.
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            MapObject::Flag(f) => Some(f.owner),
            MapObject::Building(b) => Some(b.owner),
            MapObject::BuildingSite(s) => Some(s.owner),
            MapObject::CharburnerPile(c) => Some(c.owner),
            _ => None,
        }
    }

    /// Kind of the building or building site.
    pub fn building_kind(&self) -> Option<BuildingKind> {
        match self {
            MapObject::Building(b) => Some(b.kind),
            MapObject::BuildingSite(s) => Some(s.kind),
            _ => None,
        }
    }

    /// Military buildings and their construction sites.
    pub fn is_military(&self) -> bool {
        self.building_kind().is_some_and(BuildingKind::is_military)
    }
}

/// Typed access to one kind of [`MapObject`].
pub trait ObjectRole: Sized {
    /// Borrow `object` as `Self` if it is of this kind.
    fn from_object(object: &MapObject) -> Option<&Self>;
    /// Mutably borrow `object` as `Self` if it is of this kind.
    fn from_object_mut(object: &mut MapObject) -> Option<&mut Self>;
}

macro_rules! object_role {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl ObjectRole for $ty {
                fn from_object(object: &MapObject) -> Option<&Self> {
                    match object {
                        MapObject::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_object_mut(object: &mut MapObject) -> Option<&mut Self> {
                    match object {
                        MapObject::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for MapObject {
                fn from(inner: $ty) -> Self {
                    MapObject::$variant(inner)
                }
            }
        )*
    };
}

object_role! {
    Tree => Tree,
    Granite => Granite,
    Flag => Flag,
    Building => Building,
    BuildingSite => BuildingSite,
    CharburnerPile => CharburnerPile,
    Environment => EnvObject,
    Static => StaticObject,
}

/// What a player remembers of a node it no longer sees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FowObject {
    /// Nothing remembered.
    #[default]
    Nothing,
    /// A tree.
    Tree,
    /// A granite block.
    Granite,
    /// A flag.
    Flag {
        /// Its owner.
        owner: PlayerId,
    },
    /// A building.
    Building {
        /// Its kind.
        kind: BuildingKind,
        /// Its owner.
        owner: PlayerId,
    },
    /// A construction site.
    BuildingSite {
        /// What was being built.
        kind: BuildingKind,
        /// Its owner.
        owner: PlayerId,
    },
    /// Scenery.
    Scenery,
}

impl FowObject {
    /// Snapshot of `object`.
    pub fn of(object: Option<&MapObject>) -> Self {
        match object {
            None => FowObject::Nothing,
            Some(MapObject::Tree(_)) => FowObject::Tree,
            Some(MapObject::Granite(_)) => FowObject::Granite,
            Some(MapObject::Flag(f)) => FowObject::Flag { owner: f.owner },
            Some(MapObject::Building(b)) => FowObject::Building {
                kind: b.kind,
                owner: b.owner,
            },
            Some(MapObject::BuildingSite(s)) => FowObject::BuildingSite {
                kind: s.kind,
                owner: s.owner,
            },
            Some(_) => FowObject::Scenery,
        }
    }
}

/// Remembered roads of a node, same slot layout as the live ones.
pub type FowRoads = [RoadType; 3];
