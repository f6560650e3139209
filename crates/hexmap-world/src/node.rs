//! Per-node state.

use crate::object::{FowObject, FowRoads, MapObject};
use hexmap_core::{
    BuildingQuality, HarborId, PlayerId, Resource, RoadType, SeaId, TerrainType, Visibility,
};
use smallvec::SmallVec;

/// Road on one edge: the built value and what is currently shown, which
/// includes planned roads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoadSlot {
    pub(crate) built: RoadType,
    pub(crate) shown: RoadType,
}

impl RoadSlot {
    /// Value of the slot, with or without planned roads.
    pub fn get(&self, visual: bool) -> RoadType {
        if visual {
            self.shown
        } else {
            self.built
        }
    }
}

/// One player's knowledge of a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FogState {
    pub(crate) visibility: Visibility,
    pub(crate) object: FowObject,
    pub(crate) owner: Option<PlayerId>,
    pub(crate) roads: FowRoads,
    pub(crate) last_seen: u64,
}

impl FogState {
    /// Current visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Object seen when the node was last visible.
    pub fn object(&self) -> &FowObject {
        &self.object
    }

    /// Owner seen when the node was last visible.
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Frame at which the node was last visible.
    pub fn last_seen(&self) -> u64 {
        self.last_seen
    }
}

/// State of a single map node.
///
/// Fields are read through accessors; every change goes through
/// [`World`](crate::World) so derived state stays consistent.
#[derive(Clone, Debug)]
pub struct MapNode {
    pub(crate) terrain: [TerrainType; 2],
    pub(crate) altitude: u8,
    pub(crate) shadow: u8,
    /// Roads towards E, SE and SW.
    pub(crate) roads: [RoadSlot; 3],
    pub(crate) owner: Option<PlayerId>,
    pub(crate) object: Option<MapObject>,
    pub(crate) bq: BuildingQuality,
    pub(crate) bq_visual: BuildingQuality,
    pub(crate) sea_id: Option<SeaId>,
    pub(crate) harbor_id: Option<HarborId>,
    pub(crate) resource: Resource,
    pub(crate) fog: SmallVec<[FogState; 4]>,
}

impl MapNode {
    pub(crate) fn new(terrain: [TerrainType; 2], altitude: u8, resource: Resource, players: usize) -> Self {
        Self {
            terrain,
            altitude,
            shadow: 64,
            roads: [RoadSlot::default(); 3],
            owner: None,
            object: None,
            bq: BuildingQuality::Nothing,
            bq_visual: BuildingQuality::Nothing,
            sea_id: None,
            harbor_id: None,
            resource,
            fog: (0..players).map(|_| FogState::default()).collect(),
        }
    }

    /// Below-right triangle.
    pub fn t1(&self) -> TerrainType {
        self.terrain[0]
    }

    /// Right triangle.
    pub fn t2(&self) -> TerrainType {
        self.terrain[1]
    }

    /// Height.
    pub fn altitude(&self) -> u8 {
        self.altitude
    }

    /// Shading value derived from the surrounding heights.
    pub fn shadow(&self) -> u8 {
        self.shadow
    }

    /// Owning player.
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// The node's object, if any.
    pub fn object(&self) -> Option<&MapObject> {
        self.object.as_ref()
    }

    /// Cached building quality for the owner.
    pub fn bq(&self, visual: bool) -> BuildingQuality {
        if visual {
            self.bq_visual
        } else {
            self.bq
        }
    }

    /// Sea this node belongs to.
    pub fn sea_id(&self) -> Option<SeaId> {
        self.sea_id
    }

    /// Harbor point registered at this node.
    pub fn harbor_id(&self) -> Option<HarborId> {
        self.harbor_id
    }

    /// Resource deposit.
    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Road stored at this node for slot `0..3` (E, SE, SW).
    pub fn road_slot(&self, slot: usize) -> RoadSlot {
        self.roads[slot]
    }

    /// What `player` knows about this node, or `None` for a player outside
    /// the session.
    pub fn fog(&self, player: PlayerId) -> Option<&FogState> {
        self.fog.get(player.index())
    }
}
