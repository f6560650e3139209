//! Node ownership and the territory classification derived from it.

use crate::error::WorldError;
use crate::events::ScriptEvent;
use crate::world::World;
use hexmap_core::{MapPoint, PlayerId};

impl World {
    /// Owner of `pt`.
    pub fn owner(&self, pt: MapPoint) -> Option<PlayerId> {
        self.node(pt).owner
    }

    /// True if `pt` and all six neighbours share the same owner.
    pub fn is_player_territory(&self, pt: MapPoint) -> bool {
        let Some(owner) = self.node(pt).owner else {
            return false;
        };
        self.torus
            .neighbours(pt)
            .iter()
            .all(|&n| self.node(n).owner == Some(owner))
    }

    /// True for owned nodes on the edge of their owner's territory.
    pub fn is_border(&self, pt: MapPoint) -> bool {
        self.node(pt).owner.is_some() && !self.is_player_territory(pt)
    }

    /// Change the owner of one node.
    pub fn set_owner(&mut self, pt: MapPoint, owner: Option<PlayerId>) -> Result<(), WorldError> {
        self.set_owners([(pt, owner)])
    }

    /// Change the owners of many nodes at once.
    ///
    /// Every node that changes hands to a player emits an "occupied" event.
    /// Building qualities are refreshed once for the whole batch.
    pub fn set_owners<I>(&mut self, changes: I) -> Result<(), WorldError>
    where
        I: IntoIterator<Item = (MapPoint, Option<PlayerId>)>,
    {
        let changes: Vec<_> = changes.into_iter().collect();
        for &(_, owner) in &changes {
            if let Some(player) = owner {
                self.check_player(player)?;
            }
        }
        let mut touched = Vec::with_capacity(changes.len());
        for (pt, owner) in changes {
            let node = self.node_mut(pt);
            if node.owner == owner {
                continue;
            }
            node.owner = owner;
            touched.push(pt);
            if let Some(player) = owner {
                self.events.emit(ScriptEvent::Occupied { player, pt });
            }
        }
        self.refresh_bq_around(touched);
        Ok(())
    }
}
