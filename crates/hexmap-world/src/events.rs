//! Outward notifications: script events and terrain observer hooks.

use crossbeam_channel::{unbounded, Receiver, Sender};
use hexmap_core::{MapPoint, PlayerId, ResourceKind};
use tracing::debug;

/// One-way notification for the scripting collaborator, emitted after the
/// corresponding state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptEvent {
    /// The session started.
    Start,
    /// A game frame elapsed.
    Frame(u64),
    /// `player` saw `pt` for the first time.
    Explored {
        /// Exploring player.
        player: PlayerId,
        /// Explored node.
        pt: MapPoint,
    },
    /// `player` took ownership of `pt`.
    Occupied {
        /// New owner.
        player: PlayerId,
        /// Occupied node.
        pt: MapPoint,
    },
    /// A geologist of `player` found a deposit.
    ResourceFound {
        /// Finding player.
        player: PlayerId,
        /// Location.
        pt: MapPoint,
        /// Deposit kind.
        kind: ResourceKind,
        /// Deposit amount.
        quantity: u8,
    },
}

/// Fan-out of [`ScriptEvent`]s to any number of subscribers.
///
/// Subscribers whose receiver was dropped are pruned on the next emit.
#[derive(Debug, Default)]
pub(crate) struct EventBus {
    subscribers: Vec<Sender<ScriptEvent>>,
}

impl EventBus {
    pub(crate) fn subscribe(&mut self) -> Receiver<ScriptEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub(crate) fn emit(&mut self, event: ScriptEvent) {
        if self.subscribers.is_empty() {
            return;
        }
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            debug!(dropped, "pruned disconnected event subscribers");
        }
    }
}

/// Hooks a renderer or game-logic layer implements to react to terrain
/// changes. Called synchronously after the triggering mutation.
pub trait TerrainObserver: Send + Sync {
    /// The altitude at `pt` changed; shading of `pt` and its neighbours
    /// was already recomputed.
    fn altitude_changed(&mut self, pt: MapPoint) {
        let _ = pt;
    }

    /// What `player` sees at `pt` changed.
    fn visibility_changed(&mut self, pt: MapPoint, player: PlayerId) {
        let _ = (pt, player);
    }
}
