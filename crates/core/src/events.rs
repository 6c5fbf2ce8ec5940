//! Change notifications emitted by [`crate::HotbarManager`].
//!
//! The manager never talks to storage. Instead every state change is queued
//! here and the host drains the queue after each action, re-serializing the
//! set whenever anything was emitted.

use serde::Serialize;

use crate::id::HotbarId;

/// A state change that a persistence layer or UI may want to observe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HotbarEvent {
    /// An item was pinned into a slot.
    ItemAdded {
        /// Hotbar that changed.
        hotbar: HotbarId,
        /// Slot the item landed in.
        index: usize,
        /// Uid of the pinned entity.
        uid: String,
    },
    /// An item was unpinned.
    ItemRemoved {
        /// Hotbar that changed.
        hotbar: HotbarId,
        /// Slot that was cleared.
        index: usize,
        /// Uid of the unpinned entity.
        uid: String,
    },
    /// A slot was dragged to a new position.
    ItemsRestacked {
        /// Hotbar that changed.
        hotbar: HotbarId,
        /// Original position.
        from: usize,
        /// New position.
        to: usize,
    },
    /// A hotbar was added to the set.
    HotbarCreated {
        /// New hotbar.
        id: HotbarId,
    },
    /// A hotbar was removed from the set.
    HotbarRemoved {
        /// Removed hotbar.
        id: HotbarId,
    },
    /// A hotbar's display name changed.
    HotbarRenamed {
        /// Renamed hotbar.
        id: HotbarId,
    },
    /// A different hotbar became active.
    ActiveChanged {
        /// Newly active hotbar.
        id: HotbarId,
    },
}

impl HotbarEvent {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HotbarEvent::ItemAdded { .. } => "item_added",
            HotbarEvent::ItemRemoved { .. } => "item_removed",
            HotbarEvent::ItemsRestacked { .. } => "items_restacked",
            HotbarEvent::HotbarCreated { .. } => "hotbar_created",
            HotbarEvent::HotbarRemoved { .. } => "hotbar_removed",
            HotbarEvent::HotbarRenamed { .. } => "hotbar_renamed",
            HotbarEvent::ActiveChanged { .. } => "active_changed",
        }
    }
}

/// Queue of events not yet handed to the host.
#[derive(Debug, Clone, Default)]
pub struct EventOutbox {
    pending: Vec<HotbarEvent>,
}

impl EventOutbox {
    /// Queue an event.
    pub fn push(&mut self, event: HotbarEvent) {
        self.pending.push(event);
    }

    /// Events queued since the last drain.
    pub fn pending(&self) -> &[HotbarEvent] {
        &self.pending
    }

    /// Whether anything changed since the last drain.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every queued event.
    pub fn drain(&mut self) -> Vec<HotbarEvent> {
        std::mem::take(&mut self.pending)
    }
}
