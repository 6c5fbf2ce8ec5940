#![warn(missing_docs)]
//! Hotbar slot engine: sparse pinned-item tables, the set of hotbars that
//! own them, and the change events a persistence layer listens to.

mod error;
mod events;
mod hotbar;
mod id;
mod item;
mod manager;
mod resolve;
mod slots;
mod switcher;

pub use error::HotbarError;
pub use events::{EventOutbox, HotbarEvent};
pub use hotbar::{Hotbar, HotbarCreateOptions};
pub use id::HotbarId;
pub use item::{ItemParams, ItemRef};
pub use manager::{HotbarManager, DEFAULT_HOTBAR_NAME};
pub use resolve::EntityResolver;
pub use slots::{Direction, Slot, SlotTable, DEFAULT_HOTBAR_CELLS};
