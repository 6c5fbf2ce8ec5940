#![warn(missing_docs)]
//! Persisted hotbar documents: the on-disk shape, conversion to and from
//! [`hotbar_core::HotbarManager`], and a JSON file backend.

mod adapter;
mod document;
mod file;

pub use adapter::{hydrate, serialize};
pub use document::{EntityRef, HotbarDocument, HotbarItemDocument, HotbarStoreModel, StoreError};
pub use file::JsonFileStore;
