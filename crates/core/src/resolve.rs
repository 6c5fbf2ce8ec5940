//! Lazy lookup of pinned uids in an external entity catalog.

use std::collections::{BTreeMap, HashMap};

/// Source of live entities for pinned uids.
///
/// Hotbars only store uids. Resolution happens when the host needs the
/// entity, and a uid the catalog no longer knows simply resolves to `None`.
pub trait EntityResolver {
    /// Entity type handed back by the catalog.
    type Entity;

    /// Look up the entity with `uid`.
    fn resolve(&self, uid: &str) -> Option<&Self::Entity>;
}

impl<E> EntityResolver for HashMap<String, E> {
    type Entity = E;

    fn resolve(&self, uid: &str) -> Option<&E> {
        self.get(uid)
    }
}

impl<E> EntityResolver for BTreeMap<String, E> {
    type Entity = E;

    fn resolve(&self, uid: &str) -> Option<&E> {
        self.get(uid)
    }
}
