//! A single named hotbar.

use crate::id::HotbarId;
use crate::resolve::EntityResolver;
use crate::slots::SlotTable;

/// Options for [`crate::HotbarManager::create`].
#[derive(Debug, Clone, Default)]
pub struct HotbarCreateOptions {
    /// Explicit id; a random one is generated when absent.
    pub id: Option<HotbarId>,
    /// Display name. Names are not unique.
    pub name: String,
    /// Initial slots; an empty default-size table when absent.
    pub slots: Option<SlotTable>,
}

impl HotbarCreateOptions {
    /// Options for a fresh, empty hotbar called `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Use `id` instead of a generated one.
    pub fn with_id(mut self, id: impl Into<HotbarId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Start from `slots` instead of an empty table.
    pub fn with_slots(mut self, slots: SlotTable) -> Self {
        self.slots = Some(slots);
        self
    }
}

/// A named, independently addressable slot table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotbar {
    id: HotbarId,
    name: String,
    slots: SlotTable,
}

impl Hotbar {
    /// Build a hotbar from explicit parts.
    pub fn new(id: HotbarId, name: impl Into<String>, slots: SlotTable) -> Self {
        Self {
            id,
            name: name.into(),
            slots,
        }
    }

    /// Build a hotbar from creation options, filling in defaults.
    pub fn from_options(options: HotbarCreateOptions) -> Self {
        Self {
            id: options.id.unwrap_or_else(HotbarId::generate),
            name: options.name,
            slots: options.slots.unwrap_or_default(),
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &HotbarId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the display name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The slot table.
    pub fn slots(&self) -> &SlotTable {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut SlotTable {
        &mut self.slots
    }

    /// Resolve every slot against `resolver`.
    ///
    /// Empty slots and uids the resolver does not know both map to `None`.
    pub fn resolve_slots<'r, R>(&self, resolver: &'r R) -> Vec<Option<&'r R::Entity>>
    where
        R: EntityResolver,
    {
        self.slots
            .iter()
            .map(|slot| slot.as_ref().and_then(|item| resolver.resolve(&item.uid)))
            .collect()
    }
}
