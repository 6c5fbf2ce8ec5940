//! The full set of hotbars and which one is active.
//!
//! A manager always holds at least one hotbar and its active id always
//! names one of them. Item operations go to the active hotbar.

use tracing::debug;

use crate::error::HotbarError;
use crate::events::{EventOutbox, HotbarEvent};
use crate::hotbar::{Hotbar, HotbarCreateOptions};
use crate::id::HotbarId;
use crate::item::ItemRef;

/// Name of the hotbar synthesized when there is nothing to load.
pub const DEFAULT_HOTBAR_NAME: &str = "Default";

/// Owner of every hotbar plus the active selection.
#[derive(Debug, Clone)]
pub struct HotbarManager {
    hotbars: Vec<Hotbar>,
    active_id: HotbarId,
    events: EventOutbox,
}

impl HotbarManager {
    /// A set holding a single empty "Default" hotbar.
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), None)
    }

    /// Assemble a set from loaded hotbars.
    ///
    /// An empty list is replaced by a single default hotbar, queued as
    /// [`HotbarEvent::HotbarCreated`] so its generated id gets persisted.
    /// `active` is used when it names one of the hotbars, otherwise the first
    /// hotbar is active.
    pub fn from_parts(mut hotbars: Vec<Hotbar>, active: Option<HotbarId>) -> Self {
        let mut events = EventOutbox::default();
        if hotbars.is_empty() {
            let hotbar = Hotbar::from_options(HotbarCreateOptions::named(DEFAULT_HOTBAR_NAME));
            debug!(id = %hotbar.id(), "synthesized default hotbar");
            events.push(HotbarEvent::HotbarCreated {
                id: hotbar.id().clone(),
            });
            hotbars.push(hotbar);
        }

        let active_id = active
            .filter(|id| hotbars.iter().any(|hotbar| hotbar.id() == id))
            .unwrap_or_else(|| hotbars[0].id().clone());

        Self {
            hotbars,
            active_id,
            events,
        }
    }

    /// Every hotbar in display order.
    pub fn hotbars(&self) -> &[Hotbar] {
        &self.hotbars
    }

    /// Number of hotbars; never zero.
    pub fn len(&self) -> usize {
        self.hotbars.len()
    }

    /// Whether the set has no hotbars.
    pub fn is_empty(&self) -> bool {
        self.hotbars.is_empty()
    }

    /// Append a new hotbar and return it. The active hotbar is unchanged.
    pub fn create(&mut self, options: HotbarCreateOptions) -> &Hotbar {
        let hotbar = Hotbar::from_options(options);
        debug!(id = %hotbar.id(), name = hotbar.name(), "created hotbar");
        self.events.push(HotbarEvent::HotbarCreated {
            id: hotbar.id().clone(),
        });
        self.hotbars.push(hotbar);
        &self.hotbars[self.hotbars.len() - 1]
    }

    /// Remove the hotbar `id`.
    ///
    /// Removing the active hotbar activates the first remaining one. The last
    /// hotbar can never be removed. Returns `Ok(None)` when `id` is unknown.
    pub fn remove(&mut self, id: &HotbarId) -> Result<Option<Hotbar>, HotbarError> {
        let Some(index) = self.index_of(id) else {
            return Ok(None);
        };
        if self.hotbars.len() == 1 {
            return Err(HotbarError::LastCollection { id: id.clone() });
        }

        let removed = self.hotbars.remove(index);
        debug!(id = %removed.id(), "removed hotbar");
        self.events.push(HotbarEvent::HotbarRemoved {
            id: removed.id().clone(),
        });

        if self.active_id == *removed.id() {
            self.active_id = self.hotbars[0].id().clone();
            self.events.push(HotbarEvent::ActiveChanged {
                id: self.active_id.clone(),
            });
        }
        Ok(Some(removed))
    }

    /// The active hotbar.
    pub fn active(&self) -> &Hotbar {
        &self.hotbars[self.active_index()]
    }

    /// Id of the active hotbar.
    pub fn active_id(&self) -> &HotbarId {
        &self.active_id
    }

    /// Position of the active hotbar in [`hotbars`](Self::hotbars).
    pub fn active_index(&self) -> usize {
        // The active id always resolves; see `set_active` and `remove`.
        self.index_of(&self.active_id).unwrap_or(0)
    }

    /// Activate `id`. Unknown ids are ignored and `false` is returned.
    pub fn set_active(&mut self, id: &HotbarId) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        if self.active_id != *id {
            self.active_id = id.clone();
            self.events.push(HotbarEvent::ActiveChanged { id: id.clone() });
        }
        true
    }

    /// Look up a hotbar by id.
    pub fn get_by_id(&self, id: &HotbarId) -> Option<&Hotbar> {
        self.hotbars.iter().find(|hotbar| hotbar.id() == id)
    }

    /// First hotbar called `name`.
    pub fn get_by_name(&self, name: &str) -> Option<&Hotbar> {
        self.hotbars.iter().find(|hotbar| hotbar.name() == name)
    }

    /// Change the display name of hotbar `id`.
    pub fn rename(&mut self, id: &HotbarId, name: impl Into<String>) -> Result<(), HotbarError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| HotbarError::UnknownHotbar { id: id.clone() })?;
        let name = name.into();
        if self.hotbars[index].name() != name {
            self.hotbars[index].rename(name);
            self.events.push(HotbarEvent::HotbarRenamed { id: id.clone() });
        }
        Ok(())
    }

    /// Pin `item` into the active hotbar.
    ///
    /// With `cell == None` the item takes the first empty slot, growing the
    /// table when it is full. With `Some(index)` it replaces whatever is in
    /// that slot; indices past the end are ignored. Items already pinned in
    /// the active hotbar are left alone.
    ///
    /// Returns the slot index the item landed in.
    pub fn add_item(&mut self, item: ItemRef, cell: Option<usize>) -> Option<usize> {
        let hotbar = self.active_mut();
        if hotbar.slots().contains(&item.uid) {
            return None;
        }

        let uid = item.uid.clone();
        let index = match cell {
            None => hotbar.slots_mut().place_auto(item),
            Some(index) => hotbar.slots_mut().place_at(index, item).then_some(index),
        }?;

        let event = HotbarEvent::ItemAdded {
            hotbar: hotbar.id().clone(),
            index,
            uid,
        };
        self.events.push(event);
        Some(index)
    }

    /// Unpin `uid` from the active hotbar, returning the cleared index.
    pub fn remove_item(&mut self, uid: &str) -> Option<usize> {
        let hotbar = self.active_mut();
        let (index, item) = hotbar.slots_mut().remove(uid)?;

        let event = HotbarEvent::ItemRemoved {
            hotbar: hotbar.id().clone(),
            index,
            uid: item.uid,
        };
        self.events.push(event);
        Some(index)
    }

    /// Drag the slot at `from` to `to` in the active hotbar.
    ///
    /// See [`crate::SlotTable::restack`].
    pub fn restack_items(&mut self, from: isize, to: isize) -> Result<bool, HotbarError> {
        let hotbar = self.active_mut();
        let moved = hotbar.slots_mut().restack(from, to)?;
        if moved {
            let event = HotbarEvent::ItemsRestacked {
                hotbar: hotbar.id().clone(),
                from: from as usize,
                to: to as usize,
            };
            self.events.push(event);
        }
        Ok(moved)
    }

    /// Whether any change is waiting to be drained.
    pub fn is_dirty(&self) -> bool {
        !self.events.is_empty()
    }

    /// Changes since the last drain, without draining them.
    pub fn pending_events(&self) -> &[HotbarEvent] {
        self.events.pending()
    }

    /// Drain every pending change.
    pub fn take_events(&mut self) -> Vec<HotbarEvent> {
        self.events.drain()
    }

    pub(crate) fn activate_index(&mut self, index: usize) {
        let id = self.hotbars[index].id().clone();
        if self.active_id != id {
            self.active_id = id.clone();
            self.events.push(HotbarEvent::ActiveChanged { id });
        }
    }

    fn active_mut(&mut self) -> &mut Hotbar {
        let index = self.active_index();
        &mut self.hotbars[index]
    }

    fn index_of(&self, id: &HotbarId) -> Option<usize> {
        self.hotbars.iter().position(|hotbar| hotbar.id() == id)
    }
}

impl Default for HotbarManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::{SlotTable, DEFAULT_HOTBAR_CELLS};

    fn manager_with(names: &[&str]) -> HotbarManager {
        let hotbars = names
            .iter()
            .map(|name| {
                Hotbar::from_options(HotbarCreateOptions::named(*name).with_id(format!("id-{name}")))
            })
            .collect();
        HotbarManager::from_parts(hotbars, None)
    }

    #[test]
    fn new_manager_has_single_default_hotbar() {
        let manager = HotbarManager::new();
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.active().name(), DEFAULT_HOTBAR_NAME);
        assert_eq!(manager.active().slots().len(), DEFAULT_HOTBAR_CELLS);
    }

    #[test]
    fn synthesized_default_is_queued_for_saving() {
        let mut manager = HotbarManager::new();
        let id = manager.active_id().clone();
        assert_eq!(
            manager.take_events(),
            vec![HotbarEvent::HotbarCreated { id }]
        );

        let loaded = HotbarManager::from_parts(
            vec![Hotbar::new("h1".into(), "One", SlotTable::new())],
            None,
        );
        assert!(!loaded.is_dirty());
    }

    #[test]
    fn from_parts_falls_back_to_first_hotbar() {
        let hotbars = vec![
            Hotbar::new("h1".into(), "One", SlotTable::new()),
            Hotbar::new("h2".into(), "Two", SlotTable::new()),
        ];
        let manager = HotbarManager::from_parts(hotbars.clone(), Some("missing".into()));
        assert_eq!(manager.active_id().as_str(), "h1");

        let manager = HotbarManager::from_parts(hotbars, Some("h2".into()));
        assert_eq!(manager.active_id().as_str(), "h2");
        assert_eq!(manager.active_index(), 1);
    }

    #[test]
    fn create_appends_without_activating() {
        let mut manager = HotbarManager::new();
        manager.take_events();
        let id = manager.create(HotbarCreateOptions::named("Work")).id().clone();
        assert_eq!(manager.len(), 2);
        assert_ne!(manager.active_id(), &id);
        assert_eq!(
            manager.take_events(),
            vec![HotbarEvent::HotbarCreated { id }]
        );
    }

    #[test]
    fn duplicate_names_are_allowed_and_lookup_finds_first() {
        let mut manager = manager_with(&["a"]);
        let second = manager
            .create(HotbarCreateOptions::named("a").with_id("other"))
            .id()
            .clone();
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get_by_name("a").map(|h| h.id().as_str()), Some("id-a"));
        assert!(manager.get_by_id(&second).is_some());
    }

    #[test]
    fn set_active_ignores_unknown_ids() {
        let mut manager = manager_with(&["a", "b"]);
        assert!(!manager.set_active(&"nope".into()));
        assert_eq!(manager.active_id().as_str(), "id-a");
        assert!(!manager.is_dirty());

        assert!(manager.set_active(&"id-b".into()));
        assert_eq!(manager.active().name(), "b");
        assert!(manager.is_dirty());
    }

    #[test]
    fn removing_active_falls_back_to_first() {
        let mut manager = manager_with(&["a", "b", "c"]);
        manager.set_active(&"id-c".into());
        manager.take_events();

        let removed = manager.remove(&"id-c".into()).unwrap();
        assert_eq!(removed.map(|h| h.name().to_string()), Some("c".to_string()));
        assert_eq!(manager.active_id().as_str(), "id-a");
        assert_eq!(
            manager.take_events(),
            vec![
                HotbarEvent::HotbarRemoved { id: "id-c".into() },
                HotbarEvent::ActiveChanged { id: "id-a".into() },
            ]
        );
    }

    #[test]
    fn removing_unknown_hotbar_is_noop() {
        let mut manager = manager_with(&["a", "b"]);
        assert_eq!(manager.remove(&"nope".into()), Ok(None));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn last_hotbar_cannot_be_removed() {
        let mut manager = manager_with(&["only"]);
        let err = manager.remove(&"id-only".into()).unwrap_err();
        assert_eq!(
            err,
            HotbarError::LastCollection {
                id: "id-only".into()
            }
        );
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.active_id().as_str(), "id-only");
    }

    #[test]
    fn add_item_targets_active_and_skips_duplicates() {
        let mut manager = manager_with(&["a", "b"]);
        assert_eq!(manager.add_item(ItemRef::new("cluster"), None), Some(0));
        assert_eq!(manager.add_item(ItemRef::new("cluster"), Some(5)), None);
        assert_eq!(manager.active().slots().occupied_count(), 1);
        assert_eq!(manager.hotbars()[1].slots().occupied_count(), 0);

        assert_eq!(manager.add_item(ItemRef::new("other"), Some(5)), Some(5));
        assert_eq!(manager.add_item(ItemRef::new("far"), Some(40)), None);

        let kinds: Vec<_> = manager.take_events().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec!["item_added", "item_added"]);
    }

    #[test]
    fn remove_item_twice_emits_once() {
        let mut manager = manager_with(&["a"]);
        manager.add_item(ItemRef::new("x"), None);
        manager.take_events();

        assert_eq!(manager.remove_item("x"), Some(0));
        assert_eq!(manager.remove_item("x"), None);
        assert_eq!(manager.take_events().len(), 1);
    }

    #[test]
    fn restack_items_reports_moves_only() {
        let mut manager = manager_with(&["a"]);
        manager.add_item(ItemRef::new("x"), None);
        manager.take_events();

        assert_eq!(manager.restack_items(0, 0), Ok(false));
        assert!(!manager.is_dirty());
        assert!(manager.restack_items(0, 12).is_err());
        assert!(!manager.is_dirty());

        assert_eq!(manager.restack_items(0, 3), Ok(true));
        assert_eq!(manager.active().slots().position_of("x"), Some(3));
        assert_eq!(
            manager.pending_events(),
            &[HotbarEvent::ItemsRestacked {
                hotbar: "id-a".into(),
                from: 0,
                to: 3,
            }]
        );
    }

    #[test]
    fn restack_between_empty_slots_is_silent() {
        let mut manager = manager_with(&["a"]);
        let before = manager.active().slots().clone();

        assert_eq!(manager.restack_items(0, 1), Ok(false));
        assert_eq!(manager.active().slots(), &before);
        assert!(!manager.is_dirty());
    }

    #[test]
    fn rename_updates_name_and_rejects_unknown() {
        let mut manager = manager_with(&["a"]);
        manager.rename(&"id-a".into(), "Renamed").unwrap();
        assert_eq!(manager.active().name(), "Renamed");
        assert!(matches!(
            manager.rename(&"nope".into(), "x"),
            Err(HotbarError::UnknownHotbar { .. })
        ));
    }
}
