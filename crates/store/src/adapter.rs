//! Conversion between the persisted document and the in-memory set.

use hotbar_core::{Hotbar, HotbarId, HotbarManager, ItemRef, SlotTable};

use crate::document::{HotbarDocument, HotbarItemDocument, HotbarStoreModel};

/// Build a manager from a persisted document.
///
/// A missing or empty `hotbars` list yields a single empty "Default" hotbar.
/// A saved active id that does not name a loaded hotbar is replaced by the
/// first hotbar's id.
pub fn hydrate(doc: &HotbarStoreModel) -> HotbarManager {
    let hotbars = doc
        .hotbars
        .iter()
        .flatten()
        .map(hotbar_from_document)
        .collect();
    let active = doc.active_hotbar_id.clone().map(HotbarId::from);
    HotbarManager::from_parts(hotbars, active)
}

/// Snapshot a manager as a document ready to be written out.
pub fn serialize(manager: &HotbarManager) -> HotbarStoreModel {
    HotbarStoreModel {
        hotbars: Some(manager.hotbars().iter().map(hotbar_to_document).collect()),
        active_hotbar_id: Some(manager.active_id().to_string()),
    }
}

fn hotbar_from_document(doc: &HotbarDocument) -> Hotbar {
    let slots = doc
        .items
        .iter()
        .map(|item| item.clone().map(ItemRef::from))
        .collect();
    Hotbar::new(
        HotbarId::from(doc.id.as_str()),
        doc.name.clone(),
        SlotTable::from_slots(slots),
    )
}

fn hotbar_to_document(hotbar: &Hotbar) -> HotbarDocument {
    HotbarDocument {
        id: hotbar.id().to_string(),
        name: hotbar.name().to_string(),
        items: hotbar
            .slots()
            .iter()
            .map(|slot| slot.as_ref().map(HotbarItemDocument::from))
            .collect(),
    }
}
