//! Serde model of the persisted hotbar store.
//!
//! ```json
//! {
//!   "hotbars": [
//!     { "id": "…", "name": "Default", "items": [null, { "entity": { "uid": "…" } }] }
//!   ],
//!   "activeHotbarId": "…"
//! }
//! ```
//!
//! Schema migrations run before a document reaches this crate; it only
//! understands the current shape.

use hotbar_core::{ItemParams, ItemRef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors emitted while decoding or encoding a store document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Wrap IO errors when reading the store.
    #[error("failed to read hotbar store: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde issues.
    #[error("failed to parse hotbar store: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level persisted document. Both fields may be missing in old or
/// freshly created files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotbarStoreModel {
    /// Saved hotbars in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotbars: Option<Vec<HotbarDocument>>,
    /// Id of the hotbar that was active when saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_hotbar_id: Option<String>,
}

impl HotbarStoreModel {
    /// Parse a document from JSON text.
    pub fn from_json(input: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Encode the document as JSON text.
    pub fn to_json(&self, pretty: bool) -> Result<String, StoreError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// One saved hotbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotbarDocument {
    /// Stable id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Slots; `null` marks an empty cell.
    pub items: Vec<Option<HotbarItemDocument>>,
}

/// A saved, occupied slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotbarItemDocument {
    /// The pinned catalog entity.
    pub entity: EntityRef,
    /// Optional item parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ItemParams>,
}

/// Reference to a catalog entity by uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Catalog uid.
    pub uid: String,
}

impl From<HotbarItemDocument> for ItemRef {
    fn from(doc: HotbarItemDocument) -> Self {
        ItemRef {
            uid: doc.entity.uid,
            params: doc.params,
        }
    }
}

impl From<&ItemRef> for HotbarItemDocument {
    fn from(item: &ItemRef) -> Self {
        HotbarItemDocument {
            entity: EntityRef {
                uid: item.uid.clone(),
            },
            params: item.params.clone(),
        }
    }
}
