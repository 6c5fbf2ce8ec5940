//! References to externally owned entities pinned into hotbar slots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form string parameters carried alongside an item reference.
pub type ItemParams = BTreeMap<String, String>;

/// A pinned item: the uid of a catalog entity plus optional parameters.
///
/// The hotbar never owns the entity. A uid whose entity has since left the
/// catalog is still a valid reference; see [`crate::EntityResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    /// Uid of the referenced entity. Equality checks use this alone.
    pub uid: String,
    /// Optional parameters passed along when the item is activated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ItemParams>,
}

impl ItemRef {
    /// Create a reference without parameters.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            params: None,
        }
    }

    /// Create a reference carrying parameters.
    pub fn with_params(uid: impl Into<String>, params: ItemParams) -> Self {
        Self {
            uid: uid.into(),
            params: Some(params),
        }
    }

    /// Add a single parameter, creating the map if needed.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(ItemParams::new)
            .insert(key.into(), value.into());
        self
    }

    /// Whether this reference names the entity `uid`.
    pub fn refers_to(&self, uid: &str) -> bool {
        self.uid == uid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_param_builds_map() {
        let item = ItemRef::new("cluster-a")
            .with_param("namespace", "kube-system")
            .with_param("view", "pods");
        let params = item.params.as_ref().unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params["namespace"], "kube-system");
        assert!(item.refers_to("cluster-a"));
    }
}
