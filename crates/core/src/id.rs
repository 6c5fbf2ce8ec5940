//! Stable hotbar identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a hotbar.
///
/// Freshly created hotbars get a random v4 UUID. Ids read back from a
/// persisted document are kept verbatim, whatever their format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotbarId(String);

impl HotbarId {
    /// Generate a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HotbarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for HotbarId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for HotbarId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<Uuid> for HotbarId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}

impl PartialEq<str> for HotbarId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_uuids_and_distinct() {
        let a = HotbarId::generate();
        let b = HotbarId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn persisted_ids_are_kept_verbatim() {
        let id = HotbarId::from("hotbar-1");
        assert_eq!(id.to_string(), "hotbar-1");
        assert!(id == *"hotbar-1");
    }
}
