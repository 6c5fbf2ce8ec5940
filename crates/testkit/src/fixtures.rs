//! Compact builders for slot tables and sample store documents.

use hotbar_core::{ItemRef, Slot, SlotTable};

/// A saved store with two hotbars; the second is active and has a gap.
pub const SAMPLE_STORE_JSON: &str = r#"{
  "hotbars": [
    {
      "id": "3f0c2a8e-1c7b-4d8e-9a51-0c4f1e2d7b10",
      "name": "Default",
      "items": [
        { "entity": { "uid": "minikube" } },
        { "entity": { "uid": "staging" }, "params": { "namespace": "web" } },
        null, null, null, null, null, null, null, null, null, null
      ]
    },
    {
      "id": "b7d9e4f2-5a63-4c1e-8f02-6e3b9a1c4d55",
      "name": "Production",
      "items": [
        { "entity": { "uid": "prod-eu" } },
        null,
        { "entity": { "uid": "prod-us" } },
        null, null, null, null, null, null, null, null, null
      ]
    }
  ],
  "activeHotbarId": "b7d9e4f2-5a63-4c1e-8f02-6e3b9a1c4d55"
}"#;

/// Build a table from a whitespace-separated pattern; `_` marks an empty slot.
///
/// `table("a b _ c")` is `[a, b, empty, c]`.
pub fn table(pattern: &str) -> SlotTable {
    let slots: Vec<Slot> = pattern
        .split_whitespace()
        .map(|token| (token != "_").then(|| ItemRef::new(token)))
        .collect();
    SlotTable::from_slots(slots)
}

/// Render a table back into the pattern accepted by [`table`].
pub fn pattern(table: &SlotTable) -> String {
    table
        .iter()
        .map(|slot| slot.as_ref().map_or("_", |item| item.uid.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_round_trips_through_table() {
        let t = table("a _ b _");
        assert_eq!(t.len(), 4);
        assert_eq!(t.occupied_count(), 2);
        assert_eq!(pattern(&t), "a _ b _");
    }
}
