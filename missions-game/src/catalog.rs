//! The editable catalog of candidate mission texts.
//!
//! Ordering matters (display and index-based deletion) and duplicate texts
//! are allowed; each copy is deletable on its own. The catalog never changes
//! implicitly: only [`Catalog::add`] and [`Catalog::remove`] mutate it, and
//! the engine persists after each successful mutation.

use serde::{Deserialize, Serialize};

/// Built-in starter catalog used until the user saves their own list.
pub const DEFAULT_MISSIONS: [&str; 11] = [
    "20 push-ups",
    "30 squats",
    "Drink 2 glasses of water",
    "Read for 10 minutes",
    "Memorize 10 new words",
    "Tidy the room for 5 minutes",
    "Stretch for 5 minutes",
    "Write 3 diary lines",
    "Walk for 15 minutes",
    "Stay off social media for 30 minutes",
    "Go to bed 30 minutes early",
];

/// Ordered, editable list of mission texts. Serializes as a plain JSON
/// array of strings, matching the persisted catalog slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    #[must_use]
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// The default starter list.
    #[must_use]
    pub fn built_in() -> Self {
        Self {
            entries: DEFAULT_MISSIONS.iter().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a mission text, preserving insertion order.
    ///
    /// Empty or whitespace-only text is rejected and the catalog is left
    /// untouched; callers surface that to the user however they like.
    pub fn add(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.entries.push(text.to_string());
        true
    }

    /// Remove the entry at `index`. Out-of-bounds indices are a no-op.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_catalog_has_eleven_entries() {
        let catalog = Catalog::built_in();
        assert_eq!(catalog.len(), 11);
        assert!(catalog.entries().iter().all(|text| !text.trim().is_empty()));
    }

    #[test]
    fn add_appends_in_order() {
        let mut catalog = Catalog::default();
        assert!(catalog.add("A"));
        assert!(catalog.add("B"));
        assert_eq!(catalog.entries(), ["A", "B"]);
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut catalog = Catalog::built_in();
        assert!(!catalog.add(""));
        assert!(!catalog.add("   "));
        assert!(!catalog.add("\t\n"));
        assert_eq!(catalog.len(), 11);
    }

    #[test]
    fn duplicates_are_allowed_and_independently_deletable() {
        let mut catalog = Catalog::default();
        catalog.add("A");
        catalog.add("A");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.remove(0));
        assert_eq!(catalog.entries(), ["A"]);
    }

    #[test]
    fn remove_out_of_bounds_is_a_no_op() {
        let mut catalog = Catalog::new(vec!["A".into(), "B".into(), "C".into()]);
        assert!(!catalog.remove(99));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn serializes_as_plain_string_array() {
        let catalog = Catalog::new(vec!["A".into(), "B".into()]);
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"["A","B"]"#);
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
