//! Durable two-slot key-value storage seam.
//!
//! The engine persists through [`SlotStore`]; platform crates decide what
//! backs it (the web app uses browser localStorage). Slots are written
//! independently, last write wins, and a missing key is `Ok(None)`, never an
//! error. Payload decoding lives with the callers so a store stays a dumb
//! string transport.

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use crate::constants::{CATALOG_STORAGE_KEY, SELECTION_STORAGE_KEY};

/// The two persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The editable catalog, a JSON array of strings.
    Catalog,
    /// The daily-selection envelope, `{date, missions}`.
    Selection,
}

impl Slot {
    /// Fixed storage key for this slot.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Catalog => CATALOG_STORAGE_KEY,
            Self::Selection => SELECTION_STORAGE_KEY,
        }
    }
}

/// Trait for abstracting slot persistence.
/// Platform-specific implementations should provide this.
pub trait SlotStore {
    type Error: std::error::Error + 'static;

    /// Read the raw payload stored under `slot`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backing store itself is unusable;
    /// an absent key is `Ok(None)`.
    fn read(&self, slot: Slot) -> Result<Option<String>, Self::Error>;

    /// Replace the payload stored under `slot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be written.
    fn write(&self, slot: Slot, payload: &str) -> Result<(), Self::Error>;
}

/// In-memory store, shared by clones. Backs the test suites of both crates
/// and any host without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<&'static str, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    type Error = Infallible;

    fn read(&self, slot: Slot) -> Result<Option<String>, Self::Error> {
        Ok(self.slots.borrow().get(slot.key()).cloned())
    }

    fn write(&self, slot: Slot, payload: &str) -> Result<(), Self::Error> {
        self.slots.borrow_mut().insert(slot.key(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_use_the_versioned_keys() {
        assert_eq!(Slot::Catalog.key(), "daily_missions_list_v1");
        assert_eq!(Slot::Selection.key(), "daily_missions_today_v2");
    }

    #[test]
    fn missing_slot_reads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(store.read(Slot::Catalog).unwrap(), None);
    }

    #[test]
    fn last_write_wins_per_slot() {
        let store = MemoryStore::new();
        store.write(Slot::Catalog, "[\"A\"]").unwrap();
        store.write(Slot::Catalog, "[\"B\"]").unwrap();
        assert_eq!(store.read(Slot::Catalog).unwrap().as_deref(), Some("[\"B\"]"));
        assert_eq!(store.read(Slot::Selection).unwrap(), None);
    }

    #[test]
    fn clones_share_the_same_slots() {
        let store = MemoryStore::new();
        let alias = store.clone();
        store.write(Slot::Selection, "{}").unwrap();
        assert_eq!(alias.read(Slot::Selection).unwrap().as_deref(), Some("{}"));
    }
}
