//! Daily Missions Engine
//!
//! Platform-agnostic rotation and persistence rules for the Daily Missions
//! tracker. This crate decides when a stored daily selection is reused
//! versus redrawn, how the editable catalog mutates, and how progress is
//! derived, without UI or platform-specific dependencies. Randomness and
//! storage are injected by the caller.

pub mod catalog;
pub mod constants;
pub mod date;
pub mod progress;
pub mod record;
pub mod selection;
pub mod store;

// Re-export commonly used types
pub use catalog::{Catalog, DEFAULT_MISSIONS};
pub use constants::{CLEAR_THRESHOLD, SELECTION_SIZE};
pub use date::{Clock, DateKey, DateKeyError, FixedClock};
pub use progress::{ClearVerdict, Progress, evaluate};
pub use record::{MissionRecord, normalize};
pub use selection::DailySelection;
pub use store::{MemoryStore, Slot, SlotStore};

use rand::Rng;

/// Main engine binding the rotation rules to a persistence store.
///
/// The engine owns no mission data; callers keep the in-memory catalog and
/// selection and pass them in. Every successful mutation is persisted before
/// it returns. Reads never fail on bad data: malformed payloads are logged
/// and degrade to defaults per the recovery rules.
pub struct MissionEngine<S>
where
    S: SlotStore,
{
    store: S,
}

impl<S> MissionEngine<S>
where
    S: SlotStore,
{
    /// Create an engine over the provided store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted catalog, falling back to the built-in default
    /// when the slot is absent, unreadable, or empty. The fallback is not
    /// written back; the slot first fills on an explicit user edit.
    #[must_use]
    pub fn load_catalog(&self) -> Catalog {
        let payload = match self.store.read(Slot::Catalog) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("catalog slot unreadable: {err}");
                None
            }
        };
        let Some(payload) = payload else {
            return Catalog::built_in();
        };
        match serde_json::from_str::<Catalog>(&payload) {
            Ok(catalog) if !catalog.is_empty() => catalog,
            Ok(_) => Catalog::built_in(),
            Err(err) => {
                log::warn!("discarding unreadable catalog: {err}");
                Catalog::built_in()
            }
        }
    }

    /// Append a mission text and persist the catalog. Returns `Ok(false)`
    /// without touching the store when validation rejects the text.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be written.
    pub fn add_mission(&self, catalog: &mut Catalog, text: &str) -> Result<bool, S::Error> {
        if !catalog.add(text) {
            return Ok(false);
        }
        self.persist_catalog(catalog)?;
        Ok(true)
    }

    /// Delete the catalog entry at `index` and persist. Out-of-bounds
    /// indices are a no-op and leave the store untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be written.
    pub fn delete_mission(&self, catalog: &mut Catalog, index: usize) -> Result<bool, S::Error> {
        if !catalog.remove(index) {
            return Ok(false);
        }
        self.persist_catalog(catalog)?;
        Ok(true)
    }

    /// Return today's selection: the stored one when it is still valid for
    /// `today` (preserving completion flags), otherwise a fresh draw from
    /// `catalog`, persisted before it is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a freshly drawn selection cannot be written.
    pub fn load_or_generate<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        today: &DateKey,
        rng: &mut R,
    ) -> Result<DailySelection, S::Error> {
        if let Some(selection) = self.stored_selection(today) {
            return Ok(selection);
        }
        self.regenerate(catalog, today, rng)
    }

    /// Draw a fresh selection for `today`, replacing whatever was stored.
    /// All completion flags reset. Confirming intent with the user is the
    /// caller's job; the engine replaces unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection cannot be written.
    pub fn regenerate<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        today: &DateKey,
        rng: &mut R,
    ) -> Result<DailySelection, S::Error> {
        let selection = DailySelection::generate(catalog, today.clone(), rng);
        self.persist_selection(&selection)?;
        Ok(selection)
    }

    /// Set the completion flag at `index` and persist. Out-of-bounds
    /// indices are a no-op and leave the store untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection cannot be written.
    pub fn toggle(
        &self,
        selection: &mut DailySelection,
        index: usize,
        done: bool,
    ) -> Result<bool, S::Error> {
        if !selection.set_done(index, done) {
            return Ok(false);
        }
        self.persist_selection(selection)?;
        Ok(true)
    }

    fn stored_selection(&self, today: &DateKey) -> Option<DailySelection> {
        let payload = match self.store.read(Slot::Selection) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("selection slot unreadable: {err}");
                None
            }
        };
        DailySelection::reusable_from_str(&payload?, today)
    }

    fn persist_catalog(&self, catalog: &Catalog) -> Result<(), S::Error> {
        match serde_json::to_string(catalog) {
            Ok(payload) => self.store.write(Slot::Catalog, &payload),
            Err(err) => {
                log::error!("failed to encode catalog: {err}");
                Ok(())
            }
        }
    }

    fn persist_selection(&self, selection: &DailySelection) -> Result<(), S::Error> {
        match serde_json::to_string(selection) {
            Ok(payload) => self.store.write(Slot::Selection, &payload),
            Err(err) => {
                log::error!("failed to encode selection: {err}");
                Ok(())
            }
        }
    }
}
