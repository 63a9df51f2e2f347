//! Daily selection generation and the reuse decision.
//!
//! A selection is bound to one calendar day. On load the stored envelope is
//! reused only when its date key matches today and it still normalizes to at
//! least one record; anything else (absent, stale, malformed, empty) means a
//! fresh draw. Sampling is a uniform partial shuffle of the catalog, so a
//! text never appears more often than it does in the catalog.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Catalog;
use crate::constants::SELECTION_SIZE;
use crate::date::DateKey;
use crate::record::{MissionRecord, normalize};

/// The missions chosen for one calendar day, with completion flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySelection {
    pub date: DateKey,
    pub missions: Vec<MissionRecord>,
}

/// Stored envelope in its untrusted form. `missions` stays a raw value so
/// the normalizer decides element by element what survives.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    date: String,
    #[serde(default)]
    missions: Value,
}

impl DailySelection {
    /// Draw a fresh selection for `date`: up to [`SELECTION_SIZE`] texts
    /// chosen uniformly without replacement, all unchecked. An empty catalog
    /// yields an empty selection.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(catalog: &Catalog, date: DateKey, rng: &mut R) -> Self {
        let mut candidates: Vec<&String> = catalog.entries().iter().collect();
        let count = SELECTION_SIZE.min(candidates.len());
        let (picked, _) = candidates.partial_shuffle(rng, count);
        Self {
            date,
            missions: picked
                .iter()
                .map(|text| MissionRecord::new(text.as_str()))
                .collect(),
        }
    }

    /// Decode a stored envelope and decide whether it is still good for
    /// `today`. Returns `None` for anything that should trigger a fresh
    /// draw; the parse failure reason is logged, never propagated.
    #[must_use]
    pub fn reusable_from_str(stored: &str, today: &DateKey) -> Option<Self> {
        let envelope: RawEnvelope = match serde_json::from_str(stored) {
            Ok(envelope) => envelope,
            Err(err) => {
                log::warn!("discarding unreadable daily selection: {err}");
                return None;
            }
        };
        let date = DateKey::parse(&envelope.date).ok()?;
        if date != *today {
            return None;
        }
        let missions = normalize(&envelope.missions);
        if missions.is_empty() {
            return None;
        }
        Some(Self {
            date,
            missions,
        })
    }

    /// Set the completion flag of the record at `index`. Out-of-bounds
    /// indices are a no-op.
    pub fn set_done(&mut self, index: usize, done: bool) -> bool {
        let Some(record) = self.missions.get_mut(index) else {
            return false;
        };
        record.done = done;
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }
}
