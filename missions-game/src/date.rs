//! Calendar-day keys and the clock seam.
//!
//! A [`DateKey`] identifies one local calendar day (`YYYY-MM-DD`, zero
//! padded). The engine never reads the wall clock itself; callers hand it a
//! key produced by a [`Clock`], so tests can pin the day deterministically.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A calendar-day identifier in `YYYY-MM-DD` form.
///
/// Equality on the key is what decides whether a stored daily selection is
/// reused or superseded; no other date arithmetic happens in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateKeyError {
    #[error("date key must have the form YYYY-MM-DD (got {0:?})")]
    Malformed(String),
    #[error("date key has an out-of-range component (got {0:?})")]
    OutOfRange(String),
}

impl DateKey {
    /// Build a key from calendar components, zero-padding month and day.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self(format!("{year:04}-{month:02}-{day:02}"))
    }

    /// Parse and validate a stored key.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not `YYYY-MM-DD` or names an
    /// impossible month/day. Stored envelopes with unparsable dates are
    /// treated as stale by the selection engine rather than surfaced.
    pub fn parse(text: &str) -> Result<Self, DateKeyError> {
        let parts: Vec<&str> = text.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateKeyError::Malformed(text.to_string()));
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(DateKeyError::Malformed(text.to_string()));
        }
        let ok = year.parse::<i32>().is_ok()
            && month
                .parse::<u32>()
                .is_ok_and(|m| (1..=12).contains(&m))
            && day.parse::<u32>().is_ok_and(|d| (1..=31).contains(&d));
        if ok {
            Ok(Self(text.to_string()))
        } else {
            Err(DateKeyError::OutOfRange(text.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of "today". Platform crates implement this over the wall clock;
/// tests supply a fixed day.
pub trait Clock {
    fn today(&self) -> DateKey;
}

/// A clock pinned to one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub DateKey);

impl Clock for FixedClock {
    fn today(&self) -> DateKey {
        self.0.clone()
    }
}
