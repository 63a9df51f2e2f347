//! Mission records and the defensive normalizer.
//!
//! Persisted selections come back as untrusted JSON. Instead of trusting the
//! stored shape, every read runs through [`normalize`], which coerces each
//! element through an explicit variant set and drops anything that does not
//! yield a non-empty mission text. Malformed data degrades to an empty or
//! partial list; it never becomes an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a daily selection: the mission text plus its completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionRecord {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl MissionRecord {
    /// A fresh, unchecked record for the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// The shapes a stored element may legally take. Anything else is dropped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawMission {
    /// Bare text, as written by the catalog slot and by very old selections.
    Text(String),
    /// The canonical record shape. Missing fields default rather than fail.
    Entry {
        #[serde(default)]
        text: String,
        #[serde(default)]
        done: bool,
    },
}

impl RawMission {
    fn into_record(self) -> MissionRecord {
        match self {
            Self::Text(text) => MissionRecord { text, done: false },
            Self::Entry { text, done } => MissionRecord { text, done },
        }
    }
}

/// Coerce an arbitrary stored value into canonical mission records.
///
/// Non-array input yields an empty list. Elements that match neither legal
/// shape, or whose text coerces to empty, are dropped silently.
#[must_use]
pub fn normalize(raw: &Value) -> Vec<MissionRecord> {
    let Value::Array(elements) = raw else {
        return Vec::new();
    };
    elements
        .iter()
        .filter_map(|element| {
            serde_json::from_value::<RawMission>(element.clone())
                .ok()
                .map(RawMission::into_record)
        })
        .filter(|record| !record.text.is_empty())
        .collect()
}
