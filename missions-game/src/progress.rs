//! Completion counting and the clear verdict.

use crate::constants::{CLEAR_THRESHOLD, SELECTION_SIZE};
use crate::selection::DailySelection;

/// Clear/not-clear outcome for a full five-entry selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearVerdict {
    pub is_clear: bool,
    /// Completions still needed to clear; zero once cleared.
    pub remaining: usize,
}

/// Derived completion state of a daily selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub total: usize,
    pub done_count: usize,
    pub clear_threshold: usize,
    /// Present only when the selection holds exactly [`SELECTION_SIZE`]
    /// entries; undersized selections report raw counts alone.
    pub verdict: Option<ClearVerdict>,
}

/// Derive counts and, for full selections, the clear verdict. Pure.
#[must_use]
pub fn evaluate(selection: &DailySelection) -> Progress {
    let total = selection.len();
    let done_count = selection.missions.iter().filter(|m| m.done).count();
    let verdict = (total == SELECTION_SIZE).then(|| ClearVerdict {
        is_clear: done_count >= CLEAR_THRESHOLD,
        remaining: CLEAR_THRESHOLD.saturating_sub(done_count),
    });
    Progress {
        total,
        done_count,
        clear_threshold: CLEAR_THRESHOLD,
        verdict,
    }
}
