//! Centralized tuning constants for the mission rotation rules.
//!
//! These values define the selection and clear math. Keeping them together
//! ensures the rules can only change via reviewed code, not external assets.

// Rotation rules -----------------------------------------------------------

/// Number of missions drawn into a fresh daily selection (fewer if the
/// catalog is smaller).
pub const SELECTION_SIZE: usize = 5;

/// Completed missions required for a full five-entry selection to count as
/// cleared.
pub const CLEAR_THRESHOLD: usize = 3;

// Storage keys -------------------------------------------------------------
// Versioned independently so either slot can migrate without the other.

pub const CATALOG_STORAGE_KEY: &str = "daily_missions_list_v1";
pub const SELECTION_STORAGE_KEY: &str = "daily_missions_today_v2";
