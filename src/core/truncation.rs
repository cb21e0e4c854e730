//! Cardinality-limiting policy for large query results.
//!
//! Tens of thousands of categorical ticks make the rendered chart unreadable
//! and sluggish, so the view exposes an explicit, user-visible cap instead of
//! silently dropping rows. The cap value is quoted literally in the toggle's
//! help text.

use crate::core::Record;

/// Maximum number of records rendered while truncation is enabled.
pub const CARDINALITY_LIMIT: usize = 100;

/// Bounds a dataset according to the truncation toggle.
///
/// Returns the input slice itself when truncation is disabled or the dataset
/// already fits under [`CARDINALITY_LIMIT`]; otherwise returns the first
/// `CARDINALITY_LIMIT` records in original order. Never allocates and never
/// mutates the input.
#[must_use]
pub fn apply(records: &[Record], enabled: bool) -> &[Record] {
    if enabled && records.len() > CARDINALITY_LIMIT {
        &records[..CARDINALITY_LIMIT]
    } else {
        records
    }
}

/// Reports whether the cap actually engages for a dataset of `len` records.
#[must_use]
pub fn is_bounded(len: usize, enabled: bool) -> bool {
    enabled && len > CARDINALITY_LIMIT
}
