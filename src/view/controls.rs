use serde::{Deserialize, Serialize};

use crate::core::truncation::CARDINALITY_LIMIT;

/// Host-facing descriptor of the truncation toggle.
///
/// The enforced limit is stated literally in the help text: the cap is a
/// visible, user-overridable control, never a silent cutoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncationControl {
    pub label: String,
    pub help_text: String,
}

impl TruncationControl {
    #[must_use]
    pub fn for_state(truncation_enabled: bool) -> Self {
        Self {
            label: if truncation_enabled {
                "USE ALL DATA".to_owned()
            } else {
                "TRUNCATE".to_owned()
            },
            help_text: format!(
                "Can't see your chart/seeing too much? Try adding a filter, a limit, \
                 or press TRUNCATE to enforce the proposed cardinality limit: {CARDINALITY_LIMIT}"
            ),
        }
    }
}
