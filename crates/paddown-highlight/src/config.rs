//! Highlighter settings.

use serde::{Deserialize, Serialize};

/// Tunables for a [`Highlighter`](crate::Highlighter).
///
/// Every field has a default, so a partial YAML/JSON document deserializes cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Upper bound on candidate matches examined per rule per call.
    ///
    /// Guards against a future rule whose pattern matches far more often than intended. When the
    /// cap is hit the remaining matches of that rule are skipped and the next rule runs.
    ///
    /// `0` turns highlighting off: every rule is skipped and the whole input renders as plain
    /// text.
    pub max_matches_per_rule: usize,
    /// Merge consecutive unclaimed characters into a single plain segment.
    pub merge_plain_runs: bool,
}

impl HighlightConfig {
    /// Default per-rule match cap.
    pub const DEFAULT_MAX_MATCHES_PER_RULE: usize = 1 << 20;
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            max_matches_per_rule: Self::DEFAULT_MAX_MATCHES_PER_RULE,
            merge_plain_runs: true,
        }
    }
}
