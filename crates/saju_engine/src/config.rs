//! Engine configuration.

use saju_time::DEFAULT_TIMEZONE;
use serde::{Deserialize, Serialize};

/// Default reversal threshold: a card is reversed when its hash is below this.
pub const DEFAULT_REVERSAL_THRESHOLD: u32 = 40;

/// Tunable parameters of the orchestrator.
///
/// Every field has a default, so a partial JSON document is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FortuneConfig {
    /// Civil timezone assumed when a birth profile names none.
    pub default_timezone: String,
    /// Reversed iff `reversed_hash < reversal_threshold` (hash is 0..100).
    pub reversal_threshold: u32,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            reversal_threshold: DEFAULT_REVERSAL_THRESHOLD,
        }
    }
}
