use serde::{Deserialize, Serialize};

/// Overall-score cut-offs used to pick a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub strong_fit_threshold: u8,
    pub moderate_fit_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            strong_fit_threshold: 85,
            moderate_fit_threshold: 65,
        }
    }
}
