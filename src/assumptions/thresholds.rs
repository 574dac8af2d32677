//! Business thresholds for the recommendation rules

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Savings rates below this trigger the savings recommendation
    pub min_savings_rate: f64,

    /// Corpus gaps above this amount trigger the SIP recommendation
    pub max_corpus_gap: f64,

    /// Goal funded ratios below this trigger the goal recommendation
    pub min_goal_funded: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            min_savings_rate: 0.25,
            max_corpus_gap: 1_000_000.0,
            min_goal_funded: 0.5,
        }
    }
}
