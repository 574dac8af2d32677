//! Threshold rules turning derived metrics into advice
//!
//! Every rule is evaluated in a fixed order and all matching rules are kept.
//! When nothing matches, a single on-track message is produced instead, so
//! the result is never empty.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assumptions::RecommendationThresholds;
use crate::projection::DerivedMetrics;
use crate::report::format::{format_amount, format_threshold_percent, format_whole, CURRENCY};

/// A single piece of advice, carrying the figures it quotes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// Savings rate is below the target rate
    RaiseSavingsRate { target_rate: f64 },

    /// Retirement gap exceeds the tolerated amount
    CloseRetirementGap { gap: f64, monthly_sip: f64 },

    /// Priority goal is under-funded
    FundPriorityGoal { target_funded: f64 },

    /// No rule fired
    OnTrack,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::RaiseSavingsRate { target_rate } => write!(
                f,
                "Increase savings rate to at least {} by reducing expenses.",
                format_threshold_percent(*target_rate)
            ),
            Recommendation::CloseRetirementGap { gap, monthly_sip } => write!(
                f,
                "To close retirement gap of {} {}, start SIP of {} {}/mo.",
                CURRENCY,
                format_amount(*gap),
                CURRENCY,
                format_whole(*monthly_sip)
            ),
            Recommendation::FundPriorityGoal { target_funded } => write!(
                f,
                "Increase allocation to priority goals to reach {} funded.",
                format_threshold_percent(*target_funded)
            ),
            Recommendation::OnTrack => {
                write!(f, "You are on track with current goals and savings!")
            }
        }
    }
}

/// Evaluate every rule against `metrics`, in rule order
pub fn evaluate(
    metrics: &DerivedMetrics,
    thresholds: &RecommendationThresholds,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if metrics.savings_rate < thresholds.min_savings_rate {
        recs.push(Recommendation::RaiseSavingsRate {
            target_rate: thresholds.min_savings_rate,
        });
    }

    if metrics.retirement_corpus_gap > thresholds.max_corpus_gap {
        recs.push(Recommendation::CloseRetirementGap {
            gap: metrics.retirement_corpus_gap,
            monthly_sip: metrics.sip_needed,
        });
    }

    if metrics.goal_funded < thresholds.min_goal_funded {
        recs.push(Recommendation::FundPriorityGoal {
            target_funded: thresholds.min_goal_funded,
        });
    }

    if recs.is_empty() {
        recs.push(Recommendation::OnTrack);
    }

    recs
}
