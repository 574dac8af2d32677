//! Output structures for a single planning projection

use serde::{Deserialize, Serialize};

use crate::profile::ClientProfile;

/// Everything derived from one client profile
///
/// Intermediate factors are kept alongside the headline figures so a
/// report can show how each number was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// The profile these figures were derived from
    pub profile: ClientProfile,

    // Savings
    pub savings_rate: f64,
    pub years_to_retirement: u32,

    // Retirement need
    pub expenses_at_retirement: f64,
    pub pv_factor: f64,
    pub retirement_corpus_required: f64,

    // Projected savings and the shortfall
    pub fv_savings: f64,
    pub retirement_corpus_gap: f64,

    // Monthly contribution closing the gap (both zero when there is no gap)
    pub sip_factor: f64,
    pub sip_needed: f64,

    // Goal progress
    pub goal_funded: f64,
}
