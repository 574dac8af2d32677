//! Core planning engine: retirement corpus projection and SIP sizing

use crate::assumptions::PlanningAssumptions;
use crate::error::DomainError;
use crate::profile::ClientProfile;
use crate::recommendation::{self, Recommendation};
use super::annuity::{compound, fv_annuity_factor, pv_annuity_factor};
use super::metrics::DerivedMetrics;
use log::debug;

/// Main planning engine
///
/// Holds only immutable assumptions, so one engine can serve any number of
/// profiles, from any thread.
#[derive(Debug, Clone, Default)]
pub struct PlanningEngine {
    assumptions: PlanningAssumptions,
}

impl PlanningEngine {
    /// Create a new engine with the given assumptions
    pub fn new(assumptions: PlanningAssumptions) -> Self {
        Self { assumptions }
    }

    /// Derive retirement and goal metrics for one profile
    pub fn project(&self, profile: &ClientProfile) -> Result<DerivedMetrics, DomainError> {
        let economic = &self.assumptions.economic;

        if !(profile.income > 0.0) {
            return Err(DomainError::NonPositiveIncome(profile.income));
        }
        if !(profile.goal_amount > 0.0) {
            return Err(DomainError::NonPositiveGoal(profile.goal_amount));
        }
        if profile.age >= economic.retirement_age {
            return Err(DomainError::AlreadyRetired {
                age: profile.age,
                retirement_age: economic.retirement_age,
            });
        }

        let savings_rate = 1.0 - profile.expenses / profile.income;
        let years_to_retirement = economic.retirement_age - profile.age;
        let years = i32::try_from(years_to_retirement).unwrap_or(i32::MAX);

        // Today's spending, inflated to the first year of retirement and
        // valued as a level payout over the retirement horizon
        let expenses_at_retirement = compound(profile.expenses, economic.inflation_rate, years);
        let pv_factor = pv_annuity_factor(economic.discount_rate, economic.payout_years);
        let retirement_corpus_required = expenses_at_retirement * pv_factor;

        // One year's savings at today's rate, grown to retirement
        let fv_savings = compound(profile.income * savings_rate, economic.growth_rate, years);
        ensure_finite("retirement corpus required", retirement_corpus_required)?;
        ensure_finite("projected savings", fv_savings)?;
        let retirement_corpus_gap = (retirement_corpus_required - fv_savings).max(0.0);

        let (sip_factor, sip_needed) = if retirement_corpus_gap > 0.0 {
            let factor =
                fv_annuity_factor(economic.monthly_growth_rate(), years_to_retirement.saturating_mul(12));
            (factor, retirement_corpus_gap / factor)
        } else {
            (0.0, 0.0)
        };
        ensure_finite("monthly SIP", sip_needed)?;

        let goal_funded = profile.goal_current / profile.goal_amount;

        debug!(
            "Projected {}: corpus required {:.2}, projected savings {:.2}, gap {:.2}, SIP {:.2}/mo",
            profile.name, retirement_corpus_required, fv_savings, retirement_corpus_gap, sip_needed
        );

        Ok(DerivedMetrics {
            profile: profile.clone(),
            savings_rate,
            years_to_retirement,
            expenses_at_retirement,
            pv_factor,
            retirement_corpus_required,
            fv_savings,
            retirement_corpus_gap,
            sip_factor,
            sip_needed,
            goal_funded,
        })
    }

    /// Evaluate the recommendation rules for projected metrics
    pub fn recommendations(&self, metrics: &DerivedMetrics) -> Vec<Recommendation> {
        recommendation::evaluate(metrics, &self.assumptions.thresholds)
    }

    /// Recommendation messages, in rule order; never empty
    pub fn recommend(&self, metrics: &DerivedMetrics) -> Vec<String> {
        self.recommendations(metrics)
            .iter()
            .map(|r| r.to_string())
            .collect()
    }
}

/// Overflowed projections must surface, not clamp to a zero gap
fn ensure_finite(quantity: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonFiniteProjection { quantity })
    }
}
