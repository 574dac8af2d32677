//! Planning assumptions: economic model constants and recommendation thresholds

mod economic;
mod thresholds;
pub mod loader;

pub use economic::EconomicAssumptions;
pub use thresholds::RecommendationThresholds;
pub use loader::{LoadedAssumptions, DEFAULT_ASSUMPTIONS_PATH};

use crate::error::{PlanningError, PlanningResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Oldest retirement age an assumptions file may set
pub const MAX_RETIREMENT_AGE: u32 = 120;

/// Longest retirement payout horizon an assumptions file may set
pub const MAX_PAYOUT_YEARS: u32 = 100;

/// Container for everything the engine treats as a model constant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanningAssumptions {
    pub economic: EconomicAssumptions,
    pub thresholds: RecommendationThresholds,
}

impl PlanningAssumptions {
    /// Load assumptions from the default file (data/assumptions.csv)
    pub fn from_csv() -> PlanningResult<Self> {
        Self::from_csv_path(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from a specific file, layered over the defaults
    pub fn from_csv_path(path: &Path) -> PlanningResult<Self> {
        Self::from_loaded(&LoadedAssumptions::load_from(path)?)
    }

    /// Apply loaded overrides over the defaults and validate the result
    pub fn from_loaded(loaded: &LoadedAssumptions) -> PlanningResult<Self> {
        let mut assumptions = Self::default();
        for (key, value) in &loaded.overrides {
            assumptions.set(key, value)?;
        }
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Set a single assumption by its file key
    pub fn set(&mut self, key: &str, value: &str) -> PlanningResult<()> {
        match key {
            "retirement_age" => self.economic.retirement_age = parse_whole(key, value)?,
            "inflation_rate" => self.economic.inflation_rate = parse_number(key, value)?,
            "discount_rate" => self.economic.discount_rate = parse_number(key, value)?,
            "payout_years" => self.economic.payout_years = parse_whole(key, value)?,
            "growth_rate" => self.economic.growth_rate = parse_number(key, value)?,
            "min_savings_rate" => self.thresholds.min_savings_rate = parse_number(key, value)?,
            "max_corpus_gap" => self.thresholds.max_corpus_gap = parse_number(key, value)?,
            "min_goal_funded" => self.thresholds.min_goal_funded = parse_number(key, value)?,
            other => return Err(PlanningError::UnknownAssumption(other.to_string())),
        }
        Ok(())
    }

    /// Reject combinations the projection formulas cannot evaluate
    pub fn validate(&self) -> PlanningResult<()> {
        let economic = &self.economic;
        if !(1..=MAX_RETIREMENT_AGE).contains(&economic.retirement_age) {
            return Err(invalid("retirement_age", "must be between 1 and 120"));
        }
        if !(1..=MAX_PAYOUT_YEARS).contains(&economic.payout_years) {
            return Err(invalid("payout_years", "must be between 1 and 100"));
        }

        let rates = [
            ("inflation_rate", economic.inflation_rate),
            ("discount_rate", economic.discount_rate),
            ("growth_rate", economic.growth_rate),
        ];
        for (key, rate) in rates {
            if !rate.is_finite() || rate <= -1.0 {
                return Err(invalid(key, "must be a finite rate above -100%"));
            }
        }

        let thresholds = [
            ("min_savings_rate", self.thresholds.min_savings_rate),
            ("max_corpus_gap", self.thresholds.max_corpus_gap),
            ("min_goal_funded", self.thresholds.min_goal_funded),
        ];
        for (key, value) in thresholds {
            if !value.is_finite() {
                return Err(invalid(key, "must be finite"));
            }
        }

        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> PlanningResult<f64> {
    value.trim().parse::<f64>().map_err(|e| PlanningError::InvalidAssumption {
        key: key.to_string(),
        reason: format!("`{}` is not a number ({})", value, e),
    })
}

fn parse_whole(key: &str, value: &str) -> PlanningResult<u32> {
    value.trim().parse::<u32>().map_err(|e| PlanningError::InvalidAssumption {
        key: key.to_string(),
        reason: format!("`{}` is not a whole number of years ({})", value, e),
    })
}

fn invalid(key: &str, reason: &str) -> PlanningError {
    PlanningError::InvalidAssumption {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(rows: &[(&str, &str)]) -> LoadedAssumptions {
        LoadedAssumptions {
            overrides: rows
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_default_file_matches_builtin_defaults() {
        let from_file = PlanningAssumptions::from_csv().expect("Failed to load assumptions");
        assert_eq!(from_file, PlanningAssumptions::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let assumptions =
            PlanningAssumptions::from_loaded(&loaded(&[("growth_rate", "0.10")])).unwrap();
        assert!((assumptions.economic.growth_rate - 0.10).abs() < 1e-12);
        assert_eq!(assumptions.economic.retirement_age, 65);
        assert_eq!(assumptions.thresholds, RecommendationThresholds::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = PlanningAssumptions::from_loaded(&loaded(&[("tax_rate", "0.3")]));
        assert!(matches!(result, Err(PlanningError::UnknownAssumption(k)) if k == "tax_rate"));
    }

    #[test]
    fn test_unparsable_values_are_rejected() {
        let result = PlanningAssumptions::from_loaded(&loaded(&[("inflation_rate", "eight")]));
        assert!(matches!(result, Err(PlanningError::InvalidAssumption { .. })));

        let result = PlanningAssumptions::from_loaded(&loaded(&[("payout_years", "25.5")]));
        assert!(matches!(result, Err(PlanningError::InvalidAssumption { .. })));
    }

    #[test]
    fn test_validate_rejects_degenerate_model() {
        let result = PlanningAssumptions::from_loaded(&loaded(&[("payout_years", "0")]));
        assert!(matches!(
            result,
            Err(PlanningError::InvalidAssumption { ref key, .. }) if key == "payout_years"
        ));

        let result = PlanningAssumptions::from_loaded(&loaded(&[("discount_rate", "-1.0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_horizons() {
        let result = PlanningAssumptions::from_loaded(&loaded(&[("payout_years", "3000000000")]));
        assert!(matches!(
            result,
            Err(PlanningError::InvalidAssumption { ref key, .. }) if key == "payout_years"
        ));

        let result = PlanningAssumptions::from_loaded(&loaded(&[("retirement_age", "400000000")]));
        assert!(matches!(
            result,
            Err(PlanningError::InvalidAssumption { ref key, .. }) if key == "retirement_age"
        ));

        let at_limits = PlanningAssumptions::from_loaded(&loaded(&[
            ("retirement_age", "120"),
            ("payout_years", "100"),
        ]));
        assert!(at_limits.is_ok());
    }
}
