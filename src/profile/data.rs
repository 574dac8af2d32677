//! Client profile record and basic range validation

use serde::{Deserialize, Serialize};

use crate::error::{PlanningError, PlanningResult};

/// Youngest age accepted by the planner
pub const MIN_CLIENT_AGE: u32 = 30;

/// Oldest age accepted by the planner
pub const MAX_CLIENT_AGE: u32 = 60;

/// A single client's financial snapshot as submitted for planning
///
/// All currency amounts are annual figures except `debt`, `goal_amount`
/// and `goal_current`, which are balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Client display name
    pub name: String,

    /// Current age in whole years
    pub age: u32,

    /// Annual income
    pub income: f64,

    /// Annual expenses
    pub expenses: f64,

    /// Outstanding debt
    pub debt: f64,

    /// Target amount for the priority goal
    pub goal_amount: f64,

    /// Amount already saved towards the goal
    pub goal_current: f64,
}

impl ClientProfile {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        income: f64,
        expenses: f64,
        debt: f64,
        goal_amount: f64,
        goal_current: f64,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            income,
            expenses,
            debt,
            goal_amount,
            goal_current,
        }
    }

    /// Check the basic numeric ranges a submitted profile must respect
    pub fn validate(&self) -> PlanningResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("name", "must not be blank".to_string()));
        }

        if !(MIN_CLIENT_AGE..=MAX_CLIENT_AGE).contains(&self.age) {
            return Err(invalid(
                "age",
                format!("{} is outside {}..={}", self.age, MIN_CLIENT_AGE, MAX_CLIENT_AGE),
            ));
        }

        let amounts = [
            ("income", self.income),
            ("expenses", self.expenses),
            ("debt", self.debt),
            ("goal_amount", self.goal_amount),
            ("goal_current", self.goal_current),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("{} is not a non-negative amount", value)));
            }
        }

        if self.income == 0.0 {
            return Err(invalid("income", "must be greater than zero".to_string()));
        }
        if self.goal_amount == 0.0 {
            return Err(invalid("goal_amount", "must be greater than zero".to_string()));
        }

        Ok(())
    }
}

impl Default for ClientProfile {
    /// The sample client pre-filled in the manual entry form
    fn default() -> Self {
        Self::new("John Doe", 40, 1_200_000.0, 800_000.0, 200_000.0, 1_500_000.0, 500_000.0)
    }
}

fn invalid(field: &'static str, reason: String) -> PlanningError {
    PlanningError::InvalidProfile { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: PlanningError) -> &'static str {
        match err {
            PlanningError::InvalidProfile { field, .. } => field,
            other => panic!("Expected InvalidProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_default_profile_is_valid() {
        assert!(ClientProfile::default().validate().is_ok());
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let mut profile = ClientProfile::default();
        profile.age = MIN_CLIENT_AGE;
        assert!(profile.validate().is_ok());
        profile.age = MAX_CLIENT_AGE;
        assert!(profile.validate().is_ok());

        profile.age = MAX_CLIENT_AGE + 1;
        assert_eq!(field_of(profile.validate().unwrap_err()), "age");
        profile.age = MIN_CLIENT_AGE - 1;
        assert_eq!(field_of(profile.validate().unwrap_err()), "age");
    }

    #[test]
    fn test_rejects_negative_and_non_finite_amounts() {
        let mut profile = ClientProfile::default();
        profile.debt = -1.0;
        assert_eq!(field_of(profile.validate().unwrap_err()), "debt");

        let mut profile = ClientProfile::default();
        profile.expenses = f64::NAN;
        assert_eq!(field_of(profile.validate().unwrap_err()), "expenses");
    }

    #[test]
    fn test_rejects_zero_denominators() {
        let mut profile = ClientProfile::default();
        profile.income = 0.0;
        assert_eq!(field_of(profile.validate().unwrap_err()), "income");

        let mut profile = ClientProfile::default();
        profile.goal_amount = 0.0;
        assert_eq!(field_of(profile.validate().unwrap_err()), "goal_amount");
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut profile = ClientProfile::default();
        profile.name = "   ".to_string();
        assert_eq!(field_of(profile.validate().unwrap_err()), "name");
    }
}
