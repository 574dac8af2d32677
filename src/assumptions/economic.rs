//! Economic assumptions driving the retirement projection

use serde::{Deserialize, Serialize};

/// Fixed-rate economic model used for every projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicAssumptions {
    /// Age at which accumulation stops and payouts begin
    pub retirement_age: u32,

    /// Annual inflation applied to current expenses up to retirement
    pub inflation_rate: f64,

    /// Annual discount rate used to value the retirement payout stream
    pub discount_rate: f64,

    /// Number of years the corpus must fund after retirement
    pub payout_years: u32,

    /// Annual growth rate of invested savings (monthly SIP rate is this / 12)
    pub growth_rate: f64,
}

impl EconomicAssumptions {
    /// Monthly compounding rate applied to SIP contributions
    pub fn monthly_growth_rate(&self) -> f64 {
        self.growth_rate / 12.0
    }
}

impl Default for EconomicAssumptions {
    fn default() -> Self {
        Self {
            retirement_age: 65,
            inflation_rate: 0.08,
            discount_rate: 0.06,
            payout_years: 25,
            growth_rate: 0.12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_growth_rate() {
        let economic = EconomicAssumptions::default();
        assert!((economic.monthly_growth_rate() - 0.01).abs() < 1e-12);
    }
}
