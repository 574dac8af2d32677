//! Compounding and annuity factors
//!
//! Supports:
//! - Compounding a lump sum over whole periods
//! - Present value of a level payment stream (retirement payouts)
//! - Future value of a level payment stream (monthly SIP contributions)

/// Rates closer to zero than this use the zero-rate limit of each factor
const ZERO_RATE_TOLERANCE: f64 = 1e-10;

/// Grow `amount` at `rate` per period for `periods` periods
pub fn compound(amount: f64, rate: f64, periods: i32) -> f64 {
    amount * (1.0 + rate).powi(periods)
}

/// Present value of 1 paid at the end of each of `periods` periods
///
/// `(1 - (1 + r)^-n) / r`, or `n` when the rate is zero.
pub fn pv_annuity_factor(rate: f64, periods: u32) -> f64 {
    if rate.abs() < ZERO_RATE_TOLERANCE {
        return periods as f64;
    }

    (1.0 - (1.0 + rate).powi(-whole_periods(periods))) / rate
}

/// Accumulated value of 1 contributed at the end of each of `periods` periods
///
/// `((1 + r)^n - 1) / r`, or `n` when the rate is zero.
pub fn fv_annuity_factor(rate: f64, periods: u32) -> f64 {
    if rate.abs() < ZERO_RATE_TOLERANCE {
        return periods as f64;
    }

    ((1.0 + rate).powi(whole_periods(periods)) - 1.0) / rate
}

/// Period count as a `powi` exponent, saturating instead of wrapping negative
fn whole_periods(periods: u32) -> i32 {
    i32::try_from(periods).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compound() {
        assert_relative_eq!(compound(800_000.0, 0.08, 25), 5_478_780.156975, epsilon = 1e-3);
        assert_relative_eq!(compound(100.0, 0.05, 0), 100.0);
    }

    #[test]
    fn test_pv_annuity_factor() {
        // 25 annual payments at 6%
        assert_relative_eq!(pv_annuity_factor(0.06, 25), 12.783356158, epsilon = 1e-8);
    }

    #[test]
    fn test_fv_annuity_factor() {
        // 300 monthly contributions at 1% per month
        assert_relative_eq!(fv_annuity_factor(0.01, 300), 1878.846626192, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_rate_limits() {
        assert_eq!(pv_annuity_factor(0.0, 25), 25.0);
        assert_eq!(fv_annuity_factor(0.0, 120), 120.0);
    }

    #[test]
    fn test_huge_period_count_does_not_wrap() {
        // Approaches the perpetuity factor 1 / r instead of turning negative
        assert_relative_eq!(pv_annuity_factor(0.06, 3_000_000_000), 1.0 / 0.06, epsilon = 1e-9);
    }

    #[test]
    fn test_pv_factor_below_period_count() {
        // Discounting makes each later payment worth less than 1
        let factor = pv_annuity_factor(0.04, 30);
        assert!(factor < 30.0 && factor > 0.0);
    }
}
