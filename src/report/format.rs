//! Currency and percentage formatting for reports and recommendation text

/// Currency label printed before every amount
pub const CURRENCY: &str = "Rs";

/// Amount with two decimals and comma-grouped thousands, e.g. `63,237,172.30`
pub fn format_amount(amount: f64) -> String {
    let formatted = format!("{:.2}", amount);
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    format!("{}.{}", group_thousands(whole), fraction)
}

/// Amount truncated towards zero with comma-grouped thousands, e.g. `33,657`
pub fn format_whole(amount: f64) -> String {
    group_thousands(&format!("{}", amount.trunc() as i64))
}

/// Ratio rendered as a percentage with one decimal, e.g. `33.3%`
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Ratio rendered as a whole percentage when it has no fractional part, e.g. `25%`
pub fn format_threshold_percent(ratio: f64) -> String {
    let percent = ratio * 100.0;
    if (percent - percent.round()).abs() < 1e-9 {
        format!("{}%", percent.round() as i64)
    } else {
        let fixed = format!("{:.2}", percent);
        format!("{}%", fixed.trim_end_matches('0').trim_end_matches('.'))
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(63_237_172.296813965), "63,237,172.30");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-1_234.5), "-1,234.50");
    }

    #[test]
    fn test_format_whole_truncates() {
        assert_eq!(format_whole(33_657.9), "33,657");
        assert_eq!(format_whole(1_200_000.0), "1,200,000");
        assert_eq!(format_whole(12.0), "12");
        assert_eq!(format_whole(-4_500.7), "-4,500");
    }

    #[test]
    fn test_percentages() {
        assert_eq!(format_percent(1.0 / 3.0), "33.3%");
        assert_eq!(format_threshold_percent(0.25), "25%");
        assert_eq!(format_threshold_percent(0.5), "50%");
        assert_eq!(format_threshold_percent(0.125), "12.5%");
        assert_eq!(format_threshold_percent(0.333), "33.3%");
        assert_eq!(format_threshold_percent(0.3333), "33.33%");
        assert_eq!(format_threshold_percent(0.129999), "13%");
    }
}
