/// Group an integer's digits in threes: 1234567 -> "1,234,567"
fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value
pub fn format_currency(value: f64) -> String {
    // Round to whole cents first so 0.999 becomes $1.00, not $0.100
    let total_cents = (value.abs() * 100.0).round() as u64;
    let (dollars, cents) = (total_cents / 100, total_cents % 100);
    let sign = if value < 0.0 && total_cents > 0 { "-" } else { "" };
    format!("{sign}${}.{cents:02}", with_thousands(dollars))
}

/// Format a value that is already a percentage (12.5 -> "12.50%")
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    format!("{value:.2}%")
}

/// Format a currency value in compact form (e.g., $2.1M, $450K, $50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs_value)
    }
}

/// Share counts to four decimal places
pub fn format_shares(value: f64) -> String {
    format!("{value:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-50.0), "-$50.00");
        assert_eq!(format_currency(0.999), "$1.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.3456), "12.35%");
        assert_eq!(format_percent(-51.77), "-51.77%");
        assert_eq!(format_percent(f64::NAN), "n/a");
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(2_100_000.0), "$2.1M");
        assert_eq!(format_compact_currency(450_000.0), "$450K");
        assert_eq!(format_compact_currency(-50.0), "-$50");
    }
}
