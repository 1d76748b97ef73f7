/// Format an amount with a currency symbol, two decimals and thousands separators
///
/// `format_amount(-1234.5, "$")` gives `-$1,234.50`.
#[must_use]
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{fraction:02}")
}

/// Signed variance, always carrying an explicit sign for non-zero values
#[must_use]
pub fn format_variance(amount: f64, symbol: &str) -> String {
    let formatted = format_amount(amount, symbol);
    if (amount * 100.0).round() > 0.0 {
        format!("+{formatted}")
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0, "$"), "$0.00");
        assert_eq!(format_amount(12.5, "$"), "$12.50");
        assert_eq!(format_amount(1234567.891, "€"), "€1,234,567.89");
        assert_eq!(format_amount(-1234.5, "$"), "-$1,234.50");
        assert_eq!(format_amount(-0.001, "$"), "$0.00");
    }

    #[test]
    fn test_format_variance() {
        assert_eq!(format_variance(50.0, "$"), "+$50.00");
        assert_eq!(format_variance(10.0, "$"), "+$10.00");
        assert_eq!(format_variance(-50.0, "$"), "-$50.00");
        assert_eq!(format_variance(0.0, "$"), "$0.00");
    }
}
