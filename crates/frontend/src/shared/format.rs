//! Display formatting for table cells

use chrono::NaiveDate;

/// Placeholder shown for empty optional values
pub const EMPTY_CELL: &str = "—";

/// Formats a number with a thousands separator (comma) and the given number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    // Insert a comma every 3 digits from the end of the integer part
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a monetary amount: dollar sign, thousands separator, 2 decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::format::format_money;
/// assert_eq!(format_money(1234567.891), "$1,234,567.89");
/// ```
pub fn format_money(value: f64) -> String {
    let body = format_number_with_decimals(value.abs(), 2);
    if value < 0.0 && body != "0.00" {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Optional text or the empty-cell placeholder
pub fn text_or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}

/// ISO date (`YYYY-MM-DD`) or the empty-cell placeholder
pub fn date_or_dash(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "$1,234.56");
        assert_eq!(format_money(1234567.89), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-1234.5), "-$1,234.50");
        assert_eq!(format_money(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(123.0, 2), "123.00");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1,234,567");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(text_or_dash(None), EMPTY_CELL);
        assert_eq!(text_or_dash(Some("  ")), EMPTY_CELL);
        assert_eq!(text_or_dash(Some("Acme")), "Acme");
        assert_eq!(date_or_dash(None), EMPTY_CELL);
        assert_eq!(
            date_or_dash(NaiveDate::from_ymd_opt(2024, 3, 5)),
            "2024-03-05"
        );
    }
}
