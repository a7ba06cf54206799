//! Parsing of raw form input into DTO fields.
//!
//! Form state keeps every input as the string the user typed; these helpers
//! run on submit and return a message naming the offending field.

use chrono::NaiveDate;

/// Required text: trimmed, must not be blank
pub fn required_text(label: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Optional text: blank becomes `None`
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Money amount; blank means zero
pub fn parse_money(label: &str, value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("{} must be a number", label)),
    }
}

/// Whole count; blank means zero
pub fn parse_count(label: &str, value: &str) -> Result<i64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| format!("{} must be a whole number", label))
}

/// Date from an `<input type="date">` value (`YYYY-MM-DD`); blank is `None`
pub fn parse_optional_date(label: &str, value: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("{} must be a date (YYYY-MM-DD)", label))
}

pub fn parse_required_date(label: &str, value: &str) -> Result<NaiveDate, String> {
    parse_optional_date(label, value)?.ok_or_else(|| format!("{} is required", label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("Name", "  Ada "), Ok("Ada".to_string()));
        assert_eq!(required_text("Name", "   "), Err("Name is required".to_string()));
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text(" x "), Some("x".to_string()));
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("Amount", ""), Ok(0.0));
        assert_eq!(parse_money("Amount", "50000"), Ok(50000.0));
        assert_eq!(parse_money("Amount", " 12.5 "), Ok(12.5));
        assert!(parse_money("Amount", "abc").is_err());
        assert!(parse_money("Amount", "NaN").is_err());
        assert!(parse_money("Amount", "inf").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("Stock", ""), Ok(0));
        assert_eq!(parse_count("Stock", "42"), Ok(42));
        assert_eq!(
            parse_count("Stock", "4.5"),
            Err("Stock must be a whole number".to_string())
        );
    }

    #[test]
    fn test_dates() {
        assert_eq!(parse_optional_date("Due date", ""), Ok(None));
        assert_eq!(
            parse_optional_date("Due date", "2024-02-29"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29))
        );
        assert!(parse_optional_date("Due date", "2023-02-29").is_err());
        assert_eq!(
            parse_required_date("Issue date", ""),
            Err("Issue date is required".to_string())
        );
    }
}
