use serde::{Deserialize, Serialize};

/// Fulfilment status of a sale order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleOrderStatus {
    #[default]
    Draft,
    Confirmed,
    Shipped,
    Invoiced,
    /// Any code this client does not know about
    #[serde(other)]
    Unknown,
}

impl SaleOrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SaleOrderStatus::Draft => "draft",
            SaleOrderStatus::Confirmed => "confirmed",
            SaleOrderStatus::Shipped => "shipped",
            SaleOrderStatus::Invoiced => "invoiced",
            SaleOrderStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SaleOrderStatus::Draft => "Draft",
            SaleOrderStatus::Confirmed => "Confirmed",
            SaleOrderStatus::Shipped => "Shipped",
            SaleOrderStatus::Invoiced => "Invoiced",
            SaleOrderStatus::Unknown => "Unknown",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            SaleOrderStatus::Draft | SaleOrderStatus::Unknown => "neutral",
            SaleOrderStatus::Confirmed => "primary",
            SaleOrderStatus::Shipped => "warning",
            SaleOrderStatus::Invoiced => "success",
        }
    }

    pub fn all() -> Vec<SaleOrderStatus> {
        vec![
            SaleOrderStatus::Draft,
            SaleOrderStatus::Confirmed,
            SaleOrderStatus::Shipped,
            SaleOrderStatus::Invoiced,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(SaleOrderStatus::Draft),
            "confirmed" => Some(SaleOrderStatus::Confirmed),
            "shipped" => Some(SaleOrderStatus::Shipped),
            "invoiced" => Some(SaleOrderStatus::Invoiced),
            _ => None,
        }
    }
}

impl std::fmt::Display for SaleOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        let codes: Vec<&str> = SaleOrderStatus::all().iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec!["draft", "confirmed", "shipped", "invoiced"]);
        for status in SaleOrderStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
            assert_eq!(SaleOrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(SaleOrderStatus::default(), SaleOrderStatus::Draft);
    }

    #[test]
    fn test_badge_variants() {
        assert_eq!(SaleOrderStatus::Draft.badge_variant(), "neutral");
        assert_eq!(SaleOrderStatus::Confirmed.badge_variant(), "primary");
        assert_eq!(SaleOrderStatus::Shipped.badge_variant(), "warning");
        assert_eq!(SaleOrderStatus::Invoiced.badge_variant(), "success");
    }

    #[test]
    fn test_unrecognised_code() {
        assert_eq!(SaleOrderStatus::from_code("returned"), None);
        let parsed: SaleOrderStatus = serde_json::from_str("\"returned\"").unwrap();
        assert_eq!(parsed, SaleOrderStatus::Unknown);
        assert_eq!(parsed.badge_variant(), "neutral");
    }
}
