use serde::{Deserialize, Serialize};

/// Billing status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
    /// Any code this client does not know about
    #[serde(other)]
    Unknown,
}

impl InvoiceStatus {
    pub fn code(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
            InvoiceStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Cancelled => "Cancelled",
            InvoiceStatus::Unknown => "Unknown",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            InvoiceStatus::Sent => "primary",
            InvoiceStatus::Paid => "success",
            InvoiceStatus::Overdue => "error",
            InvoiceStatus::Draft | InvoiceStatus::Cancelled | InvoiceStatus::Unknown => "neutral",
        }
    }

    pub fn all() -> Vec<InvoiceStatus> {
        vec![
            InvoiceStatus::Draft,
            InvoiceStatus::Sent,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
            InvoiceStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(InvoiceStatus::Draft),
            "sent" => Some(InvoiceStatus::Sent),
            "paid" => Some(InvoiceStatus::Paid),
            "overdue" => Some(InvoiceStatus::Overdue),
            "cancelled" => Some(InvoiceStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        let codes: Vec<&str> = InvoiceStatus::all().iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec!["draft", "sent", "paid", "overdue", "cancelled"]);
        for status in InvoiceStatus::all() {
            let parsed: InvoiceStatus =
                serde_json::from_str(&format!("\"{}\"", status.code())).unwrap();
            assert_eq!(parsed, status);
            assert_eq!(InvoiceStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_badge_variants() {
        assert_eq!(InvoiceStatus::Paid.badge_variant(), "success");
        assert_eq!(InvoiceStatus::Overdue.badge_variant(), "error");
        assert_eq!(InvoiceStatus::Sent.badge_variant(), "primary");
        assert_eq!(InvoiceStatus::Cancelled.badge_variant(), "neutral");
    }

    #[test]
    fn test_unrecognised_code() {
        assert_eq!(InvoiceStatus::from_code("void"), None);
        let parsed: InvoiceStatus = serde_json::from_str("\"void\"").unwrap();
        assert_eq!(parsed, InvoiceStatus::Unknown);
    }
}
