use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the ID as a string (form values, table keys)
    fn as_string(&self) -> String;

    /// Parse the ID from a string
    fn from_string(s: &str) -> Result<Self, String>;

    /// Parse an optional picker value: blank means "no selection".
    fn from_optional_str(s: &str) -> Result<Option<Self>, String> {
        if s.trim().is_empty() {
            Ok(None)
        } else {
            Self::from_string(s).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_contact::ContactId;

    #[test]
    fn test_round_trip_through_string() {
        let id = ContactId::new(42);
        assert_eq!(id.as_string(), "42");
        assert_eq!(ContactId::from_string("42"), Ok(id));
        assert_eq!(ContactId::from_string(" 7 "), Ok(ContactId(7)));
    }

    #[test]
    fn test_invalid_id() {
        assert!(ContactId::from_string("abc").is_err());
        assert!(ContactId::from_string("").is_err());
    }

    #[test]
    fn test_optional_picker_value() {
        assert_eq!(ContactId::from_optional_str(""), Ok(None));
        assert_eq!(ContactId::from_optional_str("   "), Ok(None));
        assert_eq!(ContactId::from_optional_str("3"), Ok(Some(ContactId(3))));
        assert!(ContactId::from_optional_str("x").is_err());
    }

    #[test]
    fn test_transparent_on_the_wire() {
        let json = serde_json::to_string(&ContactId(5)).unwrap();
        assert_eq!(json, "5");
        let id: ContactId = serde_json::from_str("11").unwrap();
        assert_eq!(id, ContactId(11));
    }
}
