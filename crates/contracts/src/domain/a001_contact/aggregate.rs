use crate::domain::common::define_aggregate_id;
use serde::{Deserialize, Serialize};

define_aggregate_id!(
    /// Unique identifier of a contact (customer or partner)
    ContactId
);

/// Contact record as returned by `GET /contacts/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// Payload for `POST /contacts/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDto {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}
