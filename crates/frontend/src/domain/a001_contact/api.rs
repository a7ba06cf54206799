use contracts::domain::a001_contact::{Contact, ContactDto, ContactId};

use crate::shared::api_client::{ApiClient, ApiError, Transport};
use crate::shared::format::EMPTY_CELL;

const ENDPOINT: &str = "/contacts/";

/// All contacts, newest first; empty when the backend is unavailable
pub async fn fetch_all<T: Transport>(client: &ApiClient<T>) -> Vec<Contact> {
    client.list_or_empty(ENDPOINT).await
}

pub async fn create<T: Transport>(
    client: &ApiClient<T>,
    dto: &ContactDto,
) -> Result<Contact, ApiError> {
    client.post(ENDPOINT, dto).await
}

/// Label for a contact reference in other tables; unknown ids show as `#<id>`
pub fn contact_label(contacts: &[Contact], id: Option<ContactId>) -> String {
    match id {
        None => EMPTY_CELL.to_string(),
        Some(id) => contacts
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("#{}", id)),
    }
}
