use contracts::domain::a005_invoice::{Invoice, InvoiceDto};

use crate::shared::api_client::{ApiClient, ApiError, Transport};

const ENDPOINT: &str = "/invoices/";

pub async fn fetch_all<T: Transport>(client: &ApiClient<T>) -> Vec<Invoice> {
    client.list_or_empty(ENDPOINT).await
}

pub async fn create<T: Transport>(
    client: &ApiClient<T>,
    dto: &InvoiceDto,
) -> Result<Invoice, ApiError> {
    client.post(ENDPOINT, dto).await
}
