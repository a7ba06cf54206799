use crate::domain::a001_contact::ContactId;
use crate::domain::a004_sale_order::SaleOrderId;
use crate::domain::common::define_aggregate_id;
use crate::enums::InvoiceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

define_aggregate_id!(
    /// Unique identifier of an invoice
    InvoiceId
);

/// Invoice as returned by `GET /invoices/`.
///
/// The list endpoint names the issue date `invoice_date` and leaves out the
/// subtotal/tax breakdown, so both spellings are accepted and the money
/// fields default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    #[serde(default)]
    pub sale_order_id: Option<SaleOrderId>,
    #[serde(default)]
    pub contact_id: Option<ContactId>,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default, alias = "invoice_date")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Payload for `POST /invoices/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDto {
    pub invoice_number: String,
    pub sale_order_id: Option<SaleOrderId>,
    pub contact_id: Option<ContactId>,
    pub status: InvoiceStatus,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
}
