//! ViewModel for the "Create New Invoice" card
//!
//! The total is never typed: it is always `subtotal + tax`.

use crate::domain::a005_invoice::api;
use crate::shared::api_client::ApiClient;
use crate::shared::form_utils::{
    parse_money, parse_optional_date, parse_required_date, required_text,
};
use contracts::domain::a001_contact::ContactId;
use contracts::domain::a004_sale_order::SaleOrderId;
use contracts::domain::a005_invoice::InvoiceDto;
use contracts::domain::common::AggregateId;
use contracts::enums::InvoiceStatus;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceForm {
    pub invoice_number: String,
    pub status: String,
    pub sale_order_id: String,
    pub contact_id: String,
    pub subtotal: String,
    pub tax: String,
    pub issue_date: String,
    pub due_date: String,
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self {
            invoice_number: String::new(),
            status: InvoiceStatus::default().code().to_string(),
            sale_order_id: String::new(),
            contact_id: String::new(),
            subtotal: String::new(),
            tax: String::new(),
            issue_date: String::new(),
            due_date: String::new(),
        }
    }
}

impl InvoiceForm {
    /// Running total for display; `None` while either amount is unparsable
    pub fn preview_total(&self) -> Option<f64> {
        let subtotal = parse_money("Subtotal", &self.subtotal).ok()?;
        let tax = parse_money("Tax", &self.tax).ok()?;
        Some(subtotal + tax)
    }

    pub fn to_dto(&self) -> Result<InvoiceDto, String> {
        let subtotal = parse_money("Subtotal", &self.subtotal)?;
        let tax = parse_money("Tax", &self.tax)?;
        let issue_date = parse_required_date("Issue date", &self.issue_date)?;
        let due_date = parse_optional_date("Due date", &self.due_date)?;
        if matches!(due_date, Some(due) if due < issue_date) {
            return Err("Due date cannot be before the issue date".into());
        }

        Ok(InvoiceDto {
            invoice_number: required_text("Invoice number", &self.invoice_number)?,
            sale_order_id: SaleOrderId::from_optional_str(&self.sale_order_id)?,
            contact_id: ContactId::from_optional_str(&self.contact_id)?,
            status: InvoiceStatus::from_code(&self.status)
                .ok_or_else(|| format!("Unknown status '{}'", self.status))?,
            subtotal,
            tax,
            total: subtotal + tax,
            issue_date,
            due_date,
        })
    }
}

#[derive(Clone)]
pub struct InvoiceCreateVm {
    client: ApiClient,
    pub invoice_number: RwSignal<String>,
    pub status: RwSignal<String>,
    pub sale_order_id: RwSignal<String>,
    pub contact_id: RwSignal<String>,
    pub subtotal: RwSignal<String>,
    pub tax: RwSignal<String>,
    pub issue_date: RwSignal<String>,
    pub due_date: RwSignal<String>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl InvoiceCreateVm {
    pub fn new(client: ApiClient) -> Self {
        let form = InvoiceForm::default();
        Self {
            client,
            invoice_number: RwSignal::new(form.invoice_number),
            status: RwSignal::new(form.status),
            sale_order_id: RwSignal::new(form.sale_order_id),
            contact_id: RwSignal::new(form.contact_id),
            subtotal: RwSignal::new(form.subtotal),
            tax: RwSignal::new(form.tax),
            issue_date: RwSignal::new(form.issue_date),
            due_date: RwSignal::new(form.due_date),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn snapshot(&self) -> InvoiceForm {
        InvoiceForm {
            invoice_number: self.invoice_number.get_untracked(),
            status: self.status.get_untracked(),
            sale_order_id: self.sale_order_id.get_untracked(),
            contact_id: self.contact_id.get_untracked(),
            subtotal: self.subtotal.get_untracked(),
            tax: self.tax.get_untracked(),
            issue_date: self.issue_date.get_untracked(),
            due_date: self.due_date.get_untracked(),
        }
    }

    /// Live total tracking the subtotal and tax inputs
    pub fn total(&self) -> Signal<Option<f64>> {
        let subtotal = self.subtotal;
        let tax = self.tax;
        Signal::derive(move || {
            InvoiceForm {
                subtotal: subtotal.get(),
                tax: tax.get(),
                ..Default::default()
            }
            .preview_total()
        })
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let number = self.invoice_number;
        let issue_date = self.issue_date;
        Signal::derive(move || {
            saving.get() || number.get().trim().is_empty() || issue_date.get().trim().is_empty()
        })
    }

    pub fn reset(&self) {
        let form = InvoiceForm::default();
        self.invoice_number.set(form.invoice_number);
        self.status.set(form.status);
        self.sale_order_id.set(form.sale_order_id);
        self.contact_id.set(form.contact_id);
        self.subtotal.set(form.subtotal);
        self.tax.set(form.tax);
        self.issue_date.set(form.issue_date);
        self.due_date.set(form.due_date);
        self.error.set(None);
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let dto = match self.snapshot().to_dto() {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match api::create(&this.client, &dto).await {
                Ok(created) => {
                    log::info!("invoice {} created", created.invoice_number);
                    this.saving.set(false);
                    this.reset();
                    on_saved.run(());
                }
                Err(e) => {
                    this.saving.set(false);
                    this.error.set(Some(e.user_message()));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled() -> InvoiceForm {
        InvoiceForm {
            invoice_number: "INV-2024-001".into(),
            status: "sent".into(),
            sale_order_id: "12".into(),
            contact_id: "3".into(),
            subtotal: "1000".into(),
            tax: "210.50".into(),
            issue_date: "2024-05-01".into(),
            due_date: "2024-05-31".into(),
        }
    }

    #[test]
    fn test_total_is_subtotal_plus_tax() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.subtotal, 1000.0);
        assert_eq!(dto.tax, 210.5);
        assert_eq!(dto.total, 1210.5);
        assert_eq!(dto.status, InvoiceStatus::Sent);
        assert_eq!(dto.sale_order_id, Some(SaleOrderId(12)));
        assert_eq!(dto.contact_id, Some(ContactId(3)));
        assert_eq!(dto.issue_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(dto.due_date, NaiveDate::from_ymd_opt(2024, 5, 31));
    }

    #[test]
    fn test_preview_total() {
        let mut form = filled();
        assert_eq!(form.preview_total(), Some(1210.5));
        form.tax = "".into();
        assert_eq!(form.preview_total(), Some(1000.0));
        form.tax = "x".into();
        assert_eq!(form.preview_total(), None);
    }

    #[test]
    fn test_issue_date_is_required() {
        let form = InvoiceForm {
            issue_date: "".into(),
            ..filled()
        };
        assert_eq!(form.to_dto(), Err("Issue date is required".to_string()));
    }

    #[test]
    fn test_due_before_issue_is_rejected() {
        let form = InvoiceForm {
            due_date: "2024-04-30".into(),
            ..filled()
        };
        assert!(form.to_dto().is_err());
    }

    #[test]
    fn test_optional_references() {
        let form = InvoiceForm {
            sale_order_id: "".into(),
            contact_id: "".into(),
            due_date: "".into(),
            ..filled()
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.sale_order_id, None);
        assert_eq!(dto.contact_id, None);
        assert_eq!(dto.due_date, None);
    }
}
