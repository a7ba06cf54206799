use crate::domain::a004_sale_order::api;
use crate::shared::api_client::ApiClient;
use crate::shared::form_utils::{parse_money, required_text};
use contracts::domain::a001_contact::ContactId;
use contracts::domain::a004_sale_order::SaleOrderDto;
use contracts::domain::common::AggregateId;
use contracts::enums::SaleOrderStatus;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SaleOrderForm {
    pub order_number: String,
    pub contact_id: String,
    pub status: String,
    pub total: String,
}

impl Default for SaleOrderForm {
    fn default() -> Self {
        Self {
            order_number: String::new(),
            contact_id: String::new(),
            status: SaleOrderStatus::default().code().to_string(),
            total: String::new(),
        }
    }
}

impl SaleOrderForm {
    pub fn to_dto(&self) -> Result<SaleOrderDto, String> {
        Ok(SaleOrderDto {
            order_number: required_text("Order number", &self.order_number)?,
            contact_id: ContactId::from_optional_str(&self.contact_id)?,
            status: SaleOrderStatus::from_code(&self.status)
                .ok_or_else(|| format!("Unknown status '{}'", self.status))?,
            total: parse_money("Total", &self.total)?,
        })
    }
}

#[derive(Clone)]
pub struct SaleOrderCreateVm {
    client: ApiClient,
    pub order_number: RwSignal<String>,
    pub contact_id: RwSignal<String>,
    pub status: RwSignal<String>,
    pub total: RwSignal<String>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl SaleOrderCreateVm {
    pub fn new(client: ApiClient) -> Self {
        let form = SaleOrderForm::default();
        Self {
            client,
            order_number: RwSignal::new(form.order_number),
            contact_id: RwSignal::new(form.contact_id),
            status: RwSignal::new(form.status),
            total: RwSignal::new(form.total),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn snapshot(&self) -> SaleOrderForm {
        SaleOrderForm {
            order_number: self.order_number.get_untracked(),
            contact_id: self.contact_id.get_untracked(),
            status: self.status.get_untracked(),
            total: self.total.get_untracked(),
        }
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let order_number = self.order_number;
        Signal::derive(move || saving.get() || order_number.get().trim().is_empty())
    }

    pub fn reset(&self) {
        let form = SaleOrderForm::default();
        self.order_number.set(form.order_number);
        self.contact_id.set(form.contact_id);
        self.status.set(form.status);
        self.total.set(form.total);
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
                    log::info!("sale order {} created", created.order_number);
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

    #[test]
    fn test_to_dto() {
        let form = SaleOrderForm {
            order_number: "SO-1001".into(),
            contact_id: "".into(),
            status: "confirmed".into(),
            total: "1999.99".into(),
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.contact_id, None);
        assert_eq!(dto.status, SaleOrderStatus::Confirmed);
        assert_eq!(dto.total, 1999.99);
    }

    #[test]
    fn test_bad_contact_id_is_rejected() {
        let form = SaleOrderForm {
            order_number: "SO-1001".into(),
            contact_id: "abc".into(),
            ..Default::default()
        };
        assert!(form.to_dto().is_err());
    }
}
