//! ViewModel for the "Create New Deal" card

use crate::domain::a002_deal::api;
use crate::shared::api_client::ApiClient;
use crate::shared::form_utils::{parse_money, required_text};
use contracts::domain::a001_contact::ContactId;
use contracts::domain::a002_deal::DealDto;
use contracts::domain::common::AggregateId;
use contracts::enums::DealStage;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DealForm {
    pub title: String,
    pub amount: String,
    /// Stage wire code
    pub stage: String,
    /// Selected contact id, empty for none
    pub contact_id: String,
}

impl Default for DealForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            stage: DealStage::default().code().to_string(),
            contact_id: String::new(),
        }
    }
}

impl DealForm {
    pub fn to_dto(&self) -> Result<DealDto, String> {
        Ok(DealDto {
            title: required_text("Title", &self.title)?,
            amount: parse_money("Amount", &self.amount)?,
            stage: DealStage::from_code(&self.stage)
                .ok_or_else(|| format!("Unknown stage '{}'", self.stage))?,
            contact_id: ContactId::from_optional_str(&self.contact_id)?,
        })
    }
}

#[derive(Clone)]
pub struct DealCreateVm {
    client: ApiClient,
    pub title: RwSignal<String>,
    pub amount: RwSignal<String>,
    pub stage: RwSignal<String>,
    pub contact_id: RwSignal<String>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl DealCreateVm {
    pub fn new(client: ApiClient) -> Self {
        let form = DealForm::default();
        Self {
            client,
            title: RwSignal::new(form.title),
            amount: RwSignal::new(form.amount),
            stage: RwSignal::new(form.stage),
            contact_id: RwSignal::new(form.contact_id),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn snapshot(&self) -> DealForm {
        DealForm {
            title: self.title.get_untracked(),
            amount: self.amount.get_untracked(),
            stage: self.stage.get_untracked(),
            contact_id: self.contact_id.get_untracked(),
        }
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let title = self.title;
        Signal::derive(move || saving.get() || title.get().trim().is_empty())
    }

    pub fn reset(&self) {
        let form = DealForm::default();
        self.title.set(form.title);
        self.amount.set(form.amount);
        self.stage.set(form.stage);
        self.contact_id.set(form.contact_id);
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
                    log::info!("deal #{} created", created.id);
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
        let form = DealForm {
            title: "Website redesign".into(),
            amount: "50000".into(),
            stage: "qualified".into(),
            contact_id: "4".into(),
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.amount, 50000.0);
        assert_eq!(dto.stage, DealStage::Qualified);
        assert_eq!(dto.contact_id, Some(ContactId(4)));
    }

    #[test]
    fn test_defaults() {
        let form = DealForm {
            title: "Support".into(),
            ..Default::default()
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.amount, 0.0);
        assert_eq!(dto.stage, DealStage::New);
        assert_eq!(dto.contact_id, None);
    }

    #[test]
    fn test_invalid_amount_is_rejected() {
        let form = DealForm {
            title: "Support".into(),
            amount: "lots".into(),
            ..Default::default()
        };
        assert_eq!(form.to_dto(), Err("Amount must be a number".to_string()));
    }
}
