//! ViewModel for the "Create New Contact" card

use crate::domain::a001_contact::api;
use crate::shared::api_client::ApiClient;
use crate::shared::form_utils::{optional_text, required_text};
use contracts::domain::a001_contact::ContactDto;
use leptos::prelude::*;

/// Raw form input, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl ContactForm {
    pub fn to_dto(&self) -> Result<ContactDto, String> {
        Ok(ContactDto {
            name: required_text("Name", &self.name)?,
            email: optional_text(&self.email),
            phone: optional_text(&self.phone),
            company: optional_text(&self.company),
        })
    }
}

#[derive(Clone)]
pub struct ContactCreateVm {
    client: ApiClient,
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub company: RwSignal<String>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ContactCreateVm {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            company: RwSignal::new(String::new()),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn snapshot(&self) -> ContactForm {
        ContactForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            company: self.company.get_untracked(),
        }
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let name = self.name;
        Signal::derive(move || saving.get() || name.get().trim().is_empty())
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.company.set(String::new());
        self.error.set(None);
    }

    /// Validate, post, and on success clear the form and notify the list
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
                    log::info!("contact #{} created", created.id);
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
