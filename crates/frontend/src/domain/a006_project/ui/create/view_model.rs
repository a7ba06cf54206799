use crate::domain::a006_project::api;
use crate::shared::api_client::ApiClient;
use crate::shared::form_utils::{optional_text, parse_optional_date, required_text};
use contracts::domain::a001_contact::ContactId;
use contracts::domain::a006_project::ProjectDto;
use contracts::domain::common::AggregateId;
use contracts::enums::ProjectStatus;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub name: String,
    pub code: String,
    pub description: String,
    pub contact_id: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            description: String::new(),
            contact_id: String::new(),
            status: ProjectStatus::default().code().to_string(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl ProjectForm {
    pub fn to_dto(&self) -> Result<ProjectDto, String> {
        let start_date = parse_optional_date("Start date", &self.start_date)?;
        let end_date = parse_optional_date("End date", &self.end_date)?;
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err("End date cannot be before the start date".into());
            }
        }

        Ok(ProjectDto {
            name: required_text("Name", &self.name)?,
            code: required_text("Code", &self.code)?,
            description: optional_text(&self.description),
            contact_id: ContactId::from_optional_str(&self.contact_id)?,
            status: ProjectStatus::from_code(&self.status)
                .ok_or_else(|| format!("Unknown status '{}'", self.status))?,
            start_date,
            end_date,
        })
    }
}

#[derive(Clone)]
pub struct ProjectCreateVm {
    client: ApiClient,
    pub name: RwSignal<String>,
    pub code: RwSignal<String>,
    pub description: RwSignal<String>,
    pub contact_id: RwSignal<String>,
    pub status: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ProjectCreateVm {
    pub fn new(client: ApiClient) -> Self {
        let form = ProjectForm::default();
        Self {
            client,
            name: RwSignal::new(form.name),
            code: RwSignal::new(form.code),
            description: RwSignal::new(form.description),
            contact_id: RwSignal::new(form.contact_id),
            status: RwSignal::new(form.status),
            start_date: RwSignal::new(form.start_date),
            end_date: RwSignal::new(form.end_date),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn snapshot(&self) -> ProjectForm {
        ProjectForm {
            name: self.name.get_untracked(),
            code: self.code.get_untracked(),
            description: self.description.get_untracked(),
            contact_id: self.contact_id.get_untracked(),
            status: self.status.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
        }
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let name = self.name;
        let code = self.code;
        Signal::derive(move || {
            saving.get() || name.get().trim().is_empty() || code.get().trim().is_empty()
        })
    }

    pub fn reset(&self) {
        let form = ProjectForm::default();
        self.name.set(form.name);
        self.code.set(form.code);
        self.description.set(form.description);
        self.contact_id.set(form.contact_id);
        self.status.set(form.status);
        self.start_date.set(form.start_date);
        self.end_date.set(form.end_date);
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
                    log::info!("project {} created", created.code);
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
