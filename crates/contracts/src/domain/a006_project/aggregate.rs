use crate::domain::a001_contact::ContactId;
use crate::domain::common::define_aggregate_id;
use crate::enums::ProjectStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

define_aggregate_id!(
    /// Unique identifier of a project
    ProjectId
);

/// Project as returned by `GET /projects/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_id: Option<ContactId>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Payload for `POST /projects/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDto {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub contact_id: Option<ContactId>,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
