use serde::{Deserialize, Serialize};

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
    Cancelled,
    /// Any code this client does not know about
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
            ProjectStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
            ProjectStatus::Unknown => "Unknown",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            ProjectStatus::Planning | ProjectStatus::Unknown => "neutral",
            ProjectStatus::Active => "primary",
            ProjectStatus::OnHold => "warning",
            ProjectStatus::Completed => "success",
            ProjectStatus::Cancelled => "error",
        }
    }

    pub fn all() -> Vec<ProjectStatus> {
        vec![
            ProjectStatus::Planning,
            ProjectStatus::Active,
            ProjectStatus::OnHold,
            ProjectStatus::Completed,
            ProjectStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "planning" => Some(ProjectStatus::Planning),
            "active" => Some(ProjectStatus::Active),
            "on_hold" => Some(ProjectStatus::OnHold),
            "completed" => Some(ProjectStatus::Completed),
            "cancelled" => Some(ProjectStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
