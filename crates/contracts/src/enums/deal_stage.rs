use serde::{Deserialize, Serialize};

/// Position of a deal in the sales pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    #[default]
    New,
    Qualified,
    Proposal,
    Won,
    Lost,
    /// Any code this client does not know about
    #[serde(other)]
    Unknown,
}

impl DealStage {
    /// Wire code as stored by the backend
    pub fn code(&self) -> &'static str {
        match self {
            DealStage::New => "new",
            DealStage::Qualified => "qualified",
            DealStage::Proposal => "proposal",
            DealStage::Won => "won",
            DealStage::Lost => "lost",
            DealStage::Unknown => "unknown",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            DealStage::New => "New",
            DealStage::Qualified => "Qualified",
            DealStage::Proposal => "Proposal",
            DealStage::Won => "Won",
            DealStage::Lost => "Lost",
            DealStage::Unknown => "Unknown",
        }
    }

    /// Badge variant used by list tables
    pub fn badge_variant(&self) -> &'static str {
        match self {
            DealStage::Qualified | DealStage::Won => "success",
            DealStage::Proposal => "warning",
            DealStage::Lost => "error",
            DealStage::New => "primary",
            DealStage::Unknown => "neutral",
        }
    }

    /// All stages in pipeline order
    pub fn all() -> Vec<DealStage> {
        vec![
            DealStage::New,
            DealStage::Qualified,
            DealStage::Proposal,
            DealStage::Won,
            DealStage::Lost,
        ]
    }

    /// Parse from the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(DealStage::New),
            "qualified" => Some(DealStage::Qualified),
            "proposal" => Some(DealStage::Proposal),
            "won" => Some(DealStage::Won),
            "lost" => Some(DealStage::Lost),
            _ => None,
        }
    }
}

impl std::fmt::Display for DealStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
