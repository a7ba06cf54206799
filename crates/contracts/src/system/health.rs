use serde::{Deserialize, Serialize};

/// Response of the API root (`GET /`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub app: String,
    #[serde(default)]
    pub version: Option<String>,
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
