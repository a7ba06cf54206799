//! Application configuration.
//!
//! The API base URL is resolved exactly once: from `OPENERP_API_URL` captured
//! at build time (the WASM bundle has no process environment at runtime),
//! otherwise the local development backend.

use once_cell::sync::OnceCell;

/// Backend used when `OPENERP_API_URL` is not set
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL without a trailing slash; request paths are appended verbatim
    pub api_base_url: String,
}

impl AppConfig {
    /// Build the config from an optional raw environment value
    pub fn from_env_value(value: Option<&str>) -> Self {
        let api_base_url = value
            .map(normalize_base_url)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self { api_base_url }
    }

    /// Process-wide configuration, resolved on first access
    pub fn global() -> &'static AppConfig {
        static CONFIG: OnceCell<AppConfig> = OnceCell::new();
        CONFIG.get_or_init(|| {
            let config = AppConfig::from_env_value(option_env!("OPENERP_API_URL"));
            log::info!("API base URL: {}", config.api_base_url);
            config
        })
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        assert_eq!(AppConfig::from_env_value(None).api_base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_default_when_blank() {
        assert_eq!(
            AppConfig::from_env_value(Some("   ")).api_base_url,
            DEFAULT_API_BASE
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(
            AppConfig::from_env_value(Some("https://erp.example.com/api/")).api_base_url,
            "https://erp.example.com/api"
        );
    }

    #[test]
    fn test_global_is_stable() {
        let first = AppConfig::global() as *const AppConfig;
        let second = AppConfig::global() as *const AppConfig;
        assert_eq!(first, second);
    }
}
