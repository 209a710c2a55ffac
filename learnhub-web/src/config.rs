//! Frontend configuration module
//!
//! Dashboard settings start from the bundled `dashboard.toml`. `LEARNHUB_*`
//! variables captured at compile time override it, since the browser build
//! has no process environment to read at runtime.

use once_cell::sync::Lazy;
use shared::config::{ConfigError, DashboardConfig};

static DASHBOARD: Lazy<DashboardConfig> = Lazy::new(|| match FrontendConfig::new().dashboard() {
    Ok(config) => config,
    Err(err) => {
        web_sys::console::warn_1(&format!("Invalid dashboard configuration: {err}").into());
        DashboardConfig::with_defaults()
    }
});

/// Deployment defaults shipped with the bundle.
const DASHBOARD_TOML: &str = include_str!("../dashboard.toml");

/// Resolves a `LEARNHUB_*` variable baked in at build time.
fn compile_time_var(key: &str) -> Option<&'static str> {
    match key {
        "LEARNHUB_SITE_NAME" => option_env!("LEARNHUB_SITE_NAME"),
        "LEARNHUB_API_BASE_URL" => option_env!("LEARNHUB_API_BASE_URL"),
        "LEARNHUB_ENABLE_COPPA_COMPLIANCE" => option_env!("LEARNHUB_ENABLE_COPPA_COMPLIANCE"),
        "LEARNHUB_ENABLE_DOB_UPDATE" => option_env!("LEARNHUB_ENABLE_DOB_UPDATE"),
        "LEARNHUB_ENABLE_ACCOUNT_DELETION" => option_env!("LEARNHUB_ENABLE_ACCOUNT_DELETION"),
        "LEARNHUB_ALLOWED_COUNTRY_CODES" => option_env!("LEARNHUB_ALLOWED_COUNTRY_CODES"),
        "LEARNHUB_COUNTRIES_WITH_DELETE_ACCOUNT_DISABLED" => {
            option_env!("LEARNHUB_COUNTRIES_WITH_DELETE_ACCOUNT_DISABLED")
        }
        _ => None,
    }
}

/// Frontend configuration for URLs and external links
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Where the Log Out button and a deleted account land
    pub logout_url: String,
    /// Link to the help center article about deleting an account
    pub support_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            logout_url: option_env!("LEARNHUB_LOGOUT_URL")
                .unwrap_or("/logout")
                .to_string(),
            support_url: option_env!("LEARNHUB_SUPPORT_URL")
                .unwrap_or("https://support.learnhub.org")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logout_url(&self) -> &str {
        &self.logout_url
    }

    pub fn support_url(&self) -> &str {
        &self.support_url
    }

    /// Resolves the dashboard settings from the bundled document and the
    /// compile-time variables.
    pub fn dashboard(&self) -> Result<DashboardConfig, ConfigError> {
        DashboardConfig::load_toml(DASHBOARD_TOML, |key| {
            compile_time_var(key).map(str::to_string)
        })
    }

    /// Process-wide dashboard settings. Invalid values fall back to defaults.
    pub fn shared_dashboard() -> &'static DashboardConfig {
        &DASHBOARD
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_shared_dashboard_is_valid() {
        let config = FrontendConfig::shared_dashboard();
        assert!(config.validate().is_ok());
    }
}
