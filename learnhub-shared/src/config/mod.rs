//! # Configuration
//!
//! Deployment flags for the account dashboard. Values come from a bundled
//! TOML document, then `LEARNHUB_*` overrides, then the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix shared by every configuration override variable.
pub const ENV_PREFIX: &str = "LEARNHUB_";

/// Errors raised while loading a [`DashboardConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid dashboard configuration: {0}")]
    Toml(#[from] toml::de::Error),
    /// A boolean override was neither `true`/`false` nor `1`/`0`.
    #[error("invalid value `{value}` for {key}: expected true or false")]
    InvalidFlag {
        /// Override variable name.
        key: String,
        /// Raw value that failed to parse.
        value: String,
    },
    /// The resolved configuration failed validation.
    #[error("dashboard configuration is invalid: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Feature flags and site metadata consumed by the account settings page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Display name of the platform, interpolated into help text.
    pub site_name: String,

    /// Base URL of the settings API, without trailing slash.
    pub api_base_url: String,

    /// Hides the plain year-of-birth field and enables the age gate.
    pub enable_coppa_compliance: bool,

    /// Allows the one-time date-of-birth update prompt.
    pub enable_dob_update: bool,

    /// Shows the delete-account section.
    pub enable_account_deletion: bool,

    /// Country codes a learner may select. Empty means no restriction.
    pub allowed_country_codes: Vec<String>,

    /// Countries whose residents cannot delete their account from the dashboard.
    pub countries_with_delete_account_disabled: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DashboardConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            site_name: "LearnHub".to_string(),
            api_base_url: "/api".to_string(),
            enable_coppa_compliance: false,
            enable_dob_update: false,
            enable_account_deletion: true,
            allowed_country_codes: Vec::new(),
            countries_with_delete_account_disabled: Vec::new(),
        }
    }

    /// Parses a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Toml`] when the document is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `LEARNHUB_*` overrides resolved through `lookup`.
    ///
    /// The lookup receives the full variable name (for example
    /// `LEARNHUB_SITE_NAME`). Native callers pass `std::env::var`, the browser
    /// build passes values captured at compile time.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidFlag`] when a boolean override cannot be parsed.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}"));

        if let Some(site_name) = var("SITE_NAME") {
            self.site_name = site_name;
        }
        if let Some(base_url) = var("API_BASE_URL") {
            self.api_base_url = base_url.trim_end_matches('/').to_string();
        }
        for (suffix, slot) in [
            ("ENABLE_COPPA_COMPLIANCE", &mut self.enable_coppa_compliance),
            ("ENABLE_DOB_UPDATE", &mut self.enable_dob_update),
            ("ENABLE_ACCOUNT_DELETION", &mut self.enable_account_deletion),
        ] {
            if let Some(raw) = var(suffix) {
                *slot = parse_flag(&format!("{ENV_PREFIX}{suffix}"), &raw)?;
            }
        }
        if let Some(raw) = var("ALLOWED_COUNTRY_CODES") {
            self.allowed_country_codes = parse_code_list(&raw);
        }
        if let Some(raw) = var("COUNTRIES_WITH_DELETE_ACCOUNT_DISABLED") {
            self.countries_with_delete_account_disabled = parse_code_list(&raw);
        }
        Ok(())
    }

    /// Validate the resolved configuration.
    ///
    /// # Errors
    /// Returns every problem found, not just the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.site_name.trim().is_empty() {
            errors.push("site_name must not be empty".to_string());
        }
        if self.api_base_url.trim().is_empty() {
            errors.push("api_base_url must not be empty".to_string());
        }
        for code in self
            .allowed_country_codes
            .iter()
            .chain(&self.countries_with_delete_account_disabled)
        {
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_uppercase()) {
                errors.push(format!("`{code}` is not a two-letter country code"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Parses `content` as the base layer, then applies overrides and
    /// validation. Keys missing from the document keep their defaults.
    ///
    /// # Errors
    /// Propagates TOML, override and validation failures.
    pub fn load_toml<F>(content: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_toml_str(content)?.resolve(lookup)
    }

    fn resolve<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.apply_overrides(lookup)?;
        self.validate().map_err(ConfigError::Invalid)?;
        Ok(self)
    }
}

/// Splits a comma separated list of country codes, normalising case.
#[must_use]
pub fn parse_code_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_ascii_uppercase)
        .collect()
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = DashboardConfig::with_defaults();
        assert!(config.validate().is_ok());
        assert!(config.allowed_country_codes.is_empty());
        assert!(!config.enable_coppa_compliance);
    }

    #[test]
    fn test_toml_keeps_defaults_for_missing_keys() -> anyhow::Result<()> {
        let config = DashboardConfig::from_toml_str(
            r#"
            site_name = "Sea of Knowledge"
            enable_coppa_compliance = true
            allowed_country_codes = ["CA", "MX"]
            "#,
        )?;
        assert_eq!(config.site_name, "Sea of Knowledge");
        assert!(config.enable_coppa_compliance);
        assert_eq!(config.allowed_country_codes, vec!["CA", "MX"]);
        assert_eq!(config.api_base_url, "/api");
        Ok(())
    }

    #[test]
    fn test_overrides_win_over_the_document() -> anyhow::Result<()> {
        let config = DashboardConfig::load_toml(
            r#"
            enable_dob_update = true
            allowed_country_codes = ["CA"]
            "#,
            lookup_from(&[("LEARNHUB_ALLOWED_COUNTRY_CODES", "gh,ke")]),
        )?;
        assert!(config.enable_dob_update);
        assert!(config.enable_account_deletion);
        assert_eq!(config.allowed_country_codes, vec!["GH", "KE"]);
        Ok(())
    }

    #[test]
    fn test_document_is_validated() {
        let result = DashboardConfig::load_toml(r#"site_name = """#, lookup_from(&[]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml_is_reported() {
        let err = DashboardConfig::from_toml_str("site_name = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_overrides_apply() -> anyhow::Result<()> {
        let mut config = DashboardConfig::with_defaults();
        config.apply_overrides(lookup_from(&[
            ("LEARNHUB_API_BASE_URL", "https://lms.example.com/api/"),
            ("LEARNHUB_ENABLE_DOB_UPDATE", "1"),
            ("LEARNHUB_ALLOWED_COUNTRY_CODES", "ca, mx ,,"),
        ]))?;
        assert_eq!(config.api_base_url, "https://lms.example.com/api");
        assert!(config.enable_dob_update);
        assert_eq!(config.allowed_country_codes, vec!["CA", "MX"]);
        Ok(())
    }

    #[test]
    fn test_bad_flag_is_rejected() {
        let mut config = DashboardConfig::with_defaults();
        let err = config
            .apply_overrides(lookup_from(&[("LEARNHUB_ENABLE_COPPA_COMPLIANCE", "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("LEARNHUB_ENABLE_COPPA_COMPLIANCE"));
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let config = DashboardConfig {
            site_name: " ".to_string(),
            allowed_country_codes: vec!["usa".to_string()],
            ..DashboardConfig::with_defaults()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_load_rejects_invalid_codes() {
        let result = DashboardConfig::load_toml("", lookup_from(&[(
            "LEARNHUB_COUNTRIES_WITH_DELETE_ACCOUNT_DISABLED",
            "RU,1X",
        )]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
