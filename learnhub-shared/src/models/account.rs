use serde::{Deserialize, Serialize};

use super::{FieldName, FieldValue, VerifiedNameRecord};

/// Last server-confirmed account values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountSettings {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub secondary_email: Option<String>,
    #[serde(default)]
    pub secondary_email_enabled: bool,
    #[serde(default)]
    pub year_of_birth: Option<i64>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default, rename = "useVerifiedNameForCerts")]
    pub use_verified_name_for_certs: bool,
    #[serde(default)]
    pub is_active: bool,
}

impl AccountSettings {
    /// Committed value of `field`. Draft-only fields read as [`FieldValue::Null`].
    #[must_use]
    pub fn value(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::Name => FieldValue::from(self.name.as_str()),
            FieldName::Email => FieldValue::from(self.email.as_str()),
            FieldName::SecondaryEmail => self.secondary_email.clone().into(),
            FieldName::YearOfBirth => self.year_of_birth.into(),
            FieldName::Country => self.country.clone().into(),
            FieldName::TimeZone => self.time_zone.clone().into(),
            FieldName::UseVerifiedNameForCerts => self.use_verified_name_for_certs.into(),
            FieldName::FirstName
            | FieldName::MiddleName
            | FieldName::LastName
            | FieldName::SiteLanguage => FieldValue::Null,
        }
    }

    /// Records a value the server has accepted.
    pub fn apply(&mut self, field: FieldName, value: &FieldValue) {
        let text = || (!value.is_blank()).then(|| value.display());
        match field {
            FieldName::Name => self.name = value.display(),
            FieldName::Email => self.email = value.display(),
            FieldName::SecondaryEmail => self.secondary_email = text(),
            FieldName::YearOfBirth => self.year_of_birth = value.as_number(),
            FieldName::Country => self.country = text(),
            FieldName::TimeZone => self.time_zone = text(),
            FieldName::UseVerifiedNameForCerts => {
                self.use_verified_name_for_certs = value.as_flag().unwrap_or(false);
            }
            FieldName::FirstName
            | FieldName::MiddleName
            | FieldName::LastName
            | FieldName::SiteLanguage => {}
        }
    }

    /// First whitespace-separated token of the full name, used in greetings.
    #[must_use]
    pub fn given_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }
}

/// A selectable time zone as returned by the preferences service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneEntry {
    pub time_zone: String,
    pub description: String,
}

/// Everything the initial settings fetch resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    pub account: AccountSettings,
    /// Fields managed by an administrator and therefore read-only.
    #[serde(default)]
    pub static_fields: Vec<FieldName>,
    #[serde(default)]
    pub verified_name_history: Vec<VerifiedNameRecord>,
    #[serde(default)]
    pub time_zones: Vec<TimeZoneEntry>,
    #[serde(default)]
    pub country_time_zones: Vec<TimeZoneEntry>,
    /// The learner's saved `pref-lang` preference.
    #[serde(default)]
    pub site_language: Option<String>,
}
