use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every field the account settings page can edit.
///
/// The serialized spelling matches the settings service and the draft keys it
/// expects, which is why the casing is mixed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum FieldName {
    #[serde(rename = "name")]
    #[strum(serialize = "name")]
    Name,
    #[serde(rename = "firstName")]
    #[strum(serialize = "firstName")]
    FirstName,
    #[serde(rename = "middleName")]
    #[strum(serialize = "middleName")]
    MiddleName,
    #[serde(rename = "lastName")]
    #[strum(serialize = "lastName")]
    LastName,
    #[serde(rename = "email")]
    #[strum(serialize = "email")]
    Email,
    #[serde(rename = "secondary_email")]
    #[strum(serialize = "secondary_email")]
    SecondaryEmail,
    #[serde(rename = "year_of_birth")]
    #[strum(serialize = "year_of_birth")]
    YearOfBirth,
    #[serde(rename = "country")]
    #[strum(serialize = "country")]
    Country,
    #[serde(rename = "time_zone")]
    #[strum(serialize = "time_zone")]
    TimeZone,
    #[serde(rename = "siteLanguage")]
    #[strum(serialize = "siteLanguage")]
    SiteLanguage,
    #[serde(rename = "useVerifiedNameForCerts")]
    #[strum(serialize = "useVerifiedNameForCerts")]
    UseVerifiedNameForCerts,
}

/// Where a committed field is persisted on the settings service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTarget {
    /// `PATCH user/v1/accounts/{username}` with a merge-patch body.
    Account,
    /// `PATCH user/v1/preferences/{username}` under the given key.
    Preference(&'static str),
    /// `POST verified_name/config` for certificate name preference.
    VerifiedNameConfig,
    /// Client-only field that is never sent on its own.
    Local,
}

impl FieldName {
    /// The three draft-only fields that make up the full name editor.
    pub const NAME_PARTS: [Self; 3] = [Self::FirstName, Self::MiddleName, Self::LastName];

    /// Return the wire spelling of this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// DOM id used to bind the field's label to its input.
    #[must_use]
    pub fn dom_id(self) -> String {
        format!("field-{}", self.as_str())
    }

    #[must_use]
    pub const fn is_name_part(self) -> bool {
        matches!(self, Self::FirstName | Self::MiddleName | Self::LastName)
    }

    /// Fields whose change must be confirmed from the new address before it
    /// becomes the committed value.
    #[must_use]
    pub const fn requires_confirmation(self) -> bool {
        matches!(self, Self::Email | Self::SecondaryEmail)
    }

    #[must_use]
    pub const fn target(self) -> SettingsTarget {
        match self {
            Self::Name | Self::Email | Self::SecondaryEmail | Self::YearOfBirth | Self::Country => {
                SettingsTarget::Account
            }
            Self::TimeZone => SettingsTarget::Preference("time_zone"),
            Self::SiteLanguage => SettingsTarget::Preference("pref-lang"),
            Self::UseVerifiedNameForCerts => SettingsTarget::VerifiedNameConfig,
            Self::FirstName | Self::MiddleName | Self::LastName => SettingsTarget::Local,
        }
    }
}

/// A scalar settings value as exchanged with the settings service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Flag(bool),
    Number(i64),
    Text(String),
}

impl FieldValue {
    /// String form used by inputs and for change detection.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Flag(flag) => flag.to_string(),
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Flag(_) | Self::Number(_) => false,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Two values are equivalent when they render the same in an input.
    #[must_use]
    pub fn same_display(&self, other: &Self) -> bool {
        self.display() == other.display()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Progress of the most recent commit for one field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SaveState {
    #[default]
    Default,
    Pending,
    Complete,
    Error,
}

/// One entry of a grouped commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCommit {
    pub form_id: FieldName,
    pub commit_values: FieldValue,
}

impl FieldCommit {
    #[must_use]
    pub fn new(form_id: FieldName, commit_values: impl Into<FieldValue>) -> Self {
        Self {
            form_id,
            commit_values: commit_values.into(),
        }
    }
}
