//! Browser-free settings page logic.
//!
//! The web crate renders [`page::SettingsPageState`] and feeds it
//! [`page::SettingsIntent`]s; the reducer answers with the
//! [`page::SettingsEffect`]s the web layer must run.

pub mod dob;
pub mod editor;
pub mod error;
pub mod memo;
pub mod names;
pub mod options;
pub mod page;
pub mod policy;
pub mod verified_name;

#[cfg(test)]
mod page_test;

pub use dob::{COPPA_MINIMUM_AGE, SUBMITTED_DOB_KEY, coppa_compliance_year, should_prompt_dob_update};
pub use editor::FieldEditor;
pub use error::SettingsError;
pub use memo::Memo;
pub use names::{NameChangeTracker, NameParts};
pub use page::{PageRegion, SettingsEffect, SettingsIntent, SettingsPageState, SiteLanguageState};
pub use policy::{CountryPolicy, can_delete_account};
pub use verified_name::{VerifiedNameIcon, VerifiedNameMessage, verified_name_message};
