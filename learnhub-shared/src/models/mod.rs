pub mod account;
pub mod countries;
pub mod course;
pub mod errors;
pub mod field;
pub mod options;
pub mod user;
pub mod verified_name;

pub use account::{AccountSettings, SettingsSnapshot, TimeZoneEntry};
pub use course::{CourseSummary, SiteLanguage};
pub use errors::{ErrorResponse, FieldErrorDetail};
pub use field::{FieldCommit, FieldName, FieldValue, SaveState, SettingsTarget};
pub use options::{OptionItem, SelectOption};
pub use user::{AuthenticatedUser, UserRole};
pub use verified_name::{VerifiedNameRecord, VerifiedNameStatus};
