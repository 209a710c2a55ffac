pub(crate) mod alert;
pub(crate) mod delete_account;
pub(crate) mod dob_modal;
pub(crate) mod editable_field;
pub(crate) mod editable_select_field;
pub(crate) mod email_field;
pub(crate) mod loading;
pub(crate) mod reset_password;
pub(crate) mod sidebar;
pub(crate) mod stateful_button;
pub(crate) mod verified_name_banner;

// Re-export components for convenience
pub use alert::{Alert, AlertVariant};
pub use delete_account::DeleteAccount;
pub use dob_modal::DobModal;
pub use editable_field::EditableField;
pub use editable_select_field::EditableSelectField;
pub use email_field::EmailField;
pub use loading::Loading;
pub use reset_password::ResetPassword;
pub use sidebar::Sidebar;
pub use verified_name_banner::VerifiedNameBanner;
