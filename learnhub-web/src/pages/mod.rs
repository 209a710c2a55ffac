mod account_settings;
mod error;

pub use account_settings::AccountSettingsPage;
pub use error::ErrorPage;
