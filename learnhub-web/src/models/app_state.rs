use shared::models::AuthenticatedUser;
use shared::settings::SettingsPageState;
use yewdux::Store;

#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<AuthenticatedUser>,
    pub page: SettingsPageState,
}

impl AppState {
    /// Name shown in the sidebar and header: the account's full name once
    /// loaded, otherwise whatever the identity service reported.
    pub fn display_name(&self) -> &str {
        let committed = &self.page.committed.name;
        if !committed.is_empty() {
            return committed;
        }
        self.user.as_ref().map_or("", |user| user.name.as_str())
    }

    pub fn username(&self) -> &str {
        let committed = &self.page.committed.username;
        if !committed.is_empty() {
            return committed;
        }
        self.user.as_ref().map_or("", |user| user.username.as_str())
    }
}
