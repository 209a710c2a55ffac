use crate::{language::interpolate, models::app_state::AppState};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// First token of the learner's name, once one is known.
pub fn greeting_name(state: &AppState) -> Option<String> {
    state
        .display_name()
        .split_whitespace()
        .next()
        .map(str::to_string)
}

#[function_component(Header)]
pub fn header() -> Html {
    let (i18n, ..) = use_translation();
    let name = use_selector(greeting_name);

    let greeting = match &*name {
        Some(name) => interpolate(&i18n.t("header.greeting"), &[("name", name.as_str())]),
        None => i18n.t("header.loading_greeting"),
    };

    html! {
        <nav class="navbar bg-base-100 border-b border-base-300 px-6">
            <h1 class="text-xl font-semibold">{ greeting }</h1>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::AuthenticatedUser;

    #[test]
    fn test_greeting_uses_first_name_token() {
        let mut state = AppState::default();
        assert_eq!(greeting_name(&state), None);

        state.user = Some(AuthenticatedUser {
            username: "kwame".into(),
            name: "Kwame Mensah".into(),
            roles: Vec::new(),
        });
        assert_eq!(greeting_name(&state).as_deref(), Some("Kwame"));

        state.page.committed.name = "Ama Serwaa Boateng".into();
        assert_eq!(greeting_name(&state).as_deref(), Some("Ama"));
    }
}
