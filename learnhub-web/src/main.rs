mod api;
mod app;
mod components;
mod config;
mod containers;
mod effects;
mod language;
mod models;
mod pages;
mod routes;
mod storage;

#[cfg(all(test, target_arch = "wasm32"))]
mod app_test;
#[cfg(test)]
mod api_test;

use app::App;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::{DEFAULT_LANGUAGE, supported_languages};
use models::app_state::AppState;
use std::collections::HashMap;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::Dispatch;
use yewdux::YewduxRoot;

/// Catalogs handed to the i18n provider, keyed by language code.
pub(crate) fn translations() -> HashMap<&'static str, &'static str> {
    supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect()
}

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let cx = yewdux::Context::new();
    Dispatch::<AppState>::new(&cx).set(AppState::default());

    let config = I18nProviderConfig {
        translations: translations(),
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    web_sys::console::log_1(&"Starting LearnHub account settings".into());

    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    match body {
        Some(body) => {
            Renderer::<InternationalApp>::with_root(body.into()).render();
        }
        None => web_sys::console::error_1(&"No document body to mount into".into()),
    }
}
