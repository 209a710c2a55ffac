use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use wasm_bindgen_test::*;
use yew::prelude::*;
use yewdux::YewduxRoot;

use crate::components::Loading;
use crate::containers::header::Header;
use crate::language::DEFAULT_LANGUAGE;
use crate::translations;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct ProvidersProps {
    children: Children,
}

#[function_component(Providers)]
fn providers(props: &ProvidersProps) -> Html {
    let config = I18nProviderConfig {
        translations: translations(),
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };
    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                { props.children.clone() }
            </I18nProvider>
        </YewduxRoot>
    }
}

#[wasm_bindgen_test]
async fn header_greets_while_loading() {
    #[function_component(Harness)]
    fn harness() -> Html {
        html! { <Providers><Header /></Providers> }
    }

    let rendered = yew::ServerRenderer::<Harness>::new().render().await;
    assert!(rendered.contains("<nav"));
    assert!(rendered.contains("Dashboard"));
}

#[wasm_bindgen_test]
async fn loading_renders_inside_providers() {
    #[function_component(Harness)]
    fn harness() -> Html {
        html! { <Providers><Loading message="Loading your settings" /></Providers> }
    }

    let rendered = yew::ServerRenderer::<Harness>::new().render().await;
    assert!(rendered.contains("Loading your settings"));
}
