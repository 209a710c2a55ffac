use crate::{containers::layout::Layout, pages::*};
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/account")]
    Account,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    match route {
        MainRoute::Home => html! { <Redirect<MainRoute> to={MainRoute::Account} /> },
        MainRoute::Account => html! {
            <Layout>
                <AccountSettingsPage />
            </Layout>
        },
        MainRoute::NotFound => html! {
            <Layout>
                <ErrorPage />
            </Layout>
        },
    }
}
