use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("errors.not_found_title") }</h1>
            <p>{ i18n.t("errors.not_found_body") }</p>
            <Link<MainRoute> to={MainRoute::Account} classes="btn btn-primary btn-sm">
                { i18n.t("errors.back_to_account") }
            </Link<MainRoute>>
        </div>
    }
}
