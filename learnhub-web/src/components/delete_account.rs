use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::{
    Callback, Html, InputEvent, MouseEvent, Properties, SubmitEvent, TargetCast,
    function_component, html, use_state,
};

use super::alert::{Alert, AlertVariant};
use crate::api::SettingsClient;
use crate::config::FrontendConfig;

#[derive(Properties, PartialEq)]
pub struct DeleteAccountProps {
    /// False when the learner's country blocks self-service deletion.
    pub can_delete: bool,
}

#[function_component(DeleteAccount)]
pub fn delete_account(props: &DeleteAccountProps) -> Html {
    let (i18n, _) = use_translation();
    let confirming = use_state(|| false);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let pending = use_state(|| false);

    let header = html! {
        <>
            <h2 class="text-lg font-semibold">{ i18n.t("settings.delete_account.title") }</h2>
            <p class="text-sm text-base-content/70 mb-2">{ i18n.t("settings.delete_account.description") }</p>
        </>
    };

    if !props.can_delete {
        return html! {
            <div class="form-control w-full">
                { header }
                <Alert variant={AlertVariant::Warning}>
                    { i18n.t("settings.delete_account.unavailable") }
                </Alert>
            </div>
        };
    }

    let on_open = {
        let confirming = confirming.clone();
        Callback::from(move |_: MouseEvent| confirming.set(true))
    };

    let on_close = {
        let confirming = confirming.clone();
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            confirming.set(false);
            password.set(String::new());
            error.set(None);
        })
    };

    let oninput = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let password = password.clone();
        let error = error.clone();
        let pending = pending.clone();
        let blank_message = i18n.t("settings.delete_account.password_required");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *pending {
                return;
            }
            if password.trim().is_empty() {
                error.set(Some(blank_message.clone()));
                return;
            }
            pending.set(true);
            let secret = (*password).clone();
            let error = error.clone();
            let pending = pending.clone();
            spawn_local(async move {
                match SettingsClient::shared().deactivate_account(&secret).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let logout = FrontendConfig::new();
                            if let Err(err) = window.location().set_href(logout.logout_url()) {
                                web_sys::console::error_1(&err);
                            }
                        }
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        pending.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="form-control w-full">
            { header }
            <div>
                <button type="button" class="btn btn-error btn-outline btn-sm" onclick={on_open}>
                    { i18n.t("settings.delete_account.button") }
                </button>
            </div>
            if *confirming {
                <div class="modal modal-open" role="dialog">
                    <div class="modal-box">
                        <h3 class="font-bold text-lg">{ i18n.t("settings.delete_account.confirm_title") }</h3>
                        <p class="py-2 text-sm">{ i18n.t("settings.delete_account.confirm_body") }</p>
                        <form {onsubmit}>
                            <label for="delete-account-password" class="label text-sm font-medium">
                                { i18n.t("settings.delete_account.password_label") }
                            </label>
                            <input
                                id="delete-account-password"
                                type="password"
                                class="input input-bordered input-sm w-full"
                                autocomplete="current-password"
                                value={(*password).clone()}
                                {oninput}
                            />
                            {
                                (*error).as_ref().map_or_else(
                                    || html! {},
                                    |message| html! { <div class="text-error text-xs mt-1">{ message.clone() }</div> },
                                )
                            }
                            <div class="modal-action">
                                <button type="submit" class="btn btn-error btn-sm" disabled={*pending}>
                                    if *pending {
                                        <span class="loading loading-spinner loading-xs"></span>
                                    }
                                    { i18n.t("settings.delete_account.confirm_button") }
                                </button>
                                <button type="button" class="btn btn-ghost btn-sm" onclick={on_close}>
                                    { i18n.t("settings.actions.cancel") }
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        </div>
    }
}
