use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::{AttrValue, Callback, Html, MouseEvent, Properties, function_component, html, use_state};

use super::alert::{Alert, AlertVariant};
use crate::api::SettingsClient;
use crate::language::interpolate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResetStatus {
    #[default]
    Idle,
    Pending,
    Sent,
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct ResetPasswordProps {
    pub email: AttrValue,
}

#[function_component(ResetPassword)]
pub fn reset_password(props: &ResetPasswordProps) -> Html {
    let (i18n, _) = use_translation();
    let status = use_state(ResetStatus::default);

    let onclick = {
        let status = status.clone();
        let email = props.email.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if *status == ResetStatus::Pending {
                return;
            }
            status.set(ResetStatus::Pending);
            let status = status.clone();
            let email = email.clone();
            spawn_local(async move {
                match SettingsClient::shared().request_password_reset(&email).await {
                    Ok(()) => status.set(ResetStatus::Sent),
                    Err(err) => {
                        web_sys::console::error_1(&format!("Password reset failed: {err}").into());
                        status.set(ResetStatus::Failed);
                    }
                }
            });
        })
    };

    let feedback = match *status {
        ResetStatus::Sent => html! {
            <Alert variant={AlertVariant::Success} header={i18n.t("settings.reset_password.sent_header")}>
                { interpolate(&i18n.t("settings.reset_password.sent_body"), &[("email", props.email.as_str())]) }
            </Alert>
        },
        ResetStatus::Failed => html! {
            <Alert variant={AlertVariant::Danger}>
                { i18n.t("settings.reset_password.error") }
            </Alert>
        },
        ResetStatus::Idle | ResetStatus::Pending => html! {},
    };

    html! {
        <div class="form-control w-full">
            <span class="label text-sm font-medium">{ i18n.t("settings.reset_password.label") }</span>
            <p class="text-sm text-base-content/70 mb-2">{ i18n.t("settings.reset_password.description") }</p>
            <div>
                <button
                    type="button"
                    class="btn btn-outline btn-sm"
                    disabled={*status == ResetStatus::Pending}
                    {onclick}
                >
                    { i18n.t("settings.reset_password.button") }
                </button>
            </div>
            <div class="mt-2">{ feedback }</div>
        </div>
    }
}
