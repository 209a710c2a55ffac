use i18nrs::yew::use_translation;
use shared::models::{FieldName, FieldValue, SaveState};
use shared::settings::FieldEditor;
use web_sys::HtmlInputElement;
use yew::{
    AttrValue, Callback, Html, InputEvent, MouseEvent, Properties, SubmitEvent, TargetCast,
    classes, function_component, html, use_effect_with, use_state,
};

use super::alert::{Alert, AlertVariant};
use super::stateful_button::StatefulButton;
use crate::language::interpolate;

#[derive(Properties, PartialEq)]
pub struct EmailFieldProps {
    pub name: FieldName,
    pub label: AttrValue,
    pub value: FieldValue,
    #[prop_or_default]
    pub save_state: SaveState,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub help_text: Option<AttrValue>,
    /// Translation key of the "check your inbox" message; `{value}` receives
    /// the pending address.
    #[prop_or_default]
    pub confirmation_message_key: Option<AttrValue>,
    #[prop_or_default]
    pub confirmation_value: Option<AttrValue>,
    #[prop_or(true)]
    pub is_editable: bool,
    pub on_change: Callback<(FieldName, String)>,
    pub on_submit: Callback<(FieldName, String)>,
    pub on_cancel: Callback<FieldName>,
}

#[function_component(EmailField)]
pub fn email_field(props: &EmailFieldProps) -> Html {
    let (i18n, _) = use_translation();
    let editor = {
        let committed = props.value.clone();
        use_state(move || FieldEditor::new(committed))
    };

    {
        let editor = editor.clone();
        use_effect_with(props.value.clone(), move |committed| {
            let mut next = (*editor).clone();
            next.sync_committed(committed.clone());
            if next != *editor {
                editor.set(next);
            }
            || ()
        });
    }

    let id = props.name.dom_id();

    let oninput = {
        let editor = editor.clone();
        let name = props.name;
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let value = input.value();
            let mut next = (*editor).clone();
            next.change(value.clone());
            editor.set(next);
            on_change.emit((name, value));
        })
    };

    let onsubmit = {
        let editor = editor.clone();
        let name = props.name;
        let save_state = props.save_state;
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if save_state == SaveState::Pending {
                return;
            }
            let mut next = (*editor).clone();
            let value = next.submit();
            editor.set(next);
            on_submit.emit((name, value));
        })
    };

    let on_cancel = {
        let editor = editor.clone();
        let name = props.name;
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*editor).clone();
            next.cancel();
            editor.set(next);
            on_cancel.emit(name);
        })
    };

    let confirmation = match (&props.confirmation_message_key, &props.confirmation_value) {
        (Some(key), Some(value)) => html! {
            <div class="mt-2">
                <Alert variant={AlertVariant::Warning} header={i18n.t("settings.email.confirmation_header")}>
                    { interpolate(&i18n.t(key), &[("value", value.as_str())]) }
                </Alert>
            </div>
        },
        _ => html! {},
    };

    html! {
        <div class="form w-full">
            <form {onsubmit}>
                <div class={classes!("form-control", "w-full", props.error.is_some().then_some("is-invalid"))}>
                    <label for={id.clone()} class="label text-sm font-medium">{ &props.label }</label>
                    <input
                        class="input input-bordered input-sm w-full"
                        name={props.name.as_str()}
                        id={id}
                        type="email"
                        value={editor.input().to_string()}
                        readonly={!props.is_editable}
                        {oninput}
                    />
                    {
                        props.help_text.as_ref().map_or_else(
                            || html! {},
                            |help| html! { <small class="text-xs text-base-content/60 mt-1">{ help }</small> },
                        )
                    }
                    {
                        props.error.as_ref().map_or_else(
                            || html! {},
                            |error| html! { <div class="text-error text-xs mt-1">{ error }</div> },
                        )
                    }
                </div>
                if editor.controls_visible() {
                    <div class="mt-3">
                        <StatefulButton state={props.save_state} />
                        <button type="button" class="btn btn-outline btn-sm" onclick={on_cancel}>
                            { i18n.t("settings.actions.cancel") }
                        </button>
                    </div>
                }
            </form>
            { confirmation }
        </div>
    }
}
