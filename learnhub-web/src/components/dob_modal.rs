use i18nrs::yew::use_translation;
use shared::models::{FieldName, SaveState, SelectOption};
use web_sys::HtmlSelectElement;
use yew::{
    Callback, Event, Html, MouseEvent, Properties, SubmitEvent, TargetCast, function_component,
    html, use_state,
};

use super::editable_select_field::render_options;
use super::stateful_button::StatefulButton;
use crate::storage;

#[derive(Properties, PartialEq)]
pub struct DobModalProps {
    pub year_of_birth: Option<i64>,
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub save_state: SaveState,
    pub on_submit: Callback<(FieldName, String)>,
}

/// One-time prompt asking young learners to confirm their birth year.
#[function_component(DobModal)]
pub fn dob_modal(props: &DobModalProps) -> Html {
    let (i18n, _) = use_translation();
    let open = use_state(|| true);
    let year = {
        let initial = props.year_of_birth.map(|year| year.to_string()).unwrap_or_default();
        use_state(move || initial)
    };

    if !*open {
        return html! {};
    }

    let onchange = {
        let year = year.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            year.set(select.value());
        })
    };

    let onsubmit = {
        let year = year.clone();
        let open = open.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if year.is_empty() {
                return;
            }
            storage::mark_dob_submitted();
            on_submit.emit((FieldName::YearOfBirth, (*year).clone()));
            open.set(false);
        })
    };

    let on_close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-labelledby="dob-modal-title">
            <div class="modal-box">
                <h3 id="dob-modal-title" class="font-bold text-lg">{ i18n.t("settings.dob.modal_title") }</h3>
                <p class="py-2 text-sm">{ i18n.t("settings.dob.modal_body") }</p>
                <form onsubmit={onsubmit}>
                    <label for="dob-modal-year" class="label text-sm font-medium">{ i18n.t("settings.fields.year_of_birth") }</label>
                    <select id="dob-modal-year" class="select select-bordered select-sm w-full" {onchange}>
                        { render_options(&props.options, &year) }
                    </select>
                    <div class="modal-action">
                        <StatefulButton state={props.save_state} />
                        <button type="button" class="btn btn-ghost btn-sm" onclick={on_close}>
                            { i18n.t("settings.actions.close") }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
