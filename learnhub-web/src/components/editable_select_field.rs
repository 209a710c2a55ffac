use i18nrs::yew::use_translation;
use shared::models::{FieldName, FieldValue, OptionItem, SaveState, SelectOption};
use shared::settings::FieldEditor;
use web_sys::HtmlSelectElement;
use yew::{
    AttrValue, Callback, Event, Html, MouseEvent, Properties, SubmitEvent, TargetCast, classes,
    function_component, html, use_effect_with, use_state,
};

use super::stateful_button::StatefulButton;

#[derive(Properties, PartialEq)]
pub struct EditableSelectFieldProps {
    pub name: FieldName,
    pub label: AttrValue,
    /// Last committed value; the buffer is compared against it.
    pub value: FieldValue,
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub save_state: SaveState,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub help_text: Option<AttrValue>,
    #[prop_or_default]
    pub empty_label: Option<AttrValue>,
    #[prop_or(true)]
    pub is_editable: bool,
    pub on_change: Callback<(FieldName, String)>,
    pub on_submit: Callback<(FieldName, String)>,
    pub on_cancel: Callback<FieldName>,
}

/// Renders `<option>`s and `<optgroup>`s, marking `selected` as chosen.
pub fn render_options(options: &[SelectOption], selected: &str) -> Html {
    let render_item = |item: &OptionItem| {
        html! {
            <option
                key={format!("{}-{}", item.value, item.label)}
                value={item.value.clone()}
                selected={item.value == selected}
                disabled={item.disabled}
            >
                { &item.label }
            </option>
        }
    };
    html! {
        <>
            { for options.iter().map(|option| match option {
                SelectOption::Item(item) => render_item(item),
                SelectOption::Group { label, group } => html! {
                    <optgroup key={label.clone()} label={label.clone()}>
                        { for group.iter().map(&render_item) }
                    </optgroup>
                },
            }) }
        </>
    }
}

/// Select whose Save/Cancel controls appear only while the choice differs
/// from the committed value.
#[function_component(EditableSelectField)]
pub fn editable_select_field(props: &EditableSelectFieldProps) -> Html {
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

    if !props.is_editable {
        let committed = props.value.display();
        let summary = SelectOption::label_for(&props.options, &committed)
            .map(str::to_string)
            .filter(|_| !committed.is_empty())
            .or_else(|| props.empty_label.as_ref().map(ToString::to_string))
            .unwrap_or(committed);
        return html! {
            <div class="form-control w-full">
                <span class="label text-sm font-medium">{ &props.label }</span>
                <span id={id} class="text-sm text-base-content/70">{ summary }</span>
            </div>
        };
    }

    let onchange = {
        let editor = editor.clone();
        let name = props.name;
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let value = select.value();
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

    html! {
        <div class="form w-full">
            <form {onsubmit}>
                <div class={classes!("form-control", "w-full", props.error.is_some().then_some("is-invalid"))}>
                    <label for={id.clone()} class="label text-sm font-medium">{ &props.label }</label>
                    <select
                        class="select select-bordered select-sm w-full"
                        name={props.name.as_str()}
                        id={id}
                        {onchange}
                    >
                        { render_options(&props.options, editor.input()) }
                    </select>
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
        </div>
    }
}
