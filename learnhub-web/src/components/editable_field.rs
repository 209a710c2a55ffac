use shared::models::FieldName;
use web_sys::HtmlInputElement;
use yew::{AttrValue, Callback, Html, InputEvent, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq)]
pub struct EditableFieldProps {
    pub name: FieldName,
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or(true)]
    pub is_editable: bool,
    pub on_change: Callback<(FieldName, String)>,
}

/// Plain text input that reports every keystroke. Committing is left to the
/// parent.
#[function_component(EditableField)]
pub fn editable_field(props: &EditableFieldProps) -> Html {
    let id = props.name.dom_id();
    let oninput = {
        let name = props.name;
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_change.emit((name, input.value()));
        })
    };

    html! {
        <div class="form-control w-full">
            <label for={id.clone()} class="label text-sm font-medium">{ &props.label }</label>
            <input
                class="input input-bordered input-sm w-full"
                name={props.name.as_str()}
                id={id}
                type={props.input_type.clone()}
                value={props.value.clone()}
                readonly={!props.is_editable}
                {oninput}
            />
        </div>
    }
}
