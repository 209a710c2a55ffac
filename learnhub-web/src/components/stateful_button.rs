use i18nrs::yew::use_translation;
use shared::models::SaveState;
use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StatefulButtonProps {
    pub state: SaveState,
    /// `submit` inside a form, `button` otherwise.
    #[prop_or("submit")]
    pub kind: &'static str,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Save button whose label follows the field's save state. Clicks are
/// swallowed while a save is pending.
#[function_component(StatefulButton)]
pub fn stateful_button(props: &StatefulButtonProps) -> Html {
    let (i18n, _) = use_translation();
    let state = props.state;
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            if state == SaveState::Pending {
                event.prevent_default();
                return;
            }
            if let Some(onclick) = &onclick {
                onclick.emit(event);
            }
        })
    };

    let label = match state {
        SaveState::Pending => html! {
            <>
                <span class="loading loading-spinner loading-xs"></span>
                { i18n.t("settings.actions.saving") }
            </>
        },
        SaveState::Complete => html! {
            <>
                <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-4 h-4" />
                { i18n.t("settings.actions.saved") }
            </>
        },
        SaveState::Default | SaveState::Error => html! { { i18n.t("settings.actions.save") } },
    };

    html! {
        <button
            type={props.kind}
            class={classes!("btn", "btn-primary", "btn-sm", "mr-2", (state == SaveState::Pending).then_some("btn-disabled"))}
            aria-busy={(state == SaveState::Pending).to_string()}
            {onclick}
        >
            { label }
        </button>
    }
}
