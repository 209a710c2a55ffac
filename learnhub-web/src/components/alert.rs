use yew::{Children, Html, Properties, function_component, html, use_state};
use yew_icons::{Icon, IconId};

use crate::storage;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AlertVariant {
    Success,
    Warning,
    Danger,
}

impl AlertVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Warning => "alert alert-warning",
            Self::Danger => "alert alert-error",
        }
    }

    fn icon(self) -> IconId {
        match self {
            Self::Success => IconId::HeroiconsOutlineCheckCircle,
            Self::Warning => IconId::HeroiconsOutlineExclamationTriangle,
            Self::Danger => IconId::HeroiconsOutlineXCircle,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub variant: AlertVariant,
    #[prop_or_default]
    pub header: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    html! {
        <div role="alert" class={props.variant.class()}>
            <Icon icon_id={props.variant.icon()} class="w-5 h-5 shrink-0" />
            <div>
                {
                    props.header.as_ref().map_or_else(
                        || html! {},
                        |header| html! { <h3 class="font-semibold">{ header }</h3> },
                    )
                }
                <div class="text-sm">{ props.children.clone() }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OneTimeDismissibleAlertProps {
    /// Local storage key remembering the dismissal.
    pub id: String,
    pub variant: AlertVariant,
    pub header: String,
    pub body: String,
}

/// Alert that stays hidden once the learner closes it.
#[function_component(OneTimeDismissibleAlert)]
pub fn one_time_dismissible_alert(props: &OneTimeDismissibleAlertProps) -> Html {
    let dismissed = {
        let id = props.id.clone();
        use_state(move || storage::is_dismissed(&id))
    };
    if *dismissed {
        return html! {};
    }

    let on_dismiss = {
        let id = props.id.clone();
        let dismissed = dismissed.clone();
        move |_| {
            storage::dismiss(&id);
            dismissed.set(true);
        }
    };

    html! {
        <div role="alert" class={props.variant.class()}>
            <Icon icon_id={props.variant.icon()} class="w-5 h-5 shrink-0" />
            <div class="flex-1">
                <h3 class="font-semibold">{ &props.header }</h3>
                <div class="text-sm">{ &props.body }</div>
            </div>
            <button type="button" class="btn btn-ghost btn-xs" aria-label="dismiss" onclick={on_dismiss}>
                <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-4 h-4" />
            </button>
        </div>
    }
}
