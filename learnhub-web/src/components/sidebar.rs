use i18nrs::yew::use_translation;
use web_sys::HtmlInputElement;
use yew::{Callback, Event, Html, TargetCast, classes, function_component, html, use_state};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store_value;

use crate::config::FrontendConfig;
use crate::models::app_state::AppState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub href: &'static str,
    pub label_key: &'static str,
    pub icon: IconId,
}

/// Prominent course link above the menu.
pub fn primary_link(is_instructor: bool) -> NavItem {
    if is_instructor {
        NavItem {
            href: "mycourseins.html",
            label_key: "sidebar.view_courses",
            icon: IconId::HeroiconsOutlineAcademicCap,
        }
    } else {
        NavItem {
            href: "mycourse.html",
            label_key: "sidebar.my_courses",
            icon: IconId::HeroiconsOutlineAcademicCap,
        }
    }
}

pub fn nav_items(is_instructor: bool) -> Vec<NavItem> {
    let middle = if is_instructor {
        NavItem {
            href: "discussionins.html",
            label_key: "sidebar.discussion",
            icon: IconId::HeroiconsOutlineChatBubbleLeftRight,
        }
    } else {
        NavItem {
            href: "certificate.html",
            label_key: "sidebar.certificate",
            icon: IconId::HeroiconsOutlineAcademicCap,
        }
    };
    vec![
        NavItem {
            href: "dashboard.html",
            label_key: "sidebar.dashboard",
            icon: IconId::HeroiconsOutlineHome,
        },
        middle,
        NavItem {
            href: "account.html",
            label_key: "sidebar.account",
            icon: IconId::HeroiconsOutlineCog6Tooth,
        },
        NavItem {
            href: "notification.html",
            label_key: "sidebar.notification",
            icon: IconId::HeroiconsOutlineBell,
        },
    ]
}

pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname.contains(href)
}

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let (i18n, _) = use_translation();
    let state = use_store_value::<AppState>();
    let is_instructor = use_state(|| false);
    let pathname = current_pathname();
    let can_switch = state
        .user
        .as_ref()
        .is_some_and(|user| user.can_switch_to_instructor());

    let on_toggle = {
        let is_instructor = is_instructor.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            is_instructor.set(input.checked());
        })
    };

    let primary = primary_link(*is_instructor);
    let logout_url = FrontendConfig::new().logout_url().to_string();

    html! {
        <aside class="hidden xl:block xl:fixed xl:h-screen bg-base-100 min-w-64 max-w-[15%] px-3.5 py-9 shadow-sm overflow-y-auto z-50">
            <div class="w-full flex flex-col">
                <div class="w-full flex justify-center">
                    <div class="rounded-full flex items-center justify-center size-28 border-4 border-primary">
                        <Icon icon_id={IconId::HeroiconsSolidUserCircle} class="size-24 text-base-content/70" />
                    </div>
                </div>
                <div class="text-center mt-3 space-y-2">
                    <h3 class="font-semibold text-base">{ state.display_name() }</h3>
                    <h3 class="text-sm font-semibold">
                        { i18n.t("sidebar.public_username") }
                        { " " }
                        <span class="font-medium">{ state.username() }</span>
                    </h3>
                </div>
                <div class="mt-7 w-full flex justify-center">
                    <a href={primary.href} class="btn btn-primary w-40">{ i18n.t(primary.label_key) }</a>
                </div>

                <nav class="mt-12 flex-grow flex flex-col justify-between">
                    <ul class="menu space-y-2">
                        { for nav_items(*is_instructor).into_iter().map(|item| html! {
                            <li key={item.href}>
                                <a href={item.href} class={classes!("flex", "items-center", "gap-2", is_active(&pathname, item.href).then_some("active"))}>
                                    <Icon icon_id={item.icon} class="w-5 h-5" />
                                    <span>{ i18n.t(item.label_key) }</span>
                                </a>
                            </li>
                        }) }
                    </ul>
                    if can_switch {
                        <label class="label cursor-pointer justify-start gap-2 px-3 mt-4">
                            <input
                                type="checkbox"
                                class="toggle toggle-sm"
                                checked={*is_instructor}
                                onchange={on_toggle}
                            />
                            <span>{ i18n.t("sidebar.instructor_mode") }</span>
                        </label>
                    }
                    <div class="w-full py-6 mt-10">
                        <a href={logout_url} class="btn btn-ghost w-full justify-start gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlinePower} class="w-5 h-5" />
                            <span>{ i18n.t("sidebar.logout") }</span>
                        </a>
                    </div>
                </nav>
            </div>
        </aside>
    }
}
