use i18nrs::yew::use_translation;
use shared::models::{FieldName, FieldValue, SelectOption, TimeZoneEntry, VerifiedNameStatus};
use shared::settings::options::{
    TimeZoneLabels, country_options, site_language_options, time_zone_options,
    year_of_birth_options,
};
use shared::settings::verified_name::{
    full_name_help_key, verified_name_help_key, verified_name_icon,
};
use shared::settings::{
    Memo, PageRegion, SettingsIntent, SettingsPageState, VerifiedNameIcon,
    should_prompt_dob_update,
};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::{
    AttrValue, Callback, Event, Html, MouseEvent, TargetCast, function_component, html,
    use_effect_with, use_mut_ref,
};
use yew_hooks::use_mount;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

use crate::components::stateful_button::StatefulButton;
use crate::components::{
    Alert, AlertVariant, DeleteAccount, DobModal, EditableField, EditableSelectField,
    EmailField, Loading, ResetPassword, VerifiedNameBanner,
};
use crate::config::FrontendConfig;
use crate::effects::dispatch_intent;
use crate::language::{get_language_info, interpolate};
use crate::models::app_state::AppState;
use crate::storage;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Fragment of the delete-account section, linked from support articles.
const DELETE_ACCOUNT_FRAGMENT: &str = "delete-account";

type CountryKey = (String, Option<String>, Vec<String>);
type TimeZoneKey = (String, Vec<TimeZoneEntry>, Vec<TimeZoneEntry>);

fn current_year() -> i64 {
    i64::from(js_sys::Date::new_0().get_full_year())
}

fn scroll_to_fragment() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hash = window.location().hash().unwrap_or_default();
    if hash.trim_start_matches('#') != DELETE_ACCOUNT_FRAGMENT {
        return;
    }
    let target = window
        .document()
        .and_then(|document| document.get_element_by_id(DELETE_ACCOUNT_FRAGMENT));
    if let Some(element) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn error_text(page: &SettingsPageState, field: FieldName) -> Option<AttrValue> {
    page.field_error(field)
        .map(|message| AttrValue::from(message.to_string()))
}

/// Account settings page
#[function_component(AccountSettingsPage)]
pub fn account_settings_page() -> Html {
    let (i18n, set_language) = use_translation();
    let (state, dispatch) = use_store::<AppState>();
    let config = FrontendConfig::shared_dashboard();
    let country_memo = use_mut_ref(Memo::<CountryKey, Vec<SelectOption>>::new);
    let time_zone_memo = use_mut_ref(Memo::<TimeZoneKey, Vec<SelectOption>>::new);

    {
        let dispatch = dispatch.clone();
        use_mount(move || {
            log("Account settings viewed");
            dispatch_intent(
                &dispatch,
                SettingsIntent::Mounted {
                    allowed_countries: config.allowed_country_codes.clone(),
                },
            );
        });
    }

    use_effect_with(state.page.is_loaded(), |loaded| {
        if *loaded {
            scroll_to_fragment();
        }
        || ()
    });

    use_effect_with(state.page.active_language.clone(), move |language| {
        if get_language_info(language).is_some() {
            set_language.emit(language.clone());
        }
        || ()
    });

    let page = &state.page;
    match &page.region {
        PageRegion::Idle | PageRegion::Loading => {
            return html! { <Loading message={i18n.t("settings.loading")} /> };
        }
        PageRegion::Errored(error) => {
            return html! {
                <div class="p-4">
                    <Alert variant={AlertVariant::Danger}>
                        { interpolate(&i18n.t("settings.load_error"), &[("error", error.as_str())]) }
                    </Alert>
                </div>
            };
        }
        PageRegion::Loaded => {}
    }

    let on_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |(field, value): (FieldName, String)| {
            dispatch_intent(
                &dispatch,
                SettingsIntent::FieldChanged {
                    field,
                    value: FieldValue::from(value),
                },
            );
        })
    };
    let on_submit = {
        let dispatch = dispatch.clone();
        Callback::from(move |(field, value): (FieldName, String)| {
            dispatch_intent(
                &dispatch,
                SettingsIntent::FieldSubmitted {
                    field,
                    value: FieldValue::from(value),
                },
            );
        })
    };
    let on_cancel = {
        let dispatch = dispatch.clone();
        Callback::from(move |field: FieldName| {
            dispatch_intent(&dispatch, SettingsIntent::FieldCancelled { field });
        })
    };
    let on_name_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |(field, value): (FieldName, String)| {
            dispatch_intent(&dispatch, SettingsIntent::NameFieldChanged { field, value });
        })
    };
    let on_names_submit = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch_intent(&dispatch, SettingsIntent::NamesSubmitted);
        })
    };
    let on_names_cancel = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch_intent(&dispatch, SettingsIntent::NamesCancelled);
        })
    };
    let on_certificate_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            dispatch_intent(
                &dispatch,
                SettingsIntent::FieldChanged {
                    field: FieldName::UseVerifiedNameForCerts,
                    value: FieldValue::Flag(input.checked()),
                },
            );
        })
    };

    let language = i18n.get_current_language().to_string();
    let committed = &page.committed;
    let year = current_year();

    let countries = country_memo
        .borrow_mut()
        .get_or_compute(
            (
                language.clone(),
                committed.country.clone(),
                page.policy.allowed().to_vec(),
            ),
            |(_, country, _)| {
                country_options(
                    &page.policy,
                    country.as_deref(),
                    &i18n.t("settings.fields.country_empty"),
                )
            },
        )
        .clone();
    let time_zones = time_zone_memo
        .borrow_mut()
        .get_or_compute(
            (
                language,
                page.time_zones.clone(),
                page.country_time_zones.clone(),
            ),
            |(_, zones, country_zones)| {
                let default = i18n.t("settings.time_zone.default");
                let country = i18n.t("settings.time_zone.country");
                let all = i18n.t("settings.time_zone.all");
                time_zone_options(
                    zones,
                    country_zones,
                    TimeZoneLabels {
                        default: &default,
                        country: &country,
                        all: &all,
                    },
                )
            },
        )
        .clone();
    let years = year_of_birth_options(year, &i18n.t("settings.fields.year_of_birth_empty"));
    let site_languages = site_language_options(&page.site_languages, &page.active_language);

    let latest = page.latest_verified_name();
    let full_name_help = i18n.t(&full_name_help_key(latest, committed));
    let verified_name_section = latest
        .filter(|record| verified_name_icon(record.status).is_some())
        .map_or_else(
            || html! {},
            |record| {
                let icon = match verified_name_icon(record.status) {
                    Some(VerifiedNameIcon::Verified) => html! {
                        <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-4 h-4 text-success" />
                    },
                    Some(VerifiedNameIcon::Submitted) => html! {
                        <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-4 h-4 text-warning" />
                    },
                    None => html! {},
                };
                let help = verified_name_help_key(record, committed)
                    .map(|key| i18n.t(&key))
                    .unwrap_or_default();
                let use_verified = page
                    .form_value(FieldName::UseVerifiedNameForCerts)
                    .as_flag()
                    .unwrap_or(committed.use_verified_name_for_certs);
                html! {
                    <div class="form-control w-full mt-4">
                        <span class="label text-sm font-medium gap-1">
                            { i18n.t("settings.fields.verified_name") }
                            { icon }
                        </span>
                        <span class="text-sm">{ &record.verified_name }</span>
                        <small class="text-xs text-base-content/60 mt-1">{ help }</small>
                        if record.status == VerifiedNameStatus::Approved {
                            <label class="label cursor-pointer justify-start gap-2 mt-2">
                                <input
                                    type="checkbox"
                                    class="checkbox checkbox-sm"
                                    checked={use_verified}
                                    onchange={on_certificate_toggle.clone()}
                                />
                                <span class="text-sm">{ i18n.t("settings.fields.use_verified_name_for_certs") }</span>
                            </label>
                        }
                    </div>
                }
            },
        );

    let name_parts = page.current_name_parts();
    let name_inputs = FieldName::NAME_PARTS.into_iter().map(|part| {
        let label = match part {
            FieldName::FirstName => i18n.t("settings.fields.first_name"),
            FieldName::MiddleName => i18n.t("settings.fields.middle_name"),
            _ => i18n.t("settings.fields.last_name"),
        };
        html! {
            <EditableField
                key={part.as_str()}
                name={part}
                label={label}
                value={name_parts.get(part).unwrap_or_default().to_string()}
                is_editable={page.is_editable(part)}
                on_change={on_name_change.clone()}
            />
        }
    });

    let site_name = config.site_name.as_str();
    let show_dob_modal = should_prompt_dob_update(
        config,
        committed.year_of_birth,
        storage::has_submitted_dob(),
        year,
    );

    html! {
        <div class="p-4 space-y-8 max-w-3xl">
            <h1 class="text-2xl font-bold">{ i18n.t("settings.title") }</h1>
            if let Some(message) = page.verified_name_message() {
                <VerifiedNameBanner {message} />
            }
            if show_dob_modal {
                <DobModal
                    year_of_birth={committed.year_of_birth}
                    options={years.clone()}
                    save_state={page.save_state(FieldName::YearOfBirth)}
                    on_submit={on_submit.clone()}
                />
            }

            <section class="space-y-4">
                <h2 class="text-lg font-semibold">{ i18n.t("settings.sections.account_information") }</h2>
                <div class="space-y-2">
                    <span class="label text-sm font-medium">{ i18n.t("settings.fields.full_name") }</span>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-2">
                        { for name_inputs }
                    </div>
                    <small class="text-xs text-base-content/60">
                        { interpolate(&full_name_help, &[("siteName", site_name)]) }
                    </small>
                    {
                        error_text(page, FieldName::Name).map_or_else(
                            || html! {},
                            |error| html! { <div class="text-error text-xs">{ error }</div> },
                        )
                    }
                    if page.names.show_buttons() {
                        <div class="mt-3">
                            <StatefulButton
                                state={page.save_state(FieldName::Name)}
                                kind="button"
                                onclick={Some(on_names_submit)}
                            />
                            <button type="button" class="btn btn-outline btn-sm" onclick={on_names_cancel}>
                                { i18n.t("settings.actions.cancel") }
                            </button>
                        </div>
                    }
                    { verified_name_section }
                </div>

                <EmailField
                    name={FieldName::Email}
                    label={i18n.t("settings.fields.email")}
                    value={committed.value(FieldName::Email)}
                    save_state={page.save_state(FieldName::Email)}
                    error={error_text(page, FieldName::Email)}
                    help_text={interpolate(&i18n.t("settings.email.help"), &[("siteName", site_name)])}
                    confirmation_message_key={AttrValue::Static("settings.email.confirmation")}
                    confirmation_value={page.confirmation_value(FieldName::Email).map(|value| AttrValue::from(value.to_string()))}
                    is_editable={page.is_editable(FieldName::Email)}
                    on_change={on_change.clone()}
                    on_submit={on_submit.clone()}
                    on_cancel={on_cancel.clone()}
                />
                if committed.secondary_email_enabled {
                    <EmailField
                        name={FieldName::SecondaryEmail}
                        label={i18n.t("settings.fields.secondary_email")}
                        value={committed.value(FieldName::SecondaryEmail)}
                        save_state={page.save_state(FieldName::SecondaryEmail)}
                        error={error_text(page, FieldName::SecondaryEmail)}
                        help_text={i18n.t("settings.email.secondary_help")}
                        confirmation_message_key={AttrValue::Static("settings.email.confirmation")}
                        confirmation_value={page.confirmation_value(FieldName::SecondaryEmail).map(|value| AttrValue::from(value.to_string()))}
                        is_editable={page.is_editable(FieldName::SecondaryEmail)}
                        on_change={on_change.clone()}
                        on_submit={on_submit.clone()}
                        on_cancel={on_cancel.clone()}
                    />
                }
                if !config.enable_coppa_compliance {
                    <EditableSelectField
                        name={FieldName::YearOfBirth}
                        label={i18n.t("settings.fields.year_of_birth")}
                        value={committed.value(FieldName::YearOfBirth)}
                        options={years}
                        save_state={page.save_state(FieldName::YearOfBirth)}
                        error={error_text(page, FieldName::YearOfBirth)}
                        empty_label={i18n.t("settings.fields.year_of_birth_empty")}
                        is_editable={page.is_editable(FieldName::YearOfBirth)}
                        on_change={on_change.clone()}
                        on_submit={on_submit.clone()}
                        on_cancel={on_cancel.clone()}
                    />
                }
                <EditableSelectField
                    name={FieldName::Country}
                    label={i18n.t("settings.fields.country")}
                    value={committed.value(FieldName::Country)}
                    options={countries}
                    save_state={page.save_state(FieldName::Country)}
                    error={error_text(page, FieldName::Country)}
                    empty_label={i18n.t("settings.fields.country_empty")}
                    is_editable={page.is_editable(FieldName::Country)}
                    on_change={on_change.clone()}
                    on_submit={on_submit.clone()}
                    on_cancel={on_cancel.clone()}
                />
            </section>

            <section class="space-y-4">
                <h2 class="text-lg font-semibold">{ i18n.t("settings.sections.site_preferences") }</h2>
                <EditableSelectField
                    name={FieldName::SiteLanguage}
                    label={i18n.t("settings.fields.site_language")}
                    value={FieldValue::from(page.active_language.as_str())}
                    options={site_languages}
                    save_state={page.save_state(FieldName::SiteLanguage)}
                    error={error_text(page, FieldName::SiteLanguage)}
                    help_text={interpolate(&i18n.t("settings.fields.site_language_help"), &[("siteName", site_name)])}
                    on_change={on_change.clone()}
                    on_submit={on_submit.clone()}
                    on_cancel={on_cancel.clone()}
                />
                <EditableSelectField
                    name={FieldName::TimeZone}
                    label={i18n.t("settings.fields.time_zone")}
                    value={committed.value(FieldName::TimeZone)}
                    options={time_zones}
                    save_state={page.save_state(FieldName::TimeZone)}
                    error={error_text(page, FieldName::TimeZone)}
                    help_text={i18n.t("settings.time_zone.help")}
                    empty_label={i18n.t("settings.time_zone.default")}
                    on_change={on_change}
                    on_submit={on_submit}
                    on_cancel={on_cancel}
                />
            </section>

            <section class="space-y-4">
                <h2 class="text-lg font-semibold">{ i18n.t("settings.sections.security") }</h2>
                <ResetPassword email={committed.email.clone()} />
            </section>

            if config.enable_account_deletion {
                <section id={DELETE_ACCOUNT_FRAGMENT} class="space-y-4 pt-3 mb-5">
                    <DeleteAccount can_delete={page.can_delete_account(config)} />
                </section>
            }
        </div>
    }
}
