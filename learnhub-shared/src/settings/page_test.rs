use chrono::{TimeZone, Utc};
use tracing_subscriber::EnvFilter;

use crate::models::{
    AccountSettings, FieldCommit, FieldName, FieldValue, SaveState, SettingsSnapshot,
    VerifiedNameRecord, VerifiedNameStatus,
};

use super::page::{PageRegion, SettingsEffect, SettingsIntent, SettingsPageState};
use super::verified_name::VerifiedNameMessage;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("shared=debug"))
        .try_init();
}

fn loaded(account: AccountSettings, allowed: &[&str]) -> SettingsPageState {
    init_tracing();
    let mut state = SettingsPageState::default();
    state.apply(SettingsIntent::Mounted {
        allowed_countries: allowed.iter().map(ToString::to_string).collect(),
    });
    state.apply(SettingsIntent::SettingsLoaded(Box::new(SettingsSnapshot {
        account,
        ..SettingsSnapshot::default()
    })));
    state
}

fn jane() -> AccountSettings {
    AccountSettings {
        username: "jdoe".into(),
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        country: Some("US".into()),
        year_of_birth: Some(1990),
        ..AccountSettings::default()
    }
}

fn type_name(state: &mut SettingsPageState, field: FieldName, value: &str) {
    state.apply(SettingsIntent::NameFieldChanged {
        field,
        value: value.to_string(),
    });
}

#[test]
fn test_load_captures_name_baseline() {
    let state = loaded(jane(), &[]);
    assert_eq!(state.region, PageRegion::Loaded);
    assert_eq!(
        state.form_value(FieldName::FirstName),
        FieldValue::from("Jane")
    );
    assert_eq!(state.form_value(FieldName::MiddleName), FieldValue::from(""));
    assert_eq!(state.form_value(FieldName::LastName), FieldValue::from("Doe"));
}

#[test]
fn test_load_failure_is_exclusive_region() {
    let mut state = SettingsPageState::default();
    state.apply(SettingsIntent::Mounted {
        allowed_countries: Vec::new(),
    });
    state.apply(SettingsIntent::SettingsFailed("503 Service Unavailable".into()));
    assert_eq!(
        state.region,
        PageRegion::Errored("503 Service Unavailable".into())
    );
    assert!(!state.is_loaded());
}

#[test]
fn test_name_buttons_hide_when_edit_is_reverted() {
    let mut state = loaded(jane(), &[]);
    type_name(&mut state, FieldName::FirstName, "Janet");
    assert!(state.names.show_buttons());
    type_name(&mut state, FieldName::FirstName, "Jane");
    assert!(!state.names.show_buttons());
    assert!(state.save_states.is_empty());
}

#[test]
fn test_name_save_joins_parts_and_rebases_on_success() {
    let mut state = loaded(jane(), &[]);
    type_name(&mut state, FieldName::MiddleName, "Q");

    let effects = state.apply(SettingsIntent::NamesSubmitted);
    assert_eq!(
        effects,
        vec![SettingsEffect::SaveSettings {
            field: FieldName::Name,
            value: FieldValue::from("Jane Q Doe"),
        }]
    );
    assert_eq!(state.save_state(FieldName::Name), SaveState::Pending);
    assert!(!state.names.show_buttons());

    state.apply(SettingsIntent::SaveSucceeded {
        primary: FieldName::Name,
        values: vec![(FieldName::Name, FieldValue::from("Jane Q Doe"))],
    });
    assert_eq!(state.committed.name, "Jane Q Doe");
    assert_eq!(state.save_state(FieldName::Name), SaveState::Complete);
    assert_eq!(
        state.names.baseline().map(|parts| parts.middle.as_str()),
        Some("Q")
    );
    assert!(!state.names.show_buttons());
}

#[test]
fn test_failed_name_save_reshows_buttons() {
    let mut state = loaded(jane(), &[]);
    type_name(&mut state, FieldName::LastName, "Smith");
    state.apply(SettingsIntent::NamesSubmitted);
    state.apply(SettingsIntent::SaveFailed {
        primary: FieldName::Name,
        saved: Vec::new(),
        message: "Name contains invalid characters".into(),
    });
    assert!(state.names.show_buttons());
    assert_eq!(state.save_state(FieldName::Name), SaveState::Error);
    assert_eq!(
        state.field_error(FieldName::Name),
        Some("Name contains invalid characters")
    );
    assert_eq!(state.committed.name, "Jane Doe");
}

#[test]
fn test_name_cancel_restores_baseline() {
    let mut state = loaded(jane(), &[]);
    type_name(&mut state, FieldName::FirstName, "J");
    type_name(&mut state, FieldName::LastName, "D");
    state.apply(SettingsIntent::NamesCancelled);
    assert!(!state.names.show_buttons());
    assert_eq!(state.current_name_parts().join(), "Jane Doe");
}

#[test]
fn test_name_save_carries_certificate_preference() {
    let mut state = loaded(jane(), &[]);
    state.apply(SettingsIntent::FieldChanged {
        field: FieldName::UseVerifiedNameForCerts,
        value: FieldValue::Flag(true),
    });
    type_name(&mut state, FieldName::FirstName, "Janet");

    let effects = state.apply(SettingsIntent::NamesSubmitted);
    assert_eq!(
        effects,
        vec![SettingsEffect::SaveMultipleSettings {
            commits: vec![
                FieldCommit::new(FieldName::Name, "Janet Doe"),
                FieldCommit::new(FieldName::UseVerifiedNameForCerts, true),
            ],
            primary: FieldName::Name,
        }]
    );

    state.apply(SettingsIntent::SaveSucceeded {
        primary: FieldName::Name,
        values: vec![
            (FieldName::Name, FieldValue::from("Janet Doe")),
            (FieldName::UseVerifiedNameForCerts, FieldValue::Flag(true)),
        ],
    });
    assert!(state.committed.use_verified_name_for_certs);
    assert!(!state.drafts.contains_key(&FieldName::UseVerifiedNameForCerts));
}

#[test]
fn test_certificate_failure_after_name_landed_commits_name() {
    let mut state = loaded(jane(), &[]);
    state.apply(SettingsIntent::FieldChanged {
        field: FieldName::UseVerifiedNameForCerts,
        value: FieldValue::Flag(true),
    });
    type_name(&mut state, FieldName::FirstName, "Janet");
    state.apply(SettingsIntent::NamesSubmitted);

    state.apply(SettingsIntent::SaveFailed {
        primary: FieldName::Name,
        saved: vec![(FieldName::Name, FieldValue::from("Janet Doe"))],
        message: "verified name service unavailable".into(),
    });
    assert_eq!(state.committed.name, "Janet Doe");
    assert!(!state.names.show_buttons());
    assert_eq!(
        state.names.baseline().map(|parts| parts.first.as_str()),
        Some("Janet")
    );
    assert_eq!(state.save_state(FieldName::Name), SaveState::Error);
    assert_eq!(
        state.field_error(FieldName::Name),
        Some("verified name service unavailable")
    );
    assert!(!state.committed.use_verified_name_for_certs);
    assert!(state.drafts.contains_key(&FieldName::UseVerifiedNameForCerts));
}

#[test]
fn test_clearing_country_is_rejected_by_allow_list() {
    let mut state = loaded(jane(), &["CA", "MX"]);
    let effects = state.apply(SettingsIntent::FieldSubmitted {
        field: FieldName::Country,
        value: FieldValue::from(""),
    });
    assert!(effects.is_empty());
    assert_eq!(state.save_state(FieldName::Country), SaveState::Default);

    let mut open = loaded(jane(), &[]);
    let effects = open.apply(SettingsIntent::FieldSubmitted {
        field: FieldName::Country,
        value: FieldValue::from(""),
    });
    assert_eq!(effects.len(), 1);
}

#[test]
fn test_disabled_country_submit_makes_no_request() {
    let mut state = loaded(jane(), &["CA", "MX"]);
    let rejected = state.apply(SettingsIntent::FieldSubmitted {
        field: FieldName::Country,
        value: FieldValue::from("FR"),
    });
    assert!(rejected.is_empty());
    assert_eq!(state.save_state(FieldName::Country), SaveState::Default);

    let accepted = state.apply(SettingsIntent::FieldSubmitted {
        field: FieldName::Country,
        value: FieldValue::from("MX"),
    });
    assert_eq!(accepted.len(), 1);
}

#[test]
fn test_second_submit_while_pending_is_rejected() {
    let mut state = loaded(jane(), &[]);
    let first = state.apply(SettingsIntent::FieldSubmitted {
        field: FieldName::TimeZone,
        value: FieldValue::from("Africa/Lagos"),
    });
    assert_eq!(first.len(), 1);
    let second = state.apply(SettingsIntent::FieldSubmitted {
        field: FieldName::TimeZone,
        value: FieldValue::from("UTC"),
    });
    assert!(second.is_empty());

    let other_field = state.apply(SettingsIntent::FieldSubmitted {
        field: FieldName::Country,
        value: FieldValue::from("CA"),
    });
    assert_eq!(other_field.len(), 1);
}

#[test]
fn test_empty_time_zone_submits_null() {
    let mut state = loaded(jane(), &[]);
    let effects = state.apply(SettingsIntent::FieldSubmitted {
        field: FieldName::TimeZone,
        value: FieldValue::from(""),
    });
    assert_eq!(
        effects,
        vec![SettingsEffect::SaveSettings {
            field: FieldName::TimeZone,
            value: FieldValue::Null,
        }]
    );
}

#[test]
fn test_static_fields_cannot_be_submitted() {
    let mut state = SettingsPageState::default();
    state.apply(SettingsIntent::SettingsLoaded(Box::new(SettingsSnapshot {
        account: jane(),
        static_fields: vec![FieldName::Name, FieldName::Country],
        ..SettingsSnapshot::default()
    })));
    assert!(!state.is_editable(FieldName::FirstName));
    assert!(state.is_editable(FieldName::Email));

    type_name(&mut state, FieldName::FirstName, "Janet");
    assert!(state.apply(SettingsIntent::NamesSubmitted).is_empty());
}

#[test]
fn test_email_change_waits_for_confirmation() {
    let mut state = loaded(jane(), &[]);
    state.apply(SettingsIntent::FieldSubmitted {
        field: FieldName::Email,
        value: FieldValue::from("jane@new.example.com"),
    });
    state.apply(SettingsIntent::SaveSucceeded {
        primary: FieldName::Email,
        values: vec![(FieldName::Email, FieldValue::from("jane@new.example.com"))],
    });
    assert_eq!(state.committed.email, "jane@example.com");
    assert_eq!(
        state.confirmation_value(FieldName::Email),
        Some("jane@new.example.com")
    );
}

#[test]
fn test_saved_site_language_survives_reload() {
    init_tracing();
    let mut state = SettingsPageState::default();
    state.apply(SettingsIntent::Mounted {
        allowed_countries: Vec::new(),
    });
    state.apply(SettingsIntent::SettingsLoaded(Box::new(SettingsSnapshot {
        account: jane(),
        site_language: Some("fr".into()),
        ..SettingsSnapshot::default()
    })));
    state.apply(SettingsIntent::SiteLanguagesLoaded {
        languages: Vec::new(),
        fallback: "en".into(),
    });
    assert_eq!(state.active_language, "fr");
    assert_eq!(state.form_value(FieldName::SiteLanguage), FieldValue::from("fr"));
}

#[test]
fn test_site_language_preference_wins_over_earlier_fallback() {
    let mut state = SettingsPageState::default();
    state.apply(SettingsIntent::SiteLanguagesLoaded {
        languages: Vec::new(),
        fallback: "en".into(),
    });
    assert_eq!(state.active_language, "en");
    state.apply(SettingsIntent::SettingsLoaded(Box::new(SettingsSnapshot {
        account: jane(),
        site_language: Some("de".into()),
        ..SettingsSnapshot::default()
    })));
    assert_eq!(state.form_value(FieldName::SiteLanguage), FieldValue::from("de"));
}

#[test]
fn test_site_language_save_switches_active_language() {
    let mut state = loaded(jane(), &[]);
    state.apply(SettingsIntent::SiteLanguagesLoaded {
        languages: Vec::new(),
        fallback: "en".into(),
    });
    state.apply(SettingsIntent::FieldSubmitted {
        field: FieldName::SiteLanguage,
        value: FieldValue::from("fr"),
    });
    state.apply(SettingsIntent::SaveSucceeded {
        primary: FieldName::SiteLanguage,
        values: vec![(FieldName::SiteLanguage, FieldValue::from("fr"))],
    });
    assert_eq!(state.active_language, "fr");
    assert_eq!(state.site_language.previous.as_deref(), Some("en"));
    assert_eq!(state.site_language.draft, None);
}

#[test]
fn test_editing_after_error_clears_it() {
    let mut state = loaded(jane(), &[]);
    state.apply(SettingsIntent::FieldSubmitted {
        field: FieldName::YearOfBirth,
        value: FieldValue::from("1991"),
    });
    state.apply(SettingsIntent::SaveFailed {
        primary: FieldName::YearOfBirth,
        saved: Vec::new(),
        message: "invalid".into(),
    });
    state.apply(SettingsIntent::FieldChanged {
        field: FieldName::YearOfBirth,
        value: FieldValue::from("1992"),
    });
    assert_eq!(state.save_state(FieldName::YearOfBirth), SaveState::Default);
    assert_eq!(state.field_error(FieldName::YearOfBirth), None);
}

#[test]
fn test_verified_name_message_uses_latest_record() {
    let mut state = loaded(jane(), &[]);
    state.verified_name_history = vec![
        VerifiedNameRecord {
            status: VerifiedNameStatus::Denied,
            profile_name: "Jane Doe".into(),
            verified_name: "Jane Doe".into(),
            created: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            proctored_exam_attempt_id: None,
        },
        VerifiedNameRecord {
            status: VerifiedNameStatus::Submitted,
            profile_name: "Jane Doe".into(),
            verified_name: "Jane Q Doe".into(),
            created: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            proctored_exam_attempt_id: None,
        },
    ];
    assert_eq!(
        state.verified_name_message(),
        Some(VerifiedNameMessage::Submitted {
            will_cert_name_change: false
        })
    );
}
