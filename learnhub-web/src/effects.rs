//! Runs the effects planned by the settings reducer.

use shared::models::{FieldName, FieldValue};
use shared::settings::{SettingsEffect, SettingsIntent};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yewdux::Dispatch;

use crate::api::{PartialSave, SettingsClient};
use crate::language::DEFAULT_LANGUAGE;
use crate::models::app_state::AppState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Reduces `intent` into the store and starts whatever it planned.
pub fn dispatch_intent(dispatch: &Dispatch<AppState>, intent: SettingsIntent) {
    let mut effects = Vec::new();
    dispatch.reduce_mut(|state| {
        effects = state.page.apply(intent);
    });
    for effect in effects {
        run(effect, dispatch.clone());
    }
}

fn run(effect: SettingsEffect, dispatch: Dispatch<AppState>) {
    spawn_local(async move {
        let client = SettingsClient::shared();
        match effect {
            SettingsEffect::FetchSettings => {
                let intent = match load_settings(&client, &dispatch).await {
                    Ok(intent) => intent,
                    Err(message) => SettingsIntent::SettingsFailed(message),
                };
                dispatch_intent(&dispatch, intent);
            }
            SettingsEffect::FetchCourseList => {
                let intent = match client.fetch_course_list().await {
                    Ok(courses) => SettingsIntent::CoursesLoaded(courses),
                    Err(err) => SettingsIntent::CoursesFailed(err.to_string()),
                };
                dispatch_intent(&dispatch, intent);
            }
            SettingsEffect::FetchSiteLanguages => {
                let languages = client.fetch_site_languages().await;
                dispatch_intent(
                    &dispatch,
                    SettingsIntent::SiteLanguagesLoaded {
                        languages,
                        fallback: DEFAULT_LANGUAGE.to_string(),
                    },
                );
            }
            SettingsEffect::SaveSettings { field, value } => {
                let username = dispatch.get().page.committed.username.clone();
                let result = client
                    .save_settings(&username, field, value)
                    .await
                    .map(|value| vec![(field, value)])
                    .map_err(|error| PartialSave {
                        saved: Vec::new(),
                        error,
                    });
                dispatch_intent(&dispatch, outcome(field, result));
            }
            SettingsEffect::SaveMultipleSettings { commits, primary } => {
                let username = dispatch.get().page.committed.username.clone();
                let result = client.save_multiple_settings(&username, commits).await;
                dispatch_intent(&dispatch, outcome(primary, result));
            }
        }
    });
}

async fn load_settings(
    client: &SettingsClient,
    dispatch: &Dispatch<AppState>,
) -> Result<SettingsIntent, String> {
    let user = client.fetch_me().await.map_err(|err| err.to_string())?;
    let snapshot = client
        .fetch_settings(&user.username)
        .await
        .map_err(|err| err.to_string())?;
    log(&format!("Loaded settings for {}", user.username));
    dispatch.reduce_mut(|state| state.user = Some(user));
    Ok(SettingsIntent::SettingsLoaded(Box::new(snapshot)))
}

fn outcome(
    primary: FieldName,
    result: Result<Vec<(FieldName, FieldValue)>, PartialSave>,
) -> SettingsIntent {
    match result {
        Ok(values) => SettingsIntent::SaveSucceeded { primary, values },
        Err(PartialSave { saved, error }) => SettingsIntent::SaveFailed {
            primary,
            message: error.field_message(primary),
            saved,
        },
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use shared::models::ErrorResponse;

    use super::*;
    use crate::api::ApiError;

    fn rejected(message: &str) -> ApiError {
        ApiError::Rejected {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::new(message),
        }
    }

    #[test]
    fn test_outcome_maps_results_to_intents() {
        let ok = outcome(
            FieldName::Country,
            Ok(vec![(FieldName::Country, FieldValue::from("GH"))]),
        );
        assert!(matches!(ok, SettingsIntent::SaveSucceeded { primary: FieldName::Country, .. }));

        let err = outcome(
            FieldName::Email,
            Err(PartialSave {
                saved: Vec::new(),
                error: rejected("already in use"),
            }),
        );
        assert_eq!(
            err,
            SettingsIntent::SaveFailed {
                primary: FieldName::Email,
                saved: Vec::new(),
                message: "already in use".into()
            }
        );
    }

    #[test]
    fn test_partial_group_save_keeps_landed_values() {
        let intent = outcome(
            FieldName::Name,
            Err(PartialSave {
                saved: vec![(FieldName::Name, FieldValue::from("Janet Doe"))],
                error: rejected("verified name service unavailable"),
            }),
        );
        assert_eq!(
            intent,
            SettingsIntent::SaveFailed {
                primary: FieldName::Name,
                saved: vec![(FieldName::Name, FieldValue::from("Janet Doe"))],
                message: "verified name service unavailable".into()
            }
        );
    }
}
