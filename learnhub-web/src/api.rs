use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use shared::models::{
    AccountSettings, AuthenticatedUser, CourseSummary, ErrorResponse, FieldCommit, FieldName,
    FieldValue, SettingsSnapshot, SettingsTarget, SiteLanguage, TimeZoneEntry,
    VerifiedNameRecord,
};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Window};

use crate::config::FrontendConfig;
use crate::language::bundled_site_languages;

const CSRF_COOKIE_NAME: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";
const MERGE_PATCH: &str = "application/merge-patch+json";

thread_local! {
    static SHARED_CLIENT: OnceCell<SettingsClient> = OnceCell::new();
}

/// Failure talking to the settings service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{status}: {body}")]
    Rejected {
        status: StatusCode,
        body: ErrorResponse,
    },
}

impl ApiError {
    /// Message to show under `field` when its save fails.
    pub fn field_message(&self, field: FieldName) -> String {
        match self {
            Self::Rejected { body, .. } if !body.message.is_empty() || !body.field_errors.is_empty() => {
                body.message_for(field.as_str())
            }
            other => other.to_string(),
        }
    }
}

/// A grouped save that stopped partway through.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct PartialSave {
    /// Values the service accepted before the failure.
    pub saved: Vec<(FieldName, FieldValue)>,
    #[source]
    pub error: ApiError,
}

/// Non-blank string preference stored under `key`.
pub(crate) fn preference_text(preferences: &HashMap<String, Value>, key: &str) -> Option<String> {
    preferences
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[derive(Deserialize)]
pub(crate) struct AccountResponse {
    #[serde(flatten)]
    pub(crate) account: AccountSettings,
    #[serde(default)]
    pub(crate) static_fields: Vec<String>,
}

#[derive(Deserialize)]
struct Paged<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// API client for the LearnHub settings service.
#[derive(Clone, Debug)]
pub struct SettingsClient {
    base_url: String,
    client: Client,
    csrf_token: Arc<Mutex<Option<String>>>,
}

impl SettingsClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        let client = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            csrf_token: Arc::new(Mutex::new(None)),
        };

        if let Some(token) = read_cookie(CSRF_COOKIE_NAME) {
            client.set_csrf_token(Some(token));
        }

        client
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(&FrontendConfig::shared_dashboard().api_base_url))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn set_csrf_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.csrf_token.lock() {
            *guard = token;
        }
    }

    pub fn current_csrf_token(&self) -> Option<String> {
        self.csrf_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_csrf(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_csrf_token() {
            request.header(CSRF_HEADER, token)
        } else {
            request
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.api_url(path)).send().await?;
        decode(response).await
    }

    async fn expect_success(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }

    /// Retrieve the signed-in user.
    pub async fn fetch_me(&self) -> Result<AuthenticatedUser, ApiError> {
        self.get_json("user/v1/me").await
    }

    /// Loads the account, preferences, verified-name history and time zones
    /// that make up the settings page.
    pub async fn fetch_settings(&self, username: &str) -> Result<SettingsSnapshot, ApiError> {
        let AccountResponse {
            mut account,
            static_fields,
        } = self
            .get_json(&format!("user/v1/accounts/{username}"))
            .await?;
        let preferences: HashMap<String, Value> = self
            .get_json(&format!("user/v1/preferences/{username}"))
            .await?;
        account.time_zone = preference_text(&preferences, "time_zone");

        let history: Paged<VerifiedNameRecord> =
            self.get_json("verified_name/v1/verified_name/history").await?;
        let time_zones: Vec<TimeZoneEntry> =
            self.get_json("user/v1/preferences/time_zones/").await?;
        let country_time_zones = match account.country.as_deref() {
            Some(country) => {
                self.get_json(&format!(
                    "user/v1/preferences/time_zones/?country_code={country}"
                ))
                .await?
            }
            None => Vec::new(),
        };

        Ok(SettingsSnapshot {
            account,
            static_fields: static_fields
                .iter()
                .filter_map(|name| name.parse().ok())
                .collect(),
            verified_name_history: history.results,
            time_zones,
            country_time_zones,
            site_language: preference_text(&preferences, "pref-lang"),
        })
    }

    /// Courses the learner is enrolled in.
    pub async fn fetch_course_list(&self) -> Result<Vec<CourseSummary>, ApiError> {
        let page: Paged<CourseSummary> = self.get_json("notifications/enrollments/").await?;
        Ok(page.results)
    }

    /// Languages the site can be shown in, or the bundled ones when the
    /// service is unavailable.
    pub async fn fetch_site_languages(&self) -> Vec<SiteLanguage> {
        match self.get_json::<Vec<SiteLanguage>>("site_languages").await {
            Ok(languages) if !languages.is_empty() => languages,
            Ok(_) => bundled_site_languages(),
            Err(err) => {
                log(&format!("Falling back to bundled site languages: {err}"));
                bundled_site_languages()
            }
        }
    }

    /// Persists a single field and returns the value the service accepted.
    pub async fn save_settings(
        &self,
        username: &str,
        field: FieldName,
        value: FieldValue,
    ) -> Result<FieldValue, ApiError> {
        let request = match field.target() {
            SettingsTarget::Account => self
                .client
                .patch(self.api_url(&format!("user/v1/accounts/{username}")))
                .header("Content-Type", MERGE_PATCH)
                .body(patch_body(field.as_str(), &value).to_string()),
            SettingsTarget::Preference(key) => self
                .client
                .patch(self.api_url(&format!("user/v1/preferences/{username}")))
                .header("Content-Type", MERGE_PATCH)
                .body(patch_body(key, &value).to_string()),
            SettingsTarget::VerifiedNameConfig => self
                .client
                .post(self.api_url("verified_name/v1/verified_name/config"))
                .json(&json!({
                    "username": username,
                    "use_verified_name_for_certs": value.as_flag().unwrap_or(false),
                })),
            SettingsTarget::Local => return Ok(value),
        };
        let response = self.apply_csrf(request).send().await?;
        Self::expect_success(response).await?;
        Ok(value)
    }

    /// Persists `commits` in order, stopping at the first failure. The
    /// error carries whatever was saved before it.
    pub async fn save_multiple_settings(
        &self,
        username: &str,
        commits: Vec<FieldCommit>,
    ) -> Result<Vec<(FieldName, FieldValue)>, PartialSave> {
        let mut saved = Vec::with_capacity(commits.len());
        for FieldCommit {
            form_id,
            commit_values,
        } in commits
        {
            match self.save_settings(username, form_id, commit_values).await {
                Ok(value) => saved.push((form_id, value)),
                Err(error) => return Err(PartialSave { saved, error }),
            }
        }
        Ok(saved)
    }

    /// Sends a password reset email to `email`.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let request = self
            .client
            .post(self.api_url("user/v1/account/password_reset/"))
            .form(&[("email", email)]);
        let response = self.apply_csrf(request).send().await?;
        Self::expect_success(response).await
    }

    /// Deactivates the signed-in account after confirming its password.
    pub async fn deactivate_account(&self, password: &str) -> Result<(), ApiError> {
        let request = self
            .client
            .post(self.api_url("user/v1/accounts/deactivate_logout/"))
            .form(&[("password", password)]);
        let response = self.apply_csrf(request).send().await?;
        Self::expect_success(response).await
    }
}

pub(crate) fn patch_body(key: &str, value: &FieldValue) -> Value {
    let mut body = Map::new();
    body.insert(key.to_string(), json!(value));
    Value::Object(body)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(rejection(response).await)
    }
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<ErrorResponse>(&text).unwrap_or_else(|_| {
        ErrorResponse::new(status.canonical_reason().unwrap_or("request rejected"))
    });
    ApiError::Rejected { status, body }
}

fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

fn read_cookie(name: &str) -> Option<String> {
    let window: Window = web_sys::window()?;
    let document = window.document()?;
    let html_doc: HtmlDocument = document.dyn_into().ok()?;
    let cookie_string = html_doc.cookie().ok()?;

    for pair in cookie_string.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        let key = parts.next()?.trim();
        let value = parts.next()?.trim();
        if key == name {
            return Some(value.to_string());
        }
    }
    None
}
