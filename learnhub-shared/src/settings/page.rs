//! State of the account settings page and the reducer that drives it.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::config::DashboardConfig;
use crate::models::{
    AccountSettings, CourseSummary, FieldCommit, FieldName, FieldValue, SaveState,
    SettingsSnapshot, SiteLanguage, TimeZoneEntry, VerifiedNameRecord,
};

use super::error::SettingsError;
use super::names::{NameChangeTracker, NameParts};
use super::policy::{CountryPolicy, can_delete_account};
use super::verified_name::{VerifiedNameMessage, verified_name_message};

/// Which of the mutually exclusive page bodies is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageRegion {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

/// The language the page is displayed in versus the one being picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteLanguageState {
    pub previous: Option<String>,
    pub draft: Option<String>,
}

/// Everything the dashboard asks of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsIntent {
    Mounted { allowed_countries: Vec<String> },
    SettingsLoaded(Box<SettingsSnapshot>),
    SettingsFailed(String),
    CoursesLoaded(Vec<CourseSummary>),
    CoursesFailed(String),
    /// `fallback` becomes the active language only when none is known yet.
    SiteLanguagesLoaded { languages: Vec<SiteLanguage>, fallback: String },
    FieldChanged { field: FieldName, value: FieldValue },
    FieldSubmitted { field: FieldName, value: FieldValue },
    FieldCancelled { field: FieldName },
    NameFieldChanged { field: FieldName, value: String },
    NamesSubmitted,
    NamesCancelled,
    SaveSucceeded { primary: FieldName, values: Vec<(FieldName, FieldValue)> },
    /// `saved` lists the values of a grouped save that landed before the
    /// failure.
    SaveFailed {
        primary: FieldName,
        saved: Vec<(FieldName, FieldValue)>,
        message: String,
    },
}

/// Work the reducer asks the web layer to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEffect {
    FetchSettings,
    FetchCourseList,
    FetchSiteLanguages,
    SaveSettings { field: FieldName, value: FieldValue },
    SaveMultipleSettings { commits: Vec<FieldCommit>, primary: FieldName },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsPageState {
    pub region: PageRegion,
    pub committed: AccountSettings,
    pub drafts: BTreeMap<FieldName, FieldValue>,
    pub save_states: BTreeMap<FieldName, SaveState>,
    pub field_errors: BTreeMap<FieldName, String>,
    /// Addresses awaiting confirmation from the learner's inbox.
    pub confirmation_values: BTreeMap<FieldName, String>,
    pub names: NameChangeTracker,
    pub static_fields: Vec<FieldName>,
    pub verified_name_history: Vec<VerifiedNameRecord>,
    pub time_zones: Vec<TimeZoneEntry>,
    pub country_time_zones: Vec<TimeZoneEntry>,
    pub site_language: SiteLanguageState,
    pub active_language: String,
    pub site_languages: Vec<SiteLanguage>,
    pub courses: Vec<CourseSummary>,
    pub courses_error: Option<String>,
    pub policy: CountryPolicy,
}

impl SettingsPageState {
    /// Applies `intent` and returns the effects to run.
    pub fn apply(&mut self, intent: SettingsIntent) -> Vec<SettingsEffect> {
        match intent {
            SettingsIntent::Mounted { allowed_countries } => {
                self.region = PageRegion::Loading;
                self.policy = CountryPolicy::new(allowed_countries);
                vec![
                    SettingsEffect::FetchCourseList,
                    SettingsEffect::FetchSettings,
                    SettingsEffect::FetchSiteLanguages,
                ]
            }
            SettingsIntent::SettingsLoaded(snapshot) => {
                self.load(*snapshot);
                Vec::new()
            }
            SettingsIntent::SettingsFailed(message) => {
                warn!(%message, "account settings failed to load");
                self.region = PageRegion::Errored(message);
                Vec::new()
            }
            SettingsIntent::CoursesLoaded(courses) => {
                debug!(count = courses.len(), "course list loaded");
                self.courses = courses;
                self.courses_error = None;
                Vec::new()
            }
            SettingsIntent::CoursesFailed(message) => {
                warn!(%message, "course list failed to load");
                self.courses_error = Some(message);
                Vec::new()
            }
            SettingsIntent::SiteLanguagesLoaded {
                languages,
                fallback,
            } => {
                self.site_languages = languages;
                if self.active_language.is_empty() {
                    self.active_language = fallback;
                }
                Vec::new()
            }
            SettingsIntent::FieldChanged { field, value } => {
                self.change(field, value);
                Vec::new()
            }
            SettingsIntent::FieldSubmitted { field, value } => self.submit(field, value),
            SettingsIntent::FieldCancelled { field } => {
                self.cancel(field);
                Vec::new()
            }
            SettingsIntent::NameFieldChanged { field, value } => {
                self.change_name_part(field, value);
                Vec::new()
            }
            SettingsIntent::NamesSubmitted => self.submit_names(),
            SettingsIntent::NamesCancelled => {
                if let Some(baseline) = self.names.cancel() {
                    for part in FieldName::NAME_PARTS {
                        let value = baseline.get(part).unwrap_or_default();
                        self.drafts.insert(part, FieldValue::from(value));
                    }
                }
                Vec::new()
            }
            SettingsIntent::SaveSucceeded { primary, values } => {
                self.save_succeeded(primary, values);
                Vec::new()
            }
            SettingsIntent::SaveFailed {
                primary,
                saved,
                message,
            } => {
                self.save_failed(primary, saved, message);
                Vec::new()
            }
        }
    }

    fn load(&mut self, snapshot: SettingsSnapshot) {
        let SettingsSnapshot {
            account,
            static_fields,
            verified_name_history,
            time_zones,
            country_time_zones,
            site_language,
        } = snapshot;
        info!(username = %account.username, "account settings loaded");
        if let Some(language) = site_language.filter(|code| !code.is_empty()) {
            self.active_language = language;
        }
        self.committed = account;
        self.static_fields = static_fields;
        self.verified_name_history = verified_name_history;
        self.time_zones = time_zones;
        self.country_time_zones = country_time_zones;
        self.names.capture(&self.committed.name);
        self.region = PageRegion::Loaded;
    }

    fn change(&mut self, field: FieldName, value: FieldValue) {
        if field.is_name_part() {
            self.change_name_part(field, value.display());
            return;
        }
        if field == FieldName::SiteLanguage {
            self.site_language.draft = Some(value.display());
        } else {
            self.drafts.insert(field, value);
        }
        self.reset_feedback(field);
    }

    fn change_name_part(&mut self, field: FieldName, value: String) {
        self.names.ensure_baseline(&self.committed.name);
        self.drafts.insert(field, FieldValue::from(value));
        let current = self.current_name_parts();
        self.names.track(&current);
        self.reset_feedback(FieldName::Name);
    }

    fn cancel(&mut self, field: FieldName) {
        if field == FieldName::SiteLanguage {
            self.site_language.draft = None;
        } else {
            self.drafts.remove(&field);
        }
        self.reset_feedback(field);
    }

    /// Clears a stale error or completion marker. An in-flight save keeps
    /// its pending state.
    fn reset_feedback(&mut self, field: FieldName) {
        if self.save_state(field) != SaveState::Pending {
            self.save_states.remove(&field);
        }
        self.field_errors.remove(&field);
    }

    fn submit(&mut self, field: FieldName, value: FieldValue) -> Vec<SettingsEffect> {
        match self.plan_submit(field, value) {
            Ok(effects) => effects,
            Err(err) => {
                debug!(%err, "submit rejected");
                Vec::new()
            }
        }
    }

    fn submit_names(&mut self) -> Vec<SettingsEffect> {
        let parts = self.current_name_parts();
        let full_name = parts.join();
        match self.plan_submit(FieldName::Name, FieldValue::from(full_name)) {
            Ok(effects) => {
                self.names.begin_save(parts);
                effects
            }
            Err(err) => {
                debug!(%err, "name submit rejected");
                Vec::new()
            }
        }
    }

    fn plan_submit(
        &mut self,
        field: FieldName,
        value: FieldValue,
    ) -> Result<Vec<SettingsEffect>, SettingsError> {
        if !self.is_editable(field) {
            return Err(SettingsError::NotEditable(field));
        }
        if self.save_state(field) == SaveState::Pending {
            return Err(SettingsError::SaveInFlight(field));
        }
        let value = normalize(field, value);
        if field == FieldName::Country {
            let code = value.display();
            if !self
                .policy
                .permits_submission(&code, self.committed.country.as_deref())
            {
                return Err(SettingsError::DisabledCountry(code));
            }
        }

        self.save_states.insert(field, SaveState::Pending);
        self.field_errors.remove(&field);
        match field {
            FieldName::SiteLanguage => self.site_language.draft = Some(value.display()),
            FieldName::Name => {}
            _ => {
                self.drafts.insert(field, value.clone());
            }
        }

        let certs_draft = self.drafts.get(&FieldName::UseVerifiedNameForCerts).cloned();
        let effect = match certs_draft {
            Some(certs) if field == FieldName::Name => SettingsEffect::SaveMultipleSettings {
                commits: vec![
                    FieldCommit::new(field, value),
                    FieldCommit::new(FieldName::UseVerifiedNameForCerts, certs),
                ],
                primary: field,
            },
            _ => SettingsEffect::SaveSettings { field, value },
        };
        debug!(%field, "save planned");
        Ok(vec![effect])
    }

    /// Records a value the service accepted.
    fn commit(&mut self, field: FieldName, value: FieldValue) {
        if field.requires_confirmation() {
            self.confirmation_values.insert(field, value.display());
            self.drafts.remove(&field);
        } else if field == FieldName::SiteLanguage {
            let previous = std::mem::replace(&mut self.active_language, value.display());
            self.site_language = SiteLanguageState {
                previous: Some(previous),
                draft: None,
            };
        } else {
            self.committed.apply(field, &value);
            self.drafts.remove(&field);
        }
        self.field_errors.remove(&field);
    }

    fn save_succeeded(&mut self, primary: FieldName, values: Vec<(FieldName, FieldValue)>) {
        for (field, value) in values {
            self.commit(field, value);
        }
        self.save_states.insert(primary, SaveState::Complete);

        if primary == FieldName::Name {
            self.names.complete_save();
            let current = self.current_name_parts();
            self.names.track(&current);
        }
        info!(field = %primary, "settings saved");
    }

    fn save_failed(
        &mut self,
        primary: FieldName,
        saved: Vec<(FieldName, FieldValue)>,
        message: String,
    ) {
        warn!(field = %primary, %message, saved = saved.len(), "settings save failed");
        let primary_landed = saved.iter().any(|(field, _)| *field == primary);
        for (field, value) in saved {
            self.commit(field, value);
        }
        self.save_states.insert(primary, SaveState::Error);
        self.field_errors.insert(primary, message);
        match primary {
            FieldName::Name if primary_landed => {
                self.names.complete_save();
                let current = self.current_name_parts();
                self.names.track(&current);
            }
            FieldName::Name => {
                let current = self.current_name_parts();
                self.names.fail_save(&current);
            }
            FieldName::SiteLanguage if !primary_landed => self.site_language.draft = None,
            _ => {}
        }
    }

    /// Draft if present, otherwise the committed value.
    #[must_use]
    pub fn form_value(&self, field: FieldName) -> FieldValue {
        if field.is_name_part() {
            let parts = self.current_name_parts();
            return FieldValue::from(parts.get(field).unwrap_or_default());
        }
        if field == FieldName::SiteLanguage {
            let language = self
                .site_language
                .draft
                .as_deref()
                .unwrap_or(&self.active_language);
            return FieldValue::from(language);
        }
        self.drafts
            .get(&field)
            .cloned()
            .unwrap_or_else(|| self.committed.value(field))
    }

    /// Name inputs as currently shown: each part's draft, falling back to
    /// the baseline.
    #[must_use]
    pub fn current_name_parts(&self) -> NameParts {
        let baseline = self.names.baseline().cloned().unwrap_or_default();
        let mut parts = NameParts::default();
        for part in FieldName::NAME_PARTS {
            let value = self.drafts.get(&part).map_or_else(
                || baseline.get(part).unwrap_or_default().to_string(),
                FieldValue::display,
            );
            parts.set(part, value);
        }
        parts
    }

    #[must_use]
    pub fn save_state(&self, field: FieldName) -> SaveState {
        self.save_states.get(&field).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn field_error(&self, field: FieldName) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn confirmation_value(&self, field: FieldName) -> Option<&str> {
        self.confirmation_values.get(&field).map(String::as_str)
    }

    /// Name parts share the editability of the full name.
    #[must_use]
    pub fn is_editable(&self, field: FieldName) -> bool {
        let field = if field.is_name_part() {
            FieldName::Name
        } else {
            field
        };
        !self.static_fields.contains(&field)
    }

    #[must_use]
    pub fn latest_verified_name(&self) -> Option<&VerifiedNameRecord> {
        VerifiedNameRecord::most_recent(&self.verified_name_history)
    }

    #[must_use]
    pub fn verified_name_message(&self) -> Option<VerifiedNameMessage> {
        self.latest_verified_name()
            .and_then(|record| verified_name_message(record, &self.committed))
    }

    #[must_use]
    pub fn can_delete_account(&self, config: &DashboardConfig) -> bool {
        can_delete_account(
            self.committed.country.as_deref(),
            &config.countries_with_delete_account_disabled,
        )
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self.region, PageRegion::Loaded)
    }
}

/// Converts select output into the value the service expects.
fn normalize(field: FieldName, value: FieldValue) -> FieldValue {
    match field {
        FieldName::TimeZone if value.is_blank() => FieldValue::Null,
        FieldName::YearOfBirth => value.as_number().map_or(FieldValue::Null, FieldValue::Number),
        _ => value,
    }
}
