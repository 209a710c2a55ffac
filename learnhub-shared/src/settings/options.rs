//! Option lists for the select fields.

use crate::models::{OptionItem, SelectOption, SiteLanguage, TimeZoneEntry, countries::COUNTRIES};

use super::policy::CountryPolicy;

/// Oldest birth year offered, counted back from the current year.
pub const YEAR_OF_BIRTH_SPAN: i64 = 120;

/// Empty choice followed by the catalog, filtered and flagged by `policy`.
#[must_use]
pub fn country_options(
    policy: &CountryPolicy,
    committed: Option<&str>,
    empty_label: &str,
) -> Vec<SelectOption> {
    let catalog = COUNTRIES
        .iter()
        .map(|(code, name)| OptionItem::new(*code, *name).disabled(policy.is_disabled(code)))
        .collect();
    std::iter::once(SelectOption::item("", empty_label))
        .chain(
            policy
                .filter(catalog, |item| item.value.as_str(), committed)
                .into_iter()
                .map(SelectOption::Item),
        )
        .collect()
}

/// Empty choice followed by every year from `current_year` back
/// [`YEAR_OF_BIRTH_SPAN`] years, newest first.
#[must_use]
pub fn year_of_birth_options(current_year: i64, empty_label: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption::item("", empty_label))
        .chain(
            (current_year - YEAR_OF_BIRTH_SPAN..=current_year)
                .rev()
                .map(|year| SelectOption::item(year.to_string(), year.to_string())),
        )
        .collect()
}

/// Localized headings of the time-zone select.
#[derive(Debug, Clone, Copy)]
pub struct TimeZoneLabels<'a> {
    pub default: &'a str,
    pub country: &'a str,
    pub all: &'a str,
}

/// Default choice, then the country's zones when known, then every zone.
#[must_use]
pub fn time_zone_options(
    time_zones: &[TimeZoneEntry],
    country_time_zones: &[TimeZoneEntry],
    labels: TimeZoneLabels<'_>,
) -> Vec<SelectOption> {
    let to_items = |entries: &[TimeZoneEntry]| {
        entries
            .iter()
            .map(|entry| OptionItem::new(&entry.time_zone, &entry.description))
            .collect::<Vec<_>>()
    };

    let mut options = vec![SelectOption::item("", labels.default)];
    if !country_time_zones.is_empty() {
        options.push(SelectOption::group(labels.country, to_items(country_time_zones)));
    }
    options.push(SelectOption::group(labels.all, to_items(time_zones)));
    options
}

/// Released languages, plus the active one even if unreleased.
#[must_use]
pub fn site_language_options(languages: &[SiteLanguage], active: &str) -> Vec<SelectOption> {
    languages
        .iter()
        .filter(|language| language.released || language.code == active)
        .map(|language| SelectOption::item(&language.code, &language.name))
        .collect()
}
