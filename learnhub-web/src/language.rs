use std::collections::HashMap;

use shared::models::SiteLanguage;

/// Language used before the learner's preference is known.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "es",
            LanguageInfo {
                code: "es",
                translation: include_str!("../translations/es.json"),
                native_name: "Español",
            },
        ),
        (
            "de",
            LanguageInfo {
                code: "de",
                translation: include_str!("../translations/de.json"),
                native_name: "Deutsch",
            },
        ),
        (
            "fr",
            LanguageInfo {
                code: "fr",
                translation: include_str!("../translations/fr.json"),
                native_name: "Français",
            },
        ),
    ])
}

/// Site languages offered when the language service cannot be reached.
pub fn bundled_site_languages() -> Vec<SiteLanguage> {
    let mut languages: Vec<SiteLanguage> = supported_languages()
        .into_values()
        .map(|info| SiteLanguage {
            code: info.code.to_string(),
            name: info.native_name.to_string(),
            released: true,
        })
        .collect();
    languages.sort_by(|a, b| a.name.cmp(&b.name));
    languages
}

/// Replaces `{name}` placeholders in a translated template.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}
