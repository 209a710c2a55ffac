use serde::{Deserialize, Serialize};

use crate::models::FieldName;

/// A full name broken into the three inputs the page shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameParts {
    pub first: String,
    pub middle: String,
    pub last: String,
}

impl NameParts {
    pub fn new(
        first: impl Into<String>,
        middle: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            middle: middle.into(),
            last: last.into(),
        }
    }

    /// Splits on single spaces. Tokens between the second and the last are
    /// dropped.
    #[must_use]
    pub fn split(name: &str) -> Self {
        let tokens: Vec<&str> = name.split(' ').collect();
        let first = tokens.first().copied().unwrap_or_default();
        let middle = if tokens.len() > 2 { tokens[1] } else { "" };
        let last = if tokens.len() > 1 {
            tokens.last().copied().unwrap_or_default()
        } else {
            ""
        };
        Self::new(first, middle, last)
    }

    /// Joins the non-blank parts with single spaces.
    #[must_use]
    pub fn join(&self) -> String {
        [&self.first, &self.middle, &self.last]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FirstName => Some(&self.first),
            FieldName::MiddleName => Some(&self.middle),
            FieldName::LastName => Some(&self.last),
            _ => None,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        match field {
            FieldName::FirstName => self.first = value.into(),
            FieldName::MiddleName => self.middle = value.into(),
            FieldName::LastName => self.last = value.into(),
            _ => {}
        }
    }
}

/// Tracks the name baseline and whether the name Save/Cancel pair shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameChangeTracker {
    baseline: Option<NameParts>,
    show_buttons: bool,
    pending: Option<NameParts>,
}

impl NameChangeTracker {
    #[must_use]
    pub const fn baseline(&self) -> Option<&NameParts> {
        self.baseline.as_ref()
    }

    #[must_use]
    pub const fn show_buttons(&self) -> bool {
        self.show_buttons
    }

    /// Captures the baseline from the committed name unless one exists.
    /// An empty name captures nothing.
    pub fn capture(&mut self, committed_name: &str) {
        if self.baseline.is_none() && !committed_name.is_empty() {
            self.baseline = Some(NameParts::split(committed_name));
        }
    }

    /// Like [`Self::capture`] but also captures an empty name, for the first
    /// keystroke on an account without one.
    pub fn ensure_baseline(&mut self, committed_name: &str) -> &NameParts {
        self.baseline
            .get_or_insert_with(|| NameParts::split(committed_name))
    }

    /// Recomputes button visibility against `current`.
    pub fn track(&mut self, current: &NameParts) -> bool {
        self.show_buttons = self.has_changes(current);
        self.show_buttons
    }

    #[must_use]
    pub fn has_changes(&self, current: &NameParts) -> bool {
        self.baseline
            .as_ref()
            .is_some_and(|baseline| baseline != current)
    }

    /// Hides the buttons and remembers what was submitted.
    pub fn begin_save(&mut self, submitted: NameParts) {
        self.show_buttons = false;
        self.pending = Some(submitted);
    }

    /// The submitted parts become the new baseline.
    pub fn complete_save(&mut self) {
        if let Some(submitted) = self.pending.take() {
            self.baseline = Some(submitted);
        }
        self.show_buttons = false;
    }

    /// Keeps the old baseline and re-shows the buttons for `current`.
    pub fn fail_save(&mut self, current: &NameParts) {
        self.pending = None;
        self.track(current);
    }

    pub fn cancel(&mut self) -> Option<NameParts> {
        self.show_buttons = false;
        self.baseline.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Cher", "Cher", "", ""; "single token")]
    #[test_case("Jane Doe", "Jane", "", "Doe"; "two tokens")]
    #[test_case("Jane Q Doe", "Jane", "Q", "Doe"; "three tokens")]
    #[test_case("Ana Maria Luisa Silva", "Ana", "Maria", "Silva"; "extra middles dropped")]
    #[test_case("", "", "", ""; "empty")]
    fn test_split(name: &str, first: &str, middle: &str, last: &str) {
        assert_eq!(NameParts::split(name), NameParts::new(first, middle, last));
    }

    #[test_case(NameParts::new("A", "", "C"), "A C"; "blank middle")]
    #[test_case(NameParts::new("A", "B", "C"), "A B C"; "all parts")]
    #[test_case(NameParts::new(" ", "B", ""), "B"; "whitespace part")]
    #[test_case(NameParts::default(), ""; "nothing")]
    fn test_join(parts: NameParts, expected: &str) {
        assert_eq!(parts.join(), expected);
    }

    #[test]
    fn test_buttons_follow_baseline_difference() {
        let mut tracker = NameChangeTracker::default();
        tracker.capture("Jane Doe");
        let mut current = NameParts::split("Jane Doe");

        current.set(FieldName::FirstName, "Janet");
        assert!(tracker.track(&current));

        current.set(FieldName::FirstName, "Jane");
        assert!(!tracker.track(&current));
    }

    #[test]
    fn test_capture_happens_once() {
        let mut tracker = NameChangeTracker::default();
        tracker.capture("");
        assert!(tracker.baseline().is_none());
        tracker.capture("Jane Doe");
        tracker.capture("Someone Else");
        assert_eq!(tracker.baseline(), Some(&NameParts::new("Jane", "", "Doe")));
    }

    #[test]
    fn test_baseline_moves_only_after_success() {
        let mut tracker = NameChangeTracker::default();
        tracker.capture("Jane Doe");
        let edited = NameParts::new("Jane", "Q", "Doe");
        tracker.track(&edited);

        tracker.begin_save(edited.clone());
        assert!(!tracker.show_buttons());
        tracker.fail_save(&edited);
        assert!(tracker.show_buttons());
        assert_eq!(tracker.baseline(), Some(&NameParts::new("Jane", "", "Doe")));

        tracker.begin_save(edited.clone());
        tracker.complete_save();
        assert_eq!(tracker.baseline(), Some(&edited));
        assert!(!tracker.has_changes(&edited));
    }
}
