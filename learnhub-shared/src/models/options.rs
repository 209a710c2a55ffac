use serde::{Deserialize, Serialize};

/// A single `<option>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
    /// Rendered but not selectable.
    #[serde(default)]
    pub disabled: bool,
}

impl OptionItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// An entry of a select field: a flat option or a labelled `<optgroup>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectOption {
    Group { label: String, group: Vec<OptionItem> },
    Item(OptionItem),
}

impl SelectOption {
    pub fn item(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Item(OptionItem::new(value, label))
    }

    pub fn group(label: impl Into<String>, group: Vec<OptionItem>) -> Self {
        Self::Group {
            label: label.into(),
            group,
        }
    }

    /// Flattened view over every option, descending into groups.
    pub fn items(options: &[Self]) -> impl Iterator<Item = &OptionItem> {
        options.iter().flat_map(|option| match option {
            Self::Item(item) => std::slice::from_ref(item).iter(),
            Self::Group { group, .. } => group.iter(),
        })
    }

    /// Label of the option whose value is `value`, if any.
    #[must_use]
    pub fn label_for<'a>(options: &'a [Self], value: &str) -> Option<&'a str> {
        Self::items(options)
            .find(|item| item.value == value)
            .map(|item| item.label.as_str())
    }

    /// Whether `value` names an enabled option.
    #[must_use]
    pub fn is_selectable(options: &[Self], value: &str) -> bool {
        Self::items(options).any(|item| item.value == value && !item.disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped() -> Vec<SelectOption> {
        vec![
            SelectOption::item("", "Default (browser time zone)"),
            SelectOption::group(
                "Country time zones",
                vec![OptionItem::new("Africa/Lagos", "Africa/Lagos (WAT, UTC+0100)")],
            ),
            SelectOption::group(
                "All time zones",
                vec![
                    OptionItem::new("Africa/Lagos", "Africa/Lagos (WAT, UTC+0100)"),
                    OptionItem::new("Europe/Paris", "Europe/Paris (CET, UTC+0100)").disabled(true),
                ],
            ),
        ]
    }

    #[test]
    fn test_label_lookup_descends_into_groups() {
        let options = grouped();
        assert_eq!(
            SelectOption::label_for(&options, "Africa/Lagos"),
            Some("Africa/Lagos (WAT, UTC+0100)")
        );
        assert_eq!(SelectOption::label_for(&options, "Asia/Tokyo"), None);
        assert_eq!(SelectOption::items(&options).count(), 4);
    }

    #[test]
    fn test_disabled_options_are_not_selectable() {
        let options = grouped();
        assert!(SelectOption::is_selectable(&options, "Africa/Lagos"));
        assert!(!SelectOption::is_selectable(&options, "Europe/Paris"));
    }

    #[test]
    fn test_untagged_shapes() {
        let options: Vec<SelectOption> = serde_json::from_str(
            r#"[{"value":"en","label":"English"},{"label":"More","group":[{"value":"fr","label":"Français"}]}]"#,
        )
        .unwrap();
        assert!(matches!(options[0], SelectOption::Item(_)));
        assert!(matches!(options[1], SelectOption::Group { .. }));
    }
}
