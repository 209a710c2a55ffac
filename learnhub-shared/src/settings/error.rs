use thiserror::Error;

use crate::models::FieldName;

/// Reasons a submit is refused before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("country {0} is not available for selection")]
    DisabledCountry(String),

    #[error("a save for {0} is already in flight")]
    SaveInFlight(FieldName),

    #[error("{0} is managed by an administrator and cannot be edited")]
    NotEditable(FieldName),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_use_wire_field_names() {
        assert_eq!(
            SettingsError::SaveInFlight(FieldName::TimeZone).to_string(),
            "a save for time_zone is already in flight"
        );
        assert_eq!(
            SettingsError::DisabledCountry("FR".into()).to_string(),
            "country FR is not available for selection"
        );
    }
}
