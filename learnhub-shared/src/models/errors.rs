use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-field rejection detail returned by the settings service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct FieldErrorDetail {
    /// Message intended for developers; never shown to learners.
    #[serde(default)]
    pub developer_message: Option<String>,
    /// Localized message suitable for display under the field.
    #[serde(default)]
    pub user_message: Option<String>,
}

/// Represents an error response from the settings service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct ErrorResponse {
    /// The main error message
    #[serde(default, alias = "developer_message")]
    pub message: String,
    /// Optional additional details about the error
    #[serde(default)]
    pub details: Option<String>,
    /// Validation failures keyed by field name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: BTreeMap<String, FieldErrorDetail>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Creates a new error response with message and details.
    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
            ..Self::default()
        }
    }

    /// Checks if this error response has details.
    #[must_use]
    pub const fn has_details(&self) -> bool {
        self.details.is_some()
    }

    /// Best message to show under `field`.
    ///
    /// Prefers the field's user message, then its developer message, then the
    /// top-level message.
    #[must_use]
    pub fn message_for(&self, field: &str) -> String {
        self.field_errors
            .get(field)
            .and_then(|detail| {
                detail
                    .user_message
                    .clone()
                    .or_else(|| detail.developer_message.clone())
            })
            .unwrap_or_else(|| self.to_string())
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let error = ErrorResponse::new("Test error");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.details, None);
        assert!(!error.has_details());
    }

    #[test]
    fn test_error_response_display() {
        let error = ErrorResponse::with_details("Save failed", "timeout");
        assert_eq!(error.to_string(), "Save failed: timeout");
        assert!(error.has_details());
    }

    #[test]
    fn test_field_errors_deserialize() {
        let json = r#"{
            "developer_message": "Validation failed",
            "field_errors": {
                "email": {
                    "developer_message": "email exists",
                    "user_message": "An account with this email already exists."
                },
                "country": {"developer_message": "bad code"}
            }
        }"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.message, "Validation failed");
        assert_eq!(
            error.message_for("email"),
            "An account with this email already exists."
        );
        assert_eq!(error.message_for("country"), "bad code");
        assert_eq!(error.message_for("name"), "Validation failed");
    }

    #[test]
    fn test_empty_field_errors_are_not_serialized() {
        let json = serde_json::to_string(&ErrorResponse::new("x")).unwrap();
        assert!(!json.contains("field_errors"));
        assert!(json.contains("\"details\":null"));
    }
}
