//! Tests for the API client functionality
//!
//! Validates request bodies, response decoding and the error text shown
//! under a field when a save is rejected.

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use crate::api::{AccountResponse, ApiError, patch_body, preference_text};
    use reqwest::StatusCode;
    use serde_json::json;
    use shared::models::{ErrorResponse, FieldErrorDetail, FieldName, FieldValue};

    fn rejected(body: ErrorResponse) -> ApiError {
        ApiError::Rejected {
            status: StatusCode::BAD_REQUEST,
            body,
        }
    }

    /// Tests merge-patch bodies for each value shape
    #[test]
    fn test_patch_body_shapes() {
        assert_eq!(
            patch_body("country", &FieldValue::from("GH")),
            json!({ "country": "GH" })
        );
        assert_eq!(
            patch_body("time_zone", &FieldValue::Null),
            json!({ "time_zone": null })
        );
        assert_eq!(
            patch_body("year_of_birth", &FieldValue::Number(1994)),
            json!({ "year_of_birth": 1994 })
        );
    }

    /// Tests that the field's own message wins
    #[test]
    fn test_field_message_prefers_field_detail() {
        let mut field_errors = BTreeMap::new();
        field_errors.insert(
            "email".to_string(),
            FieldErrorDetail {
                developer_message: Some("duplicate key".to_string()),
                user_message: Some("That email is already in use.".to_string()),
            },
        );
        let error = rejected(ErrorResponse {
            message: "Validation failed".to_string(),
            details: None,
            field_errors,
        });
        assert_eq!(
            error.field_message(FieldName::Email),
            "That email is already in use."
        );
    }

    /// Tests the fallback to the top-level message
    #[test]
    fn test_field_message_falls_back_to_message() {
        let error = rejected(ErrorResponse::new("Name is too long"));
        assert!(error.field_message(FieldName::Name).contains("Name is too long"));
    }

    /// Tests account payload decoding with static fields
    #[test]
    fn test_account_response_decoding() {
        let response: AccountResponse = serde_json::from_value(json!({
            "username": "efua",
            "name": "Efua Asante",
            "email": "efua@example.com",
            "country": "GH",
            "year_of_birth": 2001,
            "static_fields": ["name"]
        }))
        .unwrap();
        assert_eq!(response.account.username, "efua");
        assert_eq!(response.account.year_of_birth, Some(2001));
        assert_eq!(response.static_fields, vec!["name".to_string()]);
    }

    /// Tests reading the saved language and time zone from preferences
    #[test]
    fn test_preference_text() {
        let preferences: HashMap<String, serde_json::Value> = serde_json::from_value(json!({
            "pref-lang": "fr",
            "time_zone": "",
            "account_privacy": null
        }))
        .unwrap();
        assert_eq!(preference_text(&preferences, "pref-lang").as_deref(), Some("fr"));
        assert_eq!(preference_text(&preferences, "time_zone"), None);
        assert_eq!(preference_text(&preferences, "account_privacy"), None);
        assert_eq!(preference_text(&preferences, "missing"), None);
    }
}
