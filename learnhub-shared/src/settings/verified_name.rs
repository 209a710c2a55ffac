//! Verified-name banners, help text, and status icon.

use crate::models::{AccountSettings, VerifiedNameRecord, VerifiedNameStatus};

/// Banner shown above the name fields for the latest verified-name record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifiedNameMessage {
    /// Approved; dismissible once per record.
    Success { dismissal_id: String },
    /// Denied; dismissible once per record.
    Failure { dismissal_id: String },
    /// Under review.
    Submitted { will_cert_name_change: bool },
}

/// Status icon rendered next to the full-name label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifiedNameIcon {
    Verified,
    Submitted,
}

/// Whether the learner's certificates will show a different name once the
/// record under review is resolved.
#[must_use]
pub fn will_cert_name_change(record: &VerifiedNameRecord, committed: &AccountSettings) -> bool {
    let name_changed = committed.name != record.profile_name;
    let uses_verified = committed.use_verified_name_for_certs;
    (name_changed && !uses_verified) || (!name_changed && uses_verified)
}

/// Picks at most one banner for `record`. Records from proctored exams never
/// produce one.
#[must_use]
pub fn verified_name_message(
    record: &VerifiedNameRecord,
    committed: &AccountSettings,
) -> Option<VerifiedNameMessage> {
    if record.from_proctored_exam() {
        return None;
    }
    match record.status {
        VerifiedNameStatus::Approved => Some(VerifiedNameMessage::Success {
            dismissal_id: dismissal_id("Success", record),
        }),
        VerifiedNameStatus::Denied => Some(VerifiedNameMessage::Failure {
            dismissal_id: dismissal_id("Failure", record),
        }),
        VerifiedNameStatus::Submitted => Some(VerifiedNameMessage::Submitted {
            will_cert_name_change: will_cert_name_change(record, committed),
        }),
        VerifiedNameStatus::Pending | VerifiedNameStatus::Other => None,
    }
}

fn dismissal_id(kind: &str, record: &VerifiedNameRecord) -> String {
    format!(
        "dismissedVerifiedName{kind}Message-{}-{}",
        record.verified_name,
        record.created.timestamp_millis()
    )
}

/// Translation key for the help text under the full-name fields.
#[must_use]
pub fn full_name_help_key(
    latest: Option<&VerifiedNameRecord>,
    committed: &AccountSettings,
) -> String {
    let Some(record) = latest else {
        return "settings.full_name_help.base".to_string();
    };
    let mut key = String::from("settings.full_name_help.");
    if record.status == VerifiedNameStatus::Submitted {
        key.push_str("submitted");
        if record.from_proctored_exam() {
            key.push_str("_proctored");
        }
    } else {
        key.push_str("default");
    }
    if !committed.use_verified_name_for_certs {
        key.push_str("_certificate");
    }
    key
}

/// Translation key for the help text under the verified name, if any.
#[must_use]
pub fn verified_name_help_key(
    record: &VerifiedNameRecord,
    committed: &AccountSettings,
) -> Option<String> {
    let mut key = String::from("settings.verified_name_help.");
    match record.status {
        VerifiedNameStatus::Approved => key.push_str("verified"),
        VerifiedNameStatus::Submitted => key.push_str("submitted"),
        _ => return None,
    }
    if record.from_proctored_exam() {
        key.push_str("_proctored");
    }
    if committed.use_verified_name_for_certs {
        key.push_str("_certificate");
    }
    Some(key)
}

#[must_use]
pub const fn verified_name_icon(status: VerifiedNameStatus) -> Option<VerifiedNameIcon> {
    match status {
        VerifiedNameStatus::Approved => Some(VerifiedNameIcon::Verified),
        VerifiedNameStatus::Submitted => Some(VerifiedNameIcon::Submitted),
        _ => None,
    }
}
