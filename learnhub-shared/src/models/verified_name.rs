use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Review status of a verified-name submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VerifiedNameStatus {
    Approved,
    Denied,
    Submitted,
    Pending,
    #[serde(other)]
    Other,
}

/// One entry of the learner's verified-name history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedNameRecord {
    pub status: VerifiedNameStatus,
    pub profile_name: String,
    pub verified_name: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub proctored_exam_attempt_id: Option<i64>,
}

impl VerifiedNameRecord {
    /// Whether the record came from a proctored exam attempt.
    #[must_use]
    pub const fn from_proctored_exam(&self) -> bool {
        self.proctored_exam_attempt_id.is_some()
    }

    /// Most recently created record of a history.
    #[must_use]
    pub fn most_recent(history: &[Self]) -> Option<&Self> {
        history.iter().max_by_key(|record| record.created)
    }
}
