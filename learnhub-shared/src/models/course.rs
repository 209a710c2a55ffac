use serde::{Deserialize, Serialize};

/// A course the learner is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub course_id: String,
    #[serde(alias = "course_name")]
    pub name: String,
}

/// A language the site can be displayed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLanguage {
    pub code: String,
    pub name: String,
    /// Unreleased languages are only listed for staff.
    #[serde(default = "released_by_default")]
    pub released: bool,
}

const fn released_by_default() -> bool {
    true
}
