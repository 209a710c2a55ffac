use tracing::debug;

use crate::config::DashboardConfig;

/// Minimum age for an account without parental consent.
pub const COPPA_MINIMUM_AGE: i64 = 13;

/// Local storage marker set once the learner has confirmed their birth year.
pub const SUBMITTED_DOB_KEY: &str = "submittedDOB";

/// Learners born in or after this year are under the minimum age.
#[must_use]
pub const fn coppa_compliance_year(current_year: i64) -> i64 {
    current_year - COPPA_MINIMUM_AGE
}

/// Whether the date-of-birth confirmation modal should open.
#[must_use]
pub fn should_prompt_dob_update(
    config: &DashboardConfig,
    year_of_birth: Option<i64>,
    already_submitted: bool,
    current_year: i64,
) -> bool {
    if !(config.enable_coppa_compliance && config.enable_dob_update) || already_submitted {
        return false;
    }
    let prompt = year_of_birth.is_some_and(|year| year >= coppa_compliance_year(current_year));
    if prompt {
        debug!(?year_of_birth, "prompting for date of birth");
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn config(coppa: bool, dob: bool) -> DashboardConfig {
        DashboardConfig {
            enable_coppa_compliance: coppa,
            enable_dob_update: dob,
            ..DashboardConfig::default()
        }
    }

    #[test_case(true, true, Some(2015), false, true; "underage and unconfirmed")]
    #[test_case(true, true, Some(2013), false, true; "exactly threshold")]
    #[test_case(true, true, Some(2012), false, false; "old enough")]
    #[test_case(true, true, Some(2015), true, false; "already submitted")]
    #[test_case(false, true, Some(2015), false, false; "compliance off")]
    #[test_case(true, false, Some(2015), false, false; "update off")]
    #[test_case(true, true, None, false, false; "no birth year")]
    fn test_prompt(coppa: bool, dob: bool, year: Option<i64>, submitted: bool, expected: bool) {
        assert_eq!(
            should_prompt_dob_update(&config(coppa, dob), year, submitted, 2026),
            expected
        );
    }
}
