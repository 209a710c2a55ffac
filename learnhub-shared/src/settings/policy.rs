use tracing::debug;

/// Restricts which countries a learner may pick.
///
/// An empty allow list means every country is selectable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryPolicy {
    allowed: Vec<String>,
}

impl CountryPolicy {
    #[must_use]
    pub fn new(allowed: Vec<String>) -> Self {
        Self { allowed }
    }

    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    #[must_use]
    pub fn is_restricted(&self) -> bool {
        !self.allowed.is_empty()
    }

    /// Whether `code` is outside the allow list.
    #[must_use]
    pub fn is_disabled(&self, code: &str) -> bool {
        self.is_restricted() && !self.allowed.iter().any(|allowed| allowed == code)
    }

    /// The committed country stays submittable even when it is disabled.
    /// Clearing the country counts as picking `""`, so a restricted list
    /// rejects it unless the country is already unset.
    #[must_use]
    pub fn permits_submission(&self, code: &str, committed: Option<&str>) -> bool {
        let permitted = committed.unwrap_or_default() == code || !self.is_disabled(code);
        if !permitted {
            debug!(country = code, "country outside the allow list");
        }
        permitted
    }

    /// Keeps the catalog entries that are allowed or already committed.
    #[must_use]
    pub fn filter<T>(
        &self,
        catalog: Vec<T>,
        code_of: impl Fn(&T) -> &str,
        committed: Option<&str>,
    ) -> Vec<T> {
        catalog
            .into_iter()
            .filter(|entry| {
                let code = code_of(entry);
                !self.is_disabled(code) || committed == Some(code)
            })
            .collect()
    }
}

/// Accounts registered in a delete-disabled country cannot self-delete.
#[must_use]
pub fn can_delete_account(committed_country: Option<&str>, delete_disabled: &[String]) -> bool {
    committed_country.is_none_or(|country| !delete_disabled.iter().any(|code| code == country))
}
