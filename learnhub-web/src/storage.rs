//! Markers kept in the browser's local storage.

use gloo_storage::{LocalStorage, Storage};
use shared::settings::SUBMITTED_DOB_KEY;

pub fn has_submitted_dob() -> bool {
    LocalStorage::get::<bool>(SUBMITTED_DOB_KEY).unwrap_or(false)
}

pub fn mark_dob_submitted() {
    if let Err(err) = LocalStorage::set(SUBMITTED_DOB_KEY, true) {
        web_sys::console::warn_1(&format!("Could not persist {SUBMITTED_DOB_KEY}: {err}").into());
    }
}

/// Whether a one-time alert with this id was dismissed before.
pub fn is_dismissed(alert_id: &str) -> bool {
    LocalStorage::get::<bool>(alert_id).unwrap_or(false)
}

pub fn dismiss(alert_id: &str) {
    if let Err(err) = LocalStorage::set(alert_id, true) {
        web_sys::console::warn_1(&format!("Could not persist {alert_id}: {err}").into());
    }
}
