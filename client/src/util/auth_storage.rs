//! Persistence of the auth record under the `auth` key.

#[cfg(test)]
#[path = "auth_storage_test.rs"]
mod auth_storage_test;

use crate::config::AUTH_STORAGE_KEY;
use crate::state::auth::AuthRecord;
use crate::util::storage;

/// Read the stored record. Partial or unreadable records count as absent.
pub fn load() -> Option<AuthRecord> {
    storage::load_json::<AuthRecord>(AUTH_STORAGE_KEY).filter(AuthRecord::is_complete)
}

pub fn save(record: &AuthRecord) {
    storage::save_json(AUTH_STORAGE_KEY, record);
}

pub fn clear() {
    storage::remove(AUTH_STORAGE_KEY);
}
