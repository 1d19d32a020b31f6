//! Registered user records.

use serde::{Deserialize, Serialize};

/// A user accepted into the registry.
///
/// Only built after the email passed validation. Records are never
/// mutated once appended to a [`UserRegistry`](crate::registry::UserRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Generated identifier, unique within a run.
    pub id: String,
    /// Display name after capitalisation.
    pub name: String,
    /// Email exactly as supplied at registration.
    pub email: String,
    /// Human-readable registration date.
    pub registration_date: String,
}

impl UserRecord {
    /// Case-insensitive substring match on name or email.
    ///
    /// `needle` must already be lowercased; an empty needle matches.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}
