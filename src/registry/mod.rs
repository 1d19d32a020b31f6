//! In-memory user registry.
//!
//! Holds validated [`UserRecord`]s in registration order and answers
//! substring queries over name and email. Append-only: nothing is ever
//! updated or removed once registered.

use std::sync::Arc;

use crate::models::UserRecord;
use crate::utils::SharedUtils;

/// Ordered, append-only collection of registered users.
pub struct UserRegistry {
    utils: Arc<dyn SharedUtils>,
    id_length: usize,
    users: Vec<UserRecord>,
}

impl UserRegistry {
    /// Create an empty registry that asks `utils` for validation,
    /// capitalisation, ids and dates. Ids are `id_length` characters.
    pub fn new(utils: Arc<dyn SharedUtils>, id_length: usize) -> Self {
        Self {
            utils,
            id_length,
            users: Vec::new(),
        }
    }

    /// Register a user.
    ///
    /// Returns `false` without touching the registry when the email is
    /// invalid. Otherwise appends exactly one record and returns `true`.
    pub fn register(&mut self, name: &str, email: &str) -> bool {
        if !self.utils.is_valid_email(email) {
            tracing::warn!(email, "rejected registration: invalid email");
            return false;
        }

        let record = UserRecord {
            id: self.utils.generate_id(self.id_length),
            name: self.utils.capitalize_words(name),
            email: email.to_string(),
            registration_date: self.utils.format_date(None),
        };
        tracing::debug!(id = %record.id, name = %record.name, "registered user");
        self.users.push(record);
        true
    }

    /// Case-insensitive substring search over name and email.
    ///
    /// Returns a fresh vector in registration order; an empty query
    /// matches every record.
    pub fn search(&self, query: &str) -> Vec<UserRecord> {
        let needle = query.to_lowercase();
        self.users
            .iter()
            .filter(|u| u.matches(&needle))
            .cloned()
            .collect()
    }

    /// All records in registration order.
    pub fn list(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
