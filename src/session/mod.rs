//! User session: one registry plus a debounced search over it.
//!
//! The session is constructed explicitly and handed around by reference;
//! it is the only writer of its registry. Debounced searches read the
//! registry when their quiet window elapses, not when they are requested,
//! so a search always sees users registered up to the moment it runs.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use thiserror::Error;

use crate::config::Config;
use crate::debounce::{DebounceError, Debouncer, ErrorHook};
use crate::models::UserRecord;
use crate::output::{ReportError, SearchReporter};
use crate::registry::UserRegistry;
use crate::utils::SharedUtils;

/// Errors constructing a session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to set up debounced search: {0}")]
    Debounce(#[from] DebounceError),
}

/// Tunables for a [`UserSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Quiet window before a burst of searches runs.
    pub debounce_delay: Duration,
    /// Length of generated user ids.
    pub id_length: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            debounce_delay: Duration::from_millis(crate::constants::DEFAULT_DEBOUNCE_MS),
            id_length: crate::constants::DEFAULT_ID_LENGTH,
        }
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            debounce_delay: config.search.debounce_delay(),
            id_length: config.registry.id_length,
        }
    }
}

type SharedRegistry = Arc<RwLock<UserRegistry>>;

fn read(registry: &SharedRegistry) -> RwLockReadGuard<'_, UserRegistry> {
    registry.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(registry: &SharedRegistry) -> RwLockWriteGuard<'_, UserRegistry> {
    registry.write().unwrap_or_else(PoisonError::into_inner)
}

/// Registration, search and listing for one run.
pub struct UserSession {
    registry: SharedRegistry,
    search: Debouncer<String, ReportError>,
}

impl UserSession {
    /// Build a session whose debounced searches are delivered to
    /// `reporter`. Reporter errors are logged.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        utils: Arc<dyn SharedUtils>,
        reporter: Arc<dyn SearchReporter>,
        settings: SessionSettings,
    ) -> Result<Self, SessionError> {
        Self::with_error_hook(
            utils,
            reporter,
            settings,
            Arc::new(|err: ReportError| tracing::error!(error = %err, "debounced search failed")),
        )
    }

    /// Like [`UserSession::new`], routing reporter errors to `on_error`.
    pub fn with_error_hook(
        utils: Arc<dyn SharedUtils>,
        reporter: Arc<dyn SearchReporter>,
        settings: SessionSettings,
        on_error: ErrorHook<ReportError>,
    ) -> Result<Self, SessionError> {
        let registry = Arc::new(RwLock::new(UserRegistry::new(utils, settings.id_length)));

        let search_registry = Arc::clone(&registry);
        let search = Debouncer::with_error_hook(
            settings.debounce_delay,
            move |query: String| {
                let results = read(&search_registry).search(&query);
                tracing::debug!(query = %query, matches = results.len(), "search executed");
                reporter.report(&query, &results)
            },
            on_error,
        )?;

        Ok(Self { registry, search })
    }

    /// Validate and append a user. `false` means the email was rejected
    /// and nothing changed.
    pub fn register_user(&self, name: &str, email: &str) -> bool {
        write(&self.registry).register(name, email)
    }

    /// Request a search. Only the last request of a burst runs, once the
    /// debounce window has passed; results go to the reporter.
    pub fn search_users(&self, query: &str) {
        tracing::debug!(query, "search requested");
        self.search.invoke(query.to_string());
    }

    /// Search immediately, bypassing the debounce.
    pub fn search_now(&self, query: &str) -> Vec<UserRecord> {
        read(&self.registry).search(query)
    }

    /// Snapshot of all users in registration order.
    pub fn list_users(&self) -> Vec<UserRecord> {
        read(&self.registry).list().to_vec()
    }

    pub fn user_count(&self) -> usize {
        read(&self.registry).len()
    }

    /// Whether a debounced search is waiting to run.
    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    pub fn debounce_delay(&self) -> Duration {
        self.search.delay()
    }
}
