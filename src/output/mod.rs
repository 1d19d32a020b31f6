//! Output renderers (terminal, JSON) and the search result sink.

pub mod json;
pub mod terminal;

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

use crate::models::UserRecord;

/// Trait for rendering users and search results to an output format.
pub trait OutputRenderer: Send + Sync {
    /// Render the outcome of one search.
    fn render_search(&self, query: &str, results: &[UserRecord]) -> String;

    /// Render a full user listing.
    fn render_users(&self, users: &[UserRecord]) -> String;
}

/// Errors delivering search results.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write search results: {0}")]
    Io(#[from] std::io::Error),

    #[error("search reporter unavailable: {0}")]
    Unavailable(String),
}

/// Receives the results of each debounced search once it runs.
pub trait SearchReporter: Send + Sync {
    fn report(&self, query: &str, results: &[UserRecord]) -> Result<(), ReportError>;
}

/// Writes rendered search results to stdout.
pub struct StdoutReporter {
    renderer: Box<dyn OutputRenderer>,
}

impl StdoutReporter {
    pub fn new(renderer: Box<dyn OutputRenderer>) -> Self {
        Self { renderer }
    }
}

impl SearchReporter for StdoutReporter {
    fn report(&self, query: &str, results: &[UserRecord]) -> Result<(), ReportError> {
        let rendered = self.renderer.render_search(query, results);
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(rendered.as_bytes())?;
        handle.flush()?;
        Ok(())
    }
}

/// One search as seen by a [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub query: String,
    pub results: Vec<UserRecord>,
}

/// Keeps every report in memory, for callers that want to inspect
/// debounced results after the fact.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    reports: Arc<Mutex<Vec<SearchReport>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all reports so far, oldest first.
    pub fn reports(&self) -> Vec<SearchReport> {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl SearchReporter for RecordingReporter {
    fn report(&self, query: &str, results: &[UserRecord]) -> Result<(), ReportError> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SearchReport {
                query: query.to_string(),
                results: results.to_vec(),
            });
        Ok(())
    }
}
