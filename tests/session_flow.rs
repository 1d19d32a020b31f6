//! Integration tests for the user session using stub collaborators.
//!
//! Exercises registration, debounced search and listing end-to-end
//! through the public API, with a deterministic `SharedUtils` double and
//! paused tokio time.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use roster::models::{Amount, UserRecord};
use roster::output::{RecordingReporter, ReportError, SearchReporter};
use roster::session::{SessionSettings, UserSession};
use roster::utils::SharedUtils;

/// A utilities double: sequential ids, fixed date, and an email check
/// that only requires an `@`.
struct StubUtils {
    next_id: AtomicUsize,
}

impl StubUtils {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicUsize::new(0),
        })
    }
}

impl SharedUtils for StubUtils {
    fn capitalize_words(&self, text: &str) -> String {
        text.to_uppercase()
    }

    fn generate_id(&self, length: usize) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("u{n}").chars().chain(std::iter::repeat('0')).take(length).collect()
    }

    fn is_valid_email(&self, email: &str) -> bool {
        email.contains('@')
    }

    fn format_date(&self, _date: Option<NaiveDate>) -> String {
        "2026-10-18".to_string()
    }

    fn format_currency(
        &self,
        _amount: &Amount,
        _currency: Option<&str>,
        _locale: Option<&str>,
    ) -> String {
        "N/A".to_string()
    }
}

/// Reporter that always fails.
struct BrokenReporter;

impl SearchReporter for BrokenReporter {
    fn report(&self, _query: &str, _results: &[UserRecord]) -> Result<(), ReportError> {
        Err(ReportError::Unavailable("closed".to_string()))
    }
}

fn settings(delay_ms: u64) -> SessionSettings {
    SessionSettings {
        debounce_delay: Duration::from_millis(delay_ms),
        id_length: 4,
    }
}

fn stub_session(reporter: &RecordingReporter) -> UserSession {
    UserSession::new(StubUtils::new(), Arc::new(reporter.clone()), settings(300)).unwrap()
}

async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn registration_uses_collaborators() {
    let reporter = RecordingReporter::new();
    let session = stub_session(&reporter);

    assert!(session.register_user("john doe", "john@example.com"));

    let users = session.list_users();
    assert_eq!(
        users,
        vec![UserRecord {
            id: "u000".into(),
            name: "JOHN DOE".into(),
            email: "john@example.com".into(),
            registration_date: "2026-10-18".into(),
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn rejected_email_changes_nothing() {
    let reporter = RecordingReporter::new();
    let session = stub_session(&reporter);

    session.register_user("john doe", "john@example.com");
    let before = session.list_users();

    assert!(!session.register_user("bob wilson", "invalid-email"));
    assert_eq!(session.list_users(), before);
    assert_eq!(session.user_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn rapid_searches_collapse_into_the_last() {
    let reporter = RecordingReporter::new();
    let session = stub_session(&reporter);
    session.register_user("john doe", "john@example.com");
    session.register_user("jane smith", "jane.smith@company.org");
    session.register_user("alice johnson", "alice@test.co.uk");

    for query in ["john", "jane", "alice"] {
        session.search_users(query);
        sleep_ms(50).await;
    }
    assert!(reporter.reports().is_empty());
    assert!(session.search_pending());

    sleep_ms(500).await;

    let reports = reporter.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].query, "alice");
    // "alice johnson" matches on both name and email, once.
    let emails: Vec<_> = reports[0].results.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec!["alice@test.co.uk"]);
}

#[tokio::test(start_paused = true)]
async fn spaced_searches_each_run() {
    let reporter = RecordingReporter::new();
    let session = stub_session(&reporter);
    session.register_user("john doe", "john@example.com");

    session.search_users("JOHN");
    sleep_ms(400).await;
    session.search_users("nobody");
    sleep_ms(400).await;

    let reports = reporter.reports();
    let queries: Vec<_> = reports.iter().map(|r| r.query.as_str()).collect();
    assert_eq!(queries, vec!["JOHN", "nobody"]);
    assert_eq!(reports[0].results.len(), 1);
    assert!(reports[1].results.is_empty());
}

#[tokio::test(start_paused = true)]
async fn list_order_survives_search_activity() {
    let reporter = RecordingReporter::new();
    let session = stub_session(&reporter);
    for (name, email) in [("c", "c@x.io"), ("a", "a@x.io"), ("b", "b@x.io")] {
        session.register_user(name, email);
    }

    session.search_users("a");
    let _ = session.search_now("b");
    sleep_ms(400).await;

    let emails: Vec<_> = session.list_users().into_iter().map(|u| u.email).collect();
    assert_eq!(emails, vec!["c@x.io", "a@x.io", "b@x.io"]);
}

#[tokio::test(start_paused = true)]
async fn reporter_errors_reach_the_error_hook() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let session = UserSession::with_error_hook(
        StubUtils::new(),
        Arc::new(BrokenReporter),
        settings(100),
        Arc::new(move |err: ReportError| sink.lock().unwrap().push(err.to_string())),
    )
    .unwrap();

    session.search_users("anything");
    sleep_ms(200).await;

    assert_eq!(*seen.lock().unwrap(), vec!["search reporter unavailable: closed"]);
}

#[test]
fn session_requires_a_runtime() {
    let reporter = RecordingReporter::new();
    let result = UserSession::new(StubUtils::new(), Arc::new(reporter), settings(10));
    assert!(result.is_err());
}
