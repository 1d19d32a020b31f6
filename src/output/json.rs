//! JSON output renderer.
//!
//! Searches render as `{"query": ..., "count": n, "results": [...]}`,
//! listings as `{"count": n, "users": [...]}`. One document per line so
//! the output can be piped through `jq -c`.

use crate::models::UserRecord;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render_search(&self, query: &str, results: &[UserRecord]) -> String {
        let output = serde_json::json!({
            "query": query,
            "count": results.len(),
            "results": results,
        });
        format!("{output}\n")
    }

    fn render_users(&self, users: &[UserRecord]) -> String {
        let output = serde_json::json!({
            "count": users.len(),
            "users": users,
        });
        format!("{output}\n")
    }
}
