//! Terminal renderer: colored, indented lines.

use colored::Colorize;

use crate::models::UserRecord;
use crate::output::OutputRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl TerminalRenderer {
    fn user_line(user: &UserRecord) -> String {
        format!(
            "   • {} ({}) {} {} {} {}\n",
            user.name.bold(),
            user.email,
            "id:".dimmed(),
            user.id,
            "registered:".dimmed(),
            user.registration_date,
        )
    }
}

impl OutputRenderer for TerminalRenderer {
    fn render_search(&self, query: &str, results: &[UserRecord]) -> String {
        let mut output = format!(
            "  {} searched for {} — {} {}\n",
            "ℹ".blue().bold(),
            format!("\"{query}\"").bold(),
            results.len().to_string().bold(),
            if results.len() == 1 { "match" } else { "matches" },
        );
        for user in results {
            output.push_str(&Self::user_line(user));
        }
        output
    }

    fn render_users(&self, users: &[UserRecord]) -> String {
        if users.is_empty() {
            return format!("  {}\n", "No users registered.".dimmed());
        }
        let count = users.len().to_string();
        let mut output = format!("  {} registered user(s):\n", count.bold());
        for user in users {
            output.push_str(&Self::user_line(user));
        }
        output
    }
}
