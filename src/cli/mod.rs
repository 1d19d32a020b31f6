//! CLI command definitions and demo narration helpers.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use colored::Colorize;

/// Width of the section rules printed by the demo.
const RULE_WIDTH: usize = 60;

/// Print the start-up banner.
pub fn print_banner() {
    println!();
    println!(
        "  {} {}",
        roster::constants::APP_NAME.bold(),
        "· shared utilities demo".dimmed(),
    );
    println!();
}

/// Print a numbered demo section header between two rules.
pub fn print_section(number: usize, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{}", rule.dimmed());
    println!("{} {}", format!("Demo {number}:").cyan().bold(), title.bold());
    println!("{}", rule.dimmed());
}

/// Print a `label  value` line, aligned like the rest of the demo output.
pub fn print_item(label: &str, value: impl std::fmt::Display) {
    println!("  {} {value}", format!("{label}:").cyan());
}

/// Print a success or failure line.
pub fn print_status(ok: bool, message: &str) {
    if ok {
        println!("  {} {message}", "✔".green().bold());
    } else {
        println!("  {} {}", "✖".red().bold(), message.red());
    }
}
