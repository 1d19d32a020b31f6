//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and formatting defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "roster";

/// Crate version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Cargo profile the binary was built with (set by `build.rs`).
pub const BUILD_PROFILE: &str = env!("ROSTER_BUILD_PROFILE");

/// Local config filename (e.g. `.roster.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".roster.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "roster";

/// Quiet window for the debounced user search.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Length of generated user identifiers.
pub const DEFAULT_ID_LENGTH: usize = 12;

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_LOCALE: &str = "en-US";

/// Tracing filter used when neither config nor environment sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Rendered by the currency formatter for absent or unusable amounts.
pub const CURRENCY_FALLBACK: &str = "N/A";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_DEBOUNCE_MS: &str = "ROSTER_DEBOUNCE_MS";
pub const ENV_ID_LENGTH: &str = "ROSTER_ID_LENGTH";
pub const ENV_CURRENCY: &str = "ROSTER_CURRENCY";
pub const ENV_LOCALE: &str = "ROSTER_LOCALE";
pub const ENV_LOG: &str = "ROSTER_LOG";
