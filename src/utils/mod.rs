//! Shared string, id, date and currency utilities.
//!
//! The registry and session only ever see the [`SharedUtils`] trait, so a
//! test double can stand in for [`StandardUtils`] without touching any
//! core logic.

pub mod currency;
pub mod date;
pub mod id;
pub mod text;

use chrono::NaiveDate;

use crate::models::Amount;

/// The capability set consumed by the user registry and the demo.
pub trait SharedUtils: Send + Sync {
    /// Title-case every space-separated word.
    fn capitalize_words(&self, text: &str) -> String;

    /// Produce an identifier of exactly `length` characters.
    fn generate_id(&self, length: usize) -> String;

    /// Syntactic email check.
    fn is_valid_email(&self, email: &str) -> bool;

    /// Human-readable date; `None` means today.
    fn format_date(&self, date: Option<NaiveDate>) -> String;

    /// Locale-aware currency rendering. `None` picks the formatter's
    /// defaults. Never fails: unusable input yields a fallback string.
    fn format_currency(
        &self,
        amount: &Amount,
        currency: Option<&str>,
        locale: Option<&str>,
    ) -> String;
}

/// Built-in implementation of [`SharedUtils`].
#[derive(Debug, Clone)]
pub struct StandardUtils {
    default_currency: String,
    default_locale: String,
}

impl StandardUtils {
    pub fn new(default_currency: impl Into<String>, default_locale: impl Into<String>) -> Self {
        Self {
            default_currency: default_currency.into(),
            default_locale: default_locale.into(),
        }
    }
}

impl Default for StandardUtils {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_CURRENCY, crate::constants::DEFAULT_LOCALE)
    }
}

impl SharedUtils for StandardUtils {
    fn capitalize_words(&self, text: &str) -> String {
        text::capitalize_words(text)
    }

    fn generate_id(&self, length: usize) -> String {
        id::generate_id(length)
    }

    fn is_valid_email(&self, email: &str) -> bool {
        text::is_valid_email(email)
    }

    fn format_date(&self, date: Option<NaiveDate>) -> String {
        match date {
            Some(d) => date::format_date(d),
            None => date::format_today(),
        }
    }

    fn format_currency(
        &self,
        amount: &Amount,
        currency: Option<&str>,
        locale: Option<&str>,
    ) -> String {
        currency::format_currency(
            amount,
            currency.unwrap_or(&self.default_currency),
            locale.unwrap_or(&self.default_locale),
        )
    }
}
