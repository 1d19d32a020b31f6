//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so config layering can be
//! exercised without mutating the process environment.

use std::collections::HashMap;
use std::str::FromStr;

/// Outcome of reading and parsing a single environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue<T> {
    /// The variable is not set (or not valid unicode).
    Unset,
    /// The variable parsed successfully.
    Parsed(T),
    /// The variable is set but could not be parsed; carries the raw text.
    Invalid(String),
}

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Look up a variable, treating empty values as unset.
    pub fn get(&self, name: &str) -> Option<String> {
        let value = match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Look up a variable and parse it with [`FromStr`].
    pub fn parse<T: FromStr>(&self, name: &str) -> EnvValue<T> {
        match self.get(name) {
            None => EnvValue::Unset,
            Some(raw) => match raw.trim().parse::<T>() {
                Ok(v) => EnvValue::Parsed(v),
                Err(_) => EnvValue::Invalid(raw),
            },
        }
    }
}
