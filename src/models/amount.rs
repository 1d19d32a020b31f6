//! Input accepted by the currency formatter.

use std::fmt;

/// A monetary amount as handed to
/// [`SharedUtils::format_currency`](crate::utils::SharedUtils::format_currency).
///
/// The formatter must tolerate garbage, so anything that is not a finite
/// number is kept around as [`Amount::Invalid`] instead of being rejected
/// at the call site.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    /// A finite numeric value.
    Value(f64),
    /// Input that is present but not a usable number.
    Invalid(String),
    /// No amount supplied at all.
    Absent,
}

impl Amount {
    /// Interpret raw text, e.g. a CLI argument.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Amount::Absent;
        }
        match trimmed.parse::<f64>() {
            Ok(v) => Amount::from(v),
            Err(_) => Amount::Invalid(raw.to_string()),
        }
    }

    /// The numeric value, if this amount can be rendered.
    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Value(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        if v.is_finite() {
            Amount::Value(v)
        } else {
            Amount::Invalid(v.to_string())
        }
    }
}

impl From<Option<f64>> for Amount {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Amount::Absent, Amount::from)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Value(v) => write!(f, "{v}"),
            Amount::Invalid(raw) => write!(f, "{raw:?}"),
            Amount::Absent => write!(f, "(none)"),
        }
    }
}
