//! Locale-aware currency rendering.
//!
//! A small, fixed table of locales and currencies covers what the demo
//! shows. Unknown locales fall back to `en-US`; unknown but well-formed
//! currency codes render with the code itself as the symbol. Anything the
//! formatter cannot render (absent or non-finite amounts, malformed
//! currency codes) becomes [`CURRENCY_FALLBACK`].

use crate::constants::{CURRENCY_FALLBACK, DEFAULT_LOCALE};
use crate::models::Amount;

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

/// How digits of the integer part are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// `1,234,567`
    Thousands,
    /// `12,34,567` (lakh / crore)
    Indian,
}

/// Number and symbol conventions for one locale.
#[derive(Debug)]
struct LocaleFormat {
    tag: &'static str,
    group: &'static str,
    decimal: &'static str,
    grouping: Grouping,
    symbol_first: bool,
    /// Locale-specific symbol spellings that win over [`CURRENCIES`].
    symbols: &'static [(&'static str, &'static str)],
}

#[rustfmt::skip]
const LOCALES: &[LocaleFormat] = &[
    LocaleFormat { tag: "en-US", group: ",", decimal: ".", grouping: Grouping::Thousands, symbol_first: true, symbols: &[] },
    LocaleFormat { tag: "en-GB", group: ",", decimal: ".", grouping: Grouping::Thousands, symbol_first: true, symbols: &[] },
    LocaleFormat { tag: "en-IN", group: ",", decimal: ".", grouping: Grouping::Indian, symbol_first: true, symbols: &[] },
    LocaleFormat { tag: "de-DE", group: ".", decimal: ",", grouping: Grouping::Thousands, symbol_first: false, symbols: &[] },
    LocaleFormat { tag: "fr-FR", group: NARROW_NBSP, decimal: ",", grouping: Grouping::Thousands, symbol_first: false, symbols: &[("USD", "$US")] },
    LocaleFormat { tag: "ja-JP", group: ",", decimal: ".", grouping: Grouping::Thousands, symbol_first: true, symbols: &[("JPY", "￥")] },
];

/// Symbol and minor-unit digits for one currency.
#[derive(Debug)]
struct CurrencyInfo {
    code: &'static str,
    symbol: &'static str,
    digits: usize,
}

const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "USD", symbol: "$", digits: 2 },
    CurrencyInfo { code: "EUR", symbol: "€", digits: 2 },
    CurrencyInfo { code: "GBP", symbol: "£", digits: 2 },
    CurrencyInfo { code: "JPY", symbol: "¥", digits: 0 },
    CurrencyInfo { code: "INR", symbol: "₹", digits: 2 },
    CurrencyInfo { code: "CAD", symbol: "CA$", digits: 2 },
    CurrencyInfo { code: "AUD", symbol: "A$", digits: 2 },
    CurrencyInfo { code: "CNY", symbol: "CN¥", digits: 2 },
    CurrencyInfo { code: "CHF", symbol: "CHF", digits: 2 },
];

/// Locale tags the formatter knows, in table order.
pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    LOCALES.iter().map(|l| l.tag)
}

/// Render `amount` in `currency_code` using `locale`'s conventions.
pub fn format_currency(amount: &Amount, currency_code: &str, locale: &str) -> String {
    let Some(value) = amount.value() else {
        return CURRENCY_FALLBACK.to_string();
    };
    let Some(code) = normalize_code(currency_code) else {
        return CURRENCY_FALLBACK.to_string();
    };

    let locale = resolve_locale(locale);
    let info = CURRENCIES.iter().find(|c| c.code == code);
    let digits = info.map_or(2, |c| c.digits);
    let symbol = locale
        .symbols
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, s)| *s)
        .or(info.map(|c| c.symbol))
        .unwrap_or(code.as_str());

    let fixed = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut number = group_digits(int_part, locale.group, locale.grouping);
    if let Some(frac) = frac_part {
        number.push_str(locale.decimal);
        number.push_str(frac);
    }

    // Values that round to zero never show a sign.
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    if locale.symbol_first {
        let gap = if symbol.ends_with(|c: char| c.is_alphabetic()) { NBSP } else { "" };
        format!("{sign}{symbol}{gap}{number}")
    } else {
        format!("{sign}{number}{NBSP}{symbol}")
    }
}

/// Uppercase a three-letter ISO 4217 code; `None` if malformed.
fn normalize_code(code: &str) -> Option<String> {
    let code = code.trim();
    (code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| code.to_ascii_uppercase())
}

/// Exact tag first (case- and separator-insensitive), then language-only
/// match, then the default locale.
fn resolve_locale(tag: &str) -> &'static LocaleFormat {
    let wanted = tag.trim().replace('_', "-");
    let exact = LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(&wanted));
    let language = || {
        let lang = wanted.split('-').next().unwrap_or_default();
        LOCALES.iter().find(|l| {
            l.tag
                .split('-')
                .next()
                .is_some_and(|p| !lang.is_empty() && p.eq_ignore_ascii_case(lang))
        })
    };
    exact
        .or_else(language)
        .or_else(|| LOCALES.iter().find(|l| l.tag == DEFAULT_LOCALE))
        .unwrap_or(&LOCALES[0])
}

fn group_digits(int_part: &str, separator: &str, grouping: Grouping) -> String {
    let digits: Vec<char> = int_part.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = digits.len();
    let mut size = 3;
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(digits[start..end].iter().collect());
        end = start;
        if grouping == Grouping::Indian {
            size = 2;
        }
    }
    groups.reverse();
    groups.join(separator)
}
