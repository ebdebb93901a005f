//! Locale-aware currency formatting.
//!
//! Rendering a [`Decimal`] as a currency string is locale-dependent:
//! symbol, symbol placement, separators, and the number of fraction
//! digits all vary. [`CurrencyFormat`] captures those rules as a plain
//! value so callers can resolve the active locale once (typically from
//! the environment via [`CurrencyFormat::active`]) and then format any
//! number of amounts deterministically.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::currency::CurrencyFormat;
//!
//! let usd = CurrencyFormat::for_locale("en-US");
//! assert_eq!(usd.format(dec!(1234.5)), "$1,234.50");
//!
//! let eur = CurrencyFormat::for_locale("de-DE");
//! assert_eq!(eur.format(dec!(1234.5)), "1.234,50 €");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolPosition {
    /// Symbol before the number, no space (`$1.00`).
    Prefix,
    /// Symbol after the number, separated by a space (`1,00 €`).
    Suffix,
}

/// Currency formatting rules for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Currency symbol, e.g. `$` or `€`.
    pub symbol: String,

    /// Placement of the symbol.
    pub symbol_position: SymbolPosition,

    /// Separator between the integer and fractional parts.
    pub decimal_separator: char,

    /// Separator between groups of three integer digits, if the locale
    /// uses one.
    pub grouping_separator: Option<char>,

    /// Number of fractional digits the currency carries (2 for USD,
    /// 0 for JPY).
    pub fraction_digits: u32,
}

impl CurrencyFormat {
    /// US dollars, `en-US` conventions. The fallback for unknown locales.
    pub fn en_us() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_position: SymbolPosition::Prefix,
            decimal_separator: '.',
            grouping_separator: Some(','),
            fraction_digits: 2,
        }
    }

    /// Pounds sterling, `en-GB` conventions.
    pub fn en_gb() -> Self {
        Self {
            symbol: "£".to_string(),
            ..Self::en_us()
        }
    }

    /// Euro, `de-DE` conventions (comma decimal, dot grouping, trailing symbol).
    pub fn de_de() -> Self {
        Self {
            symbol: "€".to_string(),
            symbol_position: SymbolPosition::Suffix,
            decimal_separator: ',',
            grouping_separator: Some('.'),
            fraction_digits: 2,
        }
    }

    /// Euro, `fr-FR` conventions (comma decimal, space grouping, trailing symbol).
    pub fn fr_fr() -> Self {
        Self {
            grouping_separator: Some(' '),
            ..Self::de_de()
        }
    }

    /// Yen, `ja-JP` conventions (no fractional digits).
    pub fn ja_jp() -> Self {
        Self {
            symbol: "¥".to_string(),
            fraction_digits: 0,
            ..Self::en_us()
        }
    }

    /// Returns the format for a locale tag such as `en-US`.
    ///
    /// Tags are matched case-insensitively and environment-style spellings
    /// are accepted (`en_US.UTF-8` normalizes to `en-US`). Unknown tags
    /// fall back to `en-US` with a logged warning; this function never
    /// fails.
    pub fn for_locale(tag: &str) -> Self {
        match normalize_locale_tag(tag).as_str() {
            // "C" and "POSIX" are the uninitialized system locales.
            "en-us" | "c" | "posix" | "" => Self::en_us(),
            "en-gb" => Self::en_gb(),
            "de-de" => Self::de_de(),
            "fr-fr" => Self::fr_fr(),
            "ja-jp" => Self::ja_jp(),
            other => {
                warn!(locale = other, "unknown locale tag, falling back to en-US");
                Self::en_us()
            }
        }
    }

    /// Resolves the active locale from the environment.
    ///
    /// Checks `LC_ALL`, `LC_MONETARY`, then `LANG`; the first variable
    /// that is set and non-empty wins. Falls back to `en-US` when none
    /// is set. Call this once at startup and reuse the result: the
    /// returned value is self-contained, so formatting stays
    /// deterministic even if the environment later changes.
    pub fn active() -> Self {
        ["LC_ALL", "LC_MONETARY", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .map(|tag| Self::for_locale(&tag))
            .unwrap_or_else(Self::en_us)
    }

    /// Formats a monetary value according to this locale's rules.
    ///
    /// The value is rounded to [`fraction_digits`](Self::fraction_digits)
    /// half-up (midpoint away from zero, the standard financial
    /// convention), grouped, and decorated with the symbol. Negative
    /// values render with a leading minus: `-$2.50`, `-2,50 €`.
    pub fn format(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(
            self.fraction_digits,
            RoundingStrategy::MidpointAwayFromZero,
        );
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let fixed = format!("{:.*}", self.fraction_digits as usize, rounded.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let mut number = self.group_digits(int_part);
        if let Some(frac) = frac_part {
            number.push(self.decimal_separator);
            number.push_str(frac);
        }

        let sign = if negative { "-" } else { "" };
        match self.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{}{number}", self.symbol),
            SymbolPosition::Suffix => format!("{sign}{number} {}", self.symbol),
        }
    }

    /// Inserts the grouping separator every three integer digits.
    fn group_digits(&self, digits: &str) -> String {
        let Some(sep) = self.grouping_separator else {
            return digits.to_string();
        };
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                grouped.push(sep);
            }
            grouped.push(c);
        }
        grouped.chars().rev().collect()
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Lowercases a locale tag, converts `_` to `-`, and strips any encoding
/// suffix (`en_US.UTF-8` → `en-us`).
fn normalize_locale_tag(tag: &str) -> String {
    let tag = tag.trim();
    let tag = tag.split(['.', '@']).next().unwrap_or(tag);
    tag.replace('_', "-").to_ascii_lowercase()
}
