use rust_decimal::Decimal;
use thiserror::Error;
use tip_core::DEFAULT_TIP_PERCENT;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0. Returns an error
/// when the input is non-empty but not parseable, for callers that want
/// to report instead of substituting a default.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseDecimalError {
        input: s.to_string(),
        source: e,
    })
}

/// Parses a raw bill-amount field.
///
/// Anything that does not parse as a number counts as a bill of 0; the
/// substitution is logged at warn and never surfaced as an error. The
/// computation itself never sees unparsed text.
pub fn bill_amount_or_default(raw: &str) -> Decimal {
    parse_decimal(raw).unwrap_or_else(|e| {
        tracing::warn!(input = %raw, "unparsable bill amount, using 0: {}", e);
        Decimal::ZERO
    })
}

/// Parses a raw tip-percentage field.
///
/// An absent, empty, or unparsable percentage counts as the default 15.
pub fn tip_percent_or_default(raw: Option<&str>) -> Decimal {
    let Some(raw) = raw else {
        return DEFAULT_TIP_PERCENT;
    };
    if raw.trim().is_empty() {
        return DEFAULT_TIP_PERCENT;
    }
    match parse_decimal(raw) {
        Ok(percent) => percent,
        Err(e) => {
            tracing::warn!(input = %raw, "unparsable tip percentage, using 15: {}", e);
            DEFAULT_TIP_PERCENT
        }
    }
}
