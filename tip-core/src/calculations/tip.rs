//! Gratuity computation.
//!
//! The whole calculation is one line of arithmetic plus an optional
//! rounding step:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | `tip = tip_percent / 100 × bill amount` |
//! | 2    | If rounding up, raise the tip to the next whole currency unit (ceiling) |
//! | 3    | Render the tip with the active locale's currency format |
//!
//! The computation is total over finite decimals: negative amounts or
//! percentages outside 0–100 propagate mathematically rather than being
//! rejected, and there is no error path. The rounding policy is always
//! ceiling toward positive infinity, never nearest; raising the tip
//! favors the service provider and is a deliberate product choice.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::calculations::TipCalculator;
//! use tip_core::currency::CurrencyFormat;
//!
//! let calculator = TipCalculator::new(CurrencyFormat::en_us());
//!
//! assert_eq!(calculator.compute(dec!(10.00), dec!(20), false), "$2.00");
//! assert_eq!(calculator.compute(dec!(51.00), dec!(15), true), "$8.00");
//! ```

use rust_decimal::Decimal;

use crate::currency::CurrencyFormat;
use crate::models::TipBreakdown;

/// Tip percentage applied when the caller supplies no override: 15%.
pub const DEFAULT_TIP_PERCENT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Computes the numeric tip for a bill.
///
/// `tip_percent` is a percentage (15 means 15%). When `round_up` is
/// set, the tip is raised to the next whole currency unit (2.3 → 3).
/// Pure and total: same inputs, same output, no side effects.
pub fn tip_amount(
    amount: Decimal,
    tip_percent: Decimal,
    round_up: bool,
) -> Decimal {
    let tip = tip_percent / Decimal::ONE_HUNDRED * amount;
    if round_up { tip.ceil() } else { tip }
}

/// Computes gratuities and renders them with a fixed currency format.
///
/// Holds the [`CurrencyFormat`] resolved by the caller (usually once at
/// startup from the environment locale) so every computation is
/// referentially transparent: identical inputs produce byte-identical
/// strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipCalculator {
    format: CurrencyFormat,
}

impl TipCalculator {
    pub fn new(format: CurrencyFormat) -> Self {
        Self { format }
    }

    /// Computes the tip and returns it as a currency-formatted string,
    /// e.g. `"$2.00"`.
    pub fn compute(
        &self,
        amount: Decimal,
        tip_percent: Decimal,
        round_up: bool,
    ) -> String {
        self.format.format(tip_amount(amount, tip_percent, round_up))
    }

    /// Like [`compute`](Self::compute) with the percentage fixed at
    /// [`DEFAULT_TIP_PERCENT`]. The explicit overload replaces a
    /// default-argument; `round_up` still has to be supplied.
    pub fn compute_with_default_percent(
        &self,
        amount: Decimal,
        round_up: bool,
    ) -> String {
        self.compute(amount, DEFAULT_TIP_PERCENT, round_up)
    }

    /// Computes the full breakdown: tip plus bill-and-tip total, both
    /// rounded to the currency's fraction digits.
    pub fn breakdown(
        &self,
        amount: Decimal,
        tip_percent: Decimal,
        round_up: bool,
    ) -> TipBreakdown {
        let tip = tip_amount(amount, tip_percent, round_up)
            .round_dp_with_strategy(
                self.format.fraction_digits,
                rust_decimal::RoundingStrategy::MidpointAwayFromZero,
            );
        TipBreakdown {
            bill_amount: amount,
            tip_percent,
            round_up,
            tip,
            total: amount + tip,
        }
    }

    /// The currency format this calculator renders with.
    pub fn format(&self) -> &CurrencyFormat {
        &self.format
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn usd() -> TipCalculator {
        TipCalculator::new(CurrencyFormat::en_us())
    }

    // =========================================================================
    // tip_amount tests
    // =========================================================================

    #[test]
    fn tip_amount_computes_percentage_of_bill() {
        let result = tip_amount(dec!(10.00), dec!(20), false);

        assert_eq!(result, dec!(2.00));
    }

    #[test]
    fn tip_amount_without_round_up_keeps_fraction() {
        let result = tip_amount(dec!(51.00), dec!(15), false);

        assert_eq!(result, dec!(7.65));
    }

    #[test]
    fn tip_amount_round_up_takes_ceiling() {
        let result = tip_amount(dec!(51.00), dec!(15), true);

        assert_eq!(result, dec!(8));
    }

    #[test]
    fn tip_amount_round_up_leaves_whole_values_alone() {
        let result = tip_amount(dec!(10.00), dec!(20), true);

        assert_eq!(result, dec!(2.00));
    }

    #[test]
    fn tip_amount_round_up_yields_whole_currency_units() {
        let result = tip_amount(dec!(33.33), dec!(17.5), true);

        assert_eq!(result, result.trunc());
    }

    #[test]
    fn tip_amount_zero_bill_is_zero() {
        assert_eq!(tip_amount(dec!(0), dec!(15), false), dec!(0));
        assert_eq!(tip_amount(dec!(0), dec!(99), false), dec!(0));
    }

    #[test]
    fn tip_amount_negative_percent_propagates() {
        let result = tip_amount(dec!(10.00), dec!(-10), false);

        assert_eq!(result, dec!(-1.00));
    }

    #[test]
    fn tip_amount_percent_over_hundred_propagates() {
        let result = tip_amount(dec!(10.00), dec!(150), false);

        assert_eq!(result, dec!(15.00));
    }

    // =========================================================================
    // TipCalculator tests
    // =========================================================================

    #[test]
    fn compute_20_percent_no_round_up() {
        let result = usd().compute(dec!(10.00), dec!(20.00), false);

        assert_eq!(result, "$2.00");
    }

    #[test]
    fn compute_20_percent_round_up_already_whole() {
        let result = usd().compute(dec!(10.00), dec!(20.00), true);

        assert_eq!(result, "$2.00");
    }

    #[test]
    fn compute_15_percent_round_up_takes_ceiling() {
        // 15% of 51 is 7.65, raised to 8.
        let result = usd().compute(dec!(51.00), dec!(15.00), true);

        assert_eq!(result, "$8.00");
    }

    #[test]
    fn compute_zero_bill_formats_zero() {
        assert_eq!(usd().compute(dec!(0), dec!(15), false), "$0.00");
        assert_eq!(usd().compute(dec!(0), dec!(99), false), "$0.00");
    }

    #[test]
    fn compute_is_idempotent() {
        let calculator = usd();

        assert_eq!(
            calculator.compute(dec!(51.00), dec!(15.00), true),
            calculator.compute(dec!(51.00), dec!(15.00), true),
        );
    }

    #[test]
    fn compute_with_default_percent_uses_fifteen() {
        let calculator = usd();

        assert_eq!(
            calculator.compute_with_default_percent(dec!(100.00), false),
            calculator.compute(dec!(100.00), dec!(15), false),
        );
        assert_eq!(
            calculator.compute_with_default_percent(dec!(100.00), false),
            "$15.00"
        );
    }

    #[test]
    fn compute_respects_locale_format() {
        let calculator = TipCalculator::new(CurrencyFormat::de_de());

        assert_eq!(calculator.compute(dec!(10.00), dec!(20), false), "2,00 €");
    }

    #[test]
    fn breakdown_includes_total() {
        let result = usd().breakdown(dec!(51.00), dec!(15), true);

        assert_eq!(result.tip, dec!(8));
        assert_eq!(result.total, dec!(59.00));
        assert_eq!(result.bill_amount, dec!(51.00));
        assert_eq!(result.tip_percent, dec!(15));
        assert!(result.round_up);
    }

    #[test]
    fn breakdown_rounds_tip_to_fraction_digits() {
        // 17.5% of 33.33 is 5.83275, displayed as 5.83.
        let result = usd().breakdown(dec!(33.33), dec!(17.5), false);

        assert_eq!(result.tip, dec!(5.83));
        assert_eq!(result.total, dec!(39.16));
    }
}
