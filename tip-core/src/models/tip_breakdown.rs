use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One computed gratuity, with the inputs that produced it.
///
/// Recomputed in full on every invocation; carries no identity and is
/// never cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipBreakdown {
    /// Pre-tip bill total as supplied by the caller.
    pub bill_amount: Decimal,

    /// Tip percentage applied (e.g. 15 for 15%).
    pub tip_percent: Decimal,

    /// Whether the tip was raised to the next whole currency unit.
    pub round_up: bool,

    /// Computed tip, rounded to the currency's fraction digits.
    pub tip: Decimal,

    /// Bill plus tip.
    pub total: Decimal,
}
