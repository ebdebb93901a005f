pub mod calculations;
pub mod currency;
pub mod models;

pub use calculations::tip::{DEFAULT_TIP_PERCENT, TipCalculator, tip_amount};
pub use currency::{CurrencyFormat, SymbolPosition};
pub use models::*;
