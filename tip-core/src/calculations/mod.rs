//! Gratuity calculation modules.
//!
//! This module provides the tip computation logic: a pure arithmetic
//! function plus a small calculator that renders results with the
//! active currency format.

pub mod tip;

pub use tip::{DEFAULT_TIP_PERCENT, TipCalculator, tip_amount};
