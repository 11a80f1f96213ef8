//! Monetary and odds types for stake calculations.

use rust_decimal::Decimal;

/// Decimal odd as quoted by a bookmaker or exchange.
pub type Odd = Decimal;

/// Stake amount represented as a Decimal for precision.
pub type Stake = Decimal;

/// Percentage on the 0-100 scale.
pub type Percent = Decimal;
