//! Domain validation errors for arbitrage requests.
//!
//! Every variant here is recoverable and surfaced directly to the caller.
//! An unprofitable book is not an error: it comes back as a successful
//! [`ArbitrageResult`](super::ArbitrageResult) with `feasible = false`.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned when a request violates the engine's invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A quoted odd at or below even money cannot be distributed over.
    #[error("leg {index}: odd must be greater than 1, got {odd}")]
    InvalidOdd {
        /// Position of the offending leg in the request.
        index: usize,
        /// The invalid odd that was supplied.
        odd: Decimal,
    },

    /// A boost or commission outside its valid range.
    #[error("leg {index}: {field} out of range, got {value}")]
    InvalidAdjustment {
        /// Position of the offending leg in the request.
        index: usize,
        /// Which adjustment was rejected.
        field: &'static str,
        /// The out-of-range value.
        value: Decimal,
    },

    /// A supplied stake was negative, or the total is below the fixed sum.
    #[error("invalid stake for {place}: {stake}")]
    InvalidStake {
        /// Where the stake was supplied ("leg N" or "total").
        place: String,
        /// The rejected stake.
        stake: Decimal,
    },

    /// The rounding increment must be positive.
    #[error("rounding increment must be positive, got {increment}")]
    InvalidIncrement {
        /// The rejected increment.
        increment: Decimal,
    },

    /// Too few legs overall, or no allocatable leg left after fixed legs.
    #[error("at least {required} legs required, got {actual}")]
    InsufficientLegs {
        /// Minimum number of legs for the failed operation.
        required: usize,
        /// Number of legs actually available.
        actual: usize,
    },

    /// Neither a total stake nor exactly one reference stake was resolvable.
    #[error("cannot resolve a stake basis: {reason}")]
    AmbiguousStakeBasis {
        /// Human-readable explanation of the conflict.
        reason: String,
    },
}
