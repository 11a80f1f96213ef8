//! Derived result types produced by the stake-distribution pipeline.
//!
//! Results are immutable and rebuilt fresh on every calculation. An
//! unprofitable book is still a result: `feasible` goes false and
//! `worst_case_loss` carries the equalized loss, with the full per-leg
//! breakdown intact so callers can render it instead of a pass/fail flag.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::leg::Leg;
use super::money::{Odd, Stake};

/// One leg of a computed distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegResult {
    /// The input leg this row was computed from.
    #[serde(flatten)]
    pub leg: Leg,

    /// Odd after boost and commission adjustments.
    pub effective_odd: Odd,

    /// Stake after allocation and rounding.
    pub final_stake: Stake,

    /// Exchange liability, lay legs only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub liability: Option<Stake>,

    /// Profit realized across the whole set if this leg's outcome occurs.
    pub outcome_profit: Decimal,
}

/// The full distribution report for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageResult {
    /// Per-leg stakes and outcome profits.
    pub legs: Vec<LegResult>,

    /// Sum of all final stakes.
    pub total_stake: Stake,

    /// Worst outcome profit over all legs. Only this can be called guaranteed.
    pub guaranteed_profit: Decimal,

    /// Guaranteed profit over total stake, in percent.
    pub roi_percent: Decimal,

    /// Sum of implied probabilities of the effective odds.
    pub implied_prob_sum: Decimal,

    /// The book's theoretical edge. Negative means an arb exists.
    pub book_margin_percent: Decimal,

    /// Whether a guaranteed-profit distribution exists for this book.
    pub feasible: bool,

    /// Equalized loss when the book is infeasible.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub worst_case_loss: Option<Decimal>,
}

impl ArbitrageResult {
    /// Returns `true` when the worst outcome still turns a profit.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.guaranteed_profit > Decimal::ZERO
    }

    /// Spread between the best and worst outcome profit.
    ///
    /// Non-zero even for feasible books: per-leg rounding keeps outcome
    /// profits within a rounding unit of each other, not identical.
    #[must_use]
    pub fn profit_spread(&self) -> Decimal {
        let profits = self.legs.iter().map(|leg| leg.outcome_profit);
        match (profits.clone().max(), profits.min()) {
            (Some(best), Some(worst)) => best - worst,
            _ => Decimal::ZERO,
        }
    }
}
