//! The stake-distribution pipeline.
//!
//! One public operation, [`calculate_arbitrage`], wires five stages over a
//! validated request:
//!
//! 1. [`odds`] - normalize each quoted odd for boost and commission
//! 2. [`feasibility`] - sum implied probabilities, report the book margin
//! 3. [`allocator`] - distribute a total or solve from a reference leg
//! 4. [`evaluator`] - realize the profit of every possible outcome
//! 5. [`summary`] - package totals, the profit guarantee, and feasibility
//!
//! The pipeline is a pure function of the request: no state survives a
//! call, and identical requests produce identical results. Interactive
//! callers recomputing per keystroke own debouncing and last-write-wins
//! discarding; the engine needs neither.

pub mod allocator;
pub mod evaluator;
pub mod feasibility;
pub mod odds;
pub mod summary;

pub use feasibility::Feasibility;

use rust_decimal::Decimal;

use crate::domain::{ArbitrageRequest, ArbitrageResult, EngineError, LegResult};

/// Distribute stake across the request's legs and evaluate every outcome.
///
/// Infeasible books are a successful result with `feasible = false`, never
/// an error; only structural input problems fail.
///
/// # Errors
///
/// Returns [`EngineError`] when the request violates a structural
/// invariant: odds at or below 1, out-of-range adjustments, negative
/// stakes, too few legs, or an unresolvable stake basis.
pub fn calculate_arbitrage(request: &ArbitrageRequest) -> Result<ArbitrageResult, EngineError> {
    let basis = request.validate()?;

    // adjustments must leave every leg able to return more than its stake
    for (index, leg) in request.legs.iter().enumerate() {
        if allocator::allocation_denominator(leg) <= Decimal::ZERO {
            return Err(EngineError::InvalidAdjustment {
                index,
                field: "commission_percent",
                value: leg.commission_percent,
            });
        }
    }

    let effective_odds: Vec<Decimal> = request.legs.iter().map(odds::effective_odd).collect();
    let feasibility = feasibility::analyze(&effective_odds);

    let stakes = allocator::allocate(request, basis)?;
    let profits = evaluator::evaluate(&request.legs, &stakes);

    let legs = request
        .legs
        .iter()
        .zip(effective_odds)
        .zip(stakes.iter().zip(profits))
        .map(|((leg, effective_odd), (&final_stake, outcome_profit))| LegResult {
            leg: leg.clone(),
            effective_odd,
            final_stake,
            liability: leg
                .role
                .is_lay()
                .then(|| odds::liability(final_stake, leg.odd)),
            outcome_profit,
        })
        .collect();

    Ok(summary::summarize(legs, feasibility))
}
