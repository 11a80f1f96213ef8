//! Stake allocation across legs.
//!
//! Both allocation modes reduce to one rule: per-outcome profit is equal
//! across the set exactly when every non-fixed leg has the same gross
//! return `stake * denominator`, where the denominator is what a winning
//! stake multiplies into:
//!
//! - cash back leg: the effective odd
//! - freebet back leg: the effective odd minus 1 (the stake never returns)
//! - lay leg: the raw odd minus the commission fraction
//!
//! The cash-back case is the familiar dutching weight `1/odd`; the freebet
//! and lay cases are the hedge formulas solved for stake.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::domain::{ArbitrageRequest, EngineError, Leg, Role, Stake, StakeBasis};

use super::odds::{commission_fraction, effective_odd};

/// The multiplier that turns a winning stake into its gross return.
#[must_use]
pub fn allocation_denominator(leg: &Leg) -> Decimal {
    match leg.role {
        Role::Lay => leg.odd - commission_fraction(leg),
        Role::Back if leg.freebet => effective_odd(leg) - Decimal::ONE,
        Role::Back => effective_odd(leg),
    }
}

/// Round a computed stake onto the increment grid, half away from zero.
#[must_use]
pub fn round_to_increment(stake: Stake, increment: Decimal) -> Stake {
    (stake / increment).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        * increment
}

/// Compute the stake for every leg of a validated request.
///
/// Caller-supplied stakes (fixed legs, the reference leg) pass through
/// unrounded; only computed stakes land on the increment grid. In total
/// mode the last allocated leg absorbs the rounding residual so the stakes
/// sum to the requested total exactly.
///
/// # Errors
///
/// Returns `InsufficientLegs` when no allocatable leg remains after fixed
/// legs are removed, and `AmbiguousStakeBasis` if the reference index does
/// not carry a stake (the request validator rules both out up front).
pub fn allocate(request: &ArbitrageRequest, basis: StakeBasis) -> Result<Vec<Stake>, EngineError> {
    match basis {
        StakeBasis::Total(total) => allocate_total(request, total),
        StakeBasis::Reference(index) => allocate_reference(request, index),
    }
}

fn allocate_total(request: &ArbitrageRequest, total: Stake) -> Result<Vec<Stake>, EngineError> {
    let increment = request.rounding_increment;

    let fixed_sum: Decimal = request
        .legs
        .iter()
        .filter(|leg| leg.fixed)
        .filter_map(|leg| leg.stake)
        .sum();
    let allocatable = total - fixed_sum;

    let open: Vec<usize> = request
        .legs
        .iter()
        .enumerate()
        .filter(|(_, leg)| !leg.fixed)
        .map(|(index, _)| index)
        .collect();
    if open.is_empty() {
        return Err(EngineError::InsufficientLegs {
            required: 1,
            actual: 0,
        });
    }

    let weight_sum: Decimal = open
        .iter()
        .map(|&index| Decimal::ONE / allocation_denominator(&request.legs[index]))
        .sum();

    let mut stakes: Vec<Stake> = request
        .legs
        .iter()
        .map(|leg| leg.stake.unwrap_or_default())
        .collect();

    let mut allocated = Decimal::ZERO;
    for (position, &index) in open.iter().enumerate() {
        let stake = if position + 1 == open.len() {
            // last open leg absorbs the rounding residual
            allocatable - allocated
        } else {
            let weight = Decimal::ONE / allocation_denominator(&request.legs[index]);
            round_to_increment(allocatable * weight / weight_sum, increment)
        };
        stakes[index] = stake;
        allocated += stake;
    }

    debug!(
        total = %total,
        fixed = %fixed_sum,
        open = open.len(),
        "distributed total stake"
    );

    Ok(stakes)
}

fn allocate_reference(
    request: &ArbitrageRequest,
    reference: usize,
) -> Result<Vec<Stake>, EngineError> {
    let increment = request.rounding_increment;

    let Some(reference_stake) = request.legs[reference].stake else {
        return Err(EngineError::AmbiguousStakeBasis {
            reason: format!("reference leg {reference} carries no stake"),
        });
    };
    let target = reference_stake * allocation_denominator(&request.legs[reference]);

    let stakes = request
        .legs
        .iter()
        .enumerate()
        .map(|(index, leg)| {
            if index == reference {
                reference_stake
            } else if leg.fixed {
                leg.stake.unwrap_or_default()
            } else {
                round_to_increment(target / allocation_denominator(leg), increment)
            }
        })
        .collect();

    debug!(
        reference,
        target = %target,
        "solved stakes from reference leg"
    );

    Ok(stakes)
}
