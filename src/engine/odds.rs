//! Odds adjustment: boost and commission normalization.
//!
//! A quoted odd passes through two adjustments before allocation. The
//! promotional boost scales the profit portion of the odd; commission then
//! shaves the winnings. Boost composes first, commission second. For lay
//! legs the liability is always derived from the raw quoted odd: the
//! exchange charges commission on its winnings share only, never on the
//! liability itself.

use rust_decimal::Decimal;

use crate::domain::{Leg, Odd, Stake};

/// Quoted odd with the promotional boost applied to its profit portion.
#[must_use]
pub fn boosted_odd(leg: &Leg) -> Odd {
    if leg.boost_percent.is_zero() {
        return leg.odd;
    }
    leg.odd + (leg.odd - Decimal::ONE) * leg.boost_percent / Decimal::ONE_HUNDRED
}

/// Effective odd after boost and commission.
#[must_use]
pub fn effective_odd(leg: &Leg) -> Odd {
    boosted_odd(leg) * (Decimal::ONE - commission_fraction(leg))
}

/// Commission expressed as a fraction of winnings.
#[must_use]
pub fn commission_fraction(leg: &Leg) -> Decimal {
    leg.commission_percent / Decimal::ONE_HUNDRED
}

/// Exchange liability of a lay stake at the raw quoted odd.
#[must_use]
pub fn liability(stake: Stake, raw_odd: Odd) -> Stake {
    stake * (raw_odd - Decimal::ONE)
}
