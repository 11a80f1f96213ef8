//! Per-outcome profit evaluation.
//!
//! One scenario per leg: the profit realized across the whole set if that
//! leg's outcome occurs. For a lay leg the scenario is the one where the
//! back leg it hedges loses. Scenario profit is the plain sum of every
//! leg's P/L in that scenario, which keeps the freebet and liability
//! special cases local to a single match arm.

use rust_decimal::Decimal;

use crate::domain::{Leg, Role, Stake};

use super::odds::{commission_fraction, effective_odd, liability};

/// Index of the back leg that lay legs hedge: the first back leg in the set.
#[must_use]
pub fn paired_back_index(legs: &[Leg]) -> Option<usize> {
    legs.iter().position(|leg| !leg.role.is_lay())
}

/// Net winnings of a leg in the scenario where it wins.
fn win_net(leg: &Leg, stake: Stake) -> Decimal {
    match leg.role {
        Role::Lay => stake * (Decimal::ONE - commission_fraction(leg)),
        // cash and freebet backs net the same on a win; they differ on loss
        Role::Back => stake * (effective_odd(leg) - Decimal::ONE),
    }
}

/// P/L of a leg in the scenario where the leg at `winner` wins.
fn leg_profit(
    index: usize,
    leg: &Leg,
    stake: Stake,
    winner: usize,
    paired_back: Option<usize>,
) -> Decimal {
    if index == winner {
        return win_net(leg, stake);
    }
    match leg.role {
        Role::Back if leg.freebet => Decimal::ZERO,
        Role::Back => -stake,
        // the lay loses only when its hedged back leg wins
        Role::Lay if Some(winner) == paired_back => -liability(stake, leg.odd),
        Role::Lay => win_net(leg, stake),
    }
}

/// Compute the realized profit of every scenario.
///
/// `stakes` must be the allocator's output, one entry per leg.
#[must_use]
pub fn evaluate(legs: &[Leg], stakes: &[Stake]) -> Vec<Decimal> {
    let paired_back = paired_back_index(legs);

    (0..legs.len())
        .map(|winner| {
            legs.iter()
                .zip(stakes)
                .enumerate()
                .map(|(index, (leg, &stake))| {
                    leg_profit(index, leg, stake, winner, paired_back)
                })
                .sum()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn cash_back_profit_is_payout_minus_total() {
        let legs = vec![Leg::back(dec!(2.10)), Leg::back(dec!(2.00))];
        let stakes = vec![dec!(48.78), dec!(51.22)];

        let profits = evaluate(&legs, &stakes);

        // 48.78 * 2.10 - 100 and 51.22 * 2.00 - 100
        assert_eq!(profits[0], dec!(2.4380));
        assert_eq!(profits[1], dec!(2.44));
    }

    #[test]
    fn freebet_stake_is_never_at_risk() {
        let legs = vec![
            Leg::back(dec!(5.00)).with_freebet(),
            Leg::back(dec!(2.00)),
        ];
        let stakes = vec![dec!(20), dec!(40)];

        let profits = evaluate(&legs, &stakes);

        // freebet wins: 20 * 4 - 40 at risk elsewhere
        assert_eq!(profits[0], dec!(40));
        // cash leg wins: 40 * 1 - nothing lost on the freebet
        assert_eq!(profits[1], dec!(40));
    }

    #[test]
    fn lay_pays_liability_when_the_back_wins() {
        let legs = vec![
            Leg::back(dec!(5.00)).with_freebet(),
            Leg::lay(dec!(5.20)).with_commission(dec!(6.5)),
        ];
        let stakes = vec![dec!(20), dec!(15.58)];

        let profits = evaluate(&legs, &stakes);

        // back wins: 20 * 4 - 15.58 * 4.20
        assert_eq!(profits[0], dec!(14.5640));
        // back loses: 15.58 * 0.935, freebet stake not at risk
        assert_eq!(profits[1], dec!(14.5673));
    }

    #[test]
    fn cash_back_lay_hedge_matches_the_exchange_formula() {
        let legs = vec![
            Leg::back(dec!(3.00)),
            Leg::lay(dec!(3.10)).with_commission(dec!(5)),
        ];
        // lay stake = 100 * 3.00 / (3.10 - 0.05)
        let stakes = vec![dec!(100), dec!(98.36)];

        let profits = evaluate(&legs, &stakes);

        // back wins: 100 * 2 - 98.36 * 2.10
        assert_eq!(profits[0], dec!(-6.5560));
        // back loses: 98.36 * 0.95 - 100
        assert_eq!(profits[1], dec!(-6.5580));
    }
}
