//! Result aggregation.

use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{ArbitrageResult, LegResult};

use super::feasibility::Feasibility;

/// Package per-leg results and the feasibility report into the final result.
#[must_use]
pub fn summarize(legs: Vec<LegResult>, feasibility: Feasibility) -> ArbitrageResult {
    let total_stake: Decimal = legs.iter().map(|leg| leg.final_stake).sum();
    let guaranteed_profit = legs
        .iter()
        .map(|leg| leg.outcome_profit)
        .min()
        .unwrap_or_default();
    let roi_percent = if total_stake.is_zero() {
        Decimal::ZERO
    } else {
        guaranteed_profit / total_stake * Decimal::ONE_HUNDRED
    };
    let worst_case_loss = if feasibility.feasible {
        None
    } else {
        Some(-guaranteed_profit)
    };

    info!(
        margin = %feasibility.margin_percent,
        profit = %guaranteed_profit,
        total = %total_stake,
        feasible = feasibility.feasible,
        "book summarized"
    );

    ArbitrageResult {
        legs,
        total_stake,
        guaranteed_profit,
        roi_percent,
        implied_prob_sum: feasibility.implied_prob_sum,
        book_margin_percent: feasibility.margin_percent,
        feasible: feasibility.feasible,
        worst_case_loss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Leg;
    use rust_decimal_macros::dec;

    fn leg_result(stake: Decimal, profit: Decimal) -> LegResult {
        LegResult {
            leg: Leg::back(dec!(2.00)),
            effective_odd: dec!(2.00),
            final_stake: stake,
            liability: None,
            outcome_profit: profit,
        }
    }

    fn feasibility(feasible: bool) -> Feasibility {
        Feasibility {
            implied_prob_sum: if feasible { dec!(0.98) } else { dec!(1.11) },
            margin_percent: if feasible { dec!(-2.04) } else { dec!(10) },
            feasible,
        }
    }

    #[test]
    fn guaranteed_profit_is_the_worst_outcome() {
        let result = summarize(
            vec![
                leg_result(dec!(48.78), dec!(2.44)),
                leg_result(dec!(51.22), dec!(2.43)),
            ],
            feasibility(true),
        );

        assert_eq!(result.total_stake, dec!(100));
        assert_eq!(result.guaranteed_profit, dec!(2.43));
        assert_eq!(result.roi_percent, dec!(2.43));
        assert_eq!(result.worst_case_loss, None);
    }

    #[test]
    fn infeasible_book_reports_worst_case_loss() {
        let result = summarize(
            vec![
                leg_result(dec!(50), dec!(-10)),
                leg_result(dec!(50), dec!(-10)),
            ],
            feasibility(false),
        );

        assert!(!result.feasible);
        assert_eq!(result.worst_case_loss, Some(dec!(10)));
        assert_eq!(result.roi_percent, dec!(-10));
    }

    #[test]
    fn zero_stake_yields_zero_roi() {
        let result = summarize(vec![leg_result(dec!(0), dec!(0))], feasibility(true));

        assert_eq!(result.roi_percent, dec!(0));
    }
}
