//! Book feasibility: implied probabilities and margin.
//!
//! Runs before allocation so the caller learns the book margin and the
//! worst-case loss even when no guaranteed-profit distribution exists.

use rust_decimal::Decimal;
use serde::Serialize;

/// Book-level feasibility computed from a set of effective odds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Feasibility {
    /// Sum of implied probabilities, `Σ 1/odd`.
    pub implied_prob_sum: Decimal,
    /// The book's theoretical edge, `(1 - 1/Σ) * 100`. Negative is an arb.
    pub margin_percent: Decimal,
    /// Whether a guaranteed-profit distribution exists.
    pub feasible: bool,
}

/// Analyze a set of effective odds. The slice must be non-empty with every
/// odd positive; the pipeline validates both before calling in.
#[must_use]
pub fn analyze(effective_odds: &[Decimal]) -> Feasibility {
    let implied_prob_sum: Decimal = effective_odds.iter().map(|odd| Decimal::ONE / odd).sum();
    let margin_percent = (Decimal::ONE - Decimal::ONE / implied_prob_sum) * Decimal::ONE_HUNDRED;

    Feasibility {
        implied_prob_sum,
        margin_percent,
        feasible: implied_prob_sum < Decimal::ONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn underround_book_is_feasible() {
        let report = analyze(&[dec!(2.10), dec!(2.00)]);

        assert!(report.feasible);
        assert_eq!(report.implied_prob_sum.round_dp(4), dec!(0.9762));
        assert_eq!(report.margin_percent.round_dp(2), dec!(-2.44));
    }

    #[test]
    fn overround_book_is_infeasible() {
        let report = analyze(&[dec!(1.80), dec!(1.80)]);

        assert!(!report.feasible);
        assert_eq!(report.implied_prob_sum.round_dp(4), dec!(1.1111));
        assert_eq!(report.margin_percent.round_dp(2), dec!(10.00));
    }

    #[test]
    fn fair_book_has_zero_margin() {
        let report = analyze(&[dec!(2.00), dec!(2.00)]);

        assert!(!report.feasible);
        assert_eq!(report.margin_percent, dec!(0));
    }
}
