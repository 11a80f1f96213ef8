//! End-to-end tests of the stake-distribution pipeline.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dutchbook::domain::{ArbitrageRequest, EngineError, Leg};
use dutchbook::engine::calculate_arbitrage;

#[test]
fn two_way_surebet_locks_in_profit() {
    let request = ArbitrageRequest::new(vec![Leg::back(dec!(2.10)), Leg::back(dec!(2.00))])
        .with_total_stake(dec!(100));

    let result = calculate_arbitrage(&request).unwrap();

    assert!(result.feasible);
    assert_eq!(result.implied_prob_sum.round_dp(4), dec!(0.9762));
    assert_eq!(result.book_margin_percent.round_dp(2), dec!(-2.44));
    assert_eq!(result.legs[0].final_stake, dec!(48.78));
    assert_eq!(result.legs[1].final_stake, dec!(51.22));
    assert_eq!(result.guaranteed_profit.round_dp(2), dec!(2.44));
    assert_eq!(result.worst_case_loss, None);
}

#[test]
fn infeasible_book_reports_equalized_loss() {
    let request = ArbitrageRequest::new(vec![Leg::back(dec!(1.80)), Leg::back(dec!(1.80))])
        .with_total_stake(dec!(100));

    let result = calculate_arbitrage(&request).unwrap();

    assert!(!result.feasible);
    assert_eq!(result.book_margin_percent.round_dp(2), dec!(10.00));
    assert_eq!(result.legs[0].final_stake, dec!(50));
    assert_eq!(result.legs[1].final_stake, dec!(50));
    assert_eq!(result.legs[0].outcome_profit, dec!(-10.00));
    assert_eq!(result.legs[1].outcome_profit, dec!(-10.00));
    assert_eq!(result.worst_case_loss, Some(dec!(10.00)));
    assert_eq!(result.roi_percent, dec!(-10));
}

#[test]
fn boosted_reference_leg_solves_the_other_legs() {
    let request = ArbitrageRequest::new(vec![
        Leg::back(dec!(2.00)).with_boost(dec!(25)).with_stake(dec!(100)),
        Leg::back(dec!(5.00)),
    ]);

    let result = calculate_arbitrage(&request).unwrap();

    assert_eq!(result.legs[0].effective_odd, dec!(2.25));
    assert_eq!(result.legs[0].final_stake, dec!(100));
    assert_eq!(result.legs[1].final_stake, dec!(45.00));
    // boosted leg wins: 100 * 1.25 - 45; plain leg wins: 45 * 4 - 100
    assert_eq!(result.legs[0].outcome_profit, dec!(80.00));
    assert_eq!(result.legs[1].outcome_profit, dec!(80.00));
}

#[test]
fn freebet_lay_hedge_equalizes_both_outcomes() {
    let request = ArbitrageRequest::new(vec![
        Leg::back(dec!(5.00)).with_stake(dec!(20)).with_freebet(),
        Leg::lay(dec!(5.20)).with_commission(dec!(6.5)),
    ]);

    let result = calculate_arbitrage(&request).unwrap();

    let lay = &result.legs[1];
    assert_eq!(lay.final_stake, dec!(15.58));
    assert_eq!(lay.liability, Some(lay.final_stake * dec!(4.20)));

    let spread = (result.legs[0].outcome_profit - lay.outcome_profit).abs();
    assert!(
        spread <= request.rounding_increment,
        "outcomes diverge by {spread}"
    );
}

#[test]
fn outcome_profits_stay_within_rounding_slack() {
    let request = ArbitrageRequest::new(vec![
        Leg::back(dec!(2.20)),
        Leg::back(dec!(3.80)),
        Leg::back(dec!(6.00)),
    ])
    .with_total_stake(dec!(200));

    let result = calculate_arbitrage(&request).unwrap();

    let slack = request.rounding_increment * Decimal::from(result.legs.len() as i64);
    assert!(
        result.profit_spread() <= slack,
        "profit spread {} exceeds {slack}",
        result.profit_spread()
    );
}

#[test]
fn total_mode_conserves_stake_across_increments() {
    for increment in [dec!(0.01), dec!(0.05), dec!(1)] {
        let request = ArbitrageRequest::new(vec![
            Leg::back(dec!(2.10)),
            Leg::back(dec!(3.40)),
            Leg::back(dec!(5.00)),
        ])
        .with_total_stake(dec!(100))
        .with_rounding_increment(increment);

        let result = calculate_arbitrage(&request).unwrap();
        let sum: Decimal = result.legs.iter().map(|leg| leg.final_stake).sum();

        assert_eq!(sum, dec!(100), "lost stake at increment {increment}");
        assert_eq!(result.total_stake, dec!(100));
    }
}

#[test]
fn identical_requests_yield_identical_results() {
    let request = ArbitrageRequest::new(vec![
        Leg::back(dec!(2.10)).with_commission(dec!(3)),
        Leg::back(dec!(2.00)),
    ])
    .with_total_stake(dec!(100));

    let first = calculate_arbitrage(&request).unwrap();
    let second = calculate_arbitrage(&request).unwrap();

    assert_eq!(first, second);
}

#[test]
fn raising_an_odd_never_hurts_that_leg() {
    let base = ArbitrageRequest::new(vec![
        Leg::back(dec!(3.00)),
        Leg::back(dec!(3.00)),
        Leg::back(dec!(3.00)),
    ])
    .with_total_stake(dec!(99));
    let raised = ArbitrageRequest::new(vec![
        Leg::back(dec!(3.50)),
        Leg::back(dec!(3.00)),
        Leg::back(dec!(3.00)),
    ])
    .with_total_stake(dec!(99));

    let before = calculate_arbitrage(&base).unwrap();
    let after = calculate_arbitrage(&raised).unwrap();

    assert!(after.legs[0].outcome_profit >= before.legs[0].outcome_profit);
    assert!(after.book_margin_percent <= before.book_margin_percent);
}

#[test]
fn freebet_profit_matches_the_boundary_identity() {
    let request = ArbitrageRequest::new(vec![
        Leg::back(dec!(5.00)).with_stake(dec!(20)).with_freebet(),
        Leg::back(dec!(2.00)),
    ]);

    let result = calculate_arbitrage(&request).unwrap();

    let freebet = &result.legs[0];
    let expected = freebet.final_stake * (freebet.effective_odd - Decimal::ONE)
        - (result.total_stake - freebet.final_stake);
    assert_eq!(freebet.outcome_profit, expected);
}

#[test]
fn fixed_legs_keep_their_stake_and_the_total() {
    let request = ArbitrageRequest::new(vec![
        Leg::back(dec!(2.00)),
        Leg::back(dec!(3.00)).with_fixed_stake(dec!(10)),
        Leg::back(dec!(4.00)),
    ])
    .with_total_stake(dec!(100));

    let result = calculate_arbitrage(&request).unwrap();

    assert_eq!(result.legs[1].final_stake, dec!(10));
    assert_eq!(result.total_stake, dec!(100));
    // the two open legs still equalize with each other
    let spread = (result.legs[0].outcome_profit - result.legs[2].outcome_profit).abs();
    assert!(spread <= request.rounding_increment * dec!(2));
}

#[test]
fn structural_errors_surface_as_typed_failures() {
    let bad_odd = ArbitrageRequest::new(vec![Leg::back(dec!(0.95)), Leg::back(dec!(2.00))])
        .with_total_stake(dec!(100));
    assert!(matches!(
        calculate_arbitrage(&bad_odd).unwrap_err(),
        EngineError::InvalidOdd { index: 0, .. }
    ));

    let no_basis = ArbitrageRequest::new(vec![Leg::back(dec!(2.10)), Leg::back(dec!(2.00))]);
    assert!(matches!(
        calculate_arbitrage(&no_basis).unwrap_err(),
        EngineError::AmbiguousStakeBasis { .. }
    ));
}

#[test]
fn request_roundtrips_through_json() {
    let request = ArbitrageRequest::new(vec![
        Leg::back(dec!(2.10))
            .with_commission(dec!(2))
            .with_stake(dec!(50)),
        Leg::lay(dec!(2.30)).with_commission(dec!(5)),
    ]);

    let json = serde_json::to_string(&request).unwrap();
    let back: ArbitrageRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(back, request);
    assert_eq!(
        calculate_arbitrage(&back).unwrap(),
        calculate_arbitrage(&request).unwrap()
    );
}
