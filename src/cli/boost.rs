//! Odds-boost dutching solved from a reference stake.
//!
//! The first leg carries the caller's stake; every other leg is solved to
//! match its gross return. `--fix` pins individual legs to a house-imposed
//! stake and takes them out of the solve.

use anyhow::{bail, ensure};
use rust_decimal::Decimal;

use crate::cli::{output, BoostArgs};
use crate::config::EngineConfig;
use crate::domain::{ArbitrageRequest, Leg};
use crate::engine;

pub fn run(args: &BoostArgs, engine_config: &EngineConfig, json: bool) -> anyhow::Result<()> {
    ensure!(
        args.odds.len() >= 2,
        "boost dutching takes at least two odds, got {}",
        args.odds.len()
    );

    let boosts: Vec<Decimal> = match &args.boosts {
        None => vec![Decimal::ZERO; args.odds.len()],
        Some(values) if values.len() == args.odds.len() => values.clone(),
        Some(values) => bail!(
            "expected {} boost values, got {}",
            args.odds.len(),
            values.len()
        ),
    };

    let mut legs: Vec<Leg> = args
        .odds
        .iter()
        .zip(boosts)
        .enumerate()
        .map(|(index, (&odd, boost))| {
            let leg = Leg::back(odd).with_boost(boost);
            if index == 0 {
                leg.with_stake(args.stake)
            } else {
                leg
            }
        })
        .collect();

    for &(index, amount) in &args.fixed {
        ensure!(
            index != 0,
            "leg 0 is the reference leg and cannot be fixed"
        );
        ensure!(
            index < legs.len(),
            "fixed leg index {index} out of range for {} legs",
            legs.len()
        );
        legs[index] = legs[index].clone().with_fixed_stake(amount);
    }

    let request = ArbitrageRequest::new(legs)
        .with_rounding_increment(args.increment.unwrap_or(engine_config.rounding_increment));

    let result = engine::calculate_arbitrage(&request)?;
    output::render(&result, json)
}
