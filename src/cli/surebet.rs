//! Two-way surebet calculator.

use anyhow::ensure;

use crate::cli::{output, SurebetArgs};
use crate::config::EngineConfig;
use crate::domain::{ArbitrageRequest, Leg};
use crate::engine;

pub fn run(args: &SurebetArgs, engine_config: &EngineConfig, json: bool) -> anyhow::Result<()> {
    ensure!(
        args.odds.len() == 2,
        "surebet takes exactly two odds, got {}",
        args.odds.len()
    );

    let legs = args.odds.iter().map(|&odd| Leg::back(odd)).collect();
    let request = ArbitrageRequest::new(legs)
        .with_total_stake(args.stake)
        .with_rounding_increment(args.increment.unwrap_or(engine_config.rounding_increment));

    let result = engine::calculate_arbitrage(&request)?;
    output::render(&result, json)
}
