//! N-way dutching with commission and rounding.

use anyhow::{bail, ensure};
use rust_decimal::Decimal;

use crate::cli::{output, DutchArgs};
use crate::config::EngineConfig;
use crate::domain::{ArbitrageRequest, Leg};
use crate::engine;

pub fn run(args: &DutchArgs, engine_config: &EngineConfig, json: bool) -> anyhow::Result<()> {
    ensure!(
        args.odds.len() >= 2,
        "dutching takes at least two odds, got {}",
        args.odds.len()
    );

    let commissions: Vec<Decimal> = match &args.commission {
        None => vec![engine_config.default_commission; args.odds.len()],
        Some(values) if values.len() == 1 => vec![values[0]; args.odds.len()],
        Some(values) if values.len() == args.odds.len() => values.clone(),
        Some(values) => bail!(
            "expected 1 or {} commission values, got {}",
            args.odds.len(),
            values.len()
        ),
    };

    let legs = args
        .odds
        .iter()
        .zip(commissions)
        .map(|(&odd, commission)| Leg::back(odd).with_commission(commission))
        .collect();
    let request = ArbitrageRequest::new(legs)
        .with_total_stake(args.stake)
        .with_rounding_increment(args.increment.unwrap_or(engine_config.rounding_increment));

    let result = engine::calculate_arbitrage(&request)?;
    output::render(&result, json)
}
