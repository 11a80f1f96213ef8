//! Back/lay hedge solver.
//!
//! The back stake is already down; the lay stake is what gets solved. The
//! engine's reference-leg mode does exactly that once the back leg carries
//! its stake.

use crate::cli::{output, HedgeArgs};
use crate::config::EngineConfig;
use crate::domain::{ArbitrageRequest, Leg};
use crate::engine;

pub fn run(args: &HedgeArgs, engine_config: &EngineConfig, json: bool) -> anyhow::Result<()> {
    let mut back = Leg::back(args.back_odd).with_stake(args.back_stake);
    if let Some(boost) = args.boost {
        back = back.with_boost(boost);
    }
    if args.freebet {
        back = back.with_freebet();
    }

    let lay = Leg::lay(args.lay_odd)
        .with_commission(args.commission.unwrap_or(engine_config.default_commission));

    let request = ArbitrageRequest::new(vec![back, lay])
        .with_rounding_increment(args.increment.unwrap_or(engine_config.rounding_increment));

    let result = engine::calculate_arbitrage(&request)?;
    output::render(&result, json)
}
