//! Command-line interface definitions.
//!
//! Each subcommand is a thin adapter: it builds an
//! [`ArbitrageRequest`](crate::domain::ArbitrageRequest) from its flags and
//! renders the resulting report. All numeric semantics live in
//! [`crate::engine`].

pub mod boost;
pub mod dutch;
pub mod eval;
pub mod hedge;
pub mod output;
pub mod surebet;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Dutchbook - dutching and hedge stake distribution.
#[derive(Parser, Debug)]
#[command(name = "dutchbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "dutchbook.toml", global = true)]
    pub config: PathBuf,

    /// Emit the report as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Two-way surebet calculator
    Surebet(SurebetArgs),

    /// N-way dutching with commission and rounding
    Dutch(DutchArgs),

    /// Back/lay hedge solver
    Hedge(HedgeArgs),

    /// Odds-boost dutching solved from a reference stake
    Boost(BoostArgs),

    /// Evaluate a JSON request from a file or stdin
    Eval(EvalArgs),
}

/// Arguments for the `surebet` subcommand.
#[derive(Parser, Debug)]
pub struct SurebetArgs {
    /// The two quoted odds, comma separated
    #[arg(long, value_delimiter = ',')]
    pub odds: Vec<Decimal>,

    /// Total stake to distribute
    #[arg(long)]
    pub stake: Decimal,

    /// Override the rounding increment
    #[arg(long)]
    pub increment: Option<Decimal>,
}

/// Arguments for the `dutch` subcommand.
#[derive(Parser, Debug)]
pub struct DutchArgs {
    /// Quoted odds, one per outcome, comma separated
    #[arg(long, value_delimiter = ',')]
    pub odds: Vec<Decimal>,

    /// Total stake to distribute
    #[arg(long)]
    pub stake: Decimal,

    /// Commission percent: one value for all legs, or one per leg
    #[arg(long, value_delimiter = ',')]
    pub commission: Option<Vec<Decimal>>,

    /// Override the rounding increment
    #[arg(long)]
    pub increment: Option<Decimal>,
}

/// Arguments for the `hedge` subcommand.
#[derive(Parser, Debug)]
pub struct HedgeArgs {
    /// Quoted odd of the back bet
    #[arg(long)]
    pub back_odd: Decimal,

    /// Stake already placed on the back bet
    #[arg(long)]
    pub back_stake: Decimal,

    /// Quoted lay odd at the exchange
    #[arg(long)]
    pub lay_odd: Decimal,

    /// Exchange commission percent on lay winnings
    #[arg(long)]
    pub commission: Option<Decimal>,

    /// Promotional boost percent on the back odd
    #[arg(long)]
    pub boost: Option<Decimal>,

    /// The back stake is a freebet
    #[arg(long)]
    pub freebet: bool,

    /// Override the rounding increment
    #[arg(long)]
    pub increment: Option<Decimal>,
}

/// Arguments for the `boost` subcommand.
#[derive(Parser, Debug)]
pub struct BoostArgs {
    /// Quoted odds, one per outcome, comma separated
    #[arg(long, value_delimiter = ',')]
    pub odds: Vec<Decimal>,

    /// Boost percents, one per leg; omitted legs default to 0
    #[arg(long, value_delimiter = ',')]
    pub boosts: Option<Vec<Decimal>>,

    /// Stake on the first leg; every other leg is solved from it
    #[arg(long)]
    pub stake: Decimal,

    /// Pin a leg to a fixed stake, as INDEX=AMOUNT (repeatable)
    #[arg(long = "fix", value_parser = parse_fixed_stake)]
    pub fixed: Vec<(usize, Decimal)>,

    /// Override the rounding increment
    #[arg(long)]
    pub increment: Option<Decimal>,
}

/// Arguments for the `eval` subcommand.
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Path to a JSON request; reads stdin when omitted
    pub request: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,
}

/// Parse an `INDEX=AMOUNT` fixed-stake override.
fn parse_fixed_stake(raw: &str) -> Result<(usize, Decimal), String> {
    let (index, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=AMOUNT, got '{raw}'"))?;
    let index: usize = index
        .parse()
        .map_err(|_| format!("invalid leg index '{index}'"))?;
    let amount: Decimal = amount
        .parse()
        .map_err(|_| format!("invalid stake '{amount}'"))?;
    Ok((index, amount))
}
