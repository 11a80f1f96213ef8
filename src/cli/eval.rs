//! Evaluate a JSON request from a file or stdin.
//!
//! The scripting surface: a full [`ArbitrageRequest`](crate::domain::ArbitrageRequest)
//! comes in as JSON, the full report goes out as JSON.

use std::io::Read;

use anyhow::Context;

use crate::domain::ArbitrageRequest;
use crate::engine;

use super::EvalArgs;

pub fn run(args: &EvalArgs) -> anyhow::Result<()> {
    let raw = match &args.request {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading request from stdin")?;
            buffer
        }
    };

    let request: ArbitrageRequest = serde_json::from_str(&raw).context("parsing request JSON")?;
    let result = engine::calculate_arbitrage(&request)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{rendered}");

    Ok(())
}
