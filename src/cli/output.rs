//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;

use owo_colors::OwoColorize;
use rust_decimal::Decimal;
use tabled::{Table, Tabled};

use crate::domain::{ArbitrageResult, LegResult, Role};

/// Print a section header.
pub fn section(title: &str) {
    println!();
    println!("{}", title.bold());
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("  {label:<18} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("  {} {message}", "✓".green());
}

/// Print a warning status line.
pub fn warn(message: &str) {
    println!("  {} {message}", "⚠".yellow());
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!("  {} {message}", "✗".red());
}

/// Format a currency amount to two decimals.
pub fn money(value: Decimal) -> String {
    value.round_dp(2).to_string()
}

/// Format a percentage to two decimals.
pub fn percent(value: Decimal) -> String {
    format!("{}%", value.round_dp(2))
}

/// Format a signed amount, colored by sign.
pub fn signed(value: Decimal) -> String {
    let text = money(value);
    if value >= Decimal::ZERO {
        format!("{}", format!("+{text}").green())
    } else {
        format!("{}", text.red())
    }
}

#[derive(Tabled)]
struct LegRow {
    #[tabled(rename = "Leg")]
    index: usize,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Odd")]
    odd: String,
    #[tabled(rename = "Eff odd")]
    effective: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Liability")]
    liability: String,
    #[tabled(rename = "If wins")]
    profit: String,
}

fn leg_row(index: usize, leg: &LegResult) -> LegRow {
    let mut role = match leg.leg.role {
        Role::Back => "back".to_string(),
        Role::Lay => "lay".to_string(),
    };
    if leg.leg.freebet {
        role.push_str(" (freebet)");
    }
    if leg.leg.fixed {
        role.push_str(" (fixed)");
    }

    LegRow {
        index,
        role,
        odd: leg.leg.odd.to_string(),
        effective: leg.effective_odd.round_dp(4).to_string(),
        stake: money(leg.final_stake),
        liability: leg
            .liability
            .map(money)
            .unwrap_or_else(|| "-".to_string()),
        profit: money(leg.outcome_profit),
    }
}

/// Render a full report, as JSON or as tables.
pub fn render(result: &ArbitrageResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
        return Ok(());
    }

    section("Legs");
    let rows: Vec<LegRow> = result
        .legs
        .iter()
        .enumerate()
        .map(|(index, leg)| leg_row(index, leg))
        .collect();
    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }

    section("Summary");
    key_value("Total stake", money(result.total_stake));
    key_value("Guaranteed profit", signed(result.guaranteed_profit));
    key_value("ROI", percent(result.roi_percent));
    key_value("Implied prob sum", result.implied_prob_sum.round_dp(4));
    key_value("Book margin", percent(result.book_margin_percent));
    println!();

    if result.feasible {
        ok("profit locked in across every outcome");
    } else if let Some(loss) = result.worst_case_loss {
        warn(&format!(
            "no guaranteed profit: worst case loses {}",
            money(loss)
        ));
    }

    Ok(())
}
