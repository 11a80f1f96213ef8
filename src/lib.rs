//! Dutchbook - unified dutching and hedge stake distribution.
//!
//! This crate distributes stake across a set of mutually exclusive betting
//! outcomes so the profit is equal (or the guarantee explicit) no matter
//! which outcome occurs, under commission, promotional odds boosts,
//! freebets, fixed-stake legs, and exchange lay hedges.
//!
//! # Architecture
//!
//! One pure pipeline behind one operation,
//! [`engine::calculate_arbitrage`]:
//!
//! - **`engine::odds`** - effective odds (boost then commission)
//! - **`engine::feasibility`** - implied probability sum and book margin
//! - **`engine::allocator`** - total-stake and reference-leg allocation
//! - **`engine::evaluator`** - per-outcome realized profit
//! - **`engine::summary`** - the final report
//!
//! The calculator front-ends (surebet, dutching, back/lay hedge, odds
//! boost) are thin adapters in [`cli`] that build a request and render the
//! report; none of them carries its own math.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Legs, requests, results, and their validation
//! - [`engine`] - The stake-distribution pipeline
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line adapters over the engine
//!
//! # Example
//!
//! ```
//! use dutchbook::domain::{ArbitrageRequest, Leg};
//! use dutchbook::engine::calculate_arbitrage;
//! use rust_decimal_macros::dec;
//!
//! let request = ArbitrageRequest::new(vec![
//!     Leg::back(dec!(2.10)),
//!     Leg::back(dec!(2.00)),
//! ])
//! .with_total_stake(dec!(100));
//!
//! let result = calculate_arbitrage(&request).unwrap();
//! assert!(result.feasible);
//! assert_eq!(result.total_stake, dec!(100));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
