// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Strategy Engine - Rust Core Library
//!
//! Deterministic analyzer for 1-2 leg options strategies.
//!
//! # Architecture
//!
//! The engine follows a layered design with a pure, stateless core:
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Validated value objects with no external dependencies
//!   - `contract`: Option contracts (strike, expiration, bid/ask quotes)
//!   - `leg`: Buy/sell legs over a contract
//!   - `strategy`: The 1-2 leg strategy aggregate
//!   - `metrics`: Derived metrics and the bounded/unbounded profit-loss type
//!
//! - **Pricing**: Pure computation over domain values
//!   - `calculator`: Premium, max profit/loss, breakeven, margin, return on margin
//!   - `payoff`: Payoff-at-expiration model and sampled curves
//!
//! - **Journal**: Paper-trading records and settlement
//!   - `repository`: Async repository port
//!   - `in_memory`: In-memory adapter for testing and development
//!
//! Every pricing entry point is a pure function of its inputs: no I/O, no
//! shared mutable state, no retained references between calls.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Validated value objects for contracts, legs, and strategies.
pub mod domain;

/// Pricing layer - Strategy metrics and payoff-at-expiration computation.
pub mod pricing;

/// Journal layer - Paper-trading records, settlement, and persistence ports.
pub mod journal;

/// Configuration loading and validation.
pub mod config;

// =============================================================================
// Re-exports
// =============================================================================

pub use domain::contract::{OptionContract, OptionType};
pub use domain::errors::ValidationError;
pub use domain::leg::{LegAction, OptionLeg};
pub use domain::metrics::{ProfitLoss, StrategyMetrics};
pub use domain::strategy::Strategy;
pub use pricing::calculator::{CalculationError, StrategyCalculator};
pub use pricing::payoff::{CurvePoint, PayoffEvaluator, DEFAULT_CURVE_POINTS};
