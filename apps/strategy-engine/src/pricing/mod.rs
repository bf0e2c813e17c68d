//! Pricing layer - pure computation over validated strategies.
//!
//! Both entry points are stateless and side-effect-free: the calculator
//! derives [`crate::domain::StrategyMetrics`] and the payoff evaluator models
//! profit/loss at expiration. Neither retains references across calls.

pub mod calculator;
pub mod payoff;

pub use calculator::{CalculationError, StrategyCalculator};
pub use payoff::{CurvePoint, PayoffEvaluator, DEFAULT_CURVE_POINTS};

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a dollar amount to cents, half-up.
///
/// Applied only at the output boundary of each derived metric, matching
/// brokerage display conventions; intermediate arithmetic keeps full
/// precision.
#[must_use]
pub(crate) fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
