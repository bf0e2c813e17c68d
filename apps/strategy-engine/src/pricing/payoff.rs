//! Payoff-at-expiration model.
//!
//! Evaluates a strategy's profit/loss if the underlying settles at a given
//! price, and samples the payoff function over a price range for plotting.
//! Each point is an independent pure evaluation; callers may parallelize the
//! sweep freely.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::CalculationError;
use super::round_cents;
use crate::domain::{CONTRACT_MULTIPLIER, OptionLeg, Strategy};

/// Default number of samples for a payoff curve (51 gives a smooth plot over
/// the +-50% range with a point exactly at the reference price).
pub const DEFAULT_CURVE_POINTS: usize = 51;

/// One sampled point of a payoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Hypothetical underlying settlement price.
    pub price: Decimal,
    /// Strategy profit/loss at that price, in dollars.
    pub payoff: Decimal,
}

/// Evaluator for payoff at expiration.
///
/// Stateless; uses the same contract multiplier and decimal arithmetic as the
/// metrics calculator so sampled extremes agree with max profit/loss.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayoffEvaluator;

impl PayoffEvaluator {
    /// Create a new evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Total strategy profit/loss if the underlying settles at `price`.
    #[must_use]
    pub fn payoff_at(&self, strategy: &Strategy, price: Decimal) -> Decimal {
        let total: Decimal = strategy
            .legs()
            .iter()
            .map(|leg| Self::leg_payoff(leg, price))
            .sum();
        round_cents(total)
    }

    /// Sample the payoff curve over `[0.5 x reference, 1.5 x reference]` at
    /// the default resolution, both ends inclusive.
    #[must_use]
    pub fn sample_curve(&self, strategy: &Strategy, reference_price: Decimal) -> Vec<CurvePoint> {
        self.sample_points(strategy, reference_price, DEFAULT_CURVE_POINTS)
    }

    /// Sample the payoff curve at an explicit resolution.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::CurveResolution`] if `n_points < 2`: the
    /// range is inclusive of both ends, so at least two points are needed.
    pub fn sample_curve_with(
        &self,
        strategy: &Strategy,
        reference_price: Decimal,
        n_points: usize,
    ) -> Result<Vec<CurvePoint>, CalculationError> {
        if n_points < 2 {
            return Err(CalculationError::CurveResolution { n_points });
        }
        Ok(self.sample_points(strategy, reference_price, n_points))
    }

    /// Evenly spaced sweep from `0.5 x reference` to `1.5 x reference`.
    fn sample_points(
        &self,
        strategy: &Strategy,
        reference_price: Decimal,
        n_points: usize,
    ) -> Vec<CurvePoint> {
        let min_price = reference_price * Decimal::new(5, 1);
        let max_price = reference_price * Decimal::new(15, 1);
        let step = (max_price - min_price) / Decimal::from(n_points - 1);

        (0..n_points)
            .map(|i| {
                let price = min_price + step * Decimal::from(i);
                CurvePoint {
                    price,
                    payoff: self.payoff_at(strategy, price),
                }
            })
            .collect()
    }

    /// Per-leg payoff at a settlement price.
    ///
    /// Intrinsic value settles per share x 100 x quantity; the opening
    /// premium (ask paid for a buy, bid received for a sell) is in the same
    /// whole-contract dollar units as net premium, deliberately not x 100.
    fn leg_payoff(leg: &OptionLeg, price: Decimal) -> Decimal {
        let quantity = Decimal::from(leg.quantity());
        let settlement =
            leg.contract().intrinsic_value(price) * Decimal::from(CONTRACT_MULTIPLIER) * quantity;
        let premium = leg.open_price() * quantity;
        if leg.action().is_buy() {
            settlement - premium
        } else {
            premium - settlement
        }
    }
}
