//! Strategy metrics calculator.
//!
//! Derives net premium, max profit/loss, breakeven, margin requirement, and
//! return on margin for a validated 1-2 leg strategy. All arithmetic is
//! `Decimal`; each metric is rounded to cents half-up at its output boundary
//! only.

use rust_decimal::Decimal;
use thiserror::Error;

use super::round_cents;
use crate::domain::{CONTRACT_MULTIPLIER, ProfitLoss, Strategy, StrategyMetrics};

/// Errors from metric calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// Leg count outside the supported 1-2 range.
    ///
    /// `Strategy` construction already enforces this; the calculator
    /// re-checks rather than trust callers.
    #[error("Strategy must have 1-2 legs, got {count}")]
    UnsupportedLegCount {
        /// Number of legs supplied.
        count: usize,
    },

    /// Curve sampling requested with fewer than two points.
    #[error("Payoff curve needs at least 2 points, got {n_points}")]
    CurveResolution {
        /// Requested point count.
        n_points: usize,
    },
}

/// Calculator for options strategy financial metrics.
///
/// Stateless; every call is a pure function of the strategy passed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyCalculator;

impl StrategyCalculator {
    /// Create a new calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Calculate all financial metrics for a strategy.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::UnsupportedLegCount`] if the strategy has
    /// 0 or more than 2 legs.
    pub fn calculate(&self, strategy: &Strategy) -> Result<StrategyMetrics, CalculationError> {
        let legs = strategy.legs();
        if legs.is_empty() || legs.len() > 2 {
            return Err(CalculationError::UnsupportedLegCount { count: legs.len() });
        }

        let net_premium = self.net_premium(strategy);
        let max_profit = self.max_profit(strategy, net_premium);
        let max_loss = self.max_loss(strategy, net_premium);
        let breakeven_points = self.breakeven_points(strategy, net_premium);
        let margin_requirement = Self::margin_requirement(max_loss, net_premium);
        let return_on_margin = Self::return_on_margin(max_profit, margin_requirement);

        Ok(StrategyMetrics {
            net_premium,
            max_profit,
            max_loss,
            breakeven_points,
            margin_requirement,
            return_on_margin,
        })
    }

    /// Net opening premium (credit positive, debit negative), in dollars.
    ///
    /// Buys open at the ask, sells at the bid, each scaled by quantity.
    fn net_premium(&self, strategy: &Strategy) -> Decimal {
        let total: Decimal = strategy.legs().iter().map(|leg| leg.signed_premium()).sum();
        round_cents(total)
    }

    /// Maximum theoretical profit.
    ///
    /// Single-leg buys are modeled with unbounded profit for puts as well as
    /// calls, even though a put's upside is physically capped at strike x 100.
    fn max_profit(&self, strategy: &Strategy, net_premium: Decimal) -> ProfitLoss {
        if let [leg] = strategy.legs() {
            return if leg.action().is_buy() {
                ProfitLoss::Unbounded
            } else {
                ProfitLoss::Bounded(net_premium)
            };
        }
        let spread_value = Self::spread_value(strategy);
        if net_premium >= Decimal::ZERO {
            // Net credit: keep the premium if the spread expires worthless.
            ProfitLoss::Bounded(net_premium)
        } else {
            // Net debit: spread value minus the debit paid.
            ProfitLoss::Bounded(round_cents(spread_value + net_premium))
        }
    }

    /// Maximum theoretical loss (a positive dollar figure when bounded).
    fn max_loss(&self, strategy: &Strategy, net_premium: Decimal) -> ProfitLoss {
        if let [leg] = strategy.legs() {
            return if leg.action().is_buy() {
                ProfitLoss::Bounded(net_premium.abs())
            } else {
                ProfitLoss::Unbounded
            };
        }
        let spread_value = Self::spread_value(strategy);
        if net_premium >= Decimal::ZERO {
            ProfitLoss::Bounded(round_cents(spread_value - net_premium))
        } else {
            ProfitLoss::Bounded(net_premium.abs())
        }
    }

    /// Breakeven underlying price(s) at expiration.
    ///
    /// This model always yields exactly one breakeven: 1-2 legs built this
    /// way never produce a two-sided breakeven.
    ///
    /// UNIT CONVENTION: the single-leg formula adds the whole-contract net
    /// premium (already x quantity, NOT divided by 100) straight to the
    /// per-share strike, while the two-leg formula divides by 100 first.
    /// Changing either would silently re-price previously journaled
    /// positions, so both are kept exactly as stored records expect.
    fn breakeven_points(&self, strategy: &Strategy, net_premium: Decimal) -> Vec<Decimal> {
        if let [leg] = strategy.legs() {
            let strike = leg.contract().strike();
            let premium_amount = net_premium.abs();
            let breakeven = if leg.contract().is_call() {
                strike + premium_amount
            } else {
                strike - premium_amount
            };
            return vec![round_cents(breakeven)];
        }

        let strikes = strategy.sorted_strikes();
        let premium_per_share = net_premium / Decimal::from(CONTRACT_MULTIPLIER);
        let breakeven = if strategy.has_call() {
            strikes[0] + premium_per_share
        } else {
            strikes[1] - premium_per_share
        };
        vec![round_cents(breakeven)]
    }

    /// Margin requirement under the simplified fixed-requirement model.
    ///
    /// Credit positions must cover the full risk (max loss, unbounded for a
    /// naked short); debit positions commit exactly the premium paid.
    fn margin_requirement(max_loss: ProfitLoss, net_premium: Decimal) -> ProfitLoss {
        if net_premium >= Decimal::ZERO {
            max_loss
        } else {
            ProfitLoss::Bounded(net_premium.abs())
        }
    }

    /// Return on margin as a percentage, rounded to cents.
    ///
    /// Only meaningful for fully bounded positions with positive margin;
    /// zero otherwise.
    fn return_on_margin(max_profit: ProfitLoss, margin_requirement: ProfitLoss) -> Decimal {
        match (max_profit, margin_requirement) {
            (ProfitLoss::Bounded(profit), ProfitLoss::Bounded(margin))
                if margin > Decimal::ZERO =>
            {
                round_cents(profit / margin * Decimal::ONE_HUNDRED)
            }
            _ => Decimal::ZERO,
        }
    }

    /// Dollar width of a two-leg spread: (upper - lower) x 100.
    fn spread_value(strategy: &Strategy) -> Decimal {
        let strikes = strategy.sorted_strikes();
        (strikes[1] - strikes[0]) * Decimal::from(CONTRACT_MULTIPLIER)
    }
}
