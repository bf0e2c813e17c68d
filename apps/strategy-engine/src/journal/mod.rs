//! Paper-trading journal.
//!
//! Records analyzed strategies as open trades and settles them against a
//! manually supplied closing price using a simplified two-outcome model kept
//! consistent with the payoff evaluator.

pub mod in_memory;
pub mod repository;

pub use in_memory::InMemoryTradeJournal;
pub use repository::TradeRepository;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ProfitLoss, Strategy, StrategyMetrics};
use crate::pricing::PayoffEvaluator;

/// Errors from journal operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JournalError {
    /// No trade with the given id.
    #[error("Trade {id} not found")]
    TradeNotFound {
        /// Trade id.
        id: i64,
    },

    /// The trade was already settled.
    #[error("Trade {id} is already closed")]
    AlreadyClosed {
        /// Trade id.
        id: i64,
    },

    /// Closing price must be positive.
    #[error("Closing price {price} must be positive")]
    InvalidClosingPrice {
        /// Supplied closing price.
        price: Decimal,
    },
}

/// Lifecycle status of a journaled trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    /// Position is open.
    Open,
    /// Position was settled against a closing price.
    Closed,
}

impl std::fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// A journaled paper trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Journal-assigned id.
    pub id: i64,
    /// The strategy as analyzed at entry.
    pub strategy: Strategy,
    /// Metrics computed at entry.
    pub metrics: StrategyMetrics,
    /// Date the trade was journaled.
    pub entry_date: NaiveDate,
    /// Open or closed.
    pub status: TradeStatus,
    /// Manually supplied closing price, once closed.
    pub closing_price: Option<Decimal>,
    /// Settled profit/loss, once closed.
    pub final_pnl: Option<Decimal>,
}

/// Settle a trade against a closing price using the two-outcome model.
///
/// Credit positions (net premium strictly positive): a two-leg spread pinned
/// between its sorted strikes realizes -max_loss, otherwise max_profit; a
/// single credit leg realizes its net premium. Debit positions realize
/// max_profit above the recorded breakeven, max_loss below it (the stored
/// journal contract returns max_loss as a positive figure here; kept as-is).
///
/// Where the selected outcome has no finite bound (a single-leg long settling
/// past breakeven), the exact expiration payoff is used instead so settlement
/// stays consistent with the payoff model.
#[must_use]
pub fn final_pnl(strategy: &Strategy, metrics: &StrategyMetrics, closing_price: Decimal) -> Decimal {
    if metrics.net_premium > Decimal::ZERO {
        let strikes = strategy.sorted_strikes();
        if strikes.len() == 2 {
            let pinned = strikes[0] <= closing_price && closing_price <= strikes[1];
            let outcome = if pinned {
                metrics.max_loss.negated()
            } else {
                metrics.max_profit
            };
            return resolve(outcome, strategy, closing_price);
        }
        return metrics.net_premium;
    }

    if let Some(breakeven) = metrics.breakeven_points.first() {
        let outcome = if closing_price > *breakeven {
            metrics.max_profit
        } else {
            metrics.max_loss
        };
        return resolve(outcome, strategy, closing_price);
    }
    metrics.net_premium
}

/// Collapse an outcome to dollars, falling back to the exact payoff when the
/// outcome is unbounded.
fn resolve(outcome: ProfitLoss, strategy: &Strategy, closing_price: Decimal) -> Decimal {
    match outcome {
        ProfitLoss::Bounded(amount) => amount,
        ProfitLoss::Unbounded => PayoffEvaluator::new().payoff_at(strategy, closing_price),
    }
}
