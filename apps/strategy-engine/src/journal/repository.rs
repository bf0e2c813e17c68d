//! Trade Repository Port
//!
//! Interface for journal persistence. The core never talks to a store
//! directly; presentation code wires an adapter in.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::{JournalError, TradeRecord};
use crate::domain::{Strategy, StrategyMetrics};

/// Repository for journaled paper trades.
#[async_trait]
pub trait TradeRepository: Send + Sync {
    /// Journal a newly analyzed strategy as an open trade.
    async fn save(
        &self,
        strategy: Strategy,
        metrics: StrategyMetrics,
    ) -> Result<TradeRecord, JournalError>;

    /// Look up a trade by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<TradeRecord>, JournalError>;

    /// All trades, newest first (entry date, then id, descending).
    async fn find_all(&self) -> Result<Vec<TradeRecord>, JournalError>;

    /// Close an open trade against a manually supplied closing price,
    /// settling its final profit/loss.
    async fn close(&self, id: i64, closing_price: Decimal)
    -> Result<TradeRecord, JournalError>;
}
