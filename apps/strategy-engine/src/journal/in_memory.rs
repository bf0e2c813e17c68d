//! In-memory trade journal for testing and development.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use super::repository::TradeRepository;
use super::{JournalError, TradeRecord, TradeStatus, final_pnl};
use crate::domain::{Strategy, StrategyMetrics};

/// In-memory implementation of [`TradeRepository`].
///
/// Suitable for testing and development. Not for production use.
// Note: SQLite-backed adapter will be added when durable journal storage is
// migrated; the in-memory repository is sufficient until then.
#[derive(Debug, Default)]
pub struct InMemoryTradeJournal {
    trades: RwLock<HashMap<i64, TradeRecord>>,
    next_id: AtomicI64,
}

impl InMemoryTradeJournal {
    /// Create a new empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self {
            trades: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of journaled trades.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.read().unwrap().len()
    }

    /// Check if the journal is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trades.read().unwrap().is_empty()
    }

    /// Clear all trades (for test setup).
    pub fn clear(&self) {
        self.trades.write().unwrap().clear();
    }
}

#[async_trait]
impl TradeRepository for InMemoryTradeJournal {
    async fn save(
        &self,
        strategy: Strategy,
        metrics: StrategyMetrics,
    ) -> Result<TradeRecord, JournalError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = TradeRecord {
            id,
            strategy,
            metrics,
            entry_date: Utc::now().date_naive(),
            status: TradeStatus::Open,
            closing_price: None,
            final_pnl: None,
        };
        self.trades.write().unwrap().insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TradeRecord>, JournalError> {
        Ok(self.trades.read().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<TradeRecord>, JournalError> {
        let trades = self.trades.read().unwrap();
        let mut all: Vec<TradeRecord> = trades.values().cloned().collect();
        all.sort_by(|a, b| (b.entry_date, b.id).cmp(&(a.entry_date, a.id)));
        Ok(all)
    }

    async fn close(
        &self,
        id: i64,
        closing_price: Decimal,
    ) -> Result<TradeRecord, JournalError> {
        if closing_price <= Decimal::ZERO {
            return Err(JournalError::InvalidClosingPrice {
                price: closing_price,
            });
        }

        let mut trades = self.trades.write().unwrap();
        let record = trades
            .get_mut(&id)
            .ok_or(JournalError::TradeNotFound { id })?;
        if record.status == TradeStatus::Closed {
            return Err(JournalError::AlreadyClosed { id });
        }

        record.status = TradeStatus::Closed;
        record.closing_price = Some(closing_price);
        record.final_pnl = Some(final_pnl(&record.strategy, &record.metrics, closing_price));
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LegAction, OptionContract, OptionLeg, OptionType};
    use crate::pricing::StrategyCalculator;
    use rust_decimal_macros::dec;

    fn bull_call_spread() -> (Strategy, StrategyMetrics) {
        let expiry = chrono::NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        let long = OptionContract::new(
            "AAPL250117C145",
            dec!(145),
            expiry,
            OptionType::Call,
            dec!(12.00),
            dec!(12.20),
        )
        .unwrap();
        let short = OptionContract::new(
            "AAPL250117C155",
            dec!(155),
            expiry,
            OptionType::Call,
            dec!(6.80),
            dec!(7.00),
        )
        .unwrap();
        let strategy = Strategy::new(
            vec![
                OptionLeg::new(LegAction::Buy, long, 1).unwrap(),
                OptionLeg::new(LegAction::Sell, short, 1).unwrap(),
            ],
            "AAPL",
            Utc::now(),
        )
        .unwrap();
        let metrics = StrategyCalculator::new().calculate(&strategy).unwrap();
        (strategy, metrics)
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids_and_opens_trade() {
        let journal = InMemoryTradeJournal::new();
        let (s, m) = bull_call_spread();

        let first = journal.save(s.clone(), m.clone()).await.unwrap();
        let second = journal.save(s, m).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, TradeStatus::Open);
        assert!(first.final_pnl.is_none());
        assert_eq!(journal.len(), 2);
    }

    #[tokio::test]
    async fn find_all_returns_newest_first() {
        let journal = InMemoryTradeJournal::new();
        let (s, m) = bull_call_spread();
        journal.save(s.clone(), m.clone()).await.unwrap();
        journal.save(s, m).await.unwrap();

        let all = journal.find_all().await.unwrap();
        assert_eq!(all[0].id, 2);
        assert_eq!(all[1].id, 1);
    }

    #[tokio::test]
    async fn close_settles_final_pnl() {
        let journal = InMemoryTradeJournal::new();
        let (s, m) = bull_call_spread();
        let trade = journal.save(s, m).await.unwrap();

        let closed = journal.close(trade.id, dec!(160)).await.unwrap();
        assert_eq!(closed.status, TradeStatus::Closed);
        assert_eq!(closed.closing_price, Some(dec!(160)));
        assert_eq!(closed.final_pnl, Some(dec!(994.60)));

        let reread = journal.find_by_id(trade.id).await.unwrap().unwrap();
        assert_eq!(reread, closed);
    }

    #[tokio::test]
    async fn close_rejects_unknown_and_double_close() {
        let journal = InMemoryTradeJournal::new();
        let (s, m) = bull_call_spread();
        let trade = journal.save(s, m).await.unwrap();

        assert_eq!(
            journal.close(42, dec!(150)).await.unwrap_err(),
            JournalError::TradeNotFound { id: 42 }
        );

        journal.close(trade.id, dec!(150)).await.unwrap();
        assert_eq!(
            journal.close(trade.id, dec!(150)).await.unwrap_err(),
            JournalError::AlreadyClosed { id: trade.id }
        );
    }

    #[tokio::test]
    async fn close_rejects_non_positive_price() {
        let journal = InMemoryTradeJournal::new();
        assert_eq!(
            journal.close(1, dec!(0)).await.unwrap_err(),
            JournalError::InvalidClosingPrice { price: dec!(0) }
        );
    }
}
