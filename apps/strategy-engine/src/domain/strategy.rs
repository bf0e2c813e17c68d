//! Strategy Aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;
use super::leg::OptionLeg;

/// Maximum number of legs this model supports.
///
/// More legs require a combinatorial payoff/margin treatment that the
/// two-outcome spread math here does not cover.
pub const MAX_LEGS: usize = 2;

/// An options strategy of 1-2 legs on a single underlying.
///
/// Immutable after construction. Leg order is significant only for display;
/// calculations sort by strike where strike order matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    /// The legs, in display order.
    legs: Vec<OptionLeg>,
    /// Underlying symbol.
    underlying_symbol: String,
    /// Construction timestamp.
    created_at: DateTime<Utc>,
}

impl Strategy {
    /// Create a new strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the underlying symbol is empty or the
    /// leg count is outside `1..=2`.
    pub fn new(
        legs: Vec<OptionLeg>,
        underlying_symbol: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let underlying_symbol = underlying_symbol.into();
        if underlying_symbol.is_empty() {
            return Err(ValidationError::invalid_value(
                "underlying_symbol",
                "underlying symbol cannot be empty",
            ));
        }
        if legs.is_empty() || legs.len() > MAX_LEGS {
            return Err(ValidationError::LegCountOutOfRange { count: legs.len() });
        }
        Ok(Self {
            legs,
            underlying_symbol,
            created_at,
        })
    }

    /// Get the legs in display order.
    #[must_use]
    pub fn legs(&self) -> &[OptionLeg] {
        &self.legs
    }

    /// Get the underlying symbol.
    #[must_use]
    pub fn underlying_symbol(&self) -> &str {
        &self.underlying_symbol
    }

    /// Get the construction timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of legs.
    #[must_use]
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Check if this is a two-leg spread.
    #[must_use]
    pub fn is_spread(&self) -> bool {
        self.legs.len() == 2
    }

    /// Strikes sorted ascending.
    #[must_use]
    pub fn sorted_strikes(&self) -> Vec<Decimal> {
        let mut strikes: Vec<Decimal> = self.legs.iter().map(|l| l.contract().strike()).collect();
        strikes.sort();
        strikes
    }

    /// Check if any leg is a call.
    #[must_use]
    pub fn has_call(&self) -> bool {
        self.legs.iter().any(|l| l.contract().is_call())
    }
}
