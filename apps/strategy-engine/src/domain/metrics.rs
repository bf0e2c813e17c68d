//! Derived strategy metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Legacy wire/storage figure standing in for an unbounded profit or loss.
///
/// Journal rows written by earlier versions stored this magic number instead
/// of a tagged value; serde keeps mapping it to [`ProfitLoss::Unbounded`] so
/// those rows still load.
pub const UNBOUNDED_SENTINEL: Decimal = Decimal::from_parts(99_999, 0, 0, false, 0);

/// A profit or loss figure that may be unbounded.
///
/// Short calls have unlimited loss and long positions are modeled with
/// unlimited profit; tagging keeps consumers from mistaking the legacy 99999
/// sentinel for a real dollar figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitLoss {
    /// A real dollar amount.
    Bounded(Decimal),
    /// No finite bound in this model.
    Unbounded,
}

impl ProfitLoss {
    /// Zero dollars, bounded.
    pub const ZERO: Self = Self::Bounded(Decimal::ZERO);

    /// Check if this figure is unbounded.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Get the bounded amount, if any.
    #[must_use]
    pub const fn bounded(&self) -> Option<Decimal> {
        match self {
            Self::Bounded(amount) => Some(*amount),
            Self::Unbounded => None,
        }
    }

    /// Negate a bounded amount; unbounded stays unbounded.
    #[must_use]
    pub fn negated(&self) -> Self {
        match self {
            Self::Bounded(amount) => Self::Bounded(-amount),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

impl From<Decimal> for ProfitLoss {
    fn from(amount: Decimal) -> Self {
        Self::Bounded(amount)
    }
}

impl fmt::Display for ProfitLoss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(amount) => write!(f, "${amount:.2}"),
            Self::Unbounded => write!(f, "unlimited"),
        }
    }
}

impl Serialize for ProfitLoss {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bounded(amount) => Serialize::serialize(amount, serializer),
            Self::Unbounded => Serialize::serialize(&UNBOUNDED_SENTINEL, serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ProfitLoss {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize<'de>>::deserialize(deserializer)?;
        if amount >= UNBOUNDED_SENTINEL {
            Ok(Self::Unbounded)
        } else {
            Ok(Self::Bounded(amount))
        }
    }
}

/// Derived financial metrics for a strategy.
///
/// Produced once per calculation call and never mutated. All dollar figures
/// are rounded to cents; `return_on_margin` is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMetrics {
    /// Signed opening premium (credit positive, debit negative).
    pub net_premium: Decimal,
    /// Maximum theoretical profit.
    pub max_profit: ProfitLoss,
    /// Maximum theoretical loss (a positive dollar figure when bounded).
    pub max_loss: ProfitLoss,
    /// Breakeven underlying price(s) at expiration (exactly one in this model).
    pub breakeven_points: Vec<Decimal>,
    /// Capital committed/at risk under the simplified margin model.
    ///
    /// Unbounded for a naked short, where margin covers the full (unbounded)
    /// risk.
    pub margin_requirement: ProfitLoss,
    /// Max profit as a percentage of margin; 0 when either side is unbounded.
    pub return_on_margin: Decimal,
}

impl StrategyMetrics {
    /// Check if the position is fully bounded on both sides.
    #[must_use]
    pub const fn is_fully_bounded(&self) -> bool {
        !self.max_profit.is_unbounded() && !self.max_loss.is_unbounded()
    }

    /// Whether opening the strategy netted a credit.
    #[must_use]
    pub fn is_credit(&self) -> bool {
        self.net_premium >= Decimal::ZERO
    }
}
