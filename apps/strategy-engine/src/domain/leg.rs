//! Strategy Leg Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::contract::OptionContract;
use super::errors::ValidationError;

/// Opening action for a leg (buy or sell to open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegAction {
    /// Bought to open (debit).
    Buy,
    /// Sold to open (credit).
    Sell,
}

impl LegAction {
    /// Sign of the premium cash flow at open: +1 for credit, -1 for debit.
    #[must_use]
    pub const fn premium_sign(&self) -> i32 {
        match self {
            Self::Buy => -1,
            Self::Sell => 1,
        }
    }

    /// Check if this is a buy.
    #[must_use]
    pub const fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Check if this is a sell.
    #[must_use]
    pub const fn is_sell(&self) -> bool {
        matches!(self, Self::Sell)
    }
}

impl std::fmt::Display for LegAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// One buy/sell position on one option contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionLeg {
    /// Opening action.
    action: LegAction,
    /// The option contract.
    contract: OptionContract,
    /// Number of contracts.
    quantity: u32,
}

impl OptionLeg {
    /// Create a new leg.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if quantity is zero.
    pub fn new(
        action: LegAction,
        contract: OptionContract,
        quantity: u32,
    ) -> Result<Self, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::invalid_value(
                "quantity",
                "quantity must be positive",
            ));
        }
        Ok(Self {
            action,
            contract,
            quantity,
        })
    }

    /// Create a single-contract buy leg.
    ///
    /// # Errors
    ///
    /// Never fails for quantity 1; kept as `Result` for signature symmetry.
    pub fn buy(contract: OptionContract) -> Result<Self, ValidationError> {
        Self::new(LegAction::Buy, contract, 1)
    }

    /// Create a single-contract sell leg.
    ///
    /// # Errors
    ///
    /// Never fails for quantity 1; kept as `Result` for signature symmetry.
    pub fn sell(contract: OptionContract) -> Result<Self, ValidationError> {
        Self::new(LegAction::Sell, contract, 1)
    }

    /// Get the opening action.
    #[must_use]
    pub const fn action(&self) -> LegAction {
        self.action
    }

    /// Get the contract.
    #[must_use]
    pub const fn contract(&self) -> &OptionContract {
        &self.contract
    }

    /// Get the quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Per-share opening price for this leg.
    ///
    /// A buy opens at the ask (cost), a sell opens at the bid (proceeds).
    #[must_use]
    pub fn open_price(&self) -> Decimal {
        match self.action {
            LegAction::Buy => self.contract.ask(),
            LegAction::Sell => self.contract.bid(),
        }
    }

    /// Signed premium cash flow at open (credit positive, debit negative).
    #[must_use]
    pub fn signed_premium(&self) -> Decimal {
        let premium = self.open_price() * Decimal::from(self.quantity);
        premium * Decimal::from(self.action.premium_sign())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contract::OptionType;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn contract(bid: Decimal, ask: Decimal) -> OptionContract {
        OptionContract::new(
            "AAPL250117C150",
            dec!(150),
            NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            OptionType::Call,
            bid,
            ask,
        )
        .unwrap()
    }

    #[test]
    fn buy_leg_opens_at_ask_with_debit_sign() {
        let leg = OptionLeg::buy(contract(dec!(5.20), dec!(5.40))).unwrap();
        assert_eq!(leg.open_price(), dec!(5.40));
        assert_eq!(leg.signed_premium(), dec!(-5.40));
    }

    #[test]
    fn sell_leg_opens_at_bid_with_credit_sign() {
        let leg = OptionLeg::sell(contract(dec!(5.20), dec!(5.40))).unwrap();
        assert_eq!(leg.open_price(), dec!(5.20));
        assert_eq!(leg.signed_premium(), dec!(5.20));
    }

    #[test]
    fn quantity_scales_premium() {
        let leg = OptionLeg::new(LegAction::Buy, contract(dec!(1.00), dec!(1.10)), 3).unwrap();
        assert_eq!(leg.signed_premium(), dec!(-3.30));
    }

    #[test]
    fn zero_quantity_rejected() {
        let err = OptionLeg::new(LegAction::Sell, contract(dec!(1), dec!(2)), 0).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "quantity")
        );
    }
}
