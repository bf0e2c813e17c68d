//! Option Contract Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// An option contract quote used as a leg input.
///
/// Immutable once constructed; a fresh value is built per quote. The
/// constructor enforces `strike > 0` and `ask >= bid >= 0`, so downstream
/// pricing never re-validates quote fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Contract symbol (e.g., `"AAPL240119C00150000"`).
    symbol: String,
    /// Strike price.
    strike: Decimal,
    /// Expiration date.
    expiration: NaiveDate,
    /// Call or put.
    option_type: OptionType,
    /// Best bid (proceeds when sold to open).
    bid: Decimal,
    /// Best ask (cost when bought to open).
    ask: Decimal,
}

impl OptionContract {
    /// Create a new option contract quote.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the symbol is empty, the strike is not
    /// positive, the bid is negative, or the ask is below the bid.
    pub fn new(
        symbol: impl Into<String>,
        strike: Decimal,
        expiration: NaiveDate,
        option_type: OptionType,
        bid: Decimal,
        ask: Decimal,
    ) -> Result<Self, ValidationError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(ValidationError::invalid_value(
                "symbol",
                "contract symbol cannot be empty",
            ));
        }
        if strike <= Decimal::ZERO {
            return Err(ValidationError::invalid_value(
                "strike",
                format!("strike price {strike} must be positive"),
            ));
        }
        if bid < Decimal::ZERO {
            return Err(ValidationError::invalid_value(
                "bid",
                format!("bid price {bid} cannot be negative"),
            ));
        }
        if ask < bid {
            return Err(ValidationError::invalid_value(
                "ask",
                format!("ask price {ask} cannot be less than bid {bid}"),
            ));
        }
        Ok(Self {
            symbol,
            strike,
            expiration,
            option_type,
            bid,
            ask,
        })
    }

    /// Create a call contract quote.
    ///
    /// # Errors
    ///
    /// Same validation as [`OptionContract::new`].
    pub fn call(
        symbol: impl Into<String>,
        strike: Decimal,
        expiration: NaiveDate,
        bid: Decimal,
        ask: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::new(symbol, strike, expiration, OptionType::Call, bid, ask)
    }

    /// Create a put contract quote.
    ///
    /// # Errors
    ///
    /// Same validation as [`OptionContract::new`].
    pub fn put(
        symbol: impl Into<String>,
        strike: Decimal,
        expiration: NaiveDate,
        bid: Decimal,
        ask: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::new(symbol, strike, expiration, OptionType::Put, bid, ask)
    }

    /// Get the contract symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the strike price.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    /// Get the expiration date.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Get the option type.
    #[must_use]
    pub const fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Get the bid price.
    #[must_use]
    pub const fn bid(&self) -> Decimal {
        self.bid
    }

    /// Get the ask price.
    #[must_use]
    pub const fn ask(&self) -> Decimal {
        self.ask
    }

    /// Check if this is a call option.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self.option_type, OptionType::Call)
    }

    /// Check if this is a put option.
    #[must_use]
    pub const fn is_put(&self) -> bool {
        matches!(self.option_type, OptionType::Put)
    }

    /// Intrinsic value at a hypothetical settlement price (per share).
    #[must_use]
    pub fn intrinsic_value(&self, settlement_price: Decimal) -> Decimal {
        let value = match self.option_type {
            OptionType::Call => settlement_price - self.strike,
            OptionType::Put => self.strike - settlement_price,
        };
        value.max(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }

    #[test]
    fn valid_contract_constructs() {
        let c = OptionContract::call("AAPL250117C150", dec!(150), expiry(), dec!(5.20), dec!(5.40))
            .unwrap();
        assert_eq!(c.strike(), dec!(150));
        assert!(c.is_call());
        assert!(!c.is_put());
    }

    #[test]
    fn rejects_non_positive_strike() {
        let err =
            OptionContract::call("X", dec!(0), expiry(), dec!(1), dec!(2)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "strike"));
    }

    #[test]
    fn rejects_empty_symbol() {
        let err = OptionContract::call("", dec!(100), expiry(), dec!(1), dec!(2)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "symbol"));
    }

    #[test]
    fn rejects_negative_bid() {
        let err =
            OptionContract::put("X", dec!(100), expiry(), dec!(-0.05), dec!(1)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "bid"));
    }

    #[test]
    fn rejects_ask_below_bid() {
        let err =
            OptionContract::put("X", dec!(100), expiry(), dec!(2.00), dec!(1.90)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "ask"));
    }

    #[test]
    fn zero_bid_with_zero_ask_is_valid() {
        // Deep out-of-the-money quotes can legitimately be 0.00 x 0.00.
        assert!(OptionContract::call("X", dec!(5), expiry(), dec!(0), dec!(0)).is_ok());
    }

    #[test]
    fn call_intrinsic_value() {
        let c = OptionContract::call("X", dec!(150), expiry(), dec!(1), dec!(2)).unwrap();
        assert_eq!(c.intrinsic_value(dec!(160)), dec!(10));
        assert_eq!(c.intrinsic_value(dec!(140)), dec!(0));
    }

    #[test]
    fn put_intrinsic_value() {
        let p = OptionContract::put("X", dec!(150), expiry(), dec!(1), dec!(2)).unwrap();
        assert_eq!(p.intrinsic_value(dec!(140)), dec!(10));
        assert_eq!(p.intrinsic_value(dec!(160)), dec!(0));
    }

    #[test]
    fn serde_round_trip_uses_lowercase_type() {
        let c = OptionContract::call("X", dec!(150), expiry(), dec!(1), dec!(2)).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"call\""));
        let back: OptionContract = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
