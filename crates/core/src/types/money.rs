//! Integer minor-unit money representation.
//!
//! Amounts are carried as whole cents everywhere. Dollar floats never
//! enter the system, so there is nothing to round.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Cents`] amount.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyError {
    /// The amount was negative.
    #[error("amount must be a non-negative integer number of cents")]
    Negative,
}

/// A monetary amount in minor currency units (cents).
///
/// Invariant: always non-negative. The serde boundary rejects negative
/// values, so a deserialized `Cents` is safe to store unchecked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Cents(i64);

impl Cents {
    /// Zero cents.
    pub const ZERO: Self = Self(0);

    /// Create an amount from a whole number of cents.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Negative` if `cents` is below zero.
    pub const fn new(cents: i64) -> Result<Self, MoneyError> {
        if cents < 0 {
            return Err(MoneyError::Negative);
        }
        Ok(Self(cents))
    }

    /// Get the underlying number of cents.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Cents {
    type Error = MoneyError;

    fn try_from(cents: i64) -> Result<Self, Self::Error> {
        Self::new(cents)
    }
}

impl From<Cents> for i64 {
    fn from(amount: Cents) -> Self {
        amount.0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 4217 currency codes accepted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    CAD,
}

impl CurrencyCode {
    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::CAD => "CAD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert_eq!(Cents::new(-1), Err(MoneyError::Negative));
        assert!(Cents::new(0).is_ok());
        assert!(Cents::new(5000).is_ok());
    }

    #[test]
    fn test_serde_rejects_negative() {
        let result: Result<Cents, _> = serde_json::from_str("-100");
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let amount = Cents::new(5000).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "5000");

        let parsed: Cents = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, amount);
    }

    #[test]
    fn test_currency_default_is_usd() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::USD);
        assert_eq!(CurrencyCode::default().code(), "USD");
    }

    #[test]
    fn test_currency_serde() {
        let json = serde_json::to_string(&CurrencyCode::USD).unwrap();
        assert_eq!(json, "\"USD\"");
    }
}
