//! Money amounts as they cross the write boundary.
//!
//! Amounts arrive as decimal strings (e.g., `"100.00"`) from forms and
//! snapshots. They are parsed exactly once into an [Amount], so everything
//! downstream (aggregation, formatting) can assume a positive finite number.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A positive, finite amount of money.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(f64);

impl Amount {
    /// Parse a decimal string into an amount.
    ///
    /// Leading and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if `text` is empty, is not a number, is
    /// not finite, or is zero or negative.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidAmount(text.to_owned());

        let value: f64 = text.trim().parse().map_err(|_| invalid())?;

        if !value.is_finite() || value <= 0.0 {
            return Err(invalid());
        }

        Ok(Self(value))
    }

    /// Create an amount without validation.
    ///
    /// The caller should ensure that `value` is positive and finite.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the invariant
    /// is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    /// The amount as a floating point number.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Amount {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Amount> for String {
    fn from(value: Amount) -> Self {
        value.to_string()
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, amount::Amount};

    #[test]
    fn parses_decimal_string() {
        let amount = Amount::parse("100.50").unwrap();

        assert_eq!(amount.value(), 100.5);
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        let amount = Amount::parse(" 12 ").unwrap();

        assert_eq!(amount.value(), 12.0);
    }

    #[test]
    fn rejects_empty_string() {
        assert_eq!(Amount::parse(""), Err(Error::InvalidAmount("".to_owned())));
    }

    #[test]
    fn rejects_non_numeric_string() {
        assert_eq!(
            Amount::parse("twelve"),
            Err(Error::InvalidAmount("twelve".to_owned()))
        );
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        assert!(Amount::parse("0").is_err());
        assert!(Amount::parse("-5.00").is_err());
    }

    #[test]
    fn rejects_non_finite_amounts() {
        assert!(Amount::parse("inf").is_err());
        assert!(Amount::parse("NaN").is_err());
    }

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(Amount::new_unchecked(7.5).to_string(), "7.50");
    }

    #[test]
    fn deserializes_from_json_string() {
        let amount: Amount = serde_json::from_str("\"42.10\"").unwrap();

        assert_eq!(amount, Amount::new_unchecked(42.1));
    }

    #[test]
    fn deserializing_invalid_amount_fails() {
        let result: Result<Amount, _> = serde_json::from_str("\"-1\"");

        assert!(result.is_err());
    }
}
