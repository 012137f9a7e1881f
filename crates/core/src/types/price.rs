//! Type-safe price representation using fixed-point arithmetic.
//!
//! Prices are held as integer cents so that arithmetic never accumulates
//! binary floating-point rounding drift. Display and arithmetic go through
//! [`rust_decimal::Decimal`] at scale 2.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur when parsing a price from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("invalid price")]
    Invalid,

    /// Prices must not be negative.
    #[error("price must not be negative")]
    Negative,

    /// The value does not fit in 64-bit cents.
    #[error("price out of range")]
    OutOfRange,
}

/// A non-negative amount of money in the store currency.
///
/// Stored as integer cents. `Display` renders the decimal amount without a
/// currency symbol (`"19.99"`); templates add the symbol via the `money`
/// filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    /// Create a price from an amount in cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Get the amount in cents.
    #[must_use]
    pub const fn as_cents(&self) -> i64 {
        self.0
    }

    /// The amount as a scale-2 decimal (e.g. `19.99`).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Line total for `quantity` units.
    #[must_use]
    pub fn times(&self, quantity: i64) -> Decimal {
        self.amount() * Decimal::from(quantity)
    }

    /// Parse a price from user input such as `"19.99"` or `"5"`.
    ///
    /// Sub-cent digits are rounded half away from zero.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] if the input is not a decimal number, is
    /// negative, or does not fit in 64-bit cents.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(input.trim()).map_err(|_| PriceError::Invalid)?;
        if amount.is_sign_negative() {
            return Err(PriceError::Negative);
        }
        let cents = (amount * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(PriceError::OutOfRange)?;
        Ok(Self(cents))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.amount())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for Price {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <i64 as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for Price {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let cents = <i64 as sqlx::Decode<'_, sqlx::Sqlite>>::decode(value)?;
        Ok(Self(cents))
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::from_cents(1999).to_string(), "19.99");
        assert_eq!(Price::from_cents(500).to_string(), "5.00");
        assert_eq!(Price::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(Price::parse("19.99").unwrap().as_cents(), 1999);
        assert_eq!(Price::parse("5").unwrap().as_cents(), 500);
        assert_eq!(Price::parse(" 0.10 ").unwrap().as_cents(), 10);
        assert_eq!(Price::parse("0").unwrap().as_cents(), 0);
    }

    #[test]
    fn test_parse_rounds_sub_cent_digits() {
        assert_eq!(Price::parse("1.005").unwrap().as_cents(), 101);
        assert_eq!(Price::parse("1.004").unwrap().as_cents(), 100);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Price::parse("free"), Err(PriceError::Invalid));
        assert_eq!(Price::parse(""), Err(PriceError::Invalid));
        assert_eq!(Price::parse("$19.99"), Err(PriceError::Invalid));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(Price::parse("-1"), Err(PriceError::Negative));
        assert_eq!(Price::parse("-0.01"), Err(PriceError::Negative));
    }

    #[test]
    fn test_line_totals_are_exact() {
        // 19.99 * 2 + 49.99 = 89.97 with no float drift
        let total = Price::from_cents(1999).times(2) + Price::from_cents(4999).times(1);
        assert_eq!(total.to_string(), "89.97");
    }

    #[test]
    fn test_serde_round_trip_as_decimal_string() {
        let price = Price::from_cents(1999);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"19.99\"");

        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
