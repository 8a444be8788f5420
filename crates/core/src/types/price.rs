//! Type-safe price representation using decimal arithmetic.
//!
//! The catalog API reports prices as JSON numbers in US dollars. They are
//! decoded straight into a [`Decimal`] so basket totals are exact sums rather
//! than accumulated floating point error.

use std::fmt;
use std::iter::Sum;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in the store currency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an integer number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| Self(acc.0 + p.0))
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_json_number() {
        let price: Price = serde_json::from_str("9.99").unwrap();
        assert_eq!(price, Price::from_cents(999));

        let whole: Price = serde_json::from_str("20").unwrap();
        assert_eq!(whole.amount(), Decimal::from(20));
    }

    #[test]
    fn test_price_times() {
        assert_eq!(Price::from_cents(250).times(4), Price::from_cents(1000));
        assert_eq!(Price::from_cents(250).times(0), Price::ZERO);
    }

    #[test]
    fn test_price_sum_is_exact() {
        let total: Price = [Price::from_cents(10), Price::from_cents(20)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(30));
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_cents(4500).to_string(), "$45.00");
        assert_eq!(Price::from_cents(1999).to_string(), "$19.99");
    }
}
