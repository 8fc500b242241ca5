//! Whole-rupee price representation.
//!
//! Catalog prices carry no minor unit, so a price is a plain count of rupees.
//! Arithmetic saturates instead of wrapping; a cart can never display a
//! total smaller than one of its lines.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

/// Symbol rendered in front of every amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// A non-negative amount in whole rupees.
///
/// ```
/// use reyana_core::Price;
///
/// let price = Price::new(249);
/// assert_eq!(price.times(2), Price::new(498));
/// assert_eq!(price.to_string(), "₹249");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A price of nothing.
    pub const ZERO: Self = Self(0);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole rupees.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Price of `qty` units at this unit price.
    #[must_use]
    pub const fn times(self, qty: u32) -> Self {
        Self(self.0.saturating_mul(qty as u64))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CURRENCY_SYMBOL}{}", self.0)
    }
}
