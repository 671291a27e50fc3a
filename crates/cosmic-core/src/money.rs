//! # Money Module
//!
//! Provides the `Money` type for prices and cart totals.
//!
//! ## Whole Units Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog prices are whole currency units (2999 = 2 999 ₽).              │
//! │                                                                         │
//! │  There is no minor unit and no floating point anywhere:                 │
//! │    Product.price ──► CartItem.price ──► line_total ──► total_price      │
//! │        i64              i64 (frozen)      price × qty     Σ line_total  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cosmic_core::money::Money;
//!
//! let price = Money::from_units(2999);
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.units(), 5998);
//! assert_eq!(line_total.format_grouped(","), "5,998");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: a catalog file could carry a negative price; validation
///   rejects it, but the type itself stays total
/// - **Transparent serde**: serialises as a bare number, matching the
///   catalog JSON (`"price": 2999`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// Saturates instead of wrapping, so an absurd quantity can never turn a
    /// total negative.
    ///
    /// ```rust
    /// use cosmic_core::money::Money;
    ///
    /// let unit_price = Money::from_units(1899);
    /// assert_eq!(unit_price.multiply_quantity(3).units(), 5697);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Formats the amount with a thousands separator and no currency symbol.
    ///
    /// ```rust
    /// use cosmic_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(1234567).format_grouped(" "), "1 234 567");
    /// assert_eq!(Money::from_units(-5998).format_grouped(","), "-5,998");
    /// assert_eq!(Money::from_units(999).format_grouped(","), "999");
    /// ```
    pub fn format_grouped(&self, separator: &str) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len() + 1);

        if self.0 < 0 {
            out.push('-');
        }

        let head = digits.len() % 3;
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - head) % 3 == 0 {
                out.push_str(separator);
            }
            out.push(ch);
        }

        out
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain units, no grouping or symbol. Use `format_grouped` for UI display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
