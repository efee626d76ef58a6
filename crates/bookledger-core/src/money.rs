//! # Money Module
//!
//! Provides the `Money` type for currency amounts.
//!
//! ## Why Integer Money?
//! Book prices, discounts and totals are whole currency units (a 600 book,
//! a 50 discount). Keeping them as `i64` means `price * qty - discount` is
//! exact and a negative total stays representable.
//!
//! ## Usage
//! ```rust
//! use bookledger_core::money::Money;
//!
//! let price = Money::from_units(600);
//! let total = price.multiply_quantity(3) - Money::from_units(50);
//! assert_eq!(total.to_string(), "1,750");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: an oversized discount yields a negative total, which
///   is stored as-is
/// - **Single field tuple struct**: zero-cost over the stored column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use bookledger_core::money::Money;
    ///
    /// let price = Money::from_units(1200);
    /// assert_eq!(price.units(), 1200);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bookledger_core::money::Money;
    ///
    /// let line = Money::from_units(800).multiply_quantity(2);
    /// assert_eq!(line.units(), 1600);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with thousands separators: `1750` → `1,750`.
///
/// Width and alignment flags apply to the grouped string, so report columns
/// can be written as `{:<12}`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&group_thousands(self.0))
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================
