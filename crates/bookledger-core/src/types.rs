//! # Domain Types
//!
//! Records for the three ledger tables plus the request and report shapes
//! built from them.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Member      │   │      Book       │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id    "M001"   │◄──┼─ (member_id) ───┼───│  id (autoinc)   │       │
//! │  │  name           │   │  id    "B001"   │◄──│  book_id        │       │
//! │  │  phone          │   │  title          │   │  quantity       │       │
//! │  │  email?         │   │  price / stock  │   │  discount/total │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  NewSale ──► create_sale ──► Sale                                       │
//! │  Sale ⋈ Member ⋈ Book ──► SaleReport (list_sales)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_discount, validate_quantity, validate_sale_date};

// =============================================================================
// Member
// =============================================================================

/// A registered customer. Created only by bootstrap seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Member {
    /// Business key, e.g. `M001`.
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

// =============================================================================
// Book
// =============================================================================

/// An inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// Business key, e.g. `B001`.
    pub id: String,

    pub title: String,

    /// Unit price in whole currency units.
    pub price: i64,

    /// Copies remaining. Only ever decremented, by sale creation.
    pub stock: i64,
}

impl Book {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_units(self.price)
    }

    /// Checks if `quantity` copies are available.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }

    /// Fails with `InsufficientStock` carrying the remaining stock when the
    /// book cannot cover `quantity`.
    pub fn check_stock(&self, quantity: i64) -> LedgerResult<()> {
        if self.can_sell(quantity) {
            return Ok(());
        }

        Err(LedgerError::InsufficientStock {
            book_id: self.id.clone(),
            available: self.stock,
            requested: quantity,
        })
    }

    /// Total for selling `quantity` copies at the current price.
    #[inline]
    pub fn sale_total(&self, quantity: i64, discount: Money) -> Money {
        sale_total(self.price(), quantity, discount)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// `price * quantity - discount`.
///
/// The discount is an absolute amount and is not capped at the line value,
/// so the result may be negative.
#[inline]
pub fn sale_total(unit_price: Money, quantity: i64, discount: Money) -> Money {
    unit_price.multiply_quantity(quantity) - discount
}

/// A recorded sale row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    /// Auto-incremented row id.
    pub id: i64,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub member_id: String,
    pub book_id: String,
    pub quantity: i64,
    /// Absolute discount in currency units.
    pub discount: i64,
    /// Stored copy of `price * quantity - discount`, recomputed on every
    /// write.
    pub total: i64,
}

impl Sale {
    /// Returns the discount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_units(self.discount)
    }

    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_units(self.total)
    }
}

// =============================================================================
// New Sale (request)
// =============================================================================

/// Input to `create_sale`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSale {
    pub date: String,
    pub member_id: String,
    pub book_id: String,
    pub quantity: i64,
    pub discount: i64,
}

impl NewSale {
    pub fn new(
        date: impl Into<String>,
        member_id: impl Into<String>,
        book_id: impl Into<String>,
        quantity: i64,
        discount: i64,
    ) -> Self {
        NewSale {
            date: date.into(),
            member_id: member_id.into(),
            book_id: book_id.into(),
            quantity,
            discount,
        }
    }

    /// Checks the date format, `quantity > 0` and `discount >= 0`.
    ///
    /// Member and book existence are checked by the store inside the
    /// transaction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_sale_date(&self.date)?;
        validate_quantity(self.quantity)?;
        validate_discount(self.discount)?;
        Ok(())
    }

    /// Returns the discount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_units(self.discount)
    }
}

// =============================================================================
// Sale Report (enriched row)
// =============================================================================

/// A sale joined with its member name and book title/price, as listed in the
/// sales report.
///
/// `unit_price` is the book's current price, not the price at the time of
/// the sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleReport {
    pub sale_id: i64,
    pub date: String,
    pub member_name: String,
    pub book_title: String,
    pub unit_price: i64,
    pub quantity: i64,
    pub discount: i64,
    pub total: i64,
}

impl SaleReport {
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_units(self.unit_price)
    }

    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_units(self.discount)
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_units(self.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
