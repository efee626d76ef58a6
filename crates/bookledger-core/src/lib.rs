//! # bookledger-core: Domain Logic for the Bookstore Ledger
//!
//! Pure types and rules for members, books and sales. Nothing in this crate
//! touches the database or the terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        bookledger Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    CLI menu (apps/cli)                          │   │
//! │  │   1 create ─► 2 report ─► 3 update discount ─► 4 delete         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookledger-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │  Member   │  │   Money   │  │LedgerError│  │ date, qty │  │   │
//! │  │   │ Book Sale │  │ 1,750     │  │ ErrorKind │  │ discount  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 bookledger-db (Ledger Store)                    │   │
//! │  │        SQLite tables: member, book, sale + transactions         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Member, Book, Sale, SaleReport, NewSale)
//! - [`money`] - Integer currency amounts with grouped display
//! - [`error`] - The ledger error taxonomy
//! - [`validation`] - Input rules (date format, quantity, discount, selection)
//!
//! ## Example Usage
//!
//! ```rust
//! use bookledger_core::{sale_total, Money};
//!
//! let total = sale_total(Money::from_units(600), 3, Money::from_units(50));
//! assert_eq!(total.units(), 1750);
//! assert_eq!(total.to_string(), "1,750");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorKind, LedgerError, LedgerResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Human-readable form of the sale date format, used in prompts and errors.
pub const DATE_FORMAT: &str = "YYYY-MM-DD";
