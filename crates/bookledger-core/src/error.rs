//! # Error Types
//!
//! The error taxonomy shared by every ledger operation.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookledger-core errors (this file)                                    │
//! │  ├── LedgerError      - What every store operation returns             │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  bookledger-db errors (separate crate)                                 │
//! │  └── DbError          - Connection / migration / seed failures         │
//! │                                                                         │
//! │  Flow: ValidationError → LedgerError ← DbError ← sqlx::Error           │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                     "=> message" printed by the menu                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (book ID, remaining stock, ...)
//! 3. Every variant maps to exactly one [`ErrorKind`]

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse classification of a [`LedgerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Bad date format, non-numeric or out-of-range input.
    InvalidInput,
    /// Unknown member, book or sale identifier.
    NotFound,
    /// Requested quantity exceeds remaining stock.
    InsufficientStock,
    /// The database rejected or failed a read/write.
    StorageFailure,
}

// =============================================================================
// Ledger Error
// =============================================================================

/// Errors returned by ledger operations.
///
/// None of these are fatal: the menu reports the message and returns to the
/// top-level prompt.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The request was malformed before it reached the store.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A referenced row does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Not enough copies left to complete the sale.
    ///
    /// ## User Workflow
    /// ```text
    /// Create sale (B001, qty: 5)
    ///      │
    ///      ▼
    /// Check stock: 2 remaining
    ///      │
    ///      ▼
    /// InsufficientStock { book_id: "B001", available: 2, requested: 5 }
    ///      │
    ///      ▼
    /// Menu shows: "=> Insufficient stock for B001: 2 remaining, 5 requested"
    /// ```
    #[error("Insufficient stock for {book_id}: {available} remaining, {requested} requested")]
    InsufficientStock {
        book_id: String,
        available: i64,
        requested: i64,
    },

    /// The underlying transaction failed and was rolled back.
    #[error("Storage failure: {0}")]
    StorageFailure(String),
}

impl LedgerError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        LedgerError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Returns the error's classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::InvalidInput(_) => ErrorKind::InvalidInput,
            LedgerError::NotFound { .. } => ErrorKind::NotFound,
            LedgerError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            LedgerError::StorageFailure(_) => ErrorKind::StorageFailure,
        }
    }
}

/// Convert sqlx errors into storage failures.
///
/// Lookups use `fetch_optional`, so a missing row never arrives here as an
/// error; anything sqlx reports is a failed read or write.
#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for LedgerError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                LedgerError::StorageFailure(db_err.message().to_string())
            }
            other => LedgerError::StorageFailure(other.to_string()),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any database work so a rejected request never opens a
/// transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value could not be parsed as a whole number.
    #[error("{field} must be a whole number")]
    NotANumber { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. a malformed date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_message_includes_remaining() {
        let err = LedgerError::InsufficientStock {
            book_id: "B001".to_string(),
            available: 2,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for B001: 2 remaining, 5 requested"
        );
        assert_eq!(err.kind(), ErrorKind::InsufficientStock);
    }

    #[test]
    fn test_not_found_message() {
        let err = LedgerError::not_found("Sale", 42);
        assert_eq!(err.to_string(), "Sale not found: 42");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_validation_converts_to_invalid_input() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let err: LedgerError = validation_err.into();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "Invalid input: quantity must be positive");
    }

    #[test]
    fn test_error_kind_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorKind::InsufficientStock).unwrap();
        assert_eq!(json, "\"INSUFFICIENT_STOCK\"");
    }
}
