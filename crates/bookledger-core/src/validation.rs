//! # Validation Module
//!
//! Input rules applied before a request reaches the store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI prompts                                                  │
//! │  └── Re-ask until the input parses as an integer (or is empty)          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── date is YYYY-MM-DD                                                 │
//! │  ├── quantity > 0, discount >= 0                                        │
//! │  └── list selection within 1..=len                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SQLite                                                       │
//! │  ├── CHECK constraints (stock, quantity, discount)                      │
//! │  └── Foreign keys (member, book)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookledger_core::validation::{validate_sale_date, validate_quantity};
//!
//! validate_sale_date("2024-02-01").unwrap();
//! validate_quantity(3).unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Date
// =============================================================================

/// Validates a sale date.
///
/// ## Rules
/// - Exactly `DDDD-DD-DD`: four digits, dash, two digits, dash, two digits
/// - Only the shape is checked; `2024-13-45` passes
///
/// ## Example
/// ```rust
/// use bookledger_core::validation::validate_sale_date;
///
/// assert!(validate_sale_date("2024-02-01").is_ok());
/// assert!(validate_sale_date("2024-2-1").is_err());
/// ```
pub fn validate_sale_date(date: &str) -> ValidationResult<()> {
    let bytes = date.as_bytes();

    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: format!("expected {}", crate::DATE_FORMAT),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a whole number typed by the user.
pub fn parse_integer(field: &str, input: &str) -> ValidationResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber {
            field: field.to_string(),
        })
}

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount amount.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Not compared against the price; a discount larger than the line value
///   is accepted
pub fn validate_discount(discount: i64) -> ValidationResult<()> {
    if discount < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "discount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Selection
// =============================================================================

/// Validates a 1-based choice from a numbered list of `count` entries and
/// returns the 0-based index.
///
/// ## Example
/// ```rust
/// use bookledger_core::validation::validate_selection;
///
/// assert_eq!(validate_selection("2", 3).unwrap(), 1);
/// assert!(validate_selection("4", 3).is_err());
/// assert!(validate_selection("x", 3).is_err());
/// ```
pub fn validate_selection(input: &str, count: usize) -> ValidationResult<usize> {
    let choice = parse_integer("selection", input)?;

    if choice < 1 || choice as u64 > count as u64 {
        return Err(ValidationError::OutOfRange {
            field: "selection".to_string(),
            min: 1,
            max: count as i64,
        });
    }

    Ok(choice as usize - 1)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sale_date() {
        assert!(validate_sale_date("2024-02-01").is_ok());
        assert!(validate_sale_date("1999-12-31").is_ok());
        // Shape only, no calendar check
        assert!(validate_sale_date("2024-13-45").is_ok());

        assert!(validate_sale_date("").is_err());
        assert!(validate_sale_date("2024-2-01").is_err());
        assert!(validate_sale_date("2024/02/01").is_err());
        assert!(validate_sale_date("2024-02-01 ").is_err());
        assert!(validate_sale_date("24-02-2001").is_err());
        assert!(validate_sale_date("abcd-ef-gh").is_err());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("quantity", "3").unwrap(), 3);
        assert_eq!(parse_integer("quantity", " -7 ").unwrap(), -7);
        assert_eq!(
            parse_integer("quantity", "three").unwrap_err(),
            ValidationError::NotANumber {
                field: "quantity".to_string()
            }
        );
        assert!(parse_integer("quantity", "1.5").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount(0).is_ok());
        assert!(validate_discount(1_000_000).is_ok());
        assert!(validate_discount(-1).is_err());
    }

    #[test]
    fn test_validate_selection() {
        assert_eq!(validate_selection("1", 5).unwrap(), 0);
        assert_eq!(validate_selection("5", 5).unwrap(), 4);
        assert_eq!(validate_selection(" 3 ", 5).unwrap(), 2);

        assert!(validate_selection("0", 5).is_err());
        assert!(validate_selection("6", 5).is_err());
        assert!(validate_selection("-1", 5).is_err());
        assert!(validate_selection("1", 0).is_err());
        assert!(validate_selection("abc", 5).is_err());
    }
}
