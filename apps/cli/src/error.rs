//! Maps ledger errors to the line shown after `=> `.
//!
//! Validation, not-found and stock errors are shown as-is. Storage failures
//! are logged with their detail and shown as a generic message.

use bookledger_core::LedgerError;

/// Shown for any storage failure. The transaction was rolled back.
pub const STORAGE_FAILURE_MESSAGE: &str = "Database operation failed, nothing was changed";

/// User-facing text for a failed request.
pub fn user_message(err: &LedgerError) -> String {
    match err {
        LedgerError::StorageFailure(detail) => {
            tracing::error!("Database operation failed: {}", detail);
            STORAGE_FAILURE_MESSAGE.to_string()
        }
        other => {
            tracing::debug!(kind = ?other.kind(), "Request rejected: {}", other);
            format!("Error: {other}")
        }
    }
}
