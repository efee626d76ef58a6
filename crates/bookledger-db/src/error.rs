//! # Database Error Types
//!
//! Errors raised while opening, migrating or seeding the database.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Startup (connect / migrate / seed)        Ledger operations            │
//! │       │                                         │                       │
//! │       ▼                                         ▼                       │
//! │  DbError (this module) ──────────────────► LedgerError::StorageFailure  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  anyhow in the binary's main                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ledger operations themselves return [`bookledger_core::LedgerError`];
//! `sqlx::Error` converts into it directly.

use bookledger_core::LedgerError;
use thiserror::Error;

/// Database setup errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created (missing directory, permissions)
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    ///
    /// ## When This Occurs
    /// - Invalid SQL in migration
    /// - An applied migration was edited after the fact
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::ConnectionFailed
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => {
                DbError::ConnectionFailed("Timed out acquiring a connection".to_string())
            }
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

impl From<DbError> for LedgerError {
    fn from(err: DbError) -> Self {
        LedgerError::StorageFailure(err.to_string())
    }
}

/// Result type for database setup operations.
pub type DbResult<T> = Result<T, DbError>;
