//! # Database Handle
//!
//! Connection setup for the ledger's SQLite file.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Startup                                   │
//! │                                                                         │
//! │  DbConfig::new(path) ← Configure path, migrations, seeding             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await                                           │
//! │       │                                                                 │
//! │       ├── open SqlitePool (ONE connection, foreign keys ON)            │
//! │       ├── run embedded migrations                                      │
//! │       └── seed sample rows into empty tables                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.members() / db.books() / db.sales()                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ledger is single-user: the pool holds exactly one connection and
//! every write runs in its own transaction on it.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::book::BookRepository;
use crate::repository::member::MemberRepository;
use crate::repository::sale::SaleRepository;
use crate::seed::{self, SeedSummary};

/// Path value that selects a private in-memory database.
pub const IN_MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/bookstore.db").seed_sample_data(false);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Connection acquire timeout.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,

    /// Whether to insert the sample members, books and sales into empty
    /// tables on connect.
    /// Default: true
    pub seed_sample_data: bool,
}

impl DbConfig {
    /// Creates a configuration for the database file at `path`. The file is
    /// created if it doesn't exist; its parent directory must.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            connect_timeout: Duration::from_secs(30),
            run_migrations: true,
            seed_sample_data: true,
        }
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Sets whether to seed sample data on connect.
    pub fn seed_sample_data(mut self, seed: bool) -> Self {
        self.seed_sample_data = seed;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Each `Database::new` call with this config gets its own isolated
    /// database, migrated and seeded.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            connect_timeout: Duration::from_secs(5),
            run_migrations: true,
            seed_sample_data: true,
        }
    }

    /// Whether this config points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY_PATH)
    }
}

// =============================================================================
// Database
// =============================================================================

/// The ledger store handle.
///
/// Passed explicitly to every operation; there is no global connection.
///
/// ## Usage
/// ```rust,ignore
/// let db = Database::new(DbConfig::new("./bookstore.db")).await?;
///
/// let sale = db.sales().create_sale(&new_sale).await?;
/// let report = db.sales().list_sales().await?;
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the database.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite:
    ///    - Foreign keys enabled
    ///    - WAL journal + NORMAL synchronous for file databases
    /// 3. Creates a single-connection pool
    /// 4. Runs migrations (if enabled)
    /// 5. Seeds sample data into empty tables (if enabled)
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        let base_options = if config.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new()
                .filename(&config.database_path)
                // WAL mode: crash-safe without blocking readers
                .journal_mode(SqliteJournalMode::Wal)
                // NORMAL synchronous: may lose the last commit on power loss,
                // never corrupts
                .synchronous(SqliteSynchronous::Normal)
                .create_if_missing(true)
        };

        // SQLite has them disabled by default for backwards compatibility
        let connect_options = base_options.foreign_keys(true);

        debug!("Connection options configured");

        // One connection, never recycled: an in-memory database lives only as
        // long as its connection does.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!("Database pool created");

        let db = Database { pool };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        if config.seed_sample_data {
            db.seed_sample_data().await?;
        }

        Ok(db)
    }

    /// Runs database migrations. Idempotent.
    pub async fn run_migrations(&self) -> DbResult<()> {
        info!("Running database migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Inserts the sample rows into whichever tables are empty.
    pub async fn seed_sample_data(&self) -> DbResult<SeedSummary> {
        let summary = seed::seed_if_empty(&self.pool).await?;
        info!(
            members = summary.members,
            books = summary.books,
            sales = summary.sales,
            "Bootstrap seed complete"
        );
        Ok(summary)
    }

    /// Returns a reference to the connection pool.
    ///
    /// For queries not covered by repositories.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the member repository.
    pub fn members(&self) -> MemberRepository {
        MemberRepository::new(self.pool.clone())
    }

    /// Returns the book repository.
    pub fn books(&self) -> BookRepository {
        BookRepository::new(self.pool.clone())
    }

    /// Returns the sale repository (the ledger operations).
    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.pool.clone())
    }

    /// Closes the connection. Call once on shutdown.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);

        let (total, applied) = migrations::migration_status(db.pool()).await.unwrap();
        assert_eq!(total, applied);
    }

    #[tokio::test]
    async fn test_in_memory_databases_are_isolated() {
        let first = Database::new(DbConfig::in_memory()).await.unwrap();
        let second = Database::new(DbConfig::in_memory().seed_sample_data(false))
            .await
            .unwrap();

        assert_eq!(first.books().count().await.unwrap(), 3);
        assert_eq!(second.books().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_foreign_keys_enabled() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[tokio::test]
    async fn test_file_database_persists_between_opens() {
        let path = std::env::temp_dir().join(format!(
            "bookledger-pool-test-{}.db",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        assert_eq!(db.sales().count().await.unwrap(), 5);
        db.close().await;

        // Reopening must not seed a second time.
        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        assert_eq!(db.sales().count().await.unwrap(), 5);
        db.close().await;

        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
        }
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .run_migrations(false)
            .seed_sample_data(false)
            .connect_timeout(Duration::from_secs(1));

        assert!(!config.run_migrations);
        assert!(!config.seed_sample_data);
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert!(!config.is_in_memory());
        assert!(DbConfig::in_memory().is_in_memory());
    }
}
