//! # bookledger-db: Database Layer for the Bookstore Ledger
//!
//! SQLite storage for members, books and sales, using sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        bookledger Data Flow                             │
//! │                                                                         │
//! │  Menu option 1 (create sale)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bookledger-db (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  + seed.rs   │  │   │
//! │  │   │               │    │ MemberRepo    │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ BookRepo      │    │ 001_initial_ │  │   │
//! │  │   │ (1 conn)      │    │ SaleRepo      │    │ schema.sql   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │        <data dir>/bookledger/bookstore.db                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection setup and the [`Database`] handle
//! - [`migrations`] - Embedded database migrations
//! - [`seed`] - Bootstrap sample data
//! - [`error`] - Database setup error types
//! - [`repository`] - Member, book and sale repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bookledger_core::NewSale;
//! use bookledger_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("bookstore.db")).await?;
//!
//! let sale = db
//!     .sales()
//!     .create_sale(&NewSale::new("2024-02-01", "M001", "B001", 3, 50))
//!     .await?;
//! assert_eq!(sale.total, 1750);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use seed::SeedSummary;

pub use repository::book::BookRepository;
pub use repository::member::MemberRepository;
pub use repository::sale::SaleRepository;
