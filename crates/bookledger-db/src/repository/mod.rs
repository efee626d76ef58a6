//! # Repository Module
//!
//! Typed access to the three ledger tables.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CLI menu                                                              │
//! │       │  db.sales().create_sale(&new_sale)                             │
//! │       ▼                                                                 │
//! │  SaleRepository                                                        │
//! │  ├── create_sale      (transaction: insert sale + decrement stock)     │
//! │  ├── list_sales       (sale ⋈ member ⋈ book)                            │
//! │  ├── update_discount  (transaction: recompute total)                   │
//! │  └── delete_sale      (transaction: delete row)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite: member, book, sale                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rows are decoded once, here, into the typed records of
//! `bookledger-core`; SQL column names (`mid`, `bprice`, ...) never leave
//! this module.
//!
//! ## Available Repositories
//!
//! - [`MemberRepository`] - Member lookups
//! - [`BookRepository`] - Book lookups
//! - [`SaleRepository`] - The four ledger operations

pub mod book;
pub mod member;
pub mod sale;

pub use book::BookRepository;
pub use member::MemberRepository;
pub use sale::SaleRepository;
