//! # Bootstrap Seed Data
//!
//! Fills empty tables with the sample bookstore: three members, three books
//! and five historical sales.
//!
//! ## Idempotency
//! Each table is checked by row count and seeded only when it holds no rows.
//! Existing rows are never overwritten or merged, so running the seed on
//! every startup is safe.
//!
//! Seeded sales are history: they do not decrement book stock.

use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::DbResult;

/// `(mid, mname, mphone, memail)`
const SAMPLE_MEMBERS: &[(&str, &str, &str, &str)] = &[
    ("M001", "Alice", "0912-345678", "alice@example.com"),
    ("M002", "Bob", "0923-456789", "bob@example.com"),
    ("M003", "Cathy", "0934-567890", "cathy@example.com"),
];

/// `(bid, btitle, bprice, bstock)`
const SAMPLE_BOOKS: &[(&str, &str, i64, i64)] = &[
    ("B001", "Python Programming", 600, 50),
    ("B002", "Data Science Basics", 800, 30),
    ("B003", "Machine Learning Guide", 1200, 20),
];

/// `(sdate, mid, bid, sqty, sdiscount, stotal)`
const SAMPLE_SALES: &[(&str, &str, &str, i64, i64, i64)] = &[
    ("2024-01-15", "M001", "B001", 2, 100, 1100),
    ("2024-01-16", "M002", "B002", 1, 50, 750),
    ("2024-01-17", "M001", "B003", 1, 0, 1200),
    ("2024-01-18", "M003", "B001", 1, 0, 600),
    ("2024-01-19", "M002", "B003", 2, 150, 2250),
];

/// Rows inserted per table by one seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub members: u64,
    pub books: u64,
    pub sales: u64,
}

impl SeedSummary {
    /// True when nothing was inserted.
    pub fn is_empty(&self) -> bool {
        self.members == 0 && self.books == 0 && self.sales == 0
    }
}

/// Seeds every empty table in one transaction.
///
/// Members and books go in before sales so the sale foreign keys resolve.
pub async fn seed_if_empty(pool: &SqlitePool) -> DbResult<SeedSummary> {
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    if row_count(&mut tx, "member").await? == 0 {
        for &(id, name, phone, email) in SAMPLE_MEMBERS {
            sqlx::query("INSERT INTO member (mid, mname, mphone, memail) VALUES (?1, ?2, ?3, ?4)")
                .bind(id)
                .bind(name)
                .bind(phone)
                .bind(email)
                .execute(&mut *tx)
                .await?;
            summary.members += 1;
        }
    }

    if row_count(&mut tx, "book").await? == 0 {
        for &(id, title, price, stock) in SAMPLE_BOOKS {
            sqlx::query("INSERT INTO book (bid, btitle, bprice, bstock) VALUES (?1, ?2, ?3, ?4)")
                .bind(id)
                .bind(title)
                .bind(price)
                .bind(stock)
                .execute(&mut *tx)
                .await?;
            summary.books += 1;
        }
    }

    if row_count(&mut tx, "sale").await? == 0 {
        for &(date, member_id, book_id, qty, discount, total) in SAMPLE_SALES {
            sqlx::query(
                r#"
                INSERT INTO sale (sdate, mid, bid, sqty, sdiscount, stotal)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(date)
            .bind(member_id)
            .bind(book_id)
            .bind(qty)
            .bind(discount)
            .bind(total)
            .execute(&mut *tx)
            .await?;
            summary.sales += 1;
        }
    }

    tx.commit().await?;

    debug!(?summary, "Seed pass finished");
    Ok(summary)
}

/// Table names come from the constants above, never from user input.
async fn row_count(conn: &mut SqliteConnection, table: &str) -> DbResult<i64> {
    let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(conn)
        .await?;
    Ok(count)
}
