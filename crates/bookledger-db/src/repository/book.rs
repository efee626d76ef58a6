//! # Book Repository
//!
//! Read access to books. Stock is only written by
//! [`SaleRepository::create_sale`](crate::SaleRepository::create_sale), inside
//! its transaction.

use sqlx::SqlitePool;
use tracing::debug;

use bookledger_core::{Book, LedgerResult};

/// Column list mapping `book` columns onto [`Book`] fields.
pub(crate) const BOOK_COLUMNS: &str = "bid AS id, btitle AS title, bprice AS price, bstock AS stock";

/// Repository for book lookups.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Gets a book by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Book))` - Book found
    /// * `Ok(None)` - Book not found
    pub async fn get_by_id(&self, id: &str) -> LedgerResult<Option<Book>> {
        debug!(book_id = %id, "Fetching book");

        let query = format!("SELECT {BOOK_COLUMNS} FROM book WHERE bid = ?1");
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(book)
    }

    /// Lists all books ordered by ID.
    pub async fn list(&self) -> LedgerResult<Vec<Book>> {
        let query = format!("SELECT {BOOK_COLUMNS} FROM book ORDER BY bid");
        let books = sqlx::query_as::<_, Book>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Counts books.
    pub async fn count(&self) -> LedgerResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM book")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
