//! # Sale Repository
//!
//! The ledger operations: create, list, update discount, delete.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     └── create_sale() ─┬─ INSERT INTO sale                             │
//! │                        └─ UPDATE book SET bstock = bstock - qty        │
//! │                           (one transaction)                            │
//! │                                                                         │
//! │  2. (OPTIONAL) AMEND                                                   │
//! │     └── update_discount() → total = current price × qty − discount     │
//! │                                                                         │
//! │  3. (OPTIONAL) DELETE                                                  │
//! │     └── delete_sale() → row removed, stock NOT restored                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every write opens a transaction and commits only after all of its
//! statements succeed. Returning early drops the transaction, which rolls it
//! back.

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::repository::book::BOOK_COLUMNS;
use bookledger_core::validation::validate_discount;
use bookledger_core::{
    sale_total, Book, LedgerError, LedgerResult, Money, NewSale, Sale, SaleReport,
};

/// Column list mapping `sale` columns onto [`Sale`] fields.
const SALE_COLUMNS: &str = "sid AS id, sdate AS date, mid AS member_id, bid AS book_id, \
    sqty AS quantity, sdiscount AS discount, stotal AS total";

/// Repository for the sale ledger.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Records a sale and takes the copies out of stock.
    ///
    /// ## What This Does
    /// 1. Validates date format, `quantity > 0`, `discount >= 0`
    /// 2. Looks up the member, then the book (`NotFound` if either is missing)
    /// 3. Checks stock (`InsufficientStock` with the remaining count)
    /// 4. Inserts the sale with `total = price × quantity − discount`
    /// 5. Decrements the book's stock
    /// 6. Commits 4 and 5 together
    ///
    /// The discount is not compared against the price; a negative total is
    /// stored as-is.
    pub async fn create_sale(&self, new_sale: &NewSale) -> LedgerResult<Sale> {
        debug!(
            member_id = %new_sale.member_id,
            book_id = %new_sale.book_id,
            quantity = new_sale.quantity,
            discount = new_sale.discount,
            "Creating sale"
        );

        if let Err(err) = new_sale.validate() {
            warn!(error = %err, "Rejected sale request");
            return Err(err.into());
        }

        let mut tx = self.pool.begin().await?;

        let member_exists = sqlx::query_scalar::<_, i64>("SELECT 1 FROM member WHERE mid = ?1")
            .bind(&new_sale.member_id)
            .fetch_optional(&mut *tx)
            .await?
            .is_some();

        if !member_exists {
            warn!(member_id = %new_sale.member_id, "Unknown member");
            return Err(LedgerError::not_found("Member", &new_sale.member_id));
        }

        let book_query = format!("SELECT {BOOK_COLUMNS} FROM book WHERE bid = ?1");
        let book = sqlx::query_as::<_, Book>(&book_query)
            .bind(&new_sale.book_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| {
                warn!(book_id = %new_sale.book_id, "Unknown book");
                LedgerError::not_found("Book", &new_sale.book_id)
            })?;

        if let Err(err) = book.check_stock(new_sale.quantity) {
            warn!(
                book_id = %book.id,
                stock = book.stock,
                requested = new_sale.quantity,
                "Insufficient stock"
            );
            return Err(err);
        }

        let total = book.sale_total(new_sale.quantity, new_sale.discount());

        let inserted = sqlx::query(
            r#"
            INSERT INTO sale (sdate, mid, bid, sqty, sdiscount, stotal)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&new_sale.date)
        .bind(&new_sale.member_id)
        .bind(&new_sale.book_id)
        .bind(new_sale.quantity)
        .bind(new_sale.discount)
        .bind(total.units())
        .execute(&mut *tx)
        .await?;

        let sale_id = inserted.last_insert_rowid();

        sqlx::query("UPDATE book SET bstock = bstock - ?1 WHERE bid = ?2")
            .bind(new_sale.quantity)
            .bind(&new_sale.book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            sale_id,
            book_id = %new_sale.book_id,
            quantity = new_sale.quantity,
            total = total.units(),
            remaining_stock = book.stock - new_sale.quantity,
            "Sale recorded"
        );

        Ok(Sale {
            id: sale_id,
            date: new_sale.date.clone(),
            member_id: new_sale.member_id.clone(),
            book_id: new_sale.book_id.clone(),
            quantity: new_sale.quantity,
            discount: new_sale.discount,
            total: total.units(),
        })
    }

    /// Lists every sale joined with its member name and book title/price,
    /// oldest first.
    pub async fn list_sales(&self) -> LedgerResult<Vec<SaleReport>> {
        let rows = sqlx::query_as::<_, SaleReport>(
            r#"
            SELECT
                s.sid       AS sale_id,
                s.sdate     AS date,
                m.mname     AS member_name,
                b.btitle    AS book_title,
                b.bprice    AS unit_price,
                s.sqty      AS quantity,
                s.sdiscount AS discount,
                s.stotal    AS total
            FROM sale s
            JOIN member m ON s.mid = m.mid
            JOIN book b ON s.bid = b.bid
            ORDER BY s.sid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed sales");
        Ok(rows)
    }

    /// Replaces a sale's discount and recomputes its total.
    ///
    /// ## Pricing
    /// Uses the sale's original quantity and the book's **current** price,
    /// not the price at the time of sale.
    pub async fn update_discount(&self, sale_id: i64, new_discount: i64) -> LedgerResult<Sale> {
        debug!(sale_id, new_discount, "Updating sale discount");

        validate_discount(new_discount)?;

        let mut tx = self.pool.begin().await?;

        let (quantity, price) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT s.sqty, b.bprice
            FROM sale s
            JOIN book b ON s.bid = b.bid
            WHERE s.sid = ?1
            "#,
        )
        .bind(sale_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            warn!(sale_id, "Unknown sale");
            LedgerError::not_found("Sale", sale_id)
        })?;

        let total = sale_total(
            Money::from_units(price),
            quantity,
            Money::from_units(new_discount),
        );

        sqlx::query("UPDATE sale SET sdiscount = ?1, stotal = ?2 WHERE sid = ?3")
            .bind(new_discount)
            .bind(total.units())
            .bind(sale_id)
            .execute(&mut *tx)
            .await?;

        let sale_query = format!("SELECT {SALE_COLUMNS} FROM sale WHERE sid = ?1");
        let sale = sqlx::query_as::<_, Sale>(&sale_query)
            .bind(sale_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(sale_id, discount = new_discount, total = total.units(), "Sale discount updated");
        Ok(sale)
    }

    /// Deletes a sale.
    ///
    /// Book stock is **not** restored; the copies stay out of inventory.
    pub async fn delete_sale(&self, sale_id: i64) -> LedgerResult<()> {
        debug!(sale_id, "Deleting sale");

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM sale WHERE sid = ?1")
            .bind(sale_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            warn!(sale_id, "Unknown sale");
            return Err(LedgerError::not_found("Sale", sale_id));
        }

        tx.commit().await?;

        info!(sale_id, "Sale deleted");
        Ok(())
    }

    /// Gets a sale by ID.
    pub async fn get_by_id(&self, sale_id: i64) -> LedgerResult<Option<Sale>> {
        let query = format!("SELECT {SALE_COLUMNS} FROM sale WHERE sid = ?1");
        let sale = sqlx::query_as::<_, Sale>(&query)
            .bind(sale_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(sale)
    }

    /// Counts sales.
    pub async fn count(&self) -> LedgerResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sale")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
