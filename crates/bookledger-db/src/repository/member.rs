//! # Member Repository
//!
//! Read-only access to members. Members are created by bootstrap seeding
//! and never changed afterwards.

use sqlx::SqlitePool;
use tracing::debug;

use bookledger_core::{LedgerResult, Member};

/// Column list mapping `member` columns onto [`Member`] fields.
pub(crate) const MEMBER_COLUMNS: &str = "mid AS id, mname AS name, mphone AS phone, memail AS email";

/// Repository for member lookups.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: SqlitePool,
}

impl MemberRepository {
    /// Creates a new MemberRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MemberRepository { pool }
    }

    /// Gets a member by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Member))` - Member found
    /// * `Ok(None)` - Member not found
    pub async fn get_by_id(&self, id: &str) -> LedgerResult<Option<Member>> {
        debug!(member_id = %id, "Fetching member");

        let query = format!("SELECT {MEMBER_COLUMNS} FROM member WHERE mid = ?1");
        let member = sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(member)
    }

    /// Lists all members ordered by ID.
    pub async fn list(&self) -> LedgerResult<Vec<Member>> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM member ORDER BY mid");
        let members = sqlx::query_as::<_, Member>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(members)
    }

    /// Counts members.
    pub async fn count(&self) -> LedgerResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM member")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
