//! Postgres-backed attendee store.
//!
//! Ingestion is a single bulk `INSERT ... SELECT FROM UNNEST` with
//! `ON CONFLICT ("Email") DO NOTHING`, which gives the non-ordered batch
//! semantics the contract requires: a duplicate email skips that row only,
//! and there is no surrounding transaction to roll the others back.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use doorlist_core::{Attendee, AttendeeId, NewAttendee};

use super::RepositoryError;
use crate::store::{AttendeeStore, IngestError, LookupError};

const ATTENDEE_COLUMNS: &str = r#"id, "Name", "Year", "Amount paid", "Balance need to pay",
       "Description", "Gender", "Count", "Email""#;

/// [`AttendeeStore`] implementation over a shared `PgPool`.
pub struct PgAttendeeStore {
    pool: PgPool,
}

impl PgAttendeeStore {
    /// Wrap an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendeeStore for PgAttendeeStore {
    async fn insert_batch(&self, rows: Vec<NewAttendee>) -> Result<Vec<Attendee>, IngestError> {
        let names: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
        let years: Vec<i32> = rows.iter().map(|r| r.year).collect();
        let amounts: Vec<rust_decimal::Decimal> = rows.iter().map(|r| r.amount_paid).collect();
        let balances: Vec<rust_decimal::Decimal> = rows.iter().map(|r| r.balance_due).collect();
        let descriptions: Vec<Option<String>> =
            rows.iter().map(|r| r.description.clone()).collect();
        let genders: Vec<Option<String>> = rows.iter().map(|r| r.gender.clone()).collect();
        let counts: Vec<Option<i32>> = rows.iter().map(|r| r.count).collect();
        let emails: Vec<String> = rows.iter().map(|r| r.email.as_str().to_owned()).collect();

        let sql = format!(
            r#"
            INSERT INTO attendees
                ("Name", "Year", "Amount paid", "Balance need to pay",
                 "Description", "Gender", "Count", "Email")
            SELECT * FROM UNNEST(
                $1::text[], $2::int4[], $3::numeric[], $4::numeric[],
                $5::text[], $6::text[], $7::int4[], $8::text[])
            ON CONFLICT ("Email") DO NOTHING
            RETURNING {ATTENDEE_COLUMNS}
            "#
        );

        let inserted: Vec<Attendee> = sqlx::query_as(&sql)
            .bind(&names)
            .bind(&years)
            .bind(&amounts)
            .bind(&balances)
            .bind(&descriptions)
            .bind(&genders)
            .bind(&counts)
            .bind(&emails)
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        if inserted.len() == rows.len() {
            return Ok(inserted);
        }

        // Conflicts are counted as a multiset so a batch that duplicates an
        // email internally reports each skipped occurrence.
        let mut available: HashMap<&str, usize> = HashMap::new();
        for record in &inserted {
            *available.entry(record.email.as_str()).or_insert(0) += 1;
        }
        let mut conflicts = Vec::new();
        for row in &rows {
            match available.get_mut(row.email.as_str()) {
                Some(n) if *n > 0 => *n -= 1,
                _ => conflicts.push(format!("duplicate key: {}", row.email)),
            }
        }

        Err(IngestError::DuplicateEmail { conflicts })
    }

    async fn find_by_id(&self, id: AttendeeId) -> Result<Attendee, LookupError> {
        let sql = format!("SELECT {ATTENDEE_COLUMNS} FROM attendees WHERE id = $1");

        let record: Option<Attendee> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        record.ok_or(LookupError::NotFound)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
