//! Database operations for the Doorlist `PostgreSQL` store.
//!
//! # Tables
//!
//! - `attendees` - One row per event registrant, column names mirroring the
//!   spreadsheet headers verbatim (`"Amount paid"`, `"Balance need to pay"`,
//!   ...), with a UNIQUE constraint on `"Email"`.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p doorlist-cli -- migrate
//! ```
//! They are never run automatically at server startup.

pub mod attendees;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use attendees::PgAttendeeStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// The pool is created once at startup and shared across all requests via
/// the injected store handle; there is no per-request reconnect.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
