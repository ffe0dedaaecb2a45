//! Migrate command: apply the server's SQL migrations to Postgres.

use sqlx::PgPool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("DOORLIST_DATABASE_URL or DATABASE_URL must be set")]
    MissingDatabaseUrl,
    #[error("failed to connect to the database: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connect using `DOORLIST_DATABASE_URL` (falling back to `DATABASE_URL`)
/// and run all pending migrations.
///
/// # Errors
///
/// Returns [`MigrationError`] if no database URL is configured, the
/// connection fails, or a migration cannot be applied.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DOORLIST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MigrationError::MissingDatabaseUrl)?;

    let pool = PgPool::connect(&url).await?;
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("migrations applied");
    Ok(())
}
