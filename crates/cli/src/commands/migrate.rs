//! Database migration command.
//!
//! Applies the seller schema migrations from `crates/seller/migrations/`,
//! then the tower-sessions store migration so the sessions table exists
//! before the first sign-in.

use tower_sessions_sqlx_store::PostgresStore;

use super::CommandError;

/// Run all migrations against the seller database.
///
/// # Errors
///
/// Returns `CommandError` if the connection, a schema migration, or the
/// session-store migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    tracing::info!("Running seller schema migrations...");
    sqlx::migrate!("../seller/migrations").run(&pool).await?;

    tracing::info!("Running session store migration...");
    PostgresStore::new(pool.clone())
        .migrate()
        .await
        .map_err(CommandError::Database)?;

    tracing::info!("Migrations complete!");
    Ok(())
}
