//! Database operations for the seller service.
//!
//! # Tables
//!
//! - `auth_accounts` / `account_passwords` - Auth identities and credentials
//! - `phone_otp_challenges` - One live OTP challenge per phone
//! - `sellers` - Shop profiles (one per identity)
//! - `master_products` - Platform catalog (not seller-owned)
//! - `seller_products` - Per-seller adoptions of catalog items
//! - `orders` / `order_items` - Orders and their immutable line items
//! - `notifications` - Seller notifications
//!
//! Every repository method that touches a seller-owned table takes the
//! owning [`SellerId`](dukaan_core::SellerId) from the session and scopes
//! the statement with it; the row-level policies in `migrations/` are the
//! second line of defense.
//!
//! Queries use the runtime `query_as` API with explicit row types and
//! `TryFrom` conversions into domain models, so the crate builds without a
//! live database.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/seller/migrations/` and run via:
//! ```bash
//! cargo run -p dukaan-cli -- migrate
//! ```

pub mod accounts;
pub mod catalog;
pub mod inventory;
pub mod notifications;
pub mod orders;
pub mod otp;
pub mod sellers;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use accounts::AccountRepository;
pub use catalog::CatalogRepository;
pub use inventory::InventoryRepository;
pub use notifications::NotificationRepository;
pub use orders::OrderRepository;
pub use otp::OtpRepository;
pub use sellers::SellerRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found (or not owned by the caller).
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email, duplicate adoption).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Map a sqlx error, turning a unique violation into [`Self::Conflict`]
    /// with the given message.
    pub(crate) fn from_unique(e: sqlx::Error, conflict_msg: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return Self::Conflict(conflict_msg.to_owned());
        }
        Self::Database(e)
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
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
