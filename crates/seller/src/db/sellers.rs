//! Seller profile repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use dukaan_core::{Email, Phone, SellerId};

use super::RepositoryError;
use crate::models::Seller;

/// Internal row type for `sellers` queries.
#[derive(Debug, sqlx::FromRow)]
struct SellerRow {
    id: SellerId,
    shop_name: String,
    owner_name: String,
    phone: String,
    email: String,
    address: String,
    tax_id: Option<String>,
    logo_url: Option<String>,
    banner_url: Option<String>,
    verified: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SellerRow> for Seller {
    type Error = RepositoryError;

    fn try_from(row: SellerRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let phone = Phone::parse(&row.phone).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid phone in database: {e}"))
        })?;

        Ok(Self {
            id: row.id,
            shop_name: row.shop_name,
            owner_name: row.owner_name,
            phone,
            email,
            address: row.address,
            tax_id: row.tax_id,
            logo_url: row.logo_url,
            banner_url: row.banner_url,
            verified: row.verified,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Fields a seller provides at profile creation.
#[derive(Debug, Clone)]
pub struct NewSeller {
    pub shop_name: String,
    pub owner_name: String,
    pub phone: Phone,
    pub email: Email,
    pub address: String,
    pub tax_id: Option<String>,
}

/// Editable profile fields. The email deliberately has no update path.
#[derive(Debug, Clone)]
pub struct SellerUpdate {
    pub shop_name: String,
    pub owner_name: String,
    pub phone: Phone,
    pub address: String,
    pub tax_id: Option<String>,
}

/// Repository for seller profile database operations.
pub struct SellerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SellerRepository<'a> {
    /// Create a new seller repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a seller profile by its identity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if stored contact data is invalid.
    pub async fn get(&self, id: SellerId) -> Result<Option<Seller>, RepositoryError> {
        let row = sqlx::query_as::<_, SellerRow>(
            r"
            SELECT id, shop_name, owner_name, phone, email, address, tax_id,
                   logo_url, banner_url, verified, created_at, updated_at
            FROM sellers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Seller::try_from).transpose()
    }

    /// Whether a profile exists for this identity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(&self, id: SellerId) -> Result<bool, RepositoryError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM sellers WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok(exists.0)
    }

    /// Create the profile for an identity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a profile already exists for
    /// this identity (primary-key violation).
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, id: SellerId, new: &NewSeller) -> Result<Seller, RepositoryError> {
        let row = sqlx::query_as::<_, SellerRow>(
            r"
            INSERT INTO sellers (id, shop_name, owner_name, phone, email, address, tax_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, shop_name, owner_name, phone, email, address, tax_id,
                      logo_url, banner_url, verified, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&new.shop_name)
        .bind(&new.owner_name)
        .bind(&new.phone)
        .bind(&new.email)
        .bind(&new.address)
        .bind(&new.tax_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_unique(e, "profile already exists"))?;

        Seller::try_from(row)
    }

    /// Update all editable fields in a single statement.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no profile exists for the
    /// identity.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: SellerId,
        update: &SellerUpdate,
    ) -> Result<Seller, RepositoryError> {
        let row = sqlx::query_as::<_, SellerRow>(
            r"
            UPDATE sellers
            SET shop_name = $2, owner_name = $3, phone = $4, address = $5, tax_id = $6
            WHERE id = $1
            RETURNING id, shop_name, owner_name, phone, email, address, tax_id,
                      logo_url, banner_url, verified, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&update.shop_name)
        .bind(&update.owner_name)
        .bind(&update.phone)
        .bind(&update.address)
        .bind(&update.tax_id)
        .fetch_optional(self.pool)
        .await?;

        row.map_or(Err(RepositoryError::NotFound), Seller::try_from)
    }
}
