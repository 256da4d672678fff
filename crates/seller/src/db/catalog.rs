//! Platform catalog repository.
//!
//! The catalog is platform-owned: sellers read active rows and nothing
//! else. Writes happen only through the seeding tools.

use rust_decimal::Decimal;
use sqlx::PgPool;

use dukaan_core::ProductId;

use super::RepositoryError;
use crate::models::MasterProduct;

/// Internal row type for `master_products` queries.
#[derive(Debug, sqlx::FromRow)]
struct MasterProductRow {
    id: ProductId,
    name: String,
    brand: String,
    category: String,
    base_price: Decimal,
    description: Option<String>,
    image_url: Option<String>,
    active: bool,
}

impl From<MasterProductRow> for MasterProduct {
    fn from(row: MasterProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            brand: row.brand,
            category: row.category,
            base_price: row.base_price,
            description: row.description,
            image_url: row.image_url,
            active: row.active,
        }
    }
}

/// Fields for seeding a catalog item.
#[derive(Debug, Clone)]
pub struct NewMasterProduct {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub base_price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Repository for catalog database operations.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all active catalog items, alphabetically.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<MasterProduct>, RepositoryError> {
        let rows = sqlx::query_as::<_, MasterProductRow>(
            r"
            SELECT id, name, brand, category, base_price, description, image_url, active
            FROM master_products
            WHERE active
            ORDER BY name ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(MasterProduct::from).collect())
    }

    /// Get an active catalog item by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_active(
        &self,
        id: ProductId,
    ) -> Result<Option<MasterProduct>, RepositoryError> {
        let row = sqlx::query_as::<_, MasterProductRow>(
            r"
            SELECT id, name, brand, category, base_price, description, image_url, active
            FROM master_products
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(MasterProduct::from))
    }

    /// Insert a catalog item (seeding only).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn insert(&self, new: &NewMasterProduct) -> Result<MasterProduct, RepositoryError> {
        let row = sqlx::query_as::<_, MasterProductRow>(
            r"
            INSERT INTO master_products (name, brand, category, base_price, description, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, brand, category, base_price, description, image_url, active
            ",
        )
        .bind(&new.name)
        .bind(&new.brand)
        .bind(&new.category)
        .bind(new.base_price)
        .bind(&new.description)
        .bind(&new.image_url)
        .fetch_one(self.pool)
        .await?;

        Ok(MasterProduct::from(row))
    }
}
