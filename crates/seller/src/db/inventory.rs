//! Seller inventory repository.
//!
//! Everything here is owner-scoped: the seller id comes from the session
//! and is part of every statement, so one seller can never see or touch
//! another's adoptions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use dukaan_core::{ProductId, SellerId, SellerProductId, StockStatus};

use super::RepositoryError;
use crate::models::{InventoryItem, SellerProduct};

/// Internal row type for `seller_products` queries.
#[derive(Debug, sqlx::FromRow)]
struct SellerProductRow {
    id: SellerProductId,
    seller_id: SellerId,
    product_id: ProductId,
    custom_price: Option<Decimal>,
    stock_status: StockStatus,
    added_at: DateTime<Utc>,
}

impl From<SellerProductRow> for SellerProduct {
    fn from(row: SellerProductRow) -> Self {
        Self {
            id: row.id,
            seller_id: row.seller_id,
            product_id: row.product_id,
            custom_price: row.custom_price,
            stock_status: row.stock_status,
            added_at: row.added_at,
        }
    }
}

/// Internal row type for the inventory join with catalog details.
#[derive(Debug, sqlx::FromRow)]
struct InventoryItemRow {
    id: SellerProductId,
    product_id: ProductId,
    name: String,
    brand: String,
    category: String,
    base_price: Decimal,
    custom_price: Option<Decimal>,
    image_url: Option<String>,
    stock_status: StockStatus,
    added_at: DateTime<Utc>,
}

impl From<InventoryItemRow> for InventoryItem {
    fn from(row: InventoryItemRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            name: row.name,
            brand: row.brand,
            category: row.category,
            base_price: row.base_price,
            custom_price: row.custom_price,
            image_url: row.image_url,
            stock_status: row.stock_status,
            added_at: row.added_at,
        }
    }
}

/// Changes to apply to an inventory row. `None` fields are left as-is.
#[derive(Debug, Clone, Default)]
pub struct InventoryUpdate {
    pub stock_status: Option<StockStatus>,
    pub custom_price: Option<Decimal>,
}

/// Repository for seller inventory database operations.
pub struct InventoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InventoryRepository<'a> {
    /// Create a new inventory repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the seller's inventory joined with catalog details, newest
    /// adoption first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, seller_id: SellerId) -> Result<Vec<InventoryItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, InventoryItemRow>(
            r"
            SELECT sp.id, sp.product_id, mp.name, mp.brand, mp.category,
                   mp.base_price, sp.custom_price, mp.image_url,
                   sp.stock_status, sp.added_at
            FROM seller_products sp
            JOIN master_products mp ON mp.id = sp.product_id
            WHERE sp.seller_id = $1
            ORDER BY sp.added_at DESC
            ",
        )
        .bind(seller_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(InventoryItem::from).collect())
    }

    /// IDs of the catalog items this seller has already adopted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn adopted_product_ids(
        &self,
        seller_id: SellerId,
    ) -> Result<Vec<ProductId>, RepositoryError> {
        let rows: Vec<(ProductId,)> =
            sqlx::query_as("SELECT product_id FROM seller_products WHERE seller_id = $1")
                .bind(seller_id)
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Adopt a catalog item into the seller's storefront.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the seller already carries
    /// this product (unique pair violation, e.g. a double-tap race).
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn adopt(
        &self,
        seller_id: SellerId,
        product_id: ProductId,
    ) -> Result<SellerProduct, RepositoryError> {
        let row = sqlx::query_as::<_, SellerProductRow>(
            r"
            INSERT INTO seller_products (seller_id, product_id)
            VALUES ($1, $2)
            RETURNING id, seller_id, product_id, custom_price, stock_status, added_at
            ",
        )
        .bind(seller_id)
        .bind(product_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_unique(e, "product already in shop"))?;

        Ok(SellerProduct::from(row))
    }

    /// Apply an update to an owned inventory row, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the row does not exist or is
    /// not owned by this seller.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        seller_id: SellerId,
        id: SellerProductId,
        update: &InventoryUpdate,
    ) -> Result<SellerProduct, RepositoryError> {
        let row = sqlx::query_as::<_, SellerProductRow>(
            r"
            UPDATE seller_products
            SET stock_status = COALESCE($3, stock_status),
                custom_price = COALESCE($4, custom_price)
            WHERE id = $1 AND seller_id = $2
            RETURNING id, seller_id, product_id, custom_price, stock_status, added_at
            ",
        )
        .bind(id)
        .bind(seller_id)
        .bind(update.stock_status)
        .bind(update.custom_price)
        .fetch_optional(self.pool)
        .await?;

        row.map_or(Err(RepositoryError::NotFound), |r| Ok(SellerProduct::from(r)))
    }

    /// Remove an owned inventory row. The catalog item and past orders are
    /// unaffected.
    ///
    /// # Returns
    ///
    /// `true` if a row was deleted, `false` if nothing matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn remove(
        &self,
        seller_id: SellerId,
        id: SellerProductId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM seller_products WHERE id = $1 AND seller_id = $2")
            .bind(id)
            .bind(seller_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
