//! Inventory management service.

use rust_decimal::Decimal;
use sqlx::PgPool;

use dukaan_core::{ProductId, SellerId, SellerProductId, StockStatus};

use crate::db::RepositoryError;
use crate::db::catalog::CatalogRepository;
use crate::db::inventory::{InventoryRepository, InventoryUpdate};
use crate::models::{InventoryItem, SellerProduct};

/// Errors from inventory operations.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// The catalog item does not exist or is inactive.
    #[error("product not found")]
    ProductNotFound,

    /// The seller already carries this product.
    #[error("product is already in your shop")]
    AlreadyAdded,

    /// The inventory row does not exist or is not owned by the caller.
    #[error("inventory item not found")]
    NotFound,

    /// Nothing to change, or an invalid value.
    #[error("{0}")]
    InvalidUpdate(&'static str),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Inventory management service.
pub struct InventoryService<'a> {
    inventory: InventoryRepository<'a>,
    catalog: CatalogRepository<'a>,
}

impl<'a> InventoryService<'a> {
    /// Create a new inventory service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            inventory: InventoryRepository::new(pool),
            catalog: CatalogRepository::new(pool),
        }
    }

    /// The caller's inventory with catalog details.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Repository` if the query fails.
    pub async fn list(&self, seller_id: SellerId) -> Result<Vec<InventoryItem>, InventoryError> {
        Ok(self.inventory.list(seller_id).await?)
    }

    /// Adopt an active catalog item with default stock status `available`.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::ProductNotFound` if the catalog item is
    /// missing or inactive.
    /// Returns `InventoryError::AlreadyAdded` on the unique-pair violation,
    /// so a double-tap surfaces instead of silently no-opping.
    pub async fn adopt(
        &self,
        seller_id: SellerId,
        product_id: ProductId,
    ) -> Result<SellerProduct, InventoryError> {
        if self.catalog.get_active(product_id).await?.is_none() {
            return Err(InventoryError::ProductNotFound);
        }

        self.inventory
            .adopt(seller_id, product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => InventoryError::AlreadyAdded,
                other => InventoryError::Repository(other),
            })
    }

    /// Update stock status and/or price override on an owned row.
    ///
    /// The caller's view state should only change once this returns the
    /// updated row; on failure the previous state still stands.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidUpdate` if no change was requested
    /// or the price override is not positive.
    /// Returns `InventoryError::NotFound` for missing or unowned rows.
    pub async fn update(
        &self,
        seller_id: SellerId,
        id: SellerProductId,
        stock_status: Option<StockStatus>,
        custom_price: Option<Decimal>,
    ) -> Result<SellerProduct, InventoryError> {
        if stock_status.is_none() && custom_price.is_none() {
            return Err(InventoryError::InvalidUpdate("nothing to update"));
        }

        if let Some(price) = custom_price
            && price <= Decimal::ZERO
        {
            return Err(InventoryError::InvalidUpdate("price must be positive"));
        }

        let update = InventoryUpdate {
            stock_status,
            custom_price,
        };

        self.inventory
            .update(seller_id, id, &update)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => InventoryError::NotFound,
                other => InventoryError::Repository(other),
            })
    }

    /// Remove an owned row (hard delete).
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::NotFound` for missing or unowned rows.
    pub async fn remove(
        &self,
        seller_id: SellerId,
        id: SellerProductId,
    ) -> Result<(), InventoryError> {
        if self.inventory.remove(seller_id, id).await? {
            Ok(())
        } else {
            Err(InventoryError::NotFound)
        }
    }
}
