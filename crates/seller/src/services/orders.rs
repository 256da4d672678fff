//! Order management service.

use sqlx::PgPool;

use dukaan_core::{OrderId, OrderStatus, SellerId};

use crate::db::RepositoryError;
use crate::db::orders::OrderRepository;
use crate::models::{Order, OrderDetail};

/// Errors from order operations.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// The order does not exist or is not owned by the caller.
    #[error("order not found")]
    NotFound,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Order management service.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
        }
    }

    /// The caller's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` if the query fails.
    pub async fn list(&self, seller_id: SellerId) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.list(seller_id).await?)
    }

    /// One of the caller's orders with its line items.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` for missing or unowned orders.
    pub async fn detail(
        &self,
        seller_id: SellerId,
        id: OrderId,
    ) -> Result<OrderDetail, OrderError> {
        let order = self
            .orders
            .get(seller_id, id)
            .await?
            .ok_or(OrderError::NotFound)?;

        let items = self.orders.items(order.id).await?;

        Ok(OrderDetail { order, items })
    }

    /// Move an order to a new status and bump its updated timestamp.
    ///
    /// The transition graph is deliberately unrestricted: any of the five
    /// states can be set regardless of the current one (see DESIGN.md).
    /// Only the returned order reflects the change; on failure the caller's
    /// view keeps its previous state.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` for missing or unowned orders.
    pub async fn update_status(
        &self,
        seller_id: SellerId,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        self.orders
            .update_status(seller_id, id, status)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })
    }
}
