//! Order repository.
//!
//! Sellers read and re-status their own orders; creation belongs to the
//! platform's ordering pipeline (exposed here only for seeding and tests).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use dukaan_core::{OrderId, OrderItemId, OrderStatus, ProductId, SellerId};

use super::RepositoryError;
use crate::models::{Order, OrderItem};

/// Internal row type for `orders` queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    seller_id: SellerId,
    buyer_name: String,
    buyer_phone: String,
    buyer_address: String,
    status: OrderStatus,
    total_amount: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            seller_id: row.seller_id,
            buyer_name: row.buyer_name,
            buyer_phone: row.buyer_phone,
            buyer_address: row.buyer_address,
            status: row.status,
            total_amount: row.total_amount,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Internal row type for `order_items` queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: OrderItemId,
    order_id: OrderId,
    product_id: ProductId,
    quantity: i32,
    price_at_order: Decimal,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            id: row.id,
            order_id: row.order_id,
            product_id: row.product_id,
            quantity: row.quantity,
            price_at_order: row.price_at_order,
        }
    }
}

/// A line item for order creation (seeding only). Prices are snapshotted
/// at creation and never touched again.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub quantity: i32,
    pub price_at_order: Decimal,
}

/// Fields for order creation (seeding only).
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub buyer_name: String,
    pub buyer_phone: String,
    pub buyer_address: String,
    pub total_amount: Decimal,
    pub items: Vec<NewOrderItem>,
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the seller's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, seller_id: SellerId) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, seller_id, buyer_name, buyer_phone, buyer_address,
                   status, total_amount, created_at, updated_at
            FROM orders
            WHERE seller_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(seller_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    /// Get one of the seller's orders by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(
        &self,
        seller_id: SellerId,
        id: OrderId,
    ) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, seller_id, buyer_name, buyer_phone, buyer_address,
                   status, total_amount, created_at, updated_at
            FROM orders
            WHERE id = $1 AND seller_id = $2
            ",
        )
        .bind(id)
        .bind(seller_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Order::from))
    }

    /// Line items of an order. Callers must have owner-scoped the order
    /// first (via [`Self::get`]).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderItemRow>(
            r"
            SELECT id, order_id, product_id, quantity, price_at_order
            FROM order_items
            WHERE order_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderItem::from).collect())
    }

    /// Persist a new status (and bump `updated_at`), returning the updated
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order does not exist or
    /// is not owned by this seller.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update_status(
        &self,
        seller_id: SellerId,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            UPDATE orders
            SET status = $3
            WHERE id = $1 AND seller_id = $2
            RETURNING id, seller_id, buyer_name, buyer_phone, buyer_address,
                      status, total_amount, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(seller_id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?;

        row.map_or(Err(RepositoryError::NotFound), |r| Ok(Order::from(r)))
    }

    /// Create an order with its items, atomically (seeding only).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails.
    pub async fn create(
        &self,
        seller_id: SellerId,
        new: &NewOrder,
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, OrderRow>(
            r"
            INSERT INTO orders (seller_id, buyer_name, buyer_phone, buyer_address, total_amount)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, seller_id, buyer_name, buyer_phone, buyer_address,
                      status, total_amount, created_at, updated_at
            ",
        )
        .bind(seller_id)
        .bind(&new.buyer_name)
        .bind(&new.buyer_phone)
        .bind(&new.buyer_address)
        .bind(new.total_amount)
        .fetch_one(&mut *tx)
        .await?;

        for item in &new.items {
            sqlx::query(
                r"
                INSERT INTO order_items (order_id, product_id, quantity, price_at_order)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(row.id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price_at_order)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Order::from(row))
    }
}
