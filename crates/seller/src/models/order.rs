//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use dukaan_core::{OrderId, OrderItemId, OrderStatus, ProductId, SellerId};

/// A buyer's purchase directed at one seller.
///
/// Created by the platform's ordering pipeline; this service only reads
/// orders and moves their status. Never deleted.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub seller_id: SellerId,
    /// Buyer details, denormalized: there is no buyer account entity.
    pub buyer_name: String,
    pub buyer_phone: String,
    pub buyer_address: String,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A line item of an order. Immutable after creation; the price is the
/// price at order time, never recomputed from the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub price_at_order: Decimal,
}

/// An order together with its line items, as shown on the detail screen.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}
