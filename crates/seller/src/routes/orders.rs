//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use dukaan_core::{OrderId, OrderStatus};

use crate::error::Result;
use crate::middleware::RequireSeller;
use crate::models::{Order, OrderDetail};
use crate::services::orders::OrderService;
use crate::state::AppState;

/// Status update payload. Serde rejects anything outside the five states.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusForm {
    pub status: OrderStatus,
}

/// `GET /orders`
pub async fn list(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderService::new(state.pool())
        .list(seller.seller_id())
        .await?;

    Ok(Json(orders))
}

/// `GET /orders/{id}`
pub async fn show(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
    Path(id): Path<OrderId>,
) -> Result<Json<OrderDetail>> {
    let detail = OrderService::new(state.pool())
        .detail(seller.seller_id(), id)
        .await?;

    Ok(Json(detail))
}

/// `PATCH /orders/{id}/status`
///
/// Persists the new status and bumps the updated timestamp. The response
/// is the updated order; on failure the client keeps its previous state.
pub async fn update_status(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
    Path(id): Path<OrderId>,
    Json(form): Json<UpdateStatusForm>,
) -> Result<Json<Order>> {
    let order = OrderService::new(state.pool())
        .update_status(seller.seller_id(), id, form.status)
        .await?;

    tracing::info!(order_id = %order.id, status = %order.status, "order status updated");

    Ok(Json(order))
}
