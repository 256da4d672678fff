//! Inventory route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use dukaan_core::{ProductId, SellerProductId, StockStatus};

use crate::error::Result;
use crate::middleware::RequireSeller;
use crate::models::{InventoryItem, SellerProduct};
use crate::services::inventory::InventoryService;
use crate::state::AppState;

/// Adoption payload.
#[derive(Debug, Deserialize)]
pub struct AdoptForm {
    pub product_id: ProductId,
}

/// Inventory update payload. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateInventoryForm {
    pub stock_status: Option<StockStatus>,
    pub custom_price: Option<Decimal>,
}

/// `GET /inventory`
pub async fn list(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
) -> Result<Json<Vec<InventoryItem>>> {
    let items = InventoryService::new(state.pool())
        .list(seller.seller_id())
        .await?;

    Ok(Json(items))
}

/// `POST /inventory`
///
/// Adopts a catalog item into the shop with default stock status
/// `available`. Adding the same product twice is a conflict, not a silent
/// no-op, so a double-tap gets feedback.
pub async fn adopt(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
    Json(form): Json<AdoptForm>,
) -> Result<(StatusCode, Json<SellerProduct>)> {
    let item = InventoryService::new(state.pool())
        .adopt(seller.seller_id(), form.product_id)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// `PATCH /inventory/{id}`
///
/// Toggles stock status and/or sets the price override. The response is
/// the updated row; the client replaces its local state only on success.
pub async fn update(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
    Path(id): Path<SellerProductId>,
    Json(form): Json<UpdateInventoryForm>,
) -> Result<Json<SellerProduct>> {
    let item = InventoryService::new(state.pool())
        .update(seller.seller_id(), id, form.stock_status, form.custom_price)
        .await?;

    Ok(Json(item))
}

/// `DELETE /inventory/{id}`
///
/// Hard-deletes the shop item. The catalog entry and past orders are
/// unaffected.
pub async fn remove(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
    Path(id): Path<SellerProductId>,
) -> Result<StatusCode> {
    InventoryService::new(state.pool())
        .remove(seller.seller_id(), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
