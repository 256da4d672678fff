//! Notification route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use dukaan_core::NotificationId;

use crate::error::Result;
use crate::middleware::RequireSeller;
use crate::models::Notification;
use crate::services::notifications::NotificationService;
use crate::state::AppState;

/// `GET /notifications`
pub async fn list(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
) -> Result<Json<Vec<Notification>>> {
    let notifications = NotificationService::new(state.pool())
        .list(seller.seller_id())
        .await?;

    Ok(Json(notifications))
}

/// `POST /notifications/{id}/read`
pub async fn mark_read(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
    Path(id): Path<NotificationId>,
) -> Result<StatusCode> {
    NotificationService::new(state.pool())
        .mark_read(seller.seller_id(), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
