//! Catalog browsing route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::error::Result;
use crate::middleware::RequireSeller;
use crate::models::CatalogEntry;
use crate::services::catalog::CatalogService;
use crate::state::AppState;

/// Catalog query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against name, brand, and category.
    pub q: Option<String>,
}

/// `GET /catalog`
///
/// Lists all active catalog items, each marked with whether the caller
/// already carries it.
pub async fn browse(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<CatalogEntry>>> {
    let entries = CatalogService::new(state.pool())
        .browse(seller.seller_id(), query.q.as_deref())
        .await?;

    Ok(Json(entries))
}
