//! Shop profile route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::error::Result;
use crate::middleware::RequireSeller;
use crate::models::Seller;
use crate::services::profile::{ProfileEdit, ProfileInput, ProfileService};
use crate::state::AppState;

/// Profile creation payload. All fields except `tax_id` are required.
#[derive(Debug, Deserialize)]
pub struct CreateProfileForm {
    pub shop_name: String,
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub tax_id: Option<String>,
}

/// Profile edit payload. The email is immutable and not accepted here.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileForm {
    pub shop_name: String,
    pub owner_name: String,
    pub phone: String,
    pub address: String,
    pub tax_id: Option<String>,
}

/// `GET /profile`
pub async fn show(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
) -> Result<Json<Seller>> {
    let profile = ProfileService::new(state.pool())
        .get(seller.seller_id())
        .await?;

    Ok(Json(profile))
}

/// `POST /profile`
///
/// Creates the shop profile for the signed-in identity. Exactly one
/// profile may exist per identity; a second attempt is a conflict.
pub async fn create(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
    Json(form): Json<CreateProfileForm>,
) -> Result<(StatusCode, Json<Seller>)> {
    let input = ProfileInput {
        shop_name: form.shop_name,
        owner_name: form.owner_name,
        phone: form.phone,
        email: form.email,
        address: form.address,
        tax_id: form.tax_id,
    };

    let profile = ProfileService::new(state.pool())
        .create(seller.seller_id(), input)
        .await?;

    tracing::info!(seller_id = %profile.id, "shop profile created");

    Ok((StatusCode::CREATED, Json(profile)))
}

/// `PUT /profile`
///
/// Saves all editable fields in a single update. Unsaved client-side edits
/// are discarded by the client reloading from this response.
pub async fn update(
    State(state): State<AppState>,
    RequireSeller(seller): RequireSeller,
    Json(form): Json<UpdateProfileForm>,
) -> Result<Json<Seller>> {
    let edit = ProfileEdit {
        shop_name: form.shop_name,
        owner_name: form.owner_name,
        phone: form.phone,
        address: form.address,
        tax_id: form.tax_id,
    };

    let profile = ProfileService::new(state.pool())
        .update(seller.seller_id(), edit)
        .await?;

    Ok(Json(profile))
}
