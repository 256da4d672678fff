//! Session bootstrap route.
//!
//! The navigation shell of the mobile client calls this once on launch and
//! after every auth change: it reports the current identity, whether a shop
//! profile exists for it, and the screen to land on.

use axum::{Json, extract::State};
use serde::Serialize;

use dukaan_core::SellerId;

use crate::error::Result;
use crate::middleware::OptionalSeller;
use crate::models::CurrentSeller;
use crate::services::profile::{NextRoute, ProfileService, next_route};
use crate::state::AppState;

/// Session bootstrap response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub seller_id: Option<SellerId>,
    pub profile_exists: bool,
    pub next: NextRoute,
}

/// Build the bootstrap response for an (optionally) signed-in account.
pub(crate) async fn session_response(
    state: &AppState,
    seller: Option<&CurrentSeller>,
) -> Result<SessionResponse> {
    let Some(seller) = seller else {
        return Ok(SessionResponse {
            authenticated: false,
            seller_id: None,
            profile_exists: false,
            next: next_route(false, false),
        });
    };

    let seller_id = seller.seller_id();
    let profile_exists = ProfileService::new(state.pool()).exists(seller_id).await?;

    Ok(SessionResponse {
        authenticated: true,
        seller_id: Some(seller_id),
        profile_exists,
        next: next_route(true, profile_exists),
    })
}

/// `GET /session`
pub async fn show(
    State(state): State<AppState>,
    OptionalSeller(seller): OptionalSeller,
) -> Result<Json<SessionResponse>> {
    let response = session_response(&state, seller.as_ref()).await?;
    Ok(Json(response))
}
