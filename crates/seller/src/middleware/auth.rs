//! Authentication extractors.
//!
//! Route handlers take [`RequireSeller`] to get the signed-in identity or a
//! 401, and [`OptionalSeller`] where a guest is acceptable. The identity
//! lives in the session; nothing here touches the database.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentSeller, session_keys};

/// Extractor that requires a signed-in seller.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireSeller(seller): RequireSeller,
/// ) -> impl IntoResponse {
///     format!("seller {}", seller.seller_id())
/// }
/// ```
pub struct RequireSeller(pub CurrentSeller);

/// Rejection for unauthenticated requests. The client is a mobile app, so
/// this is always a plain 401 rather than a login-page redirect.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

impl<S> FromRequestParts<S> for RequireSeller
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts.extensions.get::<Session>().ok_or(AuthRejection)?;

        let seller: CurrentSeller = session
            .get(session_keys::CURRENT_SELLER)
            .await
            .ok()
            .flatten()
            .ok_or(AuthRejection)?;

        Ok(Self(seller))
    }
}

/// Extractor that optionally gets the signed-in seller.
///
/// Unlike `RequireSeller`, this does not reject unauthenticated requests.
pub struct OptionalSeller(pub Option<CurrentSeller>);

impl<S> FromRequestParts<S> for OptionalSeller
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let seller = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentSeller>(session_keys::CURRENT_SELLER)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(seller))
    }
}

/// Helper to store the signed-in seller in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_seller(
    session: &Session,
    seller: &CurrentSeller,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_SELLER, seller).await
}

/// Helper to clear the signed-in seller from the session (sign-out).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_seller(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentSeller>(session_keys::CURRENT_SELLER)
        .await?;
    Ok(())
}
