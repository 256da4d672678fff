//! OAuth route handlers.
//!
//! Handles the authorization-code flow against the configured identity
//! provider:
//! - Login: stores a CSRF state in the session and redirects to the provider
//! - Callback: validates the state, exchanges the code server-side, reads
//!   the asserted email, and establishes the session

use axum::{
    Json,
    extract::{Query, State},
    response::Redirect,
};
use rand::Rng;
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::models::session_keys;
use crate::oauth::OauthError;
use crate::routes::auth::establish_session;
use crate::routes::session::SessionResponse;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Query parameters from the provider callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    /// Authorization code to exchange for tokens.
    pub code: Option<String>,
    /// State parameter for CSRF protection.
    pub state: Option<String>,
    /// Error code if authorization failed.
    pub error: Option<String>,
    /// Error description.
    pub error_description: Option<String>,
}

/// Generate a cryptographically random URL-safe string.
fn generate_random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            // SAFETY: idx is always within bounds since random_range returns 0..CHARSET.len()
            char::from(*CHARSET.get(idx).expect("idx within bounds"))
        })
        .collect()
}

/// The redirect URI registered with the provider.
fn redirect_uri(state: &AppState) -> String {
    format!("{}/auth/oauth/callback", state.config().base_url)
}

/// `GET /auth/oauth/login`
///
/// Generates the CSRF state, stores it in the session, and redirects to
/// the provider's authorization page.
pub async fn login(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let oauth = state.oauth()?;

    let csrf_state = generate_random_string(32);
    session
        .insert(session_keys::OAUTH_STATE, &csrf_state)
        .await?;

    let auth_url = oauth.authorization_url(&redirect_uri(&state), &csrf_state)?;

    Ok(Redirect::to(&auth_url))
}

/// `GET /auth/oauth/callback`
///
/// Validates the state parameter (one-time use), exchanges the code, reads
/// the provider's email claim, and signs that identity in.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CallbackQuery>,
) -> Result<Json<SessionResponse>> {
    let oauth = state.oauth()?;

    // Provider-reported denial
    if let Some(error) = query.error {
        let description = query.error_description.unwrap_or_default();
        tracing::warn!(error, description, "oauth provider returned an error");
        return Err(AppError::Oauth(OauthError::Provider(error)));
    }

    let code = query.code.ok_or(OauthError::MissingCode)?;
    let returned_state = query.state.ok_or(OauthError::StateMismatch)?;

    let stored_state: Option<String> = session
        .get(session_keys::OAUTH_STATE)
        .await
        .ok()
        .flatten();

    if stored_state.as_deref() != Some(returned_state.as_str()) {
        tracing::warn!("oauth state mismatch");
        return Err(AppError::Oauth(OauthError::StateMismatch));
    }

    // The state is one-time use.
    let _ = session.remove::<String>(session_keys::OAUTH_STATE).await;

    let access_token = oauth.exchange_code(&code, &redirect_uri(&state)).await?;
    let email = oauth.fetch_email(&access_token).await?;

    let account = AuthService::new(state.pool())
        .login_with_provider_email(&email)
        .await?;

    tracing::info!(account_id = %account.id, "oauth sign-in completed");

    let response = establish_session(&state, &session, account).await?;
    Ok(Json(response))
}
