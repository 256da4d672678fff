//! Authentication route handlers.
//!
//! Every successful flow ends the same way: the account identity goes into
//! the session, and the client receives the same bootstrap payload as
//! `GET /session`, so it can route straight to profile setup or the
//! dashboard without a second round trip.

use axum::{Json, extract::State};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{clear_current_seller, set_current_seller};
use crate::models::{AuthAccount, CurrentSeller};
use crate::routes::session::{SessionResponse, session_response};
use crate::services::auth::AuthService;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Registration payload.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Sign-in payload.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// OTP request payload.
#[derive(Debug, Deserialize)]
pub struct OtpRequestForm {
    pub phone: String,
}

/// OTP verification payload.
#[derive(Debug, Deserialize)]
pub struct OtpVerifyForm {
    pub phone: String,
    pub code: String,
}

// =============================================================================
// Helpers
// =============================================================================

/// Store the account in the session and build the bootstrap response.
pub(crate) async fn establish_session(
    state: &AppState,
    session: &Session,
    account: AuthAccount,
) -> Result<SessionResponse> {
    let current = CurrentSeller {
        account_id: account.id,
        email: account.email,
        phone: account.phone,
    };

    set_current_seller(session, &current).await?;
    set_sentry_user(&current.account_id, current.email.as_ref().map(|e| e.as_str()));

    session_response(state, Some(&current)).await
}

// =============================================================================
// Routes
// =============================================================================

/// `POST /auth/register`
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<RegisterForm>,
) -> Result<Json<SessionResponse>> {
    let account = AuthService::new(state.pool())
        .register_with_password(&form.email, &form.password, &form.password_confirm)
        .await?;

    tracing::info!(account_id = %account.id, "seller registered");

    let response = establish_session(&state, &session, account).await?;
    Ok(Json(response))
}

/// `POST /auth/login`
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<SessionResponse>> {
    let account = AuthService::new(state.pool())
        .login_with_password(&form.email, &form.password)
        .await?;

    let response = establish_session(&state, &session, account).await?;
    Ok(Json(response))
}

/// `POST /auth/otp/request`
///
/// Issues a fresh one-time code, invalidating any previous one for the
/// phone. Always returns the canonical phone the code went to.
pub async fn otp_request(
    State(state): State<AppState>,
    Json(form): Json<OtpRequestForm>,
) -> Result<Json<serde_json::Value>> {
    let phone = AuthService::new(state.pool())
        .request_phone_otp(&form.phone)
        .await?;

    Ok(Json(serde_json::json!({ "sent_to": phone })))
}

/// `POST /auth/otp/verify`
pub async fn otp_verify(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<OtpVerifyForm>,
) -> Result<Json<SessionResponse>> {
    let account = AuthService::new(state.pool())
        .verify_phone_otp(&form.phone, &form.code)
        .await?;

    let response = establish_session(&state, &session, account).await?;
    Ok(Json(response))
}

/// `POST /auth/logout`
///
/// Destroys the session context entirely; the next bootstrap call routes
/// to the login screen.
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<SessionResponse>> {
    clear_current_seller(&session).await?;
    session.flush().await?;
    clear_sentry_user();

    let response = session_response(&state, None).await?;
    Ok(Json(response))
}
