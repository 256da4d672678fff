//! HTTP route handlers for the seller API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (verifies database)
//!
//! # Session bootstrap
//! GET  /session                - Identity + profile existence + next route
//!
//! # Auth
//! POST /auth/register          - Register with email/password
//! POST /auth/login             - Sign in with email/password
//! POST /auth/otp/request       - Request a phone one-time code
//! POST /auth/otp/verify        - Verify a one-time code
//! GET  /auth/oauth/login       - Redirect to the identity provider
//! GET  /auth/oauth/callback    - Handle the provider callback
//! POST /auth/logout            - Destroy the session
//!
//! # Profile (requires auth)
//! GET  /profile                - View the shop profile
//! POST /profile                - Create the shop profile (once)
//! PUT  /profile                - Save all editable fields
//!
//! # Catalog (requires auth)
//! GET  /catalog?q=             - Active catalog, marked with "added"
//!
//! # Inventory (requires auth)
//! GET    /inventory            - The seller's shop items
//! POST   /inventory            - Adopt a catalog item
//! PATCH  /inventory/{id}       - Toggle stock / set price override
//! DELETE /inventory/{id}       - Remove from shop
//!
//! # Orders (requires auth)
//! GET   /orders                - Orders, newest first
//! GET   /orders/{id}           - Order detail with line items
//! PATCH /orders/{id}/status    - Persist a new status
//!
//! # Notifications (requires auth)
//! GET  /notifications          - Notifications, newest first
//! POST /notifications/{id}/read - Mark one as read
//! ```

pub mod auth;
pub mod catalog;
pub mod inventory;
pub mod notifications;
pub mod oauth;
pub mod orders;
pub mod profile;
pub mod session;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::middleware::{api_rate_limiter, auth_rate_limiter};
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/otp/request", post(auth::otp_request))
        .route("/otp/verify", post(auth::otp_verify))
        .route("/logout", post(auth::logout))
        // External identity provider OAuth
        .route("/oauth/login", get(oauth::login))
        .route("/oauth/callback", get(oauth::callback))
}

/// Create the profile routes router.
pub fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(profile::show).post(profile::create).put(profile::update),
    )
}

/// Create the inventory routes router.
pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(inventory::list).post(inventory::adopt))
        .route(
            "/{id}",
            patch(inventory::update).delete(inventory::remove),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list))
        .route("/{id}", get(orders::show))
        .route("/{id}/status", patch(orders::update_status))
}

/// Create the notification routes router.
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::list))
        .route("/{id}/read", post(notifications::mark_read))
}

/// Create all routes for the seller API.
pub fn routes() -> Router<AppState> {
    let api = Router::new()
        .route("/session", get(session::show))
        .nest("/profile", profile_routes())
        .route("/catalog", get(catalog::browse))
        .nest("/inventory", inventory_routes())
        .nest("/orders", order_routes())
        .nest("/notifications", notification_routes())
        .layer(api_rate_limiter());

    Router::new()
        .merge(api)
        .nest("/auth", auth_routes().layer(auth_rate_limiter()))
}
