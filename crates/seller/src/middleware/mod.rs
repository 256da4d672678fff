//! Middleware for the seller service.
//!
//! - [`session`] - Postgres-backed session layer
//! - [`auth`] - Extractors for the signed-in seller identity
//! - [`rate_limit`] - Per-IP rate limiting for auth endpoints

pub mod auth;
pub mod rate_limit;
pub mod session;

pub use auth::{OptionalSeller, RequireSeller, clear_current_seller, set_current_seller};
pub use rate_limit::{api_rate_limiter, auth_rate_limiter};
pub use session::create_session_layer;
