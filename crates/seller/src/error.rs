//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers return `Result<T, AppError>`.
//! The client gets exactly one human-readable message per failure; internal
//! detail stays in logs and Sentry.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::oauth::OauthError;
use crate::services::auth::AuthError;
use crate::services::inventory::InventoryError;
use crate::services::notifications::NotificationError;
use crate::services::orders::OrderError;
use crate::services::profile::ProfileError;

/// Application-level error type for the seller service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Profile operation failed.
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Inventory operation failed.
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// Order operation failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Notification operation failed.
    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),

    /// OAuth provider interaction failed.
    #[error("OAuth error: {0}")]
    Oauth(#[from] OauthError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Session store failure.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body: one message per failure.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Internal(_) | Self::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Oauth(err) => match err {
                OauthError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
                OauthError::StateMismatch | OauthError::MissingCode => StatusCode::BAD_REQUEST,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials
                | AuthError::InvalidOtp
                | AuthError::OtpExpired => StatusCode::UNAUTHORIZED,
                AuthError::AccountExists => StatusCode::CONFLICT,
                AuthError::WeakPassword(_)
                | AuthError::PasswordMismatch
                | AuthError::InvalidEmail(_)
                | AuthError::InvalidPhone(_) => StatusCode::BAD_REQUEST,
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Profile(err) => match err {
                ProfileError::AlreadyExists => StatusCode::CONFLICT,
                ProfileError::NotFound => StatusCode::NOT_FOUND,
                ProfileError::MissingField(_)
                | ProfileError::InvalidEmail(_)
                | ProfileError::InvalidPhone(_) => StatusCode::BAD_REQUEST,
                ProfileError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Inventory(err) => match err {
                InventoryError::AlreadyAdded => StatusCode::CONFLICT,
                InventoryError::ProductNotFound | InventoryError::NotFound => {
                    StatusCode::NOT_FOUND
                }
                InventoryError::InvalidUpdate(_) => StatusCode::BAD_REQUEST,
                InventoryError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Order(err) => match err {
                OrderError::NotFound => StatusCode::NOT_FOUND,
                OrderError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Notification(err) => match err {
                NotificationError::NotFound => StatusCode::NOT_FOUND,
                NotificationError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// The message shown to the client. Internal failures are scrubbed to a
    /// generic message; validation and conflict errors pass through.
    fn client_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) | Self::Session(_) => {
                "Something went wrong. Please try again.".to_owned()
            }
            Self::Oauth(err) => match err {
                OauthError::NotConfigured => "Social sign-in is not available".to_owned(),
                OauthError::StateMismatch | OauthError::MissingCode => {
                    "Sign-in could not be completed. Please try again.".to_owned()
                }
                _ => "The sign-in provider is unavailable".to_owned(),
            },
            Self::Auth(err) => match err {
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    "Something went wrong. Please try again.".to_owned()
                }
                AuthError::InvalidCredentials => "Invalid email or password".to_owned(),
                other => other.to_string(),
            },
            Self::Profile(ProfileError::Repository(_))
            | Self::Inventory(InventoryError::Repository(_))
            | Self::Order(OrderError::Repository(_))
            | Self::Notification(NotificationError::Repository(_)) => {
                "Something went wrong. Please try again.".to_owned()
            }
            Self::Profile(err) => err.to_string(),
            Self::Inventory(err) => err.to_string(),
            Self::Order(err) => err.to_string(),
            Self::Notification(err) => err.to_string(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Unauthorized(msg) | Self::BadRequest(msg) => msg.clone(),
        }
    }

    fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let body = ErrorBody {
            error: self.client_message(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from a seller identity.
///
/// Call this after successful authentication to associate errors with
/// accounts.
pub fn set_sentry_user(account_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(account_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on sign-out to stop associating errors with the account.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("order".to_string());
        assert_eq!(err.to_string(), "Not found: order");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("order".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized("sign in first".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::BadRequest("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::AccountExists)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::WeakPassword(
                "too short".to_string()
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::PasswordMismatch)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_duplicate_adoption_is_conflict() {
        assert_eq!(
            get_status(AppError::Inventory(InventoryError::AlreadyAdded)),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_internal_detail_is_scrubbed() {
        let err = AppError::Internal("connection pool exhausted".to_string());
        let msg = err.client_message();
        assert!(!msg.contains("pool"));
    }
}
