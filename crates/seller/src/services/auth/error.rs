//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] dukaan_core::EmailError),

    /// Invalid phone number format.
    #[error("invalid phone: {0}")]
    InvalidPhone(#[from] dukaan_core::PhoneError),

    /// Invalid credentials (wrong password or unknown email).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Account already exists for this email or phone.
    #[error("account already exists")]
    AccountExists,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password and confirmation do not match.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The one-time code is wrong, or no challenge is live for this phone.
    #[error("invalid one-time code")]
    InvalidOtp,

    /// The one-time code expired; a new one must be requested.
    #[error("one-time code expired")]
    OtpExpired,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
