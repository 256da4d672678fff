//! Authentication service.
//!
//! Provides password, phone OTP, and OAuth-assisted authentication. All
//! input validation happens before any database work, so a malformed email,
//! weak password, or `+`-less phone number never leaves the process.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::PgPool;

use dukaan_core::{Email, Phone};

use crate::db::RepositoryError;
use crate::db::accounts::AccountRepository;
use crate::db::otp::OtpRepository;
use crate::models::AuthAccount;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Digits in a one-time code.
const OTP_CODE_LENGTH: u32 = 6;

/// How long a one-time code stays valid.
const OTP_TTL_MINUTES: i64 = 5;

/// Authentication service.
///
/// Handles registration, sign-in, and the phone OTP challenge flow.
pub struct AuthService<'a> {
    accounts: AccountRepository<'a>,
    otp: OtpRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            accounts: AccountRepository::new(pool),
            otp: OtpRepository::new(pool),
        }
    }

    // =========================================================================
    // Password Authentication
    // =========================================================================

    /// Register a new account with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` / `AuthError::PasswordMismatch` if
    /// the password fails validation.
    /// Returns `AuthError::AccountExists` if the email is already registered.
    pub async fn register_with_password(
        &self,
        email: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<AuthAccount, AuthError> {
        let email = Email::parse(email)?;
        validate_signup(password, password_confirm)?;

        let password_hash = hash_password(password)?;

        let account = self
            .accounts
            .create_with_password(&email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::AccountExists,
                other => AuthError::Repository(other),
            })?;

        Ok(account)
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown, has
    /// no password set, or the password is wrong (indistinguishably).
    pub async fn login_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthAccount, AuthError> {
        let email = Email::parse(email)?;

        let (account, password_hash) = self
            .accounts
            .get_password_hash(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(account)
    }

    // =========================================================================
    // Phone OTP
    // =========================================================================

    /// Issue a one-time code for a phone number.
    ///
    /// Replaces any live challenge for the phone, which invalidates the
    /// previously issued code. Returns the canonical phone the code was
    /// issued for.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidPhone` if the number fails validation
    /// (checked before any database work).
    pub async fn request_phone_otp(&self, phone: &str) -> Result<Phone, AuthError> {
        let phone = Phone::parse(phone)?;

        let code = generate_otp_code();
        let code_hash = hash_password(&code)?;
        let expires_at = Utc::now() + Duration::minutes(OTP_TTL_MINUTES);

        self.otp.put(&phone, &code_hash, expires_at).await?;

        deliver_otp(&phone, &code);

        Ok(phone)
    }

    /// Verify a one-time code and sign the phone's account in, creating the
    /// account on first verification.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidOtp` if no challenge is live or the code
    /// is wrong.
    /// Returns `AuthError::OtpExpired` if the challenge has lapsed.
    pub async fn verify_phone_otp(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<AuthAccount, AuthError> {
        let phone = Phone::parse(phone)?;

        let challenge = self.otp.get(&phone).await?.ok_or(AuthError::InvalidOtp)?;

        if challenge.expires_at < Utc::now() {
            return Err(AuthError::OtpExpired);
        }

        if verify_password(code, &challenge.code_hash).is_err() {
            return Err(AuthError::InvalidOtp);
        }

        // Codes are single use.
        self.otp.delete(&phone).await?;

        match self.accounts.get_by_phone(&phone).await? {
            Some(account) => Ok(account),
            None => Ok(self.accounts.create_for_phone(&phone).await?),
        }
    }

    // =========================================================================
    // OAuth
    // =========================================================================

    /// Sign in an identity asserted by the OAuth provider, creating the
    /// account on first sign-in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the provider handed back a
    /// malformed email.
    pub async fn login_with_provider_email(&self, email: &str) -> Result<AuthAccount, AuthError> {
        let email = Email::parse(email)?;

        if let Some(account) = self.accounts.get_by_email(&email).await? {
            return Ok(account);
        }

        match self.accounts.create_for_email(&email).await {
            Ok(account) => Ok(account),
            // Two concurrent first sign-ins can race the insert; the loser
            // reads the winner's row.
            Err(RepositoryError::Conflict(_)) => Ok(self
                .accounts
                .get_by_email(&email)
                .await?
                .ok_or(AuthError::InvalidCredentials)?),
            Err(other) => Err(AuthError::Repository(other)),
        }
    }
}

/// Hand the code to the delivery channel.
///
/// SMS transport is out of scope for this service; deployments wire the
/// log stream into the messaging gateway.
fn deliver_otp(phone: &Phone, code: &str) {
    tracing::info!(phone = %phone, code, "otp issued");
}

/// Generate a zero-padded numeric one-time code.
fn generate_otp_code() -> String {
    let max = 10_u32.pow(OTP_CODE_LENGTH);
    let n = rand::rng().random_range(0..max);
    format!("{n:0width$}", width = OTP_CODE_LENGTH as usize)
}

/// Validate a signup password and its confirmation.
fn validate_signup(password: &str, password_confirm: &str) -> Result<(), AuthError> {
    validate_password(password)?;

    if password != password_confirm {
        return Err(AuthError::PasswordMismatch);
    }

    Ok(())
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password (or one-time code) using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password (or one-time code) against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_password_below_minimum_is_rejected() {
        assert!(matches!(
            validate_signup("12345", "12345"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(validate_signup("123456", "123456").is_ok());
    }

    #[test]
    fn test_mismatched_confirmation_is_rejected() {
        assert!(matches!(
            validate_signup("secret-pass", "secret-past"),
            Err(AuthError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_weak_password_checked_before_mismatch() {
        // A short password fails on strength even when the confirmation
        // also differs, matching the order the form reports errors in.
        assert!(matches!(
            validate_signup("abc", "abcd"),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_otp_code_shape() {
        for _ in 0..32 {
            let code = generate_otp_code();
            assert_eq!(code.len(), OTP_CODE_LENGTH as usize);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong horse", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
