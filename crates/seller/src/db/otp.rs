//! Phone OTP challenge repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use dukaan_core::Phone;

use super::RepositoryError;

/// A stored OTP challenge. Only the hash of the code is persisted.
#[derive(Debug, sqlx::FromRow)]
pub struct OtpChallenge {
    pub code_hash: String,
    pub expires_at: DateTime<Utc>,
}

/// Repository for phone OTP challenges.
pub struct OtpRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OtpRepository<'a> {
    /// Create a new OTP repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a challenge for a phone, replacing any live one.
    ///
    /// The replace-on-conflict is what invalidates a previously issued
    /// code the moment a new one is requested.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn put(
        &self,
        phone: &Phone,
        code_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO phone_otp_challenges (phone, code_hash, expires_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (phone) DO UPDATE
                SET code_hash = EXCLUDED.code_hash,
                    expires_at = EXCLUDED.expires_at,
                    created_at = now()
            ",
        )
        .bind(phone)
        .bind(code_hash)
        .bind(expires_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Fetch the live challenge for a phone, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, phone: &Phone) -> Result<Option<OtpChallenge>, RepositoryError> {
        let row = sqlx::query_as::<_, OtpChallenge>(
            r"
            SELECT code_hash, expires_at
            FROM phone_otp_challenges
            WHERE phone = $1
            ",
        )
        .bind(phone)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete the challenge for a phone (after successful verification, so
    /// a code is single use).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn delete(&self, phone: &Phone) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM phone_otp_challenges WHERE phone = $1")
            .bind(phone)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
