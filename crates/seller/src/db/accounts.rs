//! Auth account repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use dukaan_core::{AccountId, Email, Phone};

use super::RepositoryError;
use crate::models::AuthAccount;

/// Internal row type for `auth_accounts` queries.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: AccountId,
    email: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for AuthAccount {
    type Error = RepositoryError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let email = row
            .email
            .as_deref()
            .map(Email::parse)
            .transpose()
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
            })?;

        let phone = row
            .phone
            .as_deref()
            .map(Phone::parse)
            .transpose()
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid phone in database: {e}"))
            })?;

        Ok(Self {
            id: row.id,
            email,
            phone,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for auth account database operations.
pub struct AccountRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AccountRepository<'a> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an account by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: AccountId) -> Result<Option<AuthAccount>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r"
            SELECT id, email, phone, created_at, updated_at
            FROM auth_accounts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(AuthAccount::try_from).transpose()
    }

    /// Get an account by email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<AuthAccount>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r"
            SELECT id, email, phone, created_at, updated_at
            FROM auth_accounts
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        row.map(AuthAccount::try_from).transpose()
    }

    /// Get an account by phone.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_phone(&self, phone: &Phone) -> Result<Option<AuthAccount>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r"
            SELECT id, email, phone, created_at, updated_at
            FROM auth_accounts
            WHERE phone = $1
            ",
        )
        .bind(phone)
        .fetch_optional(self.pool)
        .await?;

        row.map(AuthAccount::try_from).transpose()
    }

    /// Create an email account with a password, atomically.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_with_password(
        &self,
        email: &Email,
        password_hash: &str,
    ) -> Result<AuthAccount, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, AccountRow>(
            r"
            INSERT INTO auth_accounts (email)
            VALUES ($1)
            RETURNING id, email, phone, created_at, updated_at
            ",
        )
        .bind(email)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| RepositoryError::from_unique(e, "email already registered"))?;

        sqlx::query(
            r"
            INSERT INTO account_passwords (account_id, password_hash)
            VALUES ($1, $2)
            ",
        )
        .bind(row.id)
        .bind(password_hash)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        AuthAccount::try_from(row)
    }

    /// Create an account for a phone number (first successful OTP verify).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the phone is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_for_phone(&self, phone: &Phone) -> Result<AuthAccount, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r"
            INSERT INTO auth_accounts (phone)
            VALUES ($1)
            RETURNING id, email, phone, created_at, updated_at
            ",
        )
        .bind(phone)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_unique(e, "phone already registered"))?;

        AuthAccount::try_from(row)
    }

    /// Create an email account without a password (OAuth sign-in).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_for_email(&self, email: &Email) -> Result<AuthAccount, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r"
            INSERT INTO auth_accounts (email)
            VALUES ($1)
            RETURNING id, email, phone, created_at, updated_at
            ",
        )
        .bind(email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_unique(e, "email already registered"))?;

        AuthAccount::try_from(row)
    }

    /// Get an account and its password hash by email.
    ///
    /// Returns `None` if the account doesn't exist or has no password set
    /// (OTP- or OAuth-only accounts).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(AuthAccount, String)>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct AccountPasswordRow {
            id: AccountId,
            email: Option<String>,
            phone: Option<String>,
            created_at: DateTime<Utc>,
            updated_at: DateTime<Utc>,
            password_hash: Option<String>,
        }

        let row = sqlx::query_as::<_, AccountPasswordRow>(
            r"
            SELECT a.id, a.email, a.phone, a.created_at, a.updated_at,
                   p.password_hash
            FROM auth_accounts a
            LEFT JOIN account_passwords p ON a.id = p.account_id
            WHERE a.email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let Some(password_hash) = r.password_hash else {
            return Ok(None);
        };

        let account = AuthAccount::try_from(AccountRow {
            id: r.id,
            email: r.email,
            phone: r.phone,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })?;

        Ok(Some((account, password_hash)))
    }
}
