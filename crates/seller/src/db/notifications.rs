//! Notification repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use dukaan_core::{NotificationId, NotificationKind, SellerId};

use super::RepositoryError;
use crate::models::Notification;

/// Internal row type for `notifications` queries.
#[derive(Debug, sqlx::FromRow)]
struct NotificationRow {
    id: NotificationId,
    seller_id: SellerId,
    kind: NotificationKind,
    title: String,
    message: String,
    read: bool,
    created_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        Self {
            id: row.id,
            seller_id: row.seller_id,
            kind: row.kind,
            title: row.title,
            message: row.message,
            read: row.read,
            created_at: row.created_at,
        }
    }
}

/// Repository for notification database operations.
pub struct NotificationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NotificationRepository<'a> {
    /// Create a new notification repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the seller's notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, seller_id: SellerId) -> Result<Vec<Notification>, RepositoryError> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            r"
            SELECT id, seller_id, kind, title, message, read, created_at
            FROM notifications
            WHERE seller_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(seller_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Notification::from).collect())
    }

    /// Mark an owned notification as read.
    ///
    /// # Returns
    ///
    /// `true` if a row was updated, `false` if nothing matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn mark_read(
        &self,
        seller_id: SellerId,
        id: NotificationId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE notifications
            SET read = TRUE
            WHERE id = $1 AND seller_id = $2
            ",
        )
        .bind(id)
        .bind(seller_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Create a notification for a seller (seeding and platform events).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn create(
        &self,
        seller_id: SellerId,
        kind: NotificationKind,
        title: &str,
        message: &str,
    ) -> Result<Notification, RepositoryError> {
        let row = sqlx::query_as::<_, NotificationRow>(
            r"
            INSERT INTO notifications (seller_id, kind, title, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, seller_id, kind, title, message, read, created_at
            ",
        )
        .bind(seller_id)
        .bind(kind)
        .bind(title)
        .bind(message)
        .fetch_one(self.pool)
        .await?;

        Ok(Notification::from(row))
    }
}
