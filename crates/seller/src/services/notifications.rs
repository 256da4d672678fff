//! Notification service.

use sqlx::PgPool;

use dukaan_core::{NotificationId, SellerId};

use crate::db::NotificationRepository;
use crate::db::RepositoryError;
use crate::models::Notification;

/// Errors from notification operations.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    /// The notification does not exist or is not owned by the caller.
    #[error("notification not found")]
    NotFound,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Notification service.
pub struct NotificationService<'a> {
    notifications: NotificationRepository<'a>,
}

impl<'a> NotificationService<'a> {
    /// Create a new notification service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            notifications: NotificationRepository::new(pool),
        }
    }

    /// The caller's notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::Repository` if the query fails.
    pub async fn list(&self, seller_id: SellerId) -> Result<Vec<Notification>, NotificationError> {
        Ok(self.notifications.list(seller_id).await?)
    }

    /// Mark one of the caller's notifications as read.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::NotFound` for missing or unowned rows.
    pub async fn mark_read(
        &self,
        seller_id: SellerId,
        id: NotificationId,
    ) -> Result<(), NotificationError> {
        if self.notifications.mark_read(seller_id, id).await? {
            Ok(())
        } else {
            Err(NotificationError::NotFound)
        }
    }
}
