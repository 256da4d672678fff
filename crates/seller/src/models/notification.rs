//! Notification domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use dukaan_core::{NotificationId, NotificationKind, SellerId};

/// An informational message to a seller.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub seller_id: SellerId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
