//! Seller profile domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use dukaan_core::{Email, Phone, SellerId};

/// A seller's shop profile.
///
/// Keyed by the auth identity; created exactly once at profile setup and
/// mutated only by its owner. The email is fixed at creation and has no
/// update path.
#[derive(Debug, Clone, Serialize)]
pub struct Seller {
    /// Seller ID (same value as the auth account ID).
    pub id: SellerId,
    /// Display name of the shop.
    pub shop_name: String,
    /// Name of the person running the shop.
    pub owner_name: String,
    /// Contact phone.
    pub phone: Phone,
    /// Contact email. Immutable once set.
    pub email: Email,
    /// Shop address.
    pub address: String,
    /// Tax registration number, if provided.
    pub tax_id: Option<String>,
    /// Shop logo image reference.
    pub logo_url: Option<String>,
    /// Shop banner image reference.
    pub banner_url: Option<String>,
    /// Whether the platform has verified this seller.
    pub verified: bool,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}
