//! Auth identity domain type.

use chrono::{DateTime, Utc};

use dukaan_core::{AccountId, Email, Phone};

/// An authentication identity.
///
/// Created by registration, first OTP verification, or first OAuth sign-in.
/// Exactly one seller profile may be keyed off an account; accounts created
/// via phone have no email and vice versa until the profile fills them in.
#[derive(Debug, Clone)]
pub struct AuthAccount {
    /// Unique account ID. Doubles as the seller ID once a profile exists.
    pub id: AccountId,
    /// Email, for password and OAuth accounts.
    pub email: Option<Email>,
    /// Phone, for OTP accounts.
    pub phone: Option<Phone>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}
