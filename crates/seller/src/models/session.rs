//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use dukaan_core::{AccountId, Email, Phone, SellerId};

/// Session-stored seller identity.
///
/// Minimal data stored in the session to identify the signed-in account.
/// Whether a shop profile exists for it is looked up per request, not
/// cached here, so profile creation takes effect immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSeller {
    /// Auth account ID.
    pub account_id: AccountId,
    /// Email the account signed in with, if any.
    pub email: Option<Email>,
    /// Phone the account signed in with, if any.
    pub phone: Option<Phone>,
}

impl CurrentSeller {
    /// The seller identity this account owns rows under.
    #[must_use]
    pub fn seller_id(&self) -> SellerId {
        SellerId::from(self.account_id)
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the signed-in seller identity.
    pub const CURRENT_SELLER: &str = "current_seller";

    /// Key for the OAuth CSRF state parameter.
    pub const OAUTH_STATE: &str = "oauth_state";
}
