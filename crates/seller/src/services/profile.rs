//! Shop profile service.
//!
//! Covers the profile-setup, profile-view, and profile-edit screens, plus
//! the session bootstrap decision that routes a freshly signed-in seller
//! either to profile setup or to the dashboard.

use serde::Serialize;
use sqlx::PgPool;

use dukaan_core::{Email, EmailError, Phone, PhoneError, SellerId};

use crate::db::RepositoryError;
use crate::db::sellers::{NewSeller, SellerRepository, SellerUpdate};
use crate::models::Seller;

/// Where the client should land after checking the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextRoute {
    /// No session: sign in first.
    Login,
    /// Signed in, but no shop profile yet.
    ProfileSetup,
    /// Signed in with a profile.
    Dashboard,
}

/// Routing decision for the navigation shell.
#[must_use]
pub const fn next_route(authenticated: bool, profile_exists: bool) -> NextRoute {
    match (authenticated, profile_exists) {
        (false, _) => NextRoute::Login,
        (true, false) => NextRoute::ProfileSetup,
        (true, true) => NextRoute::Dashboard,
    }
}

/// Errors from profile operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// A required field is empty or whitespace.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Invalid phone format.
    #[error("invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    /// A profile already exists for this identity.
    #[error("profile already exists")]
    AlreadyExists,

    /// No profile exists for this identity.
    #[error("profile not found")]
    NotFound,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Raw profile-setup form fields, validated by [`ProfileService::create`].
#[derive(Debug, Clone)]
pub struct ProfileInput {
    pub shop_name: String,
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub tax_id: Option<String>,
}

/// Raw profile-edit form fields. Email is absent: it is immutable once set.
#[derive(Debug, Clone)]
pub struct ProfileEdit {
    pub shop_name: String,
    pub owner_name: String,
    pub phone: String,
    pub address: String,
    pub tax_id: Option<String>,
}

/// Shop profile service.
pub struct ProfileService<'a> {
    sellers: SellerRepository<'a>,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            sellers: SellerRepository::new(pool),
        }
    }

    /// Whether a profile exists for this identity.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Repository` if the query fails.
    pub async fn exists(&self, seller_id: SellerId) -> Result<bool, ProfileError> {
        Ok(self.sellers.exists(seller_id).await?)
    }

    /// The caller's profile.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::NotFound` if no profile exists yet.
    pub async fn get(&self, seller_id: SellerId) -> Result<Seller, ProfileError> {
        self.sellers
            .get(seller_id)
            .await?
            .ok_or(ProfileError::NotFound)
    }

    /// Create the caller's profile (one per identity).
    ///
    /// # Errors
    ///
    /// Returns a validation error before any database work if a required
    /// field is blank or malformed.
    /// Returns `ProfileError::AlreadyExists` on the unique-key violation.
    pub async fn create(
        &self,
        seller_id: SellerId,
        input: ProfileInput,
    ) -> Result<Seller, ProfileError> {
        let shop_name = required(&input.shop_name, "shop name")?;
        let owner_name = required(&input.owner_name, "owner name")?;
        let address = required(&input.address, "address")?;
        let phone = Phone::parse(&input.phone)?;
        let email = Email::parse(&input.email)?;

        let new = NewSeller {
            shop_name,
            owner_name,
            phone,
            email,
            address,
            tax_id: normalize_optional(input.tax_id),
        };

        self.sellers
            .create(seller_id, &new)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => ProfileError::AlreadyExists,
                other => ProfileError::Repository(other),
            })
    }

    /// Save all editable fields in a single update.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any database work if a required
    /// field is blank or malformed.
    /// Returns `ProfileError::NotFound` if no profile exists.
    pub async fn update(
        &self,
        seller_id: SellerId,
        edit: ProfileEdit,
    ) -> Result<Seller, ProfileError> {
        let shop_name = required(&edit.shop_name, "shop name")?;
        let owner_name = required(&edit.owner_name, "owner name")?;
        let address = required(&edit.address, "address")?;
        let phone = Phone::parse(&edit.phone)?;

        let update = SellerUpdate {
            shop_name,
            owner_name,
            phone,
            address,
            tax_id: normalize_optional(edit.tax_id),
        };

        self.sellers
            .update(seller_id, &update)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProfileError::NotFound,
                other => ProfileError::Repository(other),
            })
    }
}

/// Trim a required field, rejecting blank input.
fn required(value: &str, field: &'static str) -> Result<String, ProfileError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

/// Trim an optional field, mapping blank input to `None`.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_next_route_unauthenticated() {
        assert_eq!(next_route(false, false), NextRoute::Login);
        assert_eq!(next_route(false, true), NextRoute::Login);
    }

    #[test]
    fn test_next_route_without_profile_goes_to_setup() {
        assert_eq!(next_route(true, false), NextRoute::ProfileSetup);
    }

    #[test]
    fn test_next_route_with_profile_goes_to_dashboard() {
        assert_eq!(next_route(true, true), NextRoute::Dashboard);
    }

    #[test]
    fn test_required_rejects_blank() {
        assert!(matches!(
            required("   ", "shop name"),
            Err(ProfileError::MissingField("shop name"))
        ));
        assert_eq!(required(" Mira Stores ", "shop name").unwrap(), "Mira Stores");
    }

    #[test]
    fn test_normalize_optional_blank_is_none() {
        assert_eq!(normalize_optional(Some("  ".to_owned())), None);
        assert_eq!(normalize_optional(None), None);
        assert_eq!(
            normalize_optional(Some(" 22AAAAA0000A1Z5 ".to_owned())),
            Some("22AAAAA0000A1Z5".to_owned())
        );
    }
}
