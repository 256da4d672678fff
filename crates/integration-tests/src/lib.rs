//! Integration test harness for Dukaan.
//!
//! These tests require a running seller API (and, for order tests, direct
//! database access to stand in for the platform's ordering pipeline):
//!
//! ```bash
//! dukaan-cli migrate
//! dukaan-cli seed catalog
//! cargo run -p dukaan-seller
//!
//! SELLER_BASE_URL=http://localhost:3000 cargo test -p dukaan-integration-tests
//! ```
//!
//! Every test skips itself when `SELLER_BASE_URL` is unset, so plain
//! `cargo test` passes without infrastructure.

use reqwest::Client;
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the seller API, when integration testing is enabled.
#[must_use]
pub fn base_url() -> Option<String> {
    std::env::var("SELLER_BASE_URL").ok()
}

/// Database URL for tests that create platform-side data directly.
#[must_use]
pub fn database_url() -> Option<String> {
    std::env::var("SELLER_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
}

/// A cookie-holding client, one session per test.
///
/// # Panics
///
/// Panics if the TLS backend cannot be initialized.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// A unique email so tests never collide across runs.
#[must_use]
pub fn unique_email() -> String {
    format!("it-{}@dukaan.test", Uuid::new_v4().simple())
}

/// A unique E.164 phone number so tests never collide across runs.
#[must_use]
pub fn unique_phone() -> String {
    let digits = u64::try_from(Uuid::new_v4().as_u128() % 10_000_000).unwrap_or(0);
    format!("+91977{digits:07}")
}

/// Register a fresh seller account and return the bootstrap payload.
///
/// # Panics
///
/// Panics if the request fails or returns a non-success status.
pub async fn register(base: &str, client: &Client, email: &str, password: &str) -> Value {
    let resp = client
        .post(format!("{base}/auth/register"))
        .json(&json!({
            "email": email,
            "password": password,
            "password_confirm": password,
        }))
        .send()
        .await
        .expect("register request failed");

    assert!(
        resp.status().is_success(),
        "register returned {}",
        resp.status()
    );
    resp.json().await.expect("register response not json")
}

/// Create a shop profile for the signed-in session and return it.
///
/// # Panics
///
/// Panics if the request fails or returns a non-success status.
pub async fn create_profile(base: &str, client: &Client, email: &str) -> Value {
    let resp = client
        .post(format!("{base}/profile"))
        .json(&json!({
            "shop_name": "Integration Test Store",
            "owner_name": "Test Owner",
            "phone": "+919876543210",
            "email": email,
            "address": "1 Test Lane",
            "tax_id": null,
        }))
        .send()
        .await
        .expect("profile request failed");

    assert!(
        resp.status().is_success(),
        "profile creation returned {}",
        resp.status()
    );
    resp.json().await.expect("profile response not json")
}

/// Register + profile in one step: a seller ready to use the shop screens.
///
/// # Panics
///
/// Panics if registration or profile creation fails.
pub async fn seller_session(base: &str) -> (Client, String, Uuid) {
    let client = client();
    let email = unique_email();
    register(base, &client, &email, "sturdy-pass-1").await;
    let profile = create_profile(base, &client, &email).await;
    let seller_id: Uuid = profile["id"]
        .as_str()
        .expect("profile id missing")
        .parse()
        .expect("profile id not a uuid");
    (client, email, seller_id)
}
