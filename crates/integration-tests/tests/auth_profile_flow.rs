//! Integration tests for authentication and profile bootstrap.
//!
//! Requires a running seller API; see the crate README. Tests skip when
//! `SELLER_BASE_URL` is unset.

use serde_json::{Value, json};

use dukaan_integration_tests::{base_url, client, create_profile, register, unique_email};

#[tokio::test]
async fn short_password_never_creates_a_session() {
    let Some(base) = base_url() else { return };
    let client = client();

    let resp = client
        .post(format!("{base}/auth/register"))
        .json(&json!({
            "email": unique_email(),
            "password": "12345",
            "password_confirm": "12345",
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 400);

    // The same client (same cookie jar) is still anonymous.
    let session: Value = client
        .get(format!("{base}/session"))
        .send()
        .await
        .expect("session request failed")
        .json()
        .await
        .expect("session response not json");
    assert_eq!(session["authenticated"], json!(false));
    assert_eq!(session["next"], json!("login"));
}

#[tokio::test]
async fn mismatched_confirmation_never_creates_a_session() {
    let Some(base) = base_url() else { return };
    let client = client();

    let resp = client
        .post(format!("{base}/auth/register"))
        .json(&json!({
            "email": unique_email(),
            "password": "sturdy-pass-1",
            "password_confirm": "sturdy-pass-2",
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 400);

    let session: Value = client
        .get(format!("{base}/session"))
        .send()
        .await
        .expect("session request failed")
        .json()
        .await
        .expect("session response not json");
    assert_eq!(session["authenticated"], json!(false));
}

#[tokio::test]
async fn phone_without_country_code_is_rejected() {
    let Some(base) = base_url() else { return };

    let resp = client()
        .post(format!("{base}/auth/otp/request"))
        .json(&json!({ "phone": "9876543210" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn fresh_seller_is_routed_to_profile_setup_then_dashboard() {
    let Some(base) = base_url() else { return };
    let client = client();
    let email = unique_email();

    // Registration signs the account in and routes to profile setup.
    let bootstrap = register(&base, &client, &email, "sturdy-pass-1").await;
    assert_eq!(bootstrap["authenticated"], json!(true));
    assert_eq!(bootstrap["profile_exists"], json!(false));
    assert_eq!(bootstrap["next"], json!("profile_setup"));

    // Creating the profile flips the route to the dashboard.
    create_profile(&base, &client, &email).await;

    let session: Value = client
        .get(format!("{base}/session"))
        .send()
        .await
        .expect("session request failed")
        .json()
        .await
        .expect("session response not json");
    assert_eq!(session["profile_exists"], json!(true));
    assert_eq!(session["next"], json!("dashboard"));
}

#[tokio::test]
async fn second_profile_for_same_identity_is_a_conflict() {
    let Some(base) = base_url() else { return };
    let client = client();
    let email = unique_email();

    register(&base, &client, &email, "sturdy-pass-1").await;
    create_profile(&base, &client, &email).await;

    let resp = client
        .post(format!("{base}/profile"))
        .json(&json!({
            "shop_name": "Second Store",
            "owner_name": "Test Owner",
            "phone": "+919876543210",
            "email": email,
            "address": "2 Test Lane",
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn blank_required_field_is_rejected() {
    let Some(base) = base_url() else { return };
    let client = client();
    let email = unique_email();

    register(&base, &client, &email, "sturdy-pass-1").await;

    let resp = client
        .post(format!("{base}/profile"))
        .json(&json!({
            "shop_name": "   ",
            "owner_name": "Test Owner",
            "phone": "+919876543210",
            "email": email,
            "address": "1 Test Lane",
        }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn logout_destroys_the_session() {
    let Some(base) = base_url() else { return };
    let client = client();
    let email = unique_email();

    register(&base, &client, &email, "sturdy-pass-1").await;

    let resp = client
        .post(format!("{base}/auth/logout"))
        .send()
        .await
        .expect("logout request failed");
    assert!(resp.status().is_success());

    let session: Value = client
        .get(format!("{base}/session"))
        .send()
        .await
        .expect("session request failed")
        .json()
        .await
        .expect("session response not json");
    assert_eq!(session["authenticated"], json!(false));
    assert_eq!(session["next"], json!("login"));
}

#[tokio::test]
async fn profile_email_is_immutable_through_edit() {
    let Some(base) = base_url() else { return };
    let client = client();
    let email = unique_email();

    register(&base, &client, &email, "sturdy-pass-1").await;
    create_profile(&base, &client, &email).await;

    // The edit payload has no email field at all; the stored one survives.
    let updated: Value = client
        .put(format!("{base}/profile"))
        .json(&json!({
            "shop_name": "Renamed Store",
            "owner_name": "New Owner",
            "phone": "+919876500000",
            "address": "9 New Lane",
            "tax_id": "27AAAPA1234A1Z5",
        }))
        .send()
        .await
        .expect("update request failed")
        .json()
        .await
        .expect("update response not json");

    assert_eq!(updated["shop_name"], json!("Renamed Store"));
    assert_eq!(updated["email"], json!(email));
    assert_eq!(updated["tax_id"], json!("27AAAPA1234A1Z5"));
}
