//! Integration tests for order management.
//!
//! Orders are never created through the seller API, so these tests insert
//! them directly through the repository layer, standing in for the
//! platform's ordering pipeline. They need both `SELLER_BASE_URL` and
//! `SELLER_DATABASE_URL`, and skip otherwise.

use rust_decimal::Decimal;
use secrecy::SecretString;
use serde_json::{Value, json};
use uuid::Uuid;

use dukaan_core::SellerId;
use dukaan_seller::db;
use dukaan_seller::db::orders::{NewOrder, NewOrderItem, OrderRepository};

use dukaan_integration_tests::{base_url, database_url, seller_session};

/// Insert an order for the seller, as the ordering pipeline would.
async fn place_order(db_url: &str, seller_id: Uuid) -> String {
    let pool = db::create_pool(&SecretString::from(db_url.to_owned()))
        .await
        .expect("database connection failed");

    // Any catalog product works as a line item.
    let (product_id,): (Uuid,) =
        sqlx::query_as("SELECT id FROM master_products WHERE active LIMIT 1")
            .fetch_one(&pool)
            .await
            .expect("catalog is empty; run seed catalog");

    let order = OrderRepository::new(&pool)
        .create(
            SellerId::new(seller_id),
            &NewOrder {
                buyer_name: "Ravi Patel".to_owned(),
                buyer_phone: "+919800011122".to_owned(),
                buyer_address: "3 Harbor Street".to_owned(),
                total_amount: Decimal::new(39_800, 2),
                items: vec![NewOrderItem {
                    product_id: product_id.into(),
                    quantity: 2,
                    price_at_order: Decimal::new(19_900, 2),
                }],
            },
        )
        .await
        .expect("order insert failed");

    order.id.to_string()
}

#[tokio::test]
async fn status_update_reflects_in_detail_and_list() {
    let Some(base) = base_url() else { return };
    let Some(db_url) = database_url() else { return };

    let (client, _email, seller_id) = seller_session(&base).await;
    let order_id = place_order(&db_url, seller_id).await;

    // Starts confirmed.
    let detail: Value = client
        .get(format!("{base}/orders/{order_id}"))
        .send()
        .await
        .expect("detail request failed")
        .json()
        .await
        .expect("detail response not json");
    assert_eq!(detail["status"], json!("confirmed"));
    assert_eq!(detail["items"].as_array().map(Vec::len), Some(1));

    // Move it to delivered.
    let updated: Value = client
        .patch(format!("{base}/orders/{order_id}/status"))
        .json(&json!({ "status": "delivered" }))
        .send()
        .await
        .expect("status request failed")
        .json()
        .await
        .expect("status response not json");
    assert_eq!(updated["status"], json!("delivered"));

    // Both the detail view and the list reflect the change.
    let detail: Value = client
        .get(format!("{base}/orders/{order_id}"))
        .send()
        .await
        .expect("detail request failed")
        .json()
        .await
        .expect("detail response not json");
    assert_eq!(detail["status"], json!("delivered"));

    let list: Vec<Value> = client
        .get(format!("{base}/orders"))
        .send()
        .await
        .expect("list request failed")
        .json()
        .await
        .expect("list response not json");
    let listed = list
        .iter()
        .find(|o| o["id"].as_str() == Some(order_id.as_str()))
        .expect("order missing from list");
    assert_eq!(listed["status"], json!("delivered"));
}

#[tokio::test]
async fn failed_update_leaves_status_unchanged() {
    let Some(base) = base_url() else { return };
    let Some(db_url) = database_url() else { return };

    let (client, _email, seller_id) = seller_session(&base).await;
    let order_id = place_order(&db_url, seller_id).await;

    // An out-of-vocabulary status never reaches the database.
    let resp = client
        .patch(format!("{base}/orders/{order_id}/status"))
        .json(&json!({ "status": "returned" }))
        .send()
        .await
        .expect("status request failed");
    assert!(resp.status().is_client_error());

    let detail: Value = client
        .get(format!("{base}/orders/{order_id}"))
        .send()
        .await
        .expect("detail request failed")
        .json()
        .await
        .expect("detail response not json");
    assert_eq!(detail["status"], json!("confirmed"));
}

#[tokio::test]
async fn orders_are_listed_newest_first() {
    let Some(base) = base_url() else { return };
    let Some(db_url) = database_url() else { return };

    let (client, _email, seller_id) = seller_session(&base).await;
    let first = place_order(&db_url, seller_id).await;
    let second = place_order(&db_url, seller_id).await;

    let list: Vec<Value> = client
        .get(format!("{base}/orders"))
        .send()
        .await
        .expect("list request failed")
        .json()
        .await
        .expect("list response not json");

    let pos = |id: &str| {
        list.iter()
            .position(|o| o["id"].as_str() == Some(id))
            .expect("order missing from list")
    };
    assert!(pos(&second) < pos(&first), "newest order should come first");
}

#[tokio::test]
async fn sellers_cannot_see_each_others_orders() {
    let Some(base) = base_url() else { return };
    let Some(db_url) = database_url() else { return };

    let (_owner, _email, owner_id) = seller_session(&base).await;
    let order_id = place_order(&db_url, owner_id).await;

    // A different seller gets a 404, not someone else's order.
    let (intruder, _email2, _intruder_id) = seller_session(&base).await;
    let resp = intruder
        .get(format!("{base}/orders/{order_id}"))
        .send()
        .await
        .expect("detail request failed");
    assert_eq!(resp.status(), 404);
}
