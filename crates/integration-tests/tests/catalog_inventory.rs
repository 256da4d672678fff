//! Integration tests for catalog browsing and inventory management.
//!
//! Requires a running seller API with a seeded catalog
//! (`dukaan-cli seed catalog`). Tests skip when `SELLER_BASE_URL` is unset.

use serde_json::{Value, json};

use dukaan_integration_tests::{base_url, seller_session};

async fn catalog(base: &str, client: &reqwest::Client, q: Option<&str>) -> Vec<Value> {
    let mut req = client.get(format!("{base}/catalog"));
    if let Some(q) = q {
        req = req.query(&[("q", q)]);
    }
    req.send()
        .await
        .expect("catalog request failed")
        .json()
        .await
        .expect("catalog response not json")
}

#[tokio::test]
async fn adoption_marks_catalog_entry_as_added() {
    let Some(base) = base_url() else { return };
    let (client, _email, _seller_id) = seller_session(&base).await;

    let entries = catalog(&base, &client, None).await;
    assert!(!entries.is_empty(), "catalog is empty; run seed catalog");

    // A fresh seller has adopted nothing.
    assert!(entries.iter().all(|e| e["added"] == json!(false)));

    let product_id = entries.first().and_then(|e| e["id"].as_str()).expect("product id").to_owned();

    let resp = client
        .post(format!("{base}/inventory"))
        .json(&json!({ "product_id": product_id }))
        .send()
        .await
        .expect("adopt request failed");
    assert_eq!(resp.status(), 201);

    // Only the adopted entry flips to added.
    let entries = catalog(&base, &client, None).await;
    for entry in &entries {
        let expected = entry["id"].as_str() == Some(product_id.as_str());
        assert_eq!(entry["added"], json!(expected));
    }
}

#[tokio::test]
async fn adopting_twice_is_a_conflict_not_a_silent_noop() {
    let Some(base) = base_url() else { return };
    let (client, _email, _seller_id) = seller_session(&base).await;

    let entries = catalog(&base, &client, None).await;
    let product_id = entries.first().and_then(|e| e["id"].as_str()).expect("product id").to_owned();

    let first = client
        .post(format!("{base}/inventory"))
        .json(&json!({ "product_id": product_id }))
        .send()
        .await
        .expect("adopt request failed");
    assert_eq!(first.status(), 201);

    // The double-tap: same product, same seller.
    let second = client
        .post(format!("{base}/inventory"))
        .json(&json!({ "product_id": product_id }))
        .send()
        .await
        .expect("adopt request failed");
    assert_eq!(second.status(), 409);

    // Exactly one inventory row for it.
    let inventory: Vec<Value> = client
        .get(format!("{base}/inventory"))
        .send()
        .await
        .expect("inventory request failed")
        .json()
        .await
        .expect("inventory response not json");
    let matching = inventory
        .iter()
        .filter(|i| i["product_id"].as_str() == Some(product_id.as_str()))
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
async fn catalog_filter_is_case_insensitive_substring() {
    let Some(base) = base_url() else { return };
    let (client, _email, _seller_id) = seller_session(&base).await;

    let all = catalog(&base, &client, None).await;
    assert!(!all.is_empty(), "catalog is empty; run seed catalog");
    let name = all.first().and_then(|e| e["name"].as_str()).expect("product name");
    let needle = name
        .get(..3)
        .expect("product name shorter than 3 chars")
        .to_uppercase();

    let filtered = catalog(&base, &client, Some(&needle)).await;
    assert!(!filtered.is_empty());
    assert!(filtered.iter().any(|e| e["name"] == json!(name)));
}

#[tokio::test]
async fn stock_toggle_twice_returns_to_original() {
    let Some(base) = base_url() else { return };
    let (client, _email, _seller_id) = seller_session(&base).await;

    let entries = catalog(&base, &client, None).await;
    let product_id = entries.first().and_then(|e| e["id"].as_str()).expect("product id").to_owned();

    let created: Value = client
        .post(format!("{base}/inventory"))
        .json(&json!({ "product_id": product_id }))
        .send()
        .await
        .expect("adopt request failed")
        .json()
        .await
        .expect("adopt response not json");
    let id = created["id"].as_str().expect("inventory id").to_owned();
    assert_eq!(created["stock_status"], json!("available"));

    let toggled: Value = client
        .patch(format!("{base}/inventory/{id}"))
        .json(&json!({ "stock_status": "out_of_stock" }))
        .send()
        .await
        .expect("toggle request failed")
        .json()
        .await
        .expect("toggle response not json");
    assert_eq!(toggled["stock_status"], json!("out_of_stock"));

    let toggled_back: Value = client
        .patch(format!("{base}/inventory/{id}"))
        .json(&json!({ "stock_status": "available" }))
        .send()
        .await
        .expect("toggle request failed")
        .json()
        .await
        .expect("toggle response not json");
    assert_eq!(toggled_back["stock_status"], json!("available"));
}

#[tokio::test]
async fn removal_deletes_only_the_inventory_row() {
    let Some(base) = base_url() else { return };
    let (client, _email, _seller_id) = seller_session(&base).await;

    let entries = catalog(&base, &client, None).await;
    let product_id = entries.first().and_then(|e| e["id"].as_str()).expect("product id").to_owned();

    let created: Value = client
        .post(format!("{base}/inventory"))
        .json(&json!({ "product_id": product_id }))
        .send()
        .await
        .expect("adopt request failed")
        .json()
        .await
        .expect("adopt response not json");
    let id = created["id"].as_str().expect("inventory id").to_owned();

    let resp = client
        .delete(format!("{base}/inventory/{id}"))
        .send()
        .await
        .expect("remove request failed");
    assert_eq!(resp.status(), 204);

    // The catalog item itself is untouched and adoptable again.
    let entries = catalog(&base, &client, None).await;
    let entry = entries
        .iter()
        .find(|e| e["id"].as_str() == Some(product_id.as_str()))
        .expect("catalog entry disappeared");
    assert_eq!(entry["added"], json!(false));
}

#[tokio::test]
async fn inventory_requires_authentication() {
    let Some(base) = base_url() else { return };

    // No session cookie at all.
    let resp = reqwest::Client::new()
        .get(format!("{base}/inventory"))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 401);
}
