//! Database seeding commands.
//!
//! `catalog` populates the platform catalog with sample products. `demo`
//! stands in for the platform's ordering pipeline: it creates a demo
//! seller, adopts two products, and drops in an order plus its
//! notification, so the order screens have something to show.

use rust_decimal::Decimal;

use dukaan_core::{NotificationKind, SellerId};
use dukaan_seller::db::accounts::AccountRepository;
use dukaan_seller::db::catalog::{CatalogRepository, NewMasterProduct};
use dukaan_seller::db::inventory::InventoryRepository;
use dukaan_seller::db::notifications::NotificationRepository;
use dukaan_seller::db::orders::{NewOrder, NewOrderItem, OrderRepository};
use dukaan_seller::db::sellers::{NewSeller, SellerRepository};
use dukaan_seller::services::auth::AuthService;

use super::CommandError;

/// Demo seller credentials.
const DEMO_EMAIL: &str = "demo-seller@dukaan.test";
const DEMO_PASSWORD: &str = "demo-seller-pass";

fn sample_products() -> Vec<NewMasterProduct> {
    vec![
        NewMasterProduct {
            name: "Basmati Rice 5kg".to_owned(),
            brand: "Daawat".to_owned(),
            category: "Grocery".to_owned(),
            base_price: Decimal::new(64_900, 2),
            description: Some("Long-grain aged basmati rice.".to_owned()),
            image_url: None,
        },
        NewMasterProduct {
            name: "Sunflower Oil 1L".to_owned(),
            brand: "Fortune".to_owned(),
            category: "Grocery".to_owned(),
            base_price: Decimal::new(14_500, 2),
            description: None,
            image_url: None,
        },
        NewMasterProduct {
            name: "Green Tea 100 Bags".to_owned(),
            brand: "Lipton".to_owned(),
            category: "Beverages".to_owned(),
            base_price: Decimal::new(29_900, 2),
            description: Some("Pure and light green tea.".to_owned()),
            image_url: None,
        },
        NewMasterProduct {
            name: "Almond Oil 200ml".to_owned(),
            brand: "Hamdard".to_owned(),
            category: "Personal Care".to_owned(),
            base_price: Decimal::new(21_000, 2),
            description: None,
            image_url: None,
        },
    ]
}

/// Seed the platform catalog with sample products.
///
/// # Errors
///
/// Returns `CommandError` if the connection or any insert fails.
pub async fn catalog() -> Result<(), CommandError> {
    let pool = super::connect().await?;
    let repo = CatalogRepository::new(&pool);

    let products = sample_products();
    let count = products.len();
    for product in &products {
        let created = repo
            .insert(product)
            .await
            .map_err(|e| CommandError::Seed(e.to_string()))?;
        tracing::info!(id = %created.id, name = %created.name, "catalog product created");
    }

    tracing::info!("Seeded {count} catalog products");
    Ok(())
}

/// Seed a demo seller with inventory, an order, and a notification.
///
/// # Errors
///
/// Returns `CommandError` if the catalog is empty or any step fails.
pub async fn demo() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    // Demo account (idempotent: reuse it if a prior run created it)
    let accounts = AccountRepository::new(&pool);
    let account = match accounts
        .get_by_email(&DEMO_EMAIL.parse().map_err(|e| CommandError::Seed(format!("{e}")))?)
        .await
        .map_err(|e| CommandError::Seed(e.to_string()))?
    {
        Some(account) => account,
        None => AuthService::new(&pool)
            .register_with_password(DEMO_EMAIL, DEMO_PASSWORD, DEMO_PASSWORD)
            .await
            .map_err(|e| CommandError::Seed(e.to_string()))?,
    };
    let seller_id = SellerId::from(account.id);

    // Shop profile
    let sellers = SellerRepository::new(&pool);
    if !sellers
        .exists(seller_id)
        .await
        .map_err(|e| CommandError::Seed(e.to_string()))?
    {
        let new = NewSeller {
            shop_name: "Demo General Store".to_owned(),
            owner_name: "Demo Seller".to_owned(),
            phone: "+919876543210"
                .parse()
                .map_err(|e| CommandError::Seed(format!("{e}")))?,
            email: DEMO_EMAIL
                .parse()
                .map_err(|e| CommandError::Seed(format!("{e}")))?,
            address: "14 Market Road, Pune".to_owned(),
            tax_id: None,
        };
        sellers
            .create(seller_id, &new)
            .await
            .map_err(|e| CommandError::Seed(e.to_string()))?;
        tracing::info!(%seller_id, "demo seller profile created");
    }

    // Adopt the first two active catalog products
    let products = CatalogRepository::new(&pool)
        .list_active()
        .await
        .map_err(|e| CommandError::Seed(e.to_string()))?;
    if products.len() < 2 {
        return Err(CommandError::Seed(
            "catalog has fewer than 2 products; run `dukaan-cli seed catalog` first".to_owned(),
        ));
    }

    let inventory = InventoryRepository::new(&pool);
    for product in products.iter().take(2) {
        // A rerun hits the unique pair; that's fine for a seed.
        if let Err(e) = inventory.adopt(seller_id, product.id).await {
            tracing::debug!(product_id = %product.id, error = %e, "skipping adoption");
        }
    }

    // An incoming order, as the platform's ordering pipeline would create it
    let first = products
        .first()
        .ok_or_else(|| CommandError::Seed("catalog unexpectedly empty".to_owned()))?;
    let second = products
        .get(1)
        .ok_or_else(|| CommandError::Seed("catalog unexpectedly empty".to_owned()))?;

    let total = first.base_price * Decimal::from(2) + second.base_price;
    let order = OrderRepository::new(&pool)
        .create(
            seller_id,
            &NewOrder {
                buyer_name: "Asha Kulkarni".to_owned(),
                buyer_phone: "+919812345678".to_owned(),
                buyer_address: "7 Lakeview Apartments, Pune".to_owned(),
                total_amount: total,
                items: vec![
                    NewOrderItem {
                        product_id: first.id,
                        quantity: 2,
                        price_at_order: first.base_price,
                    },
                    NewOrderItem {
                        product_id: second.id,
                        quantity: 1,
                        price_at_order: second.base_price,
                    },
                ],
            },
        )
        .await
        .map_err(|e| CommandError::Seed(e.to_string()))?;

    NotificationRepository::new(&pool)
        .create(
            seller_id,
            NotificationKind::NewOrder,
            "New order received",
            &format!("Order {} from Asha Kulkarni", order.id),
        )
        .await
        .map_err(|e| CommandError::Seed(e.to_string()))?;

    tracing::info!(order_id = %order.id, "demo order and notification created");
    Ok(())
}
