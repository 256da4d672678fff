//! Catalog and inventory domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use dukaan_core::{ProductId, SellerId, SellerProductId, StockStatus};

/// A platform-curated catalog item.
///
/// Owned by the platform, not by any seller; sellers only ever read these.
#[derive(Debug, Clone, Serialize)]
pub struct MasterProduct {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub base_price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub active: bool,
}

/// A seller's adoption of a catalog item into their storefront.
#[derive(Debug, Clone, Serialize)]
pub struct SellerProduct {
    pub id: SellerProductId,
    pub seller_id: SellerId,
    pub product_id: ProductId,
    /// Seller's price override; the catalog base price applies when absent.
    pub custom_price: Option<Decimal>,
    pub stock_status: StockStatus,
    pub added_at: DateTime<Utc>,
}

/// A catalog item annotated with whether the browsing seller already
/// carries it.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub product: MasterProduct,
    /// True when the seller already has a `SellerProduct` for this item.
    pub added: bool,
}

/// An inventory row: the adoption joined with its catalog details.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryItem {
    pub id: SellerProductId,
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub base_price: Decimal,
    pub custom_price: Option<Decimal>,
    pub image_url: Option<String>,
    pub stock_status: StockStatus,
    pub added_at: DateTime<Utc>,
}

impl InventoryItem {
    /// The price the storefront shows: the override when set, otherwise the
    /// catalog base price.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.custom_price.unwrap_or(self.base_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(base: Decimal, custom: Option<Decimal>) -> InventoryItem {
        InventoryItem {
            id: SellerProductId::generate(),
            product_id: ProductId::generate(),
            name: "Basmati Rice 5kg".to_owned(),
            brand: "Daawat".to_owned(),
            category: "Grocery".to_owned(),
            base_price: base,
            custom_price: custom,
            image_url: None,
            stock_status: StockStatus::Available,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_effective_price_prefers_override() {
        let base = Decimal::new(49_900, 2);
        let custom = Decimal::new(45_000, 2);
        assert_eq!(item(base, Some(custom)).effective_price(), custom);
        assert_eq!(item(base, None).effective_price(), base);
    }
}
