//! Catalog browsing service.
//!
//! Lists the platform catalog with each item marked as already-added when
//! the browsing seller carries it, and applies the storefront's
//! case-insensitive substring filter. Marking and filtering are pure so
//! the screen behavior is testable without a database.

use std::collections::HashSet;

use sqlx::PgPool;

use dukaan_core::{ProductId, SellerId};

use crate::db::RepositoryError;
use crate::db::catalog::CatalogRepository;
use crate::db::inventory::InventoryRepository;
use crate::models::{CatalogEntry, MasterProduct};

/// Catalog browsing service.
pub struct CatalogService<'a> {
    catalog: CatalogRepository<'a>,
    inventory: InventoryRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            catalog: CatalogRepository::new(pool),
            inventory: InventoryRepository::new(pool),
        }
    }

    /// Browse the active catalog as a seller, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if either query fails.
    pub async fn browse(
        &self,
        seller_id: SellerId,
        query: Option<&str>,
    ) -> Result<Vec<CatalogEntry>, RepositoryError> {
        let products = self.catalog.list_active().await?;
        let adopted: HashSet<ProductId> = self
            .inventory
            .adopted_product_ids(seller_id)
            .await?
            .into_iter()
            .collect();

        let entries = mark_added(products, &adopted);
        Ok(filter_entries(entries, query))
    }
}

/// Annotate catalog items with whether the seller already carries them.
fn mark_added(products: Vec<MasterProduct>, adopted: &HashSet<ProductId>) -> Vec<CatalogEntry> {
    products
        .into_iter()
        .map(|product| CatalogEntry {
            added: adopted.contains(&product.id),
            product,
        })
        .collect()
}

/// Case-insensitive substring filter across name, brand, and category.
fn filter_entries(entries: Vec<CatalogEntry>, query: Option<&str>) -> Vec<CatalogEntry> {
    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return entries;
    };
    let needle = query.to_lowercase();

    entries
        .into_iter()
        .filter(|entry| {
            let p = &entry.product;
            p.name.to_lowercase().contains(&needle)
                || p.brand.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(name: &str, brand: &str, category: &str) -> MasterProduct {
        MasterProduct {
            id: ProductId::generate(),
            name: name.to_owned(),
            brand: brand.to_owned(),
            category: category.to_owned(),
            base_price: Decimal::new(9_900, 2),
            description: None,
            image_url: None,
            active: true,
        }
    }

    #[test]
    fn test_mark_added_flags_only_adopted_ids() {
        let a = product("Almond Oil", "Hamdard", "Personal Care");
        let b = product("Basmati Rice", "Daawat", "Grocery");
        let adopted: HashSet<ProductId> = [a.id].into_iter().collect();

        let entries = mark_added(vec![a.clone(), b.clone()], &adopted);

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().find(|e| e.product.id == a.id).unwrap().added);
        assert!(!entries.iter().find(|e| e.product.id == b.id).unwrap().added);
    }

    #[test]
    fn test_filter_matches_name_brand_and_category() {
        let entries = mark_added(
            vec![
                product("Almond Oil", "Hamdard", "Personal Care"),
                product("Basmati Rice", "Daawat", "Grocery"),
                product("Green Tea", "Lipton", "Beverages"),
            ],
            &HashSet::new(),
        );

        let by_name = filter_entries(entries.clone(), Some("almond"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name.first().unwrap().product.name, "Almond Oil");

        let by_brand = filter_entries(entries.clone(), Some("LIPTON"));
        assert_eq!(by_brand.len(), 1);

        let by_category = filter_entries(entries.clone(), Some("groc"));
        assert_eq!(by_category.len(), 1);

        let no_match = filter_entries(entries, Some("xyz"));
        assert!(no_match.is_empty());
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let entries = mark_added(
            vec![product("Almond Oil", "Hamdard", "Personal Care")],
            &HashSet::new(),
        );

        assert_eq!(filter_entries(entries.clone(), None).len(), 1);
        assert_eq!(filter_entries(entries, Some("   ")).len(), 1);
    }
}
