//! Authoritative product collection.

use std::sync::{Arc, RwLock};

use panaderia_core::{Clock, DomainError, DomainResult, SystemClock};
use panaderia_inventory::{NewProduct, Product, ProductId, ProductPatch};

/// Owns the product collection and exposes CRUD over it.
///
/// Insertion order is preserved; `list` hands out snapshot copies. The store
/// itself enforces no uniqueness or field validation — that is a caller
/// concern.
pub struct ProductStore {
    inner: RwLock<Vec<Product>>,
    clock: Arc<dyn Clock>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Snapshot of all products, insertion order.
    pub fn list(&self) -> Vec<Product> {
        match self.inner.read() {
            Ok(items) => items.clone(),
            Err(_) => vec![],
        }
    }

    pub fn get(&self, id: &ProductId) -> Option<Product> {
        let items = self.inner.read().ok()?;
        items.iter().find(|p| p.id == *id).cloned()
    }

    /// Append a new record with a fresh id and matching timestamps.
    pub fn create(&self, input: NewProduct) -> Product {
        let now = self.clock.now();
        let product = Product {
            id: ProductId::new(),
            name: input.name,
            description: input.description,
            price: input.price,
            cost: input.cost,
            stock: input.stock,
            min_stock: input.min_stock,
            category: input.category,
            unit: input.unit,
            barcode: input.barcode,
            created_at: now,
            updated_at: now,
        };

        if let Ok(mut items) = self.inner.write() {
            items.push(product.clone());
        }
        tracing::debug!(product_id = %product.id, "product created");
        product
    }

    /// Merge the patch onto the record and refresh `updated_at`.
    pub fn update(&self, id: &ProductId, patch: ProductPatch) -> DomainResult<Product> {
        if let Ok(mut items) = self.inner.write() {
            if let Some(product) = items.iter_mut().find(|p| p.id == *id) {
                product.apply_patch(patch);
                product.updated_at = self.clock.now();
                return Ok(product.clone());
            }
        }
        Err(DomainError::NotFound)
    }

    pub fn delete(&self, id: &ProductId) -> DomainResult<()> {
        if let Ok(mut items) = self.inner.write() {
            if let Some(index) = items.iter().position(|p| p.id == *id) {
                items.remove(index);
                tracing::debug!(product_id = %id, "product deleted");
                return Ok(());
            }
        }
        Err(DomainError::NotFound)
    }

    /// Count of products at or below their reorder threshold.
    pub fn low_stock_count(&self) -> usize {
        match self.inner.read() {
            Ok(items) => items.iter().filter(|p| p.is_low_stock()).count(),
            Err(_) => 0,
        }
    }

    pub fn count(&self) -> usize {
        match self.inner.read() {
            Ok(items) => items.len(),
            Err(_) => 0,
        }
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use panaderia_core::FixedClock;
    use panaderia_inventory::{ProductCategory, ProductUnit};
    use std::sync::Mutex;

    /// Advances by one second on every reading, so successive store
    /// operations get distinct timestamps.
    struct SteppingClock(Mutex<DateTime<Utc>>);

    impl SteppingClock {
        fn starting_at(at: DateTime<Utc>) -> Self {
            Self(Mutex::new(at))
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            let mut current = self.0.lock().unwrap();
            let now = *current;
            *current = now + Duration::seconds(1);
            now
        }
    }

    fn new_product(name: &str, stock: u32, min_stock: u32) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            price: 2500,
            cost: 1500,
            stock,
            min_stock,
            category: ProductCategory::Bread,
            unit: ProductUnit::Unit,
            barcode: None,
        }
    }

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn create_assigns_unique_ids_and_matching_timestamps() {
        let store = ProductStore::with_clock(Arc::new(FixedClock(test_time())));

        let a = store.create(new_product("Pan Integral", 20, 5));
        let b = store.create(new_product("Croissant", 15, 3));

        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(a.created_at, test_time());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = ProductStore::new();
        store.create(new_product("Pan Integral", 20, 5));
        store.create(new_product("Croissant", 15, 3));
        store.create(new_product("Torta", 2, 1));

        let names: Vec<String> = store.list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Pan Integral", "Croissant", "Torta"]);
    }

    #[test]
    fn get_returns_the_stored_record() {
        let store = ProductStore::new();
        let created = store.create(new_product("Pan Integral", 20, 5));

        assert_eq!(store.get(&created.id), Some(created));
        assert_eq!(store.get(&ProductId::new()), None);
    }

    #[test]
    fn update_merges_fields_and_refreshes_updated_at() {
        let store = ProductStore::with_clock(Arc::new(SteppingClock::starting_at(test_time())));
        let created = store.create(new_product("Pan Integral", 20, 5));

        let updated = store
            .update(
                &created.id,
                ProductPatch {
                    price: Some(2800),
                    ..ProductPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.price, 2800);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[test]
    fn empty_patch_only_touches_updated_at() {
        let store = ProductStore::with_clock(Arc::new(SteppingClock::starting_at(test_time())));
        let created = store.create(new_product("Pan Integral", 20, 5));

        let updated = store.update(&created.id, ProductPatch::default()).unwrap();

        assert!(updated.updated_at > created.updated_at);
        let reverted = Product {
            updated_at: created.updated_at,
            ..updated
        };
        assert_eq!(reverted, created);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = ProductStore::new();
        let err = store
            .update(&ProductId::new(), ProductPatch::default())
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn delete_removes_the_record_for_every_later_read() {
        let store = ProductStore::new();
        let created = store.create(new_product("Pan Integral", 20, 5));

        store.delete(&created.id).unwrap();

        assert_eq!(store.get(&created.id), None);
        assert_eq!(
            store.update(&created.id, ProductPatch::default()),
            Err(DomainError::NotFound)
        );
        assert_eq!(store.delete(&created.id), Err(DomainError::NotFound));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn low_stock_counts_products_at_or_below_threshold() {
        let store = ProductStore::new();
        store.create(new_product("Harina", 2, 5));
        store.create(new_product("Pan Integral", 10, 2));

        assert_eq!(store.low_stock_count(), 1);
    }
}
