use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use panaderia_core::{Entity, RecordId};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub RecordId);

impl ProductId {
    pub fn new() -> Self {
        Self(RecordId::new())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Bread,
    Pastry,
    Cake,
    Ingredient,
    Other,
}

/// Unit the product is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductUnit {
    Unit,
    Kg,
    Gram,
    Liter,
}

/// Catalog record for a single product.
///
/// Monetary amounts are in minor currency units. `stock`/`min_stock` are
/// unsigned, so the never-negative invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
    pub cost: u64,
    pub stock: u32,
    pub min_stock: u32,
    pub category: ProductCategory,
    pub unit: ProductUnit,
    pub barcode: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Low stock is a derived predicate, never persisted.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Merge the fields the patch names onto this record. Timestamps are the
    /// store's concern, not the patch's.
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(cost) = patch.cost {
            self.cost = cost;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(min_stock) = patch.min_stock {
            self.min_stock = min_stock;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(barcode) = patch.barcode {
            self.barcode = Some(barcode);
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for creating a product: everything except the id and timestamps,
/// which the store assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: u64,
    pub cost: u64,
    pub stock: u32,
    pub min_stock: u32,
    pub category: ProductCategory,
    pub unit: ProductUnit,
    #[serde(default)]
    pub barcode: Option<String>,
}

/// Explicit patch structure listing exactly the fields an update may touch.
///
/// `None` means "leave unchanged". `description`/`barcode` can be set but not
/// cleared through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub cost: Option<u64>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub min_stock: Option<u32>,
    #[serde(default)]
    pub category: Option<ProductCategory>,
    #[serde(default)]
    pub unit: Option<ProductUnit>,
    #[serde(default)]
    pub barcode: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
