use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use panaderia_core::{Entity, RecordId};
use panaderia_inventory::ProductId;

/// Invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub RecordId);

impl InvoiceId {
    pub fn new() -> Self {
        Self(RecordId::new())
    }
}

impl Default for InvoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Invoice line-item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceItemId(pub RecordId);

impl InvoiceItemId {
    pub fn new() -> Self {
        Self(RecordId::new())
    }
}

impl Default for InvoiceItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for InvoiceItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Invoice status lifecycle.
///
/// Transitions (`draft -> paid`, `-> cancelled`) are deliberately not
/// implemented yet; callers currently finalize directly as `paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Paid,
    Cancelled,
}

/// One product/quantity/price entry within a finalized invoice.
///
/// `product_name` and `unit_price` are snapshots taken when the line was
/// added, so later catalog edits do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: InvoiceItemId,
    pub invoice_id: InvoiceId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub total: u64,
}

/// Finalized invoice. Owns its items; they are created and serialized with
/// the invoice and never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub customer_name: Option<String>,
    pub items: Vec<InvoiceItem>,
    pub subtotal: u64,
    pub tax: u64,
    pub total: u64,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Header fields for a finalization request. The monetary fields arrive
/// precomputed by the builder; the store does not recompute them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub invoice_number: String,
    pub customer_name: Option<String>,
    pub subtotal: u64,
    pub tax: u64,
    pub total: u64,
    pub status: InvoiceStatus,
}

/// Line input for a finalization request: ids are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInvoiceItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub total: u64,
}

/// Full finalization request: header + ordered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInvoice {
    pub header: InvoiceHeader,
    pub items: Vec<NewInvoiceItem>,
}
