use serde::Deserialize;

use panaderia_inventory::Product;
use panaderia_invoicing::Invoice;

// -------------------------
// Request DTOs
// -------------------------
//
// Product creation and patching deserialize directly into the domain's
// `NewProduct`/`ProductPatch` input types; only the invoice request needs
// its own shape (product picks by id).

#[derive(Debug, Deserialize)]
pub struct InvoiceLineRequest {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Percent; defaults to the standard rate when absent.
    #[serde(default)]
    pub tax_rate: Option<f64>,
    pub items: Vec<InvoiceLineRequest>,
}

#[derive(Debug, Deserialize)]
pub struct SalesQuery {
    #[serde(default)]
    pub days: Option<u32>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id.to_string(),
        "name": p.name,
        "description": p.description,
        "price": p.price,
        "cost": p.cost,
        "stock": p.stock,
        "min_stock": p.min_stock,
        "low_stock": p.stock <= p.min_stock,
        "category": p.category,
        "unit": p.unit,
        "barcode": p.barcode,
        "created_at": p.created_at.to_rfc3339(),
        "updated_at": p.updated_at.to_rfc3339(),
    })
}

pub fn invoice_to_json(inv: Invoice) -> serde_json::Value {
    serde_json::json!({
        "id": inv.id.to_string(),
        "invoice_number": inv.invoice_number,
        "customer_name": inv.customer_name,
        "subtotal": inv.subtotal,
        "tax": inv.tax,
        "total": inv.total,
        "status": inv.status,
        "created_at": inv.created_at.to_rfc3339(),
        "items": inv.items.into_iter().map(|item| serde_json::json!({
            "id": item.id.to_string(),
            "invoice_id": item.invoice_id.to_string(),
            "product_id": item.product_id.to_string(),
            "product_name": item.product_name,
            "quantity": item.quantity,
            "unit_price": item.unit_price,
            "total": item.total,
        })).collect::<Vec<_>>(),
    })
}

/// Blank or whitespace-only customer names mean a walk-in sale.
pub fn normalize_customer_name(raw: Option<String>) -> Option<String> {
    raw.and_then(|name| {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
