//! Demo fixtures for local development.
//!
//! A small bakery catalog plus a few finalized invoices, so the dashboard
//! has something to show on a fresh start.

use panaderia_core::{Clock, DomainResult};
use panaderia_inventory::{NewProduct, ProductCategory, ProductUnit};
use panaderia_invoicing::{invoice_number, InvoiceDraft, InvoiceHeader, InvoiceStatus, NewInvoice};

use crate::invoice_store::InvoiceStore;
use crate::product_store::ProductStore;

fn demo_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Pan Integral".to_string(),
            description: Some("Pan integral fresco y saludable".to_string()),
            price: 2500,
            cost: 1500,
            stock: 20,
            min_stock: 5,
            category: ProductCategory::Bread,
            unit: ProductUnit::Unit,
            barcode: Some("123456789".to_string()),
        },
        NewProduct {
            name: "Croissant".to_string(),
            description: Some("Croissant de mantequilla francés".to_string()),
            price: 1800,
            cost: 1000,
            stock: 15,
            min_stock: 3,
            category: ProductCategory::Pastry,
            unit: ProductUnit::Unit,
            barcode: Some("123456790".to_string()),
        },
        NewProduct {
            name: "Torta de Chocolate".to_string(),
            description: Some("Torta de chocolate para 8 personas".to_string()),
            price: 15_000,
            cost: 8000,
            stock: 2,
            min_stock: 1,
            category: ProductCategory::Cake,
            unit: ProductUnit::Unit,
            barcode: Some("123456791".to_string()),
        },
        NewProduct {
            name: "Empanadas de Pollo".to_string(),
            description: Some("Empanadas caseras de pollo".to_string()),
            price: 1200,
            cost: 600,
            stock: 25,
            min_stock: 10,
            category: ProductCategory::Pastry,
            unit: ProductUnit::Unit,
            barcode: Some("123456792".to_string()),
        },
        NewProduct {
            name: "Café Premium".to_string(),
            description: Some("Café molido premium".to_string()),
            price: 8000,
            cost: 5000,
            stock: 5,
            min_stock: 2,
            category: ProductCategory::Other,
            unit: ProductUnit::Kg,
            barcode: Some("123456793".to_string()),
        },
    ]
}

/// Populate both stores with the demo catalog and a few invoices.
pub fn demo_data(
    products: &ProductStore,
    invoices: &InvoiceStore,
    clock: &dyn Clock,
) -> DomainResult<()> {
    let catalog: Vec<_> = demo_products()
        .into_iter()
        .map(|input| products.create(input))
        .collect();

    let sales: [(&str, &[(usize, u32)], InvoiceStatus); 3] = [
        ("Juan Pérez", &[(0, 2), (1, 3)], InvoiceStatus::Paid),
        ("María González", &[(2, 1)], InvoiceStatus::Paid),
        ("Carlos López", &[(3, 5)], InvoiceStatus::Draft),
    ];

    for (customer, picks, status) in sales {
        let mut draft = InvoiceDraft::default();
        for &(index, quantity) in picks {
            draft.add_line(&catalog[index], quantity)?;
        }
        let totals = draft.totals();
        invoices.create(NewInvoice {
            header: InvoiceHeader {
                invoice_number: invoice_number(clock.now()),
                customer_name: Some(customer.to_string()),
                subtotal: totals.subtotal,
                tax: totals.tax,
                total: totals.total,
                status,
            },
            items: draft.into_items(),
        })?;
    }

    tracing::info!(
        products = catalog.len(),
        invoices = invoices.count(),
        "demo data seeded"
    );
    Ok(())
}
