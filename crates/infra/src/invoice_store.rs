//! Persisted invoice collection.

use std::sync::{Arc, RwLock};

use panaderia_core::{Clock, DomainError, DomainResult, SystemClock};
use panaderia_invoicing::{Invoice, InvoiceId, InvoiceItem, InvoiceItemId, NewInvoice};

/// Owns finalized invoices, stored newest-first.
///
/// The store assigns ids and the creation timestamp; the header's monetary
/// fields arrive precomputed by the builder and are stored verbatim.
pub struct InvoiceStore {
    inner: RwLock<Vec<Invoice>>,
    clock: Arc<dyn Clock>,
}

impl InvoiceStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Snapshot of all invoices, most recently created first.
    pub fn list(&self) -> Vec<Invoice> {
        match self.inner.read() {
            Ok(invoices) => invoices.clone(),
            Err(_) => vec![],
        }
    }

    pub fn get(&self, id: &InvoiceId) -> Option<Invoice> {
        let invoices = self.inner.read().ok()?;
        invoices.iter().find(|i| i.id == *id).cloned()
    }

    /// Finalize an invoice: assign ids, stamp `created_at`, insert at the
    /// front.
    ///
    /// An empty item list is the one validation gate; it fails without
    /// touching the collection.
    pub fn create(&self, new_invoice: NewInvoice) -> DomainResult<Invoice> {
        if new_invoice.items.is_empty() {
            return Err(DomainError::validation(
                "invoice must contain at least one item",
            ));
        }

        let invoice_id = InvoiceId::new();
        let items: Vec<InvoiceItem> = new_invoice
            .items
            .into_iter()
            .map(|item| InvoiceItem {
                id: InvoiceItemId::new(),
                invoice_id,
                product_id: item.product_id,
                product_name: item.product_name,
                quantity: item.quantity,
                unit_price: item.unit_price,
                total: item.total,
            })
            .collect();

        let header = new_invoice.header;
        let invoice = Invoice {
            id: invoice_id,
            invoice_number: header.invoice_number,
            customer_name: header.customer_name,
            items,
            subtotal: header.subtotal,
            tax: header.tax,
            total: header.total,
            status: header.status,
            created_at: self.clock.now(),
        };

        if let Ok(mut invoices) = self.inner.write() {
            invoices.insert(0, invoice.clone());
        }
        tracing::debug!(invoice_id = %invoice.id, number = %invoice.invoice_number, "invoice finalized");
        Ok(invoice)
    }

    pub fn count(&self) -> usize {
        match self.inner.read() {
            Ok(invoices) => invoices.len(),
            Err(_) => 0,
        }
    }
}

impl Default for InvoiceStore {
    fn default() -> Self {
        Self::new()
    }
}
