use std::sync::Arc;

use panaderia_core::{Clock, DomainError, DomainResult, SystemClock};
use panaderia_infra::{seed, Dashboard, DashboardStats, InvoiceStore, ProductStore, SalesPoint};
use panaderia_inventory::{NewProduct, Product, ProductId, ProductPatch};
use panaderia_invoicing::{
    invoice_number, Invoice, InvoiceDraft, InvoiceHeader, InvoiceId, InvoiceStatus, NewInvoice,
};

/// Store wiring shared by all handlers. One instance per process.
pub struct AppServices {
    products: Arc<ProductStore>,
    invoices: Arc<InvoiceStore>,
    dashboard: Dashboard,
    clock: Arc<dyn Clock>,
}

pub fn build_services() -> AppServices {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    AppServices::with_clock(clock)
}

impl AppServices {
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let products = Arc::new(ProductStore::with_clock(clock.clone()));
        let invoices = Arc::new(InvoiceStore::with_clock(clock.clone()));

        let seed_demo = std::env::var("SEED_DEMO_DATA")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);
        if seed_demo {
            if let Err(e) = seed::demo_data(&products, &invoices, clock.as_ref()) {
                tracing::warn!("demo seed failed: {e}");
            }
        }

        let dashboard = Dashboard::with_clock(products.clone(), invoices.clone(), clock.clone());
        Self {
            products,
            invoices,
            dashboard,
            clock,
        }
    }

    pub fn products_list(&self) -> Vec<Product> {
        self.products.list()
    }

    pub fn products_get(&self, id: &ProductId) -> Option<Product> {
        self.products.get(id)
    }

    pub fn products_create(&self, input: NewProduct) -> Product {
        self.products.create(input)
    }

    pub fn products_update(&self, id: &ProductId, patch: ProductPatch) -> DomainResult<Product> {
        self.products.update(id, patch)
    }

    pub fn products_delete(&self, id: &ProductId) -> DomainResult<()> {
        self.products.delete(id)
    }

    pub fn invoices_list(&self) -> Vec<Invoice> {
        self.invoices.list()
    }

    pub fn invoices_get(&self, id: &InvoiceId) -> Option<Invoice> {
        self.invoices.get(id)
    }

    /// Resolve the picked products, accumulate draft lines (merging repeat
    /// picks), compute totals, and commit the result as a paid invoice.
    pub fn finalize_invoice(
        &self,
        customer_name: Option<String>,
        tax_rate_percent: f64,
        picks: Vec<(ProductId, u32)>,
    ) -> DomainResult<Invoice> {
        let mut draft = InvoiceDraft::new(tax_rate_percent);
        for (product_id, quantity) in picks {
            let product = self
                .products
                .get(&product_id)
                .ok_or(DomainError::NotFound)?;
            draft.add_line(&product, quantity)?;
        }

        let totals = draft.totals();
        let header = InvoiceHeader {
            invoice_number: invoice_number(self.clock.now()),
            customer_name,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            status: InvoiceStatus::Paid,
        };

        self.invoices.create(NewInvoice {
            header,
            items: draft.into_items(),
        })
    }

    pub fn stats(&self) -> DashboardStats {
        self.dashboard.stats()
    }

    pub fn sales_series(&self, days: u32) -> Vec<SalesPoint> {
        self.dashboard.sales_series(days)
    }
}
