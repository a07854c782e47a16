//! Read-side summary metrics derived from the stores.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use panaderia_core::{Clock, SystemClock};
use panaderia_invoicing::InvoiceStatus;

use crate::invoice_store::InvoiceStore;
use crate::product_store::ProductStore;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of `total` over paid invoices.
    pub total_sales: u64,
    /// Count of all invoices regardless of status.
    pub total_invoices: usize,
    pub low_stock_products: usize,
    pub total_products: usize,
}

/// One calendar day of paid sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub amount: u64,
}

/// Derives metrics by reading the stores; performs no mutation.
pub struct Dashboard {
    products: Arc<ProductStore>,
    invoices: Arc<InvoiceStore>,
    clock: Arc<dyn Clock>,
}

impl Dashboard {
    pub fn new(products: Arc<ProductStore>, invoices: Arc<InvoiceStore>) -> Self {
        Self::with_clock(products, invoices, Arc::new(SystemClock))
    }

    pub fn with_clock(
        products: Arc<ProductStore>,
        invoices: Arc<InvoiceStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            products,
            invoices,
            clock,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        let total_sales = self
            .invoices
            .list()
            .iter()
            .filter(|i| i.status == InvoiceStatus::Paid)
            .map(|i| i.total)
            .sum();

        DashboardStats {
            total_sales,
            total_invoices: self.invoices.count(),
            low_stock_products: self.products.low_stock_count(),
            total_products: self.products.count(),
        }
    }

    /// One point per trailing calendar day (today included), oldest first.
    ///
    /// Paid invoices are bucketed by the calendar day of `created_at` and
    /// their totals summed; days without sales are zero-filled.
    pub fn sales_series(&self, days: u32) -> Vec<SalesPoint> {
        let mut buckets: HashMap<NaiveDate, u64> = HashMap::new();
        for invoice in self.invoices.list() {
            if invoice.status != InvoiceStatus::Paid {
                continue;
            }
            *buckets.entry(invoice.created_at.date_naive()).or_default() += invoice.total;
        }

        let today = self.clock.now().date_naive();
        (0..days)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(i64::from(offset));
                SalesPoint {
                    date,
                    amount: buckets.get(&date).copied().unwrap_or(0),
                }
            })
            .collect()
    }
}
