//! Pure invoice-building state: line accumulation and totals math.
//!
//! Everything here is synchronous and storage-free; the draft lives in the
//! caller's hands until it is committed to the invoice store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use panaderia_core::{DomainError, DomainResult, ValueObject};
use panaderia_inventory::{Product, ProductId};

use crate::invoice::NewInvoiceItem;

/// Tax rate applied when the caller does not supply one.
pub const DEFAULT_TAX_RATE_PERCENT: f64 = 19.0;

/// One line of an invoice-in-progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub total: u64,
}

impl From<DraftLine> for NewInvoiceItem {
    fn from(line: DraftLine) -> Self {
        Self {
            product_id: line.product_id,
            product_name: line.product_name,
            quantity: line.quantity,
            unit_price: line.unit_price,
            total: line.total,
        }
    }
}

/// Monetary summary of a set of lines. Minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: u64,
    pub tax: u64,
    pub total: u64,
}

impl ValueObject for Totals {}

/// Working state for an invoice before finalization.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    lines: Vec<DraftLine>,
    tax_rate_percent: f64,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_RATE_PERCENT)
    }
}

impl InvoiceDraft {
    pub fn new(tax_rate_percent: f64) -> Self {
        Self {
            lines: Vec::new(),
            tax_rate_percent,
        }
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    pub fn tax_rate_percent(&self) -> f64 {
        self.tax_rate_percent
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` of `product` to the draft.
    ///
    /// If a line for the product already exists the quantities merge; the
    /// line's `unit_price` stays fixed from the first addition and is not
    /// re-read from the catalog.
    pub fn add_line(&mut self, product: &Product, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            line.total = u64::from(line.quantity) * line.unit_price;
            return Ok(());
        }

        self.lines.push(DraftLine {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
            unit_price: product.price,
            total: u64::from(quantity) * product.price,
        });
        Ok(())
    }

    /// Remove the line at `index`, returning it.
    pub fn remove_line(&mut self, index: usize) -> DomainResult<DraftLine> {
        if index >= self.lines.len() {
            return Err(DomainError::not_found());
        }
        Ok(self.lines.remove(index))
    }

    /// Replace the quantity of the line at `index`, recomputing its total
    /// from the existing `unit_price`.
    pub fn set_line_quantity(&mut self, index: usize, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        let line = self
            .lines
            .get_mut(index)
            .ok_or_else(DomainError::not_found)?;
        line.quantity = quantity;
        line.total = u64::from(quantity) * line.unit_price;
        Ok(())
    }

    pub fn totals(&self) -> Totals {
        compute_totals(&self.lines, self.tax_rate_percent)
    }

    /// Hand the accumulated lines over for finalization.
    pub fn into_items(self) -> Vec<NewInvoiceItem> {
        self.lines.into_iter().map(NewInvoiceItem::from).collect()
    }
}

/// Sum line totals and apply the tax rate (percent).
///
/// Tax is rounded to the nearest minor unit; a rate of 0 is valid and
/// yields zero tax.
pub fn compute_totals(lines: &[DraftLine], tax_rate_percent: f64) -> Totals {
    let subtotal: u64 = lines.iter().map(|l| l.total).sum();
    let tax = ((subtotal as f64) * tax_rate_percent / 100.0).round().max(0.0) as u64;
    Totals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Derive a human-readable invoice number from the current instant.
///
/// Format `INV-YYYYMMDD-XXXX` where `XXXX` is the last four digits of the
/// millisecond timestamp. Display convenience only; collisions within the
/// same truncation window are possible.
pub fn invoice_number(now: DateTime<Utc>) -> String {
    format!(
        "INV-{}-{:04}",
        now.format("%Y%m%d"),
        now.timestamp_millis().rem_euclid(10_000)
    )
}
