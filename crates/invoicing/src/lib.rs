//! Invoicing domain module.
//!
//! This crate contains business rules for sales invoices: the persisted
//! record types and the pure in-progress builder (line accumulation and
//! totals math). No IO, no HTTP, no storage.

pub mod builder;
pub mod invoice;

pub use builder::{invoice_number, compute_totals, DraftLine, InvoiceDraft, Totals, DEFAULT_TAX_RATE_PERCENT};
pub use invoice::{
    Invoice, InvoiceHeader, InvoiceId, InvoiceItem, InvoiceItemId, InvoiceStatus, NewInvoice,
    NewInvoiceItem,
};
