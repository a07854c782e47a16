//! In-memory stores and read-side aggregation.
//!
//! Each store owns its collection behind an `RwLock` and is instantiated
//! once per process (or per test) — there is no ambient shared state. The
//! dashboard derives summary metrics by reading the stores; it never
//! mutates.

pub mod dashboard;
pub mod invoice_store;
pub mod product_store;
pub mod seed;

pub use dashboard::{Dashboard, DashboardStats, SalesPoint};
pub use invoice_store::InvoiceStore;
pub use product_store::ProductStore;
