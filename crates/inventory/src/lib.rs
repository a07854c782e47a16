//! Inventory domain module.
//!
//! This crate contains the product catalog record and its field-level
//! operations, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod product;

pub use product::{NewProduct, Product, ProductCategory, ProductId, ProductPatch, ProductUnit};
