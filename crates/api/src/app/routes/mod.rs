use axum::Router;

pub mod dashboard;
pub mod invoices;
pub mod products;
pub mod system;

/// Router for all store-backed endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/invoices", invoices::router())
        .nest("/dashboard", dashboard::router())
}
