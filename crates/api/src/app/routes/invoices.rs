use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use panaderia_core::RecordId;
use panaderia_inventory::ProductId;
use panaderia_invoicing::{InvoiceId, DEFAULT_TAX_RATE_PERCENT};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_invoice).get(list_invoices))
        .route("/:id", get(get_invoice))
}

pub async fn list_invoices(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services
        .invoices_list()
        .into_iter()
        .map(dto::invoice_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn create_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateInvoiceRequest>,
) -> axum::response::Response {
    let mut picks: Vec<(ProductId, u32)> = Vec::with_capacity(body.items.len());
    for line in body.items {
        let product_id = match line.product_id.parse::<RecordId>() {
            Ok(v) => ProductId(v),
            Err(_) => {
                return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
            }
        };
        picks.push((product_id, line.quantity));
    }

    let customer_name = dto::normalize_customer_name(body.customer_name);
    let tax_rate = body.tax_rate.unwrap_or(DEFAULT_TAX_RATE_PERCENT);

    match services.finalize_invoice(customer_name, tax_rate, picks) {
        Ok(invoice) => (StatusCode::CREATED, Json(dto::invoice_to_json(invoice))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let invoice_id = match id.parse::<RecordId>() {
        Ok(v) => InvoiceId(v),
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid invoice id")
        }
    };

    match services.invoices_get(&invoice_id) {
        Some(invoice) => (StatusCode::OK, Json(dto::invoice_to_json(invoice))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "invoice not found"),
    }
}
