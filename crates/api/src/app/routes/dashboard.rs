use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::dto;
use crate::app::services::AppServices;

const DEFAULT_SALES_WINDOW_DAYS: u32 = 7;

pub fn router() -> Router {
    Router::new()
        .route("/stats", get(stats))
        .route("/sales", get(sales))
}

pub async fn stats(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.stats())).into_response()
}

pub async fn sales(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SalesQuery>,
) -> axum::response::Response {
    let days = query.days.unwrap_or(DEFAULT_SALES_WINDOW_DAYS);
    let points = services.sales_series(days);
    (StatusCode::OK, Json(serde_json::json!({ "points": points }))).into_response()
}
