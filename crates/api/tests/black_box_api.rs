use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = panaderia_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_product(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    price: u64,
    stock: u32,
    min_stock: u32,
) -> serde_json::Value {
    let res = client
        .post(format!("{}/products", base_url))
        .json(&json!({
            "name": name,
            "price": price,
            "cost": price / 2,
            "stock": stock,
            "min_stock": min_stock,
            "category": "bread",
            "unit": "unit",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn product_crud_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_product(&client, &srv.base_url, "Pan Integral", 2500, 20, 5).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Pan Integral");
    assert_eq!(created["price"], 2500);
    assert_eq!(created["low_stock"], false);
    assert_eq!(created["created_at"], created["updated_at"]);

    // Listed in insertion order.
    let res = client
        .get(format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["id"], id.as_str());

    // Patch a couple of fields.
    let res = client
        .patch(format!("{}/products/{}", srv.base_url, id))
        .json(&json!({ "price": 2800, "stock": 4 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["price"], 2800);
    assert_eq!(updated["stock"], 4);
    assert_eq!(updated["name"], "Pan Integral");
    assert_eq!(updated["low_stock"], true);

    let res = client
        .get(format!("{}/products/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched["price"], 2800);

    // Delete, then every read/write on the id is a typed 404.
    let res = client
        .delete(format!("{}/products/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/products/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");

    let res = client
        .patch(format!("{}/products/{}", srv.base_url, id))
        .json(&json!({ "price": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_product_id_is_a_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/products/not-a-uuid", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn invoice_merges_repeat_picks_and_computes_totals() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let product = create_product(&client, &srv.base_url, "Pan Integral", 2500, 20, 5).await;
    let product_id = product["id"].as_str().unwrap();

    let res = client
        .post(format!("{}/invoices", srv.base_url))
        .json(&json!({
            "customer_name": "Juan Pérez",
            "tax_rate": 19,
            "items": [
                { "product_id": product_id, "quantity": 2 },
                { "product_id": product_id, "quantity": 3 },
            ],
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let invoice: serde_json::Value = res.json().await.unwrap();

    let items = invoice["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 5);
    assert_eq!(items[0]["unit_price"], 2500);
    assert_eq!(items[0]["total"], 12_500);
    assert_eq!(items[0]["product_name"], "Pan Integral");

    assert_eq!(invoice["subtotal"], 12_500);
    assert_eq!(invoice["tax"], 2375);
    assert_eq!(invoice["total"], 14_875);
    assert_eq!(invoice["status"], "paid");
    assert_eq!(invoice["customer_name"], "Juan Pérez");
    assert!(invoice["invoice_number"]
        .as_str()
        .unwrap()
        .starts_with("INV-"));
}

#[tokio::test]
async fn blank_customer_name_means_walk_in() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let product = create_product(&client, &srv.base_url, "Croissant", 1800, 15, 3).await;
    let product_id = product["id"].as_str().unwrap();

    let res = client
        .post(format!("{}/invoices", srv.base_url))
        .json(&json!({
            "customer_name": "   ",
            "items": [{ "product_id": product_id, "quantity": 1 }],
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let invoice: serde_json::Value = res.json().await.unwrap();
    assert!(invoice["customer_name"].is_null());
    // Default 19% rate applies when the request carries none.
    assert_eq!(invoice["tax"], 342);
}

#[tokio::test]
async fn invoice_without_items_is_rejected_and_nothing_is_stored() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/invoices", srv.base_url))
        .json(&json!({ "customer_name": "Juan Pérez", "items": [] }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    let res = client
        .get(format!("{}/invoices", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn invoice_for_unknown_product_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/invoices", srv.base_url))
        .json(&json!({
            "items": [{ "product_id": "00000000-0000-0000-0000-000000000000", "quantity": 1 }],
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invoices_list_newest_first() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let product = create_product(&client, &srv.base_url, "Pan Integral", 2500, 20, 5).await;
    let product_id = product["id"].as_str().unwrap();

    let mut ids = Vec::new();
    for quantity in [1, 2] {
        let res = client
            .post(format!("{}/invoices", srv.base_url))
            .json(&json!({ "items": [{ "product_id": product_id, "quantity": quantity }] }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let invoice: serde_json::Value = res.json().await.unwrap();
        ids.push(invoice["id"].as_str().unwrap().to_string());
    }

    let res = client
        .get(format!("{}/invoices", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let listed = body["items"].as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], ids[1].as_str());
    assert_eq!(listed[1]["id"], ids[0].as_str());
}

#[tokio::test]
async fn dashboard_reflects_both_stores() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_product(&client, &srv.base_url, "Harina", 1000, 2, 5).await;
    let product = create_product(&client, &srv.base_url, "Pan Integral", 2500, 20, 5).await;
    let product_id = product["id"].as_str().unwrap();

    let res = client
        .post(format!("{}/invoices", srv.base_url))
        .json(&json!({
            "tax_rate": 19,
            "items": [{ "product_id": product_id, "quantity": 2 }],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!("{}/dashboard/stats", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let stats: serde_json::Value = res.json().await.unwrap();
    assert_eq!(stats["totalSales"], 5950);
    assert_eq!(stats["totalInvoices"], 1);
    assert_eq!(stats["lowStockProducts"], 1);
    assert_eq!(stats["totalProducts"], 2);

    let res = client
        .get(format!("{}/dashboard/sales?days=3", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let points = body["points"].as_array().unwrap();
    assert_eq!(points.len(), 3);
    // Today's bucket carries the paid invoice; earlier days are zero-filled.
    assert_eq!(points[2]["amount"], 5950);
    assert_eq!(points[0]["amount"], 0);
    assert_eq!(points[1]["amount"], 0);
}
