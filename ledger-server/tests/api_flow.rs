use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use ledger_server::services::build_router;
use ledger_server::{Config, MemoryStore, ServerState, Snapshot};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let config = Config::with_overrides(0, None);
    build_router(ServerState::new(config, MemoryStore::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn leased_resource() -> Value {
    json!({
        "id": "INV-1",
        "resourceId": "SMW5-HK-SG-01",
        "capacity": { "value": 100, "unit": "Gbps" },
        "acquisition": { "ownership": "Leased" },
        "financials": { "mrc": "10000" }
    })
}

fn inventory_order() -> Value {
    json!({
        "id": "SO-1",
        "customerName": "Acme Telecom",
        "salesModel": "Lease",
        "salesType": "Inventory",
        "inventoryLink": "INV-1",
        "capacity": { "value": 10, "unit": "Gbps" },
        "dates": { "start": "2025-01-01", "end": "2025-12-31", "term": 12 },
        "financials": { "mrcSales": 1000 },
        "costs": { "otherCosts": { "monthly": "" } }
    })
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["orders"], 0);
}

#[tokio::test]
async fn test_order_lifecycle() {
    let app = app();

    // Link must resolve before the order is accepted
    let (status, body) = send(&app, "POST", "/api/sales", Some(inventory_order())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);

    let (status, _) = send(&app, "POST", "/api/inventory", Some(leased_resource())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", "/api/sales", Some(inventory_order())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "SO-1");

    let (status, body) = send(&app, "GET", "/api/sales/SO-1/financials", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderId"], "SO-1");
    assert_eq!(body["result"]["monthlyRevenue"], 1000.0);
    assert_eq!(body["result"]["monthlyProfit"], 0.0);
    assert_eq!(body["result"]["marginPercent"], 0.0);
    assert_eq!(body["costs"]["inventoryMonthly"], 1000.0);

    // Linked resources cannot be removed
    let (status, body) = send(&app, "DELETE", "/api/inventory/INV-1", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 6002);
    assert_eq!(body["details"]["orders"], json!(["SO-1"]));

    let (status, _) = send(&app, "DELETE", "/api/sales/SO-1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, "GET", "/api/sales/SO-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    let (status, _) = send(&app, "DELETE", "/api/inventory/INV-1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_generated_ids() {
    let app = app();
    let mut order = inventory_order();
    order["id"] = json!("");
    order["salesType"] = json!("Resale");
    order["inventoryLink"] = Value::Null;

    let (status, body) = send(&app, "POST", "/api/sales", Some(order)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].as_str().unwrap().starts_with("SO-"));

    let (_, list) = send(&app, "GET", "/api/sales", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_validation_errors() {
    let app = app();
    let mut order = inventory_order();
    order["customerName"] = json!("");

    let (status, body) = send(&app, "POST", "/api/sales", Some(order)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7);
    assert_eq!(body["details"]["field"], "customerName");
}

#[tokio::test]
async fn test_preview_with_inline_resource() {
    let app = app();
    let request = json!({
        "order": {
            "salesModel": "IRU",
            "salesType": "Resale",
            "dates": { "term": 12 },
            "financials": { "otc": 6000, "annualOm": 1200 },
            "costs": { "cable": { "model": "IRU", "annualOm": 600 } }
        }
    });

    let (status, body) = send(&app, "POST", "/api/financials/preview", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("orderId").is_none());
    assert_eq!(body["result"]["isIruResale"], true);
    assert_eq!(body["result"]["monthlyRevenue"], 100.0);
    assert_eq!(body["result"]["firstMonthProfit"], 6050.0);
    assert_eq!(body["result"]["recurringMonthlyProfit"], 50.0);
    assert_eq!(body["result"]["recurringMargin"], 50.0);
}

#[tokio::test]
async fn test_preview_falls_back_to_store_and_zeroes_swapped_out() {
    let app = app();
    send(&app, "POST", "/api/inventory", Some(leased_resource())).await;

    let mut order = inventory_order();
    let (_, body) = send(&app, "POST", "/api/financials/preview", Some(json!({ "order": order.clone() }))).await;
    assert_eq!(body["costs"]["inventoryMonthly"], 1000.0);

    order["salesType"] = json!("Swapped Out");
    let (status, body) = send(&app, "POST", "/api/financials/preview", Some(json!({ "order": order }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["monthlyRevenue"], 0.0);
    assert_eq!(body["result"]["monthlyProfit"], 0.0);
}

#[tokio::test]
async fn test_dashboard_from_snapshot() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let snapshot = json!({
        "inventory": [leased_resource()],
        "sales": [
            inventory_order(),
            {
                "id": "SO-2",
                "customerName": "Globex",
                "salesType": "Resale",
                "capacity": { "value": 5 },
                "dates": { "term": 12 },
                "financials": { "mrcSales": 1000 },
                "costs": { "cable": { "mrc": 350 } }
            }
        ]
    });
    std::io::Write::write_all(&mut file, snapshot.to_string().as_bytes()).unwrap();

    let loaded = Snapshot::load(file.path()).unwrap();
    assert_eq!(loaded.sales.len(), 2);

    let config = Config::with_overrides(0, Some(file.path().to_path_buf()));
    let state = ServerState::initialize(&config).unwrap();
    let app = build_router(state);

    let (status, body) = send(&app, "GET", "/api/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderCount"], 2);
    assert_eq!(body["breakdown"]["inventory"], 1);
    assert_eq!(body["breakdown"]["resale"], 1);
    assert_eq!(body["totalMonthlyRevenue"], 2000.0);
    assert_eq!(body["totalMonthlyProfit"], 650.0);

    let (status, body) = send(&app, "GET", "/api/dashboard/utilization", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["resourceId"], "INV-1");
    assert_eq!(body[0]["soldCapacity"], 10.0);
    assert_eq!(body[0]["utilizationPercent"], 10.0);
}

#[tokio::test]
async fn test_snapshot_export_reloads() {
    let app = app();
    send(&app, "POST", "/api/inventory", Some(leased_resource())).await;
    send(&app, "POST", "/api/sales", Some(inventory_order())).await;

    let (status, exported) = send(&app, "GET", "/api/snapshot", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(exported["inventory"][0]["id"], "INV-1");
    assert_eq!(exported["sales"][0]["id"], "SO-1");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, exported.to_string().as_bytes()).unwrap();

    let config = Config::with_overrides(0, Some(file.path().to_path_buf()));
    let reloaded = build_router(ServerState::initialize(&config).unwrap());

    let (_, original) = send(&app, "GET", "/api/sales/SO-1/financials", None).await;
    let (_, restored) = send(&reloaded, "GET", "/api/sales/SO-1/financials", None).await;
    assert_eq!(original, restored);
}

#[tokio::test]
async fn test_preview_with_huge_costs_does_not_fail() {
    let app = app();
    let request = json!({
        "order": {
            "financials": { "mrcSales": 1e-17 },
            "costs": {
                "backhaul": { "aEnd": { "monthly": 5e28 }, "zEnd": { "monthly": 5e28 } },
                "otherCosts": { "monthly": 1e10 }
            }
        }
    });

    let (status, body) = send(&app, "POST", "/api/financials/preview", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["result"]["monthlyProfit"].as_f64().unwrap() < 0.0);
    assert!(body["result"]["marginPercent"].as_f64().unwrap().is_finite());
}
