//! End-to-end HTTP tests: a real server on an ephemeral port, exercised
//! through `reqwest`.

#![allow(clippy::panic)]

use std::sync::Arc;

use axum::Router;
use serde_json::{Value, json};

use vpp_gateway::api;
use vpp_gateway::app_state::AppState;
use vpp_gateway::config::GatewayConfig;
use vpp_gateway::service::BatteryService;
use vpp_gateway::storage::InMemoryStore;

/// Binds the full router to an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let Ok(listen_addr) = "127.0.0.1:0".parse() else {
        panic!("invalid test listen address");
    };
    let config = GatewayConfig {
        listen_addr,
        default_page_size: 20,
        max_page_size: 100,
    };
    let store = Arc::new(InMemoryStore::new());
    let battery_service = Arc::new(BatteryService::new(store));
    let app_state = AppState {
        battery_service,
        config,
    };

    let app = Router::new().merge(api::build_router()).with_state(app_state);

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("failed to bind test listener");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("failed to read listener address");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}

fn battery(name: &str, postcode: i32, capacity: i64) -> Value {
    json!({ "name": name, "postcode": postcode, "capacity": capacity })
}

async fn register(base: &str, batteries: Vec<Value>) {
    let response = reqwest::Client::new()
        .post(format!("{base}/api/v1/batteries"))
        .json(&json!({ "batteries": batteries }))
        .send()
        .await;
    let Ok(response) = response else {
        panic!("register request failed");
    };
    assert_eq!(response.status(), 200);
}

async fn get_json(url: &str) -> (u16, Value) {
    let Ok(response) = reqwest::get(url).await else {
        panic!("GET {url} failed");
    };
    let status = response.status().as_u16();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let base = spawn_server().await;
    let (status, body) = get_json(&format!("{base}/health")).await;
    assert_eq!(status, 200);
    assert_eq!(body.get("status").and_then(Value::as_str), Some("healthy"));
}

#[tokio::test]
async fn statistics_over_registered_batteries() {
    let base = spawn_server().await;
    register(
        &base,
        vec![
            battery("Alpha", 2001, 200),
            battery("Bravo", 2002, 300),
            battery("Charlie", 2000, 100),
        ],
    )
    .await;

    let (status, body) =
        get_json(&format!("{base}/api/v1/batteries?from=2000&to=2002")).await;
    assert_eq!(status, 200);
    assert_eq!(
        body.get("batteries"),
        Some(&json!(["Alpha", "Bravo", "Charlie"]))
    );
    assert_eq!(body.get("totalWattCapacity"), Some(&json!(600)));
    assert_eq!(body.get("averageWattCapacity"), Some(&json!(200.0)));
}

#[tokio::test]
async fn statistics_with_min_capacity_bound() {
    let base = spawn_server().await;
    register(
        &base,
        vec![
            battery("Alpha", 2001, 200),
            battery("Bravo", 2002, 300),
            battery("Charlie", 2000, 100),
        ],
    )
    .await;

    let (status, body) = get_json(&format!(
        "{base}/api/v1/batteries?from=2000&to=2002&minCapacity=150"
    ))
    .await;
    assert_eq!(status, 200);
    assert_eq!(body.get("batteries"), Some(&json!(["Alpha", "Bravo"])));
    assert_eq!(body.get("totalWattCapacity"), Some(&json!(500)));
    assert_eq!(body.get("averageWattCapacity"), Some(&json!(250.0)));
}

#[tokio::test]
async fn statistics_with_empty_match_set() {
    let base = spawn_server().await;
    let (status, body) =
        get_json(&format!("{base}/api/v1/batteries?from=9000&to=9999")).await;
    assert_eq!(status, 200);
    assert_eq!(body.get("batteries"), Some(&json!([])));
    assert_eq!(body.get("totalWattCapacity"), Some(&json!(0)));
    assert_eq!(body.get("averageWattCapacity"), Some(&json!(0.0)));
}

#[tokio::test]
async fn inverted_postcode_range_is_bad_request() {
    let base = spawn_server().await;
    let (status, body) =
        get_json(&format!("{base}/api/v1/batteries?from=3000&to=2000")).await;
    assert_eq!(status, 400);
    assert_eq!(
        body.pointer("/error/code").and_then(Value::as_u64),
        Some(1002)
    );
}

#[tokio::test]
async fn inverted_capacity_range_is_bad_request() {
    let base = spawn_server().await;
    let (status, body) = get_json(&format!(
        "{base}/api/v1/batteries?from=2000&to=3000&minCapacity=500&maxCapacity=100"
    ))
    .await;
    assert_eq!(status, 400);
    assert_eq!(
        body.pointer("/error/code").and_then(Value::as_u64),
        Some(1003)
    );
}

#[tokio::test]
async fn empty_batch_is_bad_request() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/v1/batteries"))
        .json(&json!({ "batteries": [] }))
        .send()
        .await;
    let Ok(response) = response else {
        panic!("request failed");
    };
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn invalid_battery_fields_are_bad_request() {
    let base = spawn_server().await;
    for bad in [
        battery("", 2000, 100),
        battery("Alpha", 0, 100),
        battery("Alpha", 2000, -5),
    ] {
        let response = reqwest::Client::new()
            .post(format!("{base}/api/v1/batteries"))
            .json(&json!({ "batteries": [bad] }))
            .send()
            .await;
        let Ok(response) = response else {
            panic!("request failed");
        };
        assert_eq!(response.status(), 400);
    }
}

#[tokio::test]
async fn crud_cycle_over_a_single_battery() {
    let base = spawn_server().await;
    register(&base, vec![battery("Cannington", 6107, 13500)]).await;

    // Find it through the listing.
    let (status, listing) =
        get_json(&format!("{base}/api/v1/batteries/all?page=1&perPage=10")).await;
    assert_eq!(status, 200);
    let Some(first) = listing.pointer("/data/0") else {
        panic!("listing is empty");
    };
    let Some(id) = first.get("id").and_then(Value::as_str) else {
        panic!("listed battery has no id");
    };
    assert_eq!(first.get("wattCapacity"), Some(&json!(13500)));
    let Some(created_at) = first.get("createdAt").and_then(Value::as_str) else {
        panic!("listed battery has no createdAt");
    };
    assert_eq!(created_at.len(), 19); // yyyy-MM-dd HH:mm:ss

    // Read by id.
    let (status, fetched) = get_json(&format!("{base}/api/v1/batteries/{id}")).await;
    assert_eq!(status, 200);
    assert_eq!(fetched.get("name"), Some(&json!("Cannington")));

    // Update.
    let client = reqwest::Client::new();
    let response = client
        .put(format!("{base}/api/v1/batteries/{id}"))
        .json(&battery("Cannington II", 6108, 15000))
        .send()
        .await;
    let Ok(response) = response else {
        panic!("update request failed");
    };
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap_or(Value::Null);
    assert_eq!(updated.get("name"), Some(&json!("Cannington II")));
    assert_eq!(updated.get("postcode"), Some(&json!(6108)));
    assert_eq!(updated.get("wattCapacity"), Some(&json!(15000)));
    assert_eq!(updated.get("id"), Some(&json!(id)));

    // Delete, then the read must 404.
    let response = client
        .delete(format!("{base}/api/v1/batteries/{id}"))
        .send()
        .await;
    let Ok(response) = response else {
        panic!("delete request failed");
    };
    assert_eq!(response.status(), 204);

    let (status, _) = get_json(&format!("{base}/api/v1/batteries/{id}")).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn missing_id_operations_return_404() {
    let base = spawn_server().await;
    let id = uuid::Uuid::new_v4();
    let client = reqwest::Client::new();

    let (status, body) = get_json(&format!("{base}/api/v1/batteries/{id}")).await;
    assert_eq!(status, 404);
    assert_eq!(
        body.pointer("/error/code").and_then(Value::as_u64),
        Some(2001)
    );

    let response = client
        .put(format!("{base}/api/v1/batteries/{id}"))
        .json(&battery("Ghost", 2000, 100))
        .send()
        .await;
    let Ok(response) = response else {
        panic!("update request failed");
    };
    assert_eq!(response.status(), 404);

    let response = client
        .delete(format!("{base}/api/v1/batteries/{id}"))
        .send()
        .await;
    let Ok(response) = response else {
        panic!("delete request failed");
    };
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn listing_paginates_with_metadata() {
    let base = spawn_server().await;
    register(
        &base,
        vec![
            battery("A", 2000, 100),
            battery("B", 2001, 200),
            battery("C", 2002, 300),
        ],
    )
    .await;

    let (status, body) =
        get_json(&format!("{base}/api/v1/batteries/all?page=1&perPage=2")).await;
    assert_eq!(status, 200);
    assert_eq!(
        body.pointer("/data").and_then(Value::as_array).map(Vec::len),
        Some(2)
    );
    assert_eq!(body.pointer("/pagination/total"), Some(&json!(3)));
    assert_eq!(body.pointer("/pagination/totalPages"), Some(&json!(2)));

    let (status, body) =
        get_json(&format!("{base}/api/v1/batteries/all?page=2&perPage=2")).await;
    assert_eq!(status, 200);
    assert_eq!(
        body.pointer("/data").and_then(Value::as_array).map(Vec::len),
        Some(1)
    );
}
