//! End-to-end tests against a live router on an ephemeral port

use address_book::AddressBook;
use api::{create_router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use storage::{MemoryRepository, SqliteRepository};

async fn spawn(book: AddressBook) -> String {
    let app = create_router(Arc::new(AppState::new(book)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api/v1", addr)
}

async fn spawn_memory() -> String {
    spawn(AddressBook::new(Arc::new(MemoryRepository::new()))).await
}

async fn create(client: &reqwest::Client, base: &str, label: &str, lat: f64, lon: f64) -> Value {
    let resp = client
        .post(format!("{}/addresses", base))
        .json(&json!({ "label": label, "latitude": lat, "longitude": lon }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn test_crud_roundtrip() {
    let base = spawn_memory().await;
    let client = reqwest::Client::new();

    let created = create(&client, &base, "NYC", 40.7128, -74.0060).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["label"], "NYC");

    let list: Value = client
        .get(format!("{}/addresses", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["count"], 1);
    assert_eq!(list["data"][0]["id"], id);

    let resp = client
        .put(format!("{}/addresses/{}", base, id))
        .json(&json!({ "label": "Boston", "latitude": 42.3601, "longitude": -71.0589 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["label"], "Boston");
    assert_eq!(updated["id"], id);

    let resp = client
        .delete(format!("{}/addresses/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client
        .get(format!("{}/addresses/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_legacy_field_names_are_accepted() {
    let base = spawn_memory().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/addresses", base))
        .json(&json!({ "address": "Old client", "lattitude": 10.0, "longitude": 20.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["label"], "Old client");
    assert_eq!(body["latitude"], 10.0);
}

#[tokio::test]
async fn test_validation_maps_to_422() {
    let base = spawn_memory().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/addresses", base))
        .json(&json!({ "label": "Nowhere", "latitude": 95.0, "longitude": 0.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "validation_error");
    assert!(body["error"]["message"].as_str().unwrap().contains("latitude"));

    let list: Value = client
        .get(format!("{}/addresses", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["count"], 0);
}

#[tokio::test]
async fn test_missing_ids_map_to_404() {
    let base = spawn_memory().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{}/addresses/7", base))
        .json(&json!({ "label": "x", "latitude": 1.0, "longitude": 1.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "not_found");

    let resp = client
        .delete(format!("{}/addresses/7", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .get(format!("{}/addresses/7/within/10", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_proximity_scenario_over_sqlite() {
    let repo = SqliteRepository::connect("sqlite::memory:").await.unwrap();
    let base = spawn(AddressBook::new(Arc::new(repo))).await;
    let client = reqwest::Client::new();

    let nyc = create(&client, &base, "NYC", 40.7128, -74.0060).await;
    let near = create(&client, &base, "NearNYC", 40.7306, -73.9352).await;
    create(&client, &base, "LA", 34.0522, -118.2437).await;
    let nyc_id = nyc["id"].as_i64().unwrap();

    let found: Value = client
        .get(format!("{}/addresses/{}/within/20", base, nyc_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found["count"], 1);
    assert_eq!(found["data"][0]["id"], near["id"]);
    assert_eq!(found["data"][0]["label"], "NearNYC");
    assert!(found["data"][0]["distance_km"].as_f64().unwrap() < 20.0);

    let found: Value = client
        .get(format!("{}/addresses/{}/within/1", base, nyc_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found["count"], 0);

    let resp = client
        .get(format!("{}/addresses/{}/within/-3", base, nyc_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
}

#[tokio::test]
async fn test_health() {
    let base = spawn_memory().await;
    let client = reqwest::Client::new();
    create(&client, &base, "Origin", 0.0, 0.0).await;

    let health: Value = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["address_count"], 1);
}
