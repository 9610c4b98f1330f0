//! Shared fixtures for the integration tests: a mock backend and canned payloads.

#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use cafe_pos::{
    common::storage::{MemoryTokenStore, TokenStore},
    AppConfig, AppState,
};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TOKEN: &str = "tok-123";

pub fn state_with(server: &MockServer, tokens: Arc<dyn TokenStore>) -> AppState {
    let config = AppConfig {
        api_url: server.uri(),
        poll_interval: Duration::from_millis(20),
        http_timeout: Duration::from_secs(5),
        ..AppConfig::default()
    };
    AppState::with_token_store(config, tokens).expect("state should build")
}

/// App state with an admin already signed in.
pub fn signed_in(server: &MockServer) -> (AppState, Arc<dyn TokenStore>) {
    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token(TOKEN));
    (state_with(server, tokens.clone()), tokens)
}

pub fn signed_out(server: &MockServer) -> (AppState, Arc<dyn TokenStore>) {
    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    (state_with(server, tokens.clone()), tokens)
}

pub fn categories_json() -> Value {
    json!([
        { "id": 1, "name": "Coffee" },
        { "id": 2, "name": "Tea" }
    ])
}

pub fn products_json() -> Value {
    json!([
        { "id": 10, "name": "Latte", "price": "55.00", "category_id": 1,
          "category_name": "Coffee", "has_sweetness": true, "icon": "☕" },
        { "id": 11, "name": "Americano", "price": 45, "category_id": 1,
          "category_name": "Coffee", "has_sweetness": false, "icon": null },
        { "id": 20, "name": "Green Tea Latte", "price": "60", "category_id": 2,
          "category_name": "Tea", "has_sweetness": true, "icon": "https://img.example/tea.png" }
    ])
}

pub fn orders_json() -> Value {
    json!([
        { "id": 2, "created_at": "2026-02-03T04:00:00Z", "total": "100", "note": "no ice",
          "items": [ { "name": "Latte", "quantity": 1, "price": 55, "sweetness": "ปกติ" },
                     { "name": "Americano", "qty": 1, "price": 45 } ] },
        { "id": 1, "created_at": "2026-02-02T04:00:00Z", "total": "60", "note": null,
          "items": [ { "name": "Green Tea Latte", "quantity": 1, "price": "60" } ] }
    ])
}

pub fn daily_sales_json() -> Value {
    json!([
        { "sale_date": "2026-02-03", "total": "100" },
        { "sale_date": "2026-02-02", "total": "60" }
    ])
}

/// Mounts all four dashboard reads with canned 200 responses.
pub async fn mount_dashboard_reads(server: &MockServer) {
    for (route, body) in [
        ("/api/categories", categories_json()),
        ("/api/products", products_json()),
        ("/api/orders", orders_json()),
        ("/api/daily-sales", daily_sales_json()),
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }
}

pub async fn mount_menu(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(categories_json()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json()))
        .mount(server)
        .await;
}
