//! HTTP contract tests: auth header, 401 handling, login.

mod common;

use std::sync::Arc;

use cafe_pos::{
    api::{ApiClient, CatalogRepository, OrderRepository},
    common::storage::{LocalStorage, MemoryTokenStore, TokenStore},
    views::Navigation,
    AppConfig, AppError, AppState,
};
use serde_json::json;
use wiremock::{
    matchers::{any, body_json, header, header_exists, method, path},
    Mock, MockServer, ResponseTemplate,
};

use common::{signed_in, signed_out, state_with, TOKEN};

fn admin_client(server: &MockServer, tokens: Arc<dyn TokenStore>) -> ApiClient {
    ApiClient::new(&server.uri(), std::time::Duration::from_secs(5), tokens)
        .unwrap()
        .as_admin()
}

#[tokio::test]
async fn admin_reads_carry_the_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::categories_json()))
        .expect(1)
        .mount(&server)
        .await;

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token(TOKEN));
    let repo = CatalogRepository::new(admin_client(&server, tokens));

    let categories = repo.list_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Coffee");
}

#[tokio::test]
async fn a_401_clears_the_stored_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "expired" })))
        .mount(&server)
        .await;

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token(TOKEN));
    let repo = OrderRepository::new(admin_client(&server, tokens.clone()));

    let err = repo.list_orders().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn a_401_on_a_mutation_clears_the_token_too() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/products/5"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token(TOKEN));
    let repo = CatalogRepository::new(admin_client(&server, tokens.clone()));

    assert!(repo.delete_product(5).await.unwrap_err().is_unauthorized());
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn admin_call_without_a_token_never_reaches_the_backend() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let repo = CatalogRepository::new(admin_client(&server, tokens));

    assert!(matches!(repo.list_products().await, Err(AppError::Unauthorized)));
}

#[tokio::test]
async fn failed_mutation_reports_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let (state, tokens) = signed_in(&server);
    let err = state.dashboard_service.create_category("Bakery").await.unwrap_err();

    match err {
        AppError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    // Only a 401 signs the admin out.
    assert_eq!(tokens.load().as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn guest_reads_send_no_credentials() {
    let server = MockServer::start().await;
    Mock::given(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    common::mount_menu(&server).await;

    // A token is stored, but the guest screen must not use it.
    let (state, _tokens) = signed_in(&server);
    let mut guest = state.guest_view();
    guest.load().await;

    assert_eq!(guest.categories.len(), 2);
    assert_eq!(guest.products.len(), 3);
}

#[tokio::test]
async fn login_stores_the_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "username": "admin", "password": "secret" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "token": "fresh" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (state, tokens) = signed_out(&server);
    let mut view = state.login_view();
    view.form.username = "admin".into();
    view.form.password = "secret".into();

    assert_eq!(view.submit().await, Navigation::Admin);
    assert_eq!(tokens.load().as_deref(), Some("fresh"));
    assert!(state.auth_service.is_logged_in());
}

#[tokio::test]
async fn rejected_login_shows_an_error_and_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let (state, tokens) = signed_out(&server);
    let mut view = state.login_view();
    view.form.username = "admin".into();
    view.form.password = "wrong".into();

    assert_eq!(view.submit().await, Navigation::Stay);
    assert_eq!(view.error.as_deref(), Some("Invalid username or password"));
    assert!(!view.loading);
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn empty_login_form_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (state, _tokens) = signed_out(&server);
    let mut view = state.login_view();
    view.form.username = "admin".into();

    assert_eq!(view.submit().await, Navigation::Stay);
    assert_eq!(view.error.as_deref(), Some("Username and password are required"));
}

#[tokio::test]
async fn unreachable_backend_is_reported_as_such() {
    let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let config = AppConfig {
        // Nothing listens on the discard port.
        api_url: "http://127.0.0.1:9".to_string(),
        http_timeout: std::time::Duration::from_secs(2),
        ..AppConfig::default()
    };
    let state = AppState::with_token_store(config, tokens).unwrap();

    let mut view = state.login_view();
    view.form.username = "admin".into();
    view.form.password = "secret".into();

    assert_eq!(view.submit().await, Navigation::Stay);
    assert_eq!(view.error.as_deref(), Some("Cannot reach the server"));
}

#[tokio::test]
async fn login_recovers_from_a_corrupt_storage_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "token": "fresh" })),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("storage.json");
    std::fs::write(&file, "{not json").unwrap();
    let tokens: Arc<dyn TokenStore> = Arc::new(LocalStorage::new(&file));
    let state = state_with(&server, tokens.clone());

    let mut view = state.login_view();
    view.form.username = "admin".into();
    view.form.password = "secret".into();

    assert_eq!(view.submit().await, Navigation::Admin);
    assert_eq!(view.error, None);
    assert_eq!(tokens.load().as_deref(), Some("fresh"));
}
