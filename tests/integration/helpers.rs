//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use explorer_api::{AppState, build_app};
use explorer_core::config::{AppConfig, StoreBackend};
use explorer_database::seed::seed_sample_data;
use explorer_database::store::{FolderStore, Stores};
use explorer_database::MemoryStore;
use explorer_service::ExplorerService;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The record stores behind the router
    pub stores: Stores,
}

impl TestApp {
    /// App over an in-memory store loaded with the sample hierarchy
    pub async fn seeded() -> Self {
        let app = Self::empty();
        seed_sample_data(&app.stores)
            .await
            .expect("Failed to seed sample data");
        app
    }

    /// App over an empty in-memory store
    pub fn empty() -> Self {
        Self::with_stores(MemoryStore::new().stores())
    }

    pub fn with_stores(stores: Stores) -> Self {
        let state = AppState::new(
            memory_config(),
            ExplorerService::from_stores(&stores),
            None,
        );
        Self {
            router: build_app(state),
            stores,
        }
    }

    /// Id of the folder at `path`
    pub async fn folder_id(&self, path: &str) -> Uuid {
        self.stores
            .folders
            .find_by_path(path)
            .await
            .expect("Failed to look up folder")
            .unwrap_or_else(|| panic!("no folder at {path}"))
            .id
    }

    /// Send a GET request through the router
    pub async fn get(&self, path: &str) -> TestResponse {
        request(&self.router, path).await
    }
}

/// Config selecting the in-memory backend
pub fn memory_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.store.backend = StoreBackend::Memory;
    config
}

/// Send a GET request to any router
pub async fn request(router: &Router, path: &str) -> TestResponse {
    let req = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");

    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    TestResponse { status, body }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of a success envelope
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// Names of the objects in the array at `pointer`
    pub fn names(&self, pointer: &str) -> Vec<String> {
        self.body
            .pointer(pointer)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item["name"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
