#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use biryani_api::api::{self, AppState};
use biryani_api::config::AppConfig;
use biryani_api::storage::{DocumentStore, MemoryStore, MongoStore};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// App over a fresh in-memory store, plus a handle for seeding and asserting.
pub fn memory_app() -> (Router, Arc<DocumentStore>) {
    let store = Arc::new(DocumentStore::Memory(MemoryStore::new()));
    let state = AppState {
        store: store.clone(),
        config: Arc::new(AppConfig::default()),
    };
    (api::router(state), store)
}

/// App whose store never got a database handle.
pub fn disconnected_app() -> Router {
    let state = AppState {
        store: Arc::new(DocumentStore::Mongo(MongoStore::disconnected())),
        config: Arc::new(AppConfig::default()),
    };
    api::router(state)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = send_raw(app, request).await;
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn send_raw(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// Field names out of a 422 body, for order-insensitive asserts.
pub fn violated_fields(body: &Value) -> Vec<String> {
    body["fields"]
        .as_array()
        .map(|fields| {
            fields
                .iter()
                .map(|f| f["field"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}
