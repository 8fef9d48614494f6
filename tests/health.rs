mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use biryani_api::schemas::Review;
use serde_json::Value;

use common::{disconnected_app, get, memory_app, send_raw};

#[tokio::test]
async fn root_reports_the_service_is_running() {
    let (app, _) = memory_app();

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Al Rehman Biryani API is running");
}

#[tokio::test]
async fn store_report_on_a_working_store() {
    let (app, store) = memory_app();
    store
        .insert_one(
            "review",
            &Review {
                name: "Maham A.".to_string(),
                rating: 5,
                comment: "Perfect spice.".to_string(),
                source: None,
                photo_url: None,
            },
        )
        .await
        .unwrap();

    let (status, body) = get(&app, "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_name"], "restaurant");
    // Test config carries no DATABASE_URL
    assert_eq!(body["database_url"], "❌ Not Set");
    let collections = body["collections"].as_array().unwrap();
    assert!(collections.iter().any(|name| name == "review"));
}

#[tokio::test]
async fn store_report_on_a_disconnected_store() {
    let app = disconnected_app();

    let (status, body) = get(&app, "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "⚠️ Available but not initialized");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["database_url"], Value::Null);
    assert_eq!(body["database_name"], Value::Null);
    assert_eq!(body["collections"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn responses_allow_cross_origin_browsers() {
    let (app, _) = memory_app();

    let request = Request::builder()
        .uri("/api/menu")
        .header(header::ORIGIN, "https://alrehmanbiryani.example")
        .body(Body::empty())
        .unwrap();
    let response = send_raw(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
