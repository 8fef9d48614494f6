mod common;

use axum::http::StatusCode;
use biryani_api::schemas::{DaigOrder, Inquiry};
use mongodb::bson::{Bson, doc};
use serde_json::json;

use common::{disconnected_app, memory_app, post_json, violated_fields};

#[tokio::test]
async fn minimal_daig_order_is_accepted_and_stored() {
    let (app, store) = memory_app();

    let (status, body) = post_json(
        &app,
        "/api/orders/daig",
        json!({
            "name": "Ahmed Khan",
            "phone": "03001234567",
            "quantity": "Daig for 50 ppl",
            "address": "House 12, PECHS Block 2",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    let id = body["id"].as_str().unwrap();
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

    let orders: Vec<DaigOrder> = store.find_many("daigorder", doc! {}, None).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].name, "Ahmed Khan");
    // Absent source defaults to the website channel
    assert_eq!(orders[0].source.as_deref(), Some("website"));
}

#[tokio::test]
async fn full_daig_order_round_trips_every_field() {
    let (app, store) = memory_app();

    let (status, _) = post_json(
        &app,
        "/api/orders/daig",
        json!({
            "name": "Fatima",
            "phone": "+92 333 7654321",
            "quantity": "2 daigs, 20 ppl each",
            "address": "Block 10, Gulshan-e-Iqbal",
            "notes": "Less spicy please",
            "preferred_time": "7pm Saturday",
            "source": "whatsapp",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let orders: Vec<DaigOrder> = store.find_many("daigorder", doc! {}, None).await.unwrap();
    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order.phone, "+92 333 7654321");
    assert_eq!(order.notes.as_deref(), Some("Less spicy please"));
    assert_eq!(order.preferred_time.as_deref(), Some("7pm Saturday"));
    assert_eq!(order.source.as_deref(), Some("whatsapp"));
}

#[tokio::test]
async fn invalid_daig_order_reports_every_field_and_stores_nothing() {
    let (app, store) = memory_app();

    let (status, body) = post_json(&app, "/api/orders/daig", json!({ "phone": "123" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "validation failed");
    let fields = violated_fields(&body);
    for expected in ["name", "phone", "quantity", "address"] {
        assert!(fields.iter().any(|f| f == expected), "missing {expected}");
    }

    let stored = store
        .find_many::<DaigOrder>("daigorder", doc! {}, None)
        .await
        .unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn explicit_null_source_is_stored_as_null() {
    let (app, store) = memory_app();

    let (status, _) = post_json(
        &app,
        "/api/orders/daig",
        json!({
            "name": "Ali",
            "phone": "0300123456",
            "quantity": "1 daig",
            "address": "Saddar",
            "source": null,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let docs = match store.as_ref() {
        biryani_api::storage::DocumentStore::Memory(memory) => {
            memory.find_docs("daigorder", doc! {}, None).await.unwrap()
        }
        _ => unreachable!(),
    };
    assert_eq!(docs[0].get("source"), Some(&Bson::Null));
}

#[tokio::test]
async fn inquiry_with_bad_email_is_rejected() {
    let (app, store) = memory_app();

    let (status, body) = post_json(
        &app,
        "/api/inquiry",
        json!({
            "name": "Sana",
            "email": "not-an-email",
            "message": "Daig pricing?",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(violated_fields(&body), ["email"]);

    let stored = store
        .find_many::<Inquiry>("inquiry", doc! {}, None)
        .await
        .unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn valid_inquiry_is_stored() {
    let (app, store) = memory_app();

    let (status, body) = post_json(
        &app,
        "/api/inquiry",
        json!({
            "name": "Sana",
            "email": "sana.k@example.com",
            "message": "Do you deliver to Clifton?",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let stored: Vec<Inquiry> = store.find_many("inquiry", doc! {}, None).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].message, "Do you deliver to Clifton?");
}

#[tokio::test]
async fn writes_fail_with_500_when_store_is_disconnected() {
    let app = disconnected_app();

    let (status, body) = post_json(
        &app,
        "/api/orders/daig",
        json!({
            "name": "Ahmed Khan",
            "phone": "03001234567",
            "quantity": "1 daig",
            "address": "Saddar",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "document store is not connected");
}
