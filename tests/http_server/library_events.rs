use library_events_producer::models::LibraryEventType;

use crate::helpers::*;

#[tokio::test]
async fn create_returns_201_and_echoes_event_tagged_new() {
    let (server, publisher) = TestServer::new_with_recording_publisher().await;

    let resp = server
        .post("/v1/libraryevent")
        .json(&serde_json::json!({ "book": sample_book() }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["libraryEventId"], serde_json::Value::Null);
    assert_eq!(body["libraryEventType"], "NEW");
    assert_eq!(body["book"], sample_book());

    let published = publisher.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].library_event_id, None);
    assert_eq!(published[0].library_event_type, Some(LibraryEventType::New));

    server.cleanup();
}

#[tokio::test]
async fn create_overrides_caller_supplied_event_type() {
    let (server, publisher) = TestServer::new_with_recording_publisher().await;

    let resp = server
        .post("/v1/libraryevent")
        .json(&serde_json::json!({
            "libraryEventType": "UPDATE",
            "book": sample_book()
        }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["libraryEventType"], "NEW");

    let published = publisher.published();
    assert_eq!(published[0].library_event_type, Some(LibraryEventType::New));

    server.cleanup();
}

#[tokio::test]
async fn update_with_id_returns_200_and_tags_event_update() {
    let (server, publisher) = TestServer::new_with_recording_publisher().await;

    let resp = server
        .put("/v1/libraryevent")
        .json(&serde_json::json!({
            "libraryEventId": 123,
            "book": sample_book()
        }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["libraryEventId"], 123);
    assert_eq!(body["libraryEventType"], "UPDATE");

    let published = publisher.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].library_event_id, Some(123));
    assert_eq!(published[0].library_event_type, Some(LibraryEventType::Update));

    server.cleanup();
}

#[tokio::test]
async fn update_without_id_returns_400_and_publishes_nothing() {
    let (server, publisher) = TestServer::new_with_recording_publisher().await;

    let resp = server
        .put("/v1/libraryevent")
        .json(&serde_json::json!({ "book": sample_book() }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), 400);
    let body = resp.text().await.expect("Failed to read body");
    assert_eq!(body, "Please pass the LibraryEventId");
    assert!(publisher.published().is_empty());

    server.cleanup();
}

#[tokio::test]
async fn update_with_explicit_null_id_returns_400_and_publishes_nothing() {
    let (server, publisher) = TestServer::new_with_recording_publisher().await;

    let resp = server
        .put("/v1/libraryevent")
        .json(&serde_json::json!({
            "libraryEventId": serde_json::Value::Null,
            "book": sample_book()
        }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), 400);
    let body = resp.text().await.expect("Failed to read body");
    assert_eq!(body, "Please pass the LibraryEventId");
    assert!(publisher.published().is_empty());

    server.cleanup();
}

#[tokio::test]
async fn delivery_failure_is_invisible_to_the_caller() {
    let (server, publisher) = TestServer::new_with_failing_deliveries().await;

    let create = server
        .post("/v1/libraryevent")
        .json(&serde_json::json!({ "book": sample_book() }))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(create.status(), 201);

    let update = server
        .put("/v1/libraryevent")
        .json(&serde_json::json!({
            "libraryEventId": 123,
            "book": sample_book()
        }))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(update.status(), 200);

    // Both submissions were accepted; both delivery failures were recorded
    // on the observability channel.
    assert_eq!(publisher.published().len(), 2);
    assert_eq!(publisher.delivery_failures(), 2);

    server.cleanup();
}
