//! API integration tests
//!
//! Each test serves a fresh router on an ephemeral port and talks to it over
//! real HTTP.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use shelf_server::{api, AppState};

/// Spawn the server and return its base URL
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("No local address");

    let app = api::create_router(AppState::new());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

async fn create_book(client: &Client, base: &str, title: &str) -> Value {
    let response = client
        .post(format!("{}/books", base))
        .json(&json!({ "title": title }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_round_trip() {
    let base = spawn_server().await;
    let client = Client::new();

    let created = create_book(&client, &base, "Dune").await;
    let id = created["id"].as_i64().expect("No book ID");

    let fetched: Value = client
        .get(format!("{}/books/{}", base, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(fetched, json!({ "id": id, "title": "Dune" }));
}

#[tokio::test]
async fn test_body_without_content_type() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/persons", base))
        .body(r#"{"name":"Ada","age":36}"#)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "id": 1, "name": "Ada", "age": 36 }));
}

#[tokio::test]
async fn test_list_after_deletes() {
    let base = spawn_server().await;
    let client = Client::new();

    for title in ["A", "B", "C", "D"] {
        create_book(&client, &base, title).await;
    }

    for id in [1, 3] {
        let response = client
            .delete(format!("{}/books/{}", base, id))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let created = create_book(&client, &base, "E").await;
    assert_eq!(created["id"], 5);

    let list: Value = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(
        list,
        json!([
            { "id": 2, "title": "B" },
            { "id": 4, "title": "D" },
            { "id": 5, "title": "E" }
        ])
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates() {
    let base = spawn_server().await;
    let client = Client::new();

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let client = client.clone();
            let base = base.clone();
            tokio::spawn(async move { create_book(&client, &base, &format!("Book {}", i)).await })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        let book = task.await.expect("Task panicked");
        ids.push(book["id"].as_i64().expect("No book ID"));
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());

    let list: Vec<Value> = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(list.len(), 20);
}

#[tokio::test]
async fn test_invalid_id_leaves_collection_unchanged() {
    let base = spawn_server().await;
    let client = Client::new();
    create_book(&client, &base, "A").await;

    let response = client
        .delete(format!("{}/books/abc", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.expect("No body"), "Invalid ID");

    let list: Vec<Value> = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(list.len(), 1);
}

#[tokio::test]
async fn test_extra_path_segments_are_invalid_ids() {
    let base = spawn_server().await;
    let client = Client::new();
    create_book(&client, &base, "A").await;

    let response = client
        .get(format!("{}/books/1/x", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.expect("No body"), "Invalid ID");

    let response = client
        .request(reqwest::Method::OPTIONS, format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
