//! HTTP client tests against a mock server.
//!
//! Exercises the request shapes the client sends and the error taxonomy it
//! maps responses into.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use serde_json::json;
use todoo_api::{
    ApiConfig, ApiError, HttpTodoApi, ListQuery, NewTodo, Priority, StatusFilter, TodoApi, TodoId,
    TodoPatch,
};
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> HttpTodoApi {
    HttpTodoApi::new(ApiConfig::new(server.uri())).unwrap()
}

fn server_todo(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "completed": false,
        "created_at": "2025-01-01T08:30:00Z",
        "priority": "medium",
        "due_date": null,
        "category": null
    })
}

#[tokio::test]
async fn list_sends_filters_and_parses_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(query_param("status", "active"))
        .and(query_param("priority", "high"))
        .and(query_param("search", "plants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "9",
            "title": "Water the plants",
            "completed": false,
            "created_at": "2025-01-01T08:30:00Z",
            "priority": "high",
            "due_date": "2025-01-02T00:00:00Z",
            "category": "home"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let query = ListQuery::new()
        .with_status(StatusFilter::Active)
        .with_priority(Priority::High)
        .with_search("plants");
    let todos = api.list(query).await.unwrap();

    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, TodoId::new("9"));
    assert_eq!(todos[0].title, "Water the plants");
    assert_eq!(todos[0].priority, Priority::High);
    assert_eq!(todos[0].category.as_deref(), Some("home"));
}

#[tokio::test]
async fn default_query_sends_no_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(query_param_is_missing("status"))
        .and(query_param_is_missing("priority"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let todos = api.list(ListQuery::new()).await.unwrap();
    assert!(todos.is_empty());
}

#[tokio::test]
async fn unknown_priority_in_response_degrades_to_medium() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "1",
            "title": "Mystery",
            "completed": false,
            "created_at": "2025-01-01T08:30:00Z",
            "priority": "urgent"
        }])))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let todos = api.list(ListQuery::new()).await.unwrap();
    assert_eq!(todos[0].priority, Priority::Medium);
}

#[tokio::test]
async fn create_posts_payload_and_parses_created_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todos"))
        .and(body_json(json!({
            "title": "Buy milk",
            "priority": "medium"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(server_todo("12", "Buy milk")))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let todo = api.create(NewTodo::new("Buy milk")).await.unwrap();

    assert_eq!(todo.id, TodoId::new("12"));
    assert!(!todo.id.is_temporary());
}

#[tokio::test]
async fn create_rejection_maps_to_validation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todos"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Title is required" })),
        )
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let err = api.create(NewTodo::new("   ")).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.to_string(), "validation failed: Title is required");
}

#[tokio::test]
async fn set_completed_patches_the_record() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/todos/9"))
        .and(body_json(json!({ "completed": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "9",
            "title": "Water the plants",
            "completed": true,
            "created_at": "2025-01-01T08:30:00Z",
            "priority": "medium"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let todo = api.set_completed(TodoId::new("9"), true).await.unwrap();
    assert!(todo.completed);
}

#[tokio::test]
async fn missing_record_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/todos/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Todo not found" })))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let err = api.set_completed(TodoId::new("99"), true).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "todo 99 not found");
}

#[tokio::test]
async fn update_sends_null_to_clear_the_due_date() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/todos/9"))
        .and(body_json(json!({
            "title": "Renamed",
            "due_date": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_todo("9", "Renamed")))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let patch = TodoPatch::new().with_title("Renamed").with_due_date(None);
    let todo = api.update(TodoId::new("9"), patch).await.unwrap();
    assert_eq!(todo.title, "Renamed");
}

#[tokio::test]
async fn delete_requires_server_acknowledgement() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/todos/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    api.delete(TodoId::new("1")).await.unwrap();

    let err = api.delete(TodoId::new("2")).await.unwrap_err();
    assert!(matches!(err, ApiError::Api { .. }));
}

#[tokio::test]
async fn server_errors_carry_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "database exploded" })),
        )
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let err = api.list(ListQuery::new()).await.unwrap_err();

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database exploded");
        }
        other => panic!("expected ApiError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let err = api.list(ListQuery::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn stats_hit_the_stats_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "completed": 1,
            "pending": 1,
            "highPriority": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let stats = api.stats().await.unwrap();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.high_priority, 1);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let api = HttpTodoApi::new(ApiConfig::new("http://127.0.0.1:1")).unwrap();
    let err = api.list(ListQuery::new()).await.unwrap_err();
    assert!(err.is_transport());
}
