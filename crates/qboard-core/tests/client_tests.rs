//! Integration tests for QueueClient against a mock scheduler

use qboard_core::{ClientError, QueueClient, NOT_SCHEDULED};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(2);

fn queue_body(tasks: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "status": "success",
        "message": "List of all tasks",
        "tasks": tasks,
    })
}

fn task_json(id: &str, next_run_time: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "task_id": id,
        "task_file": "send_mail",
        "next_run_time": next_run_time,
        "trigger": "cron[hour='9']",
        "args": ["inbox"],
        "kwargs": {"prefix": "[mail]", "sufix": "(auto)"},
    })
}

#[tokio::test]
async fn fetch_queue_returns_tasks_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(queue_body(serde_json::json!([
            task_json("alpha", Some("2026-08-26T09:00:00+00:00")),
            task_json("bravo", None),
            task_json("charlie", Some("2026-08-27T09:00:00+00:00")),
        ]))))
        .mount(&server)
        .await;

    let client = QueueClient::new(server.uri(), TIMEOUT).unwrap();
    let envelope = client.fetch_queue().await.unwrap();

    let ids: Vec<&str> = envelope.tasks.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "bravo", "charlie"]);
    assert_eq!(envelope.tasks[1].next_run_display(), NOT_SCHEDULED);
    assert_eq!(envelope.tasks[0].kwargs.suffix, "(auto)");
}

#[tokio::test]
async fn fetch_queue_handles_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(queue_body(serde_json::json!([]))))
        .mount(&server)
        .await;

    let client = QueueClient::new(server.uri(), TIMEOUT).unwrap();
    let envelope = client.fetch_queue().await.unwrap();
    assert!(envelope.tasks.is_empty());
}

#[tokio::test]
async fn fetch_queue_maps_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = QueueClient::new(server.uri(), TIMEOUT).unwrap();
    let err = client.fetch_queue().await.unwrap_err();

    assert!(matches!(err, ClientError::Status { .. }));
    assert!(err.view_message().contains("500"));
}

#[tokio::test]
async fn fetch_queue_maps_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = QueueClient::new(server.uri(), TIMEOUT).unwrap();
    let err = client.fetch_queue().await.unwrap_err();

    assert!(matches!(err, ClientError::Decode { .. }));
    assert!(!err.view_message().is_empty());
}

#[tokio::test]
async fn fetch_queue_maps_connection_failure() {
    // Nothing listens here; the request itself must fail.
    let client = QueueClient::new("http://127.0.0.1:1", TIMEOUT).unwrap();
    let err = client.fetch_queue().await.unwrap_err();

    assert!(matches!(err, ClientError::Request { .. }));
    assert!(!err.view_message().is_empty());
}

#[tokio::test]
async fn fetch_task_returns_single_task() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue/send_mail_daily"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "message": "Task details retrieved",
            "task": task_json("send_mail_daily", None),
        })))
        .mount(&server)
        .await;

    let client = QueueClient::new(server.uri(), TIMEOUT).unwrap();
    let envelope = client.fetch_task("send_mail_daily").await.unwrap();

    assert_eq!(envelope.task.task_id, "send_mail_daily");
    assert_eq!(envelope.task.args, vec!["inbox"]);
}

#[tokio::test]
async fn fetch_task_not_found_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = QueueClient::new(server.uri(), TIMEOUT).unwrap();
    let err = client.fetch_task("missing").await.unwrap_err();
    assert!(matches!(err, ClientError::Status { .. }));
}
