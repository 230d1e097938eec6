use taskdeck_client::{ActionLink, ApiClient, ApiError, TaskAction, TaskApi};
use taskdeck_domain::Priority;
use url::Url;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(Url::parse(&server.uri()).unwrap())
}

#[tokio::test]
async fn fetch_tasks_parses_server_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "description": "buy milk", "completed": false,
             "priority": "High", "created_at": "2025-03-01 09:30:00"},
            {"id": 2, "description": "water plants", "completed": true,
             "priority": "medium", "created_at": null}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client_for(&server).await.fetch_tasks().await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].priority, Priority::High);
    assert!(tasks[1].completed);
}

#[tokio::test]
async fn submit_form_posts_encoded_fields_with_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("description=buy+milk"))
        .and(body_string_contains("priority=high"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success", "message": "Task added", "task_id": 7
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let target = client.endpoints().add().unwrap();
    let fields = vec![
        ("description".to_string(), "buy milk".to_string()),
        ("priority".to_string(), "high".to_string()),
    ];
    let response = client.submit_form(&target, &fields).await.unwrap();
    assert!(response.is_success());
    assert_eq!(response.message, "Task added");
    assert_eq!(response.task_id, Some(7));
}

#[tokio::test]
async fn submit_form_surfaces_structured_failure_without_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/update/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error", "message": "Invalid task description"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let target = client.endpoints().update(3).unwrap();
    let response = client.submit_form(&target, &[]).await.unwrap();
    assert!(!response.is_success());
    assert_eq!(response.message, "Invalid task description");
}

#[tokio::test]
async fn non_2xx_response_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let target = client.endpoints().add().unwrap();
    let err = client.submit_form(&target, &[]).await.unwrap_err();
    assert!(matches!(err, ApiError::Status(status) if status.as_u16() == 500));
    assert!(err.is_transport());
}

#[tokio::test]
async fn run_action_gets_link_target() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/complete/3"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success", "message": "Task completed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let link = client.endpoints().action_link(TaskAction::Complete, 3);
    let response = client.run_action(&link).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn run_action_without_target_fails_locally() {
    // No server at all: a link without a target must not attempt a request.
    let client = ApiClient::new(Url::parse("http://127.0.0.1:9/").unwrap());
    let link = ActionLink {
        action: TaskAction::Delete,
        task_id: 11,
        href: None,
    };
    let err = client.run_action(&link).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::MissingTarget {
            action: TaskAction::Delete,
            task_id: 11
        }
    ));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn persist_order_posts_string_ids_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reorder"))
        .and(header("content-type", "application/json"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .and(body_json(serde_json::json!({"taskIds": ["3", "1", "2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success", "message": "Order saved"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client.persist_order(&[3, 1, 2]).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn undecodable_body_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_tasks().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
