//! Integration tests for the file dispatch flow.
//!
//! Two mock servers stand in for Airtable and n8n so the tests can assert
//! both what the dispatcher returns and what (if anything) it posted.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use courier::{DispatchOutcome, FileDispatchRequest, FileDispatcher};
use courier_integration_tests::{sparse_record, test_config};

const TABLE_PATH: &str = "/v0/appTESTBASE/project_id";

fn request(project_id: &str) -> FileDispatchRequest {
    FileDispatchRequest {
        file_content: "hello world".to_string(),
        file_name: "notes.txt".to_string(),
        project_id: project_id.to_string(),
        user_id: "U123".to_string(),
        channel_id: "C456".to_string(),
        ts: "1712345678.000100".to_string(),
    }
}

async fn mock_directory(server: &MockServer, records: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "records": records })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn dispatch_delivers_job_with_default_branch() {
    let airtable = MockServer::start().await;
    let n8n = MockServer::start().await;

    mock_directory(&airtable, json!([sparse_record("p1", "Demo")])).await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "type": "file_processing",
            "file": {
                "name": "notes.txt",
                "content": "hello world",
                "uploaded_by": "U123",
                "channel": "C456",
                "timestamp": "1712345678.000100"
            },
            "project": {
                "id": "p1",
                "name": "Demo",
                "owner": "acme",
                "repo": "demo",
                "path_prefix": "src",
                "branch": "main"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"workflow": "started"})))
        .expect(1)
        .mount(&n8n)
        .await;

    let config = test_config(&airtable.uri(), &n8n.uri());
    let dispatcher = FileDispatcher::new(&config).expect("dispatcher builds");

    let outcome = dispatcher.dispatch_file_with_project(request("p1")).await;

    let DispatchOutcome::Delivered { project, response } = outcome else {
        panic!("expected delivery, got {outcome:?}");
    };
    assert_eq!(project.name, "Demo");
    assert_eq!(project.branch, "main");
    assert_eq!(response, json!({"workflow": "started"}));
}

#[tokio::test]
async fn dispatch_fails_without_posting_when_project_missing() {
    let airtable = MockServer::start().await;
    let n8n = MockServer::start().await;

    mock_directory(&airtable, json!([sparse_record("p1", "Demo")])).await;

    // The automation endpoint must not be touched.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&n8n)
        .await;

    let config = test_config(&airtable.uri(), &n8n.uri());
    let dispatcher = FileDispatcher::new(&config).expect("dispatcher builds");

    let outcome = dispatcher.dispatch_file_with_project(request("p9")).await;

    let DispatchOutcome::Failed { error } = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert!(!error.is_empty());
    assert!(error.contains("p9"));
}

#[tokio::test]
async fn dispatch_fails_when_endpoint_rejects_job() {
    let airtable = MockServer::start().await;
    let n8n = MockServer::start().await;

    mock_directory(&airtable, json!([sparse_record("p1", "Demo")])).await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("workflow exploded"))
        .expect(1)
        .mount(&n8n)
        .await;

    let config = test_config(&airtable.uri(), &n8n.uri());
    let dispatcher = FileDispatcher::new(&config).expect("dispatcher builds");

    let outcome = dispatcher.dispatch_file_with_project(request("p1")).await;

    assert!(!outcome.is_delivered());
}

#[tokio::test]
async fn dispatch_fails_when_success_body_is_not_json() {
    let airtable = MockServer::start().await;
    let n8n = MockServer::start().await;

    mock_directory(&airtable, json!([sparse_record("p1", "Demo")])).await;

    // Delivery requires a 2xx with a parseable body, not just a 2xx.
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&n8n)
        .await;

    let config = test_config(&airtable.uri(), &n8n.uri());
    let dispatcher = FileDispatcher::new(&config).expect("dispatcher builds");

    let outcome = dispatcher.dispatch_file_with_project(request("p1")).await;

    let DispatchOutcome::Failed { error } = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert!(!error.is_empty());
}

#[tokio::test]
async fn dispatch_fails_without_posting_when_directory_is_down() {
    let airtable = MockServer::start().await;
    let n8n = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&airtable)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&n8n)
        .await;

    let config = test_config(&airtable.uri(), &n8n.uri());
    let dispatcher = FileDispatcher::new(&config).expect("dispatcher builds");

    let outcome = dispatcher.dispatch_file_with_project(request("p1")).await;

    let DispatchOutcome::Failed { error } = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert!(error.contains("failed to fetch projects"));
}

#[tokio::test]
async fn dispatch_resolves_against_fresh_directory_each_time() {
    let airtable = MockServer::start().await;
    let n8n = MockServer::start().await;

    // Each dispatch re-reads the directory: two calls, two GETs.
    Mock::given(method("GET"))
        .and(path(TABLE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "records": [sparse_record("p1", "Demo")] })),
        )
        .expect(2)
        .mount(&airtable)
        .await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(2)
        .mount(&n8n)
        .await;

    let config = test_config(&airtable.uri(), &n8n.uri());
    let dispatcher = FileDispatcher::new(&config).expect("dispatcher builds");

    assert!(dispatcher.dispatch_file_with_project(request("p1")).await.is_delivered());
    assert!(dispatcher.dispatch_file_with_project(request("p1")).await.is_delivered());
}
