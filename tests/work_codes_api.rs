//! End-to-end tests for the HTTP surface: client and service against a
//! mocked work-code backend.

use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_json_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wkc_cli::api::client::WorkCodeClient;
use wkc_cli::api::models::WorkCodeDraft;
use wkc_cli::core::notify::{ChangeNotifier, RecordEvent};
use wkc_cli::core::services::types::{ListParams, ServiceError};
use wkc_cli::core::services::work_code_service::WorkCodeService;
use wkc_cli::core::services::{
    CreateService, DeleteService, GetService, ListService, UpdateService,
};

fn work_code_json(id: u32, short_work_code: &str, status: u8) -> serde_json::Value {
    json!({
        "id": id,
        "short_work_code": short_work_code,
        "cost_code": "CC1",
        "project_code": "P01",
        "name": format!("Work code {}", id),
        "description": null,
        "status": status
    })
}

fn service_for(server: &MockServer) -> WorkCodeService {
    let client = WorkCodeClient::new(server.uri()).expect("client creation failed");
    WorkCodeService::new(client, ChangeNotifier::new())
}

#[tokio::test]
async fn list_returns_all_records_without_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/work-codes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            work_code_json(1, "AB1", 1),
            work_code_json(2, "XY9", 0),
        ])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let records = service.list(ListParams::default()).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[1].id, 2);
}

#[tokio::test]
async fn list_applies_status_label_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/work-codes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            work_code_json(1, "AB1", 1),
            work_code_json(2, "XY9", 0),
        ])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let records = service
        .list(ListParams {
            search: Some("active".to_string()),
            limit: None,
        })
        .await
        .unwrap();

    // Status 1 is labeled "Active"; status 0 is "Draft"
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
}

#[tokio::test]
async fn get_missing_record_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/work-codes/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such record"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service.get(42).await;

    assert!(matches!(
        result,
        Err(ServiceError::NotFound { id: 42, .. })
    ));
}

#[tokio::test]
async fn create_sanitizes_draft_and_emits_event() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/work-codes"))
        .respond_with(ResponseTemplate::new(201).set_body_json(work_code_json(7, "AB1", 1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = WorkCodeClient::new(server.uri()).expect("client creation failed");
    let events: Arc<Mutex<Vec<RecordEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let mut notifier = ChangeNotifier::new();
    notifier.subscribe(move |event| {
        sink.lock().unwrap().push(*event);
    });
    let service = WorkCodeService::new(client, notifier);

    let draft = WorkCodeDraft {
        short_work_code: "  AB1  ".to_string(),
        cost_code: "CC1".to_string(),
        project_code: "P01".to_string(),
        name: "Assembly".to_string(),
        description: "".to_string(),
        status: 1,
    };
    let created = service.create(draft).await.unwrap();

    assert_eq!(created.id, 7);
    assert_eq!(events.lock().unwrap().as_slice(), &[RecordEvent::Created(7)]);
}

#[tokio::test]
async fn create_rejects_invalid_draft_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/work-codes"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let draft = WorkCodeDraft {
        short_work_code: "toolong1234".to_string(),
        name: "Assembly".to_string(),
        status: 1,
        ..Default::default()
    };
    let result = service.create(draft).await;

    match result {
        Err(ServiceError::Validation { field }) => assert_eq!(field, "Short Work Code"),
        other => panic!("expected validation error, got {:?}", other.map(|r| r.id)),
    }
}

#[tokio::test]
async fn create_rate_limits_after_burst() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/work-codes"))
        .respond_with(ResponseTemplate::new(201).set_body_json(work_code_json(1, "AB1", 1)))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let draft = WorkCodeDraft {
        short_work_code: "AB1".to_string(),
        name: "Assembly".to_string(),
        status: 1,
        ..Default::default()
    };

    for _ in 0..5 {
        service.create(draft.clone()).await.unwrap();
    }
    let result = service.create(draft).await;

    assert!(matches!(result, Err(ServiceError::RateLimited { .. })));
}

#[tokio::test]
async fn delete_accepts_empty_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/work-codes/5"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let service = service_for(&server);
    assert!(service.delete(5).await.is_ok());
}

#[tokio::test]
async fn client_sends_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/work-codes"))
        .and(header("x-api-key", "wkc_0123456789"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = WorkCodeClient::with_api_key(server.uri(), "wkc_0123456789".to_string())
        .expect("client creation failed");
    let records = client.list_work_codes().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn unauthorized_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/work-codes"))
        .respond_with(ResponseTemplate::new(401).set_body_string("missing key"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service.list(ListParams::default()).await;
    assert!(matches!(result, Err(ServiceError::Api(_))));
}

#[tokio::test]
async fn update_sends_sanitized_payload() {
    let server = MockServer::start().await;
    let expected = json!({
        "short_work_code": "AB1",
        "cost_code": "CC1",
        "project_code": "P01",
        "name": "Assembly",
        "description": null,
        "status": 2
    });
    Mock::given(method("PUT"))
        .and(path("/work-codes/7"))
        .and(body_json_string(expected.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(work_code_json(7, "AB1", 2)))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let draft = WorkCodeDraft {
        short_work_code: " <AB1> ".to_string(),
        cost_code: "CC1".to_string(),
        project_code: "P01".to_string(),
        name: "Assembly".to_string(),
        description: "".to_string(),
        status: 2,
    };
    let updated = service.update(7, draft).await.unwrap();
    assert_eq!(updated.status, 2);
}
