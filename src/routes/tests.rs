use super::*;
use crate::config::EmployeeView;
use crate::db::memory::MemoryStore;
use crate::models::{CardTransactionRow, PayrollRow};
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|err| panic!("response body is not JSON: {err}; body={}", self.body))
    }
}

fn app_with(store: Arc<MemoryStore>, view: EmployeeView) -> Router {
    router(AppState::new(store), view)
}

fn app(store: Arc<MemoryStore>) -> Router {
    app_with(store, EmployeeView::Basic)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header(header::CONTENT_TYPE, "application/json");
    }
    let request = request
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .expect("failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router request failed");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("failed to read response body");
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).expect("response body is not UTF-8"),
    }
}

fn card_row(c_code: &str, trade_place: &[u8]) -> CardTransactionRow {
    CardTransactionRow {
        c_code: Some(c_code.to_string()),
        client_note: None,
        trade_place: Some(trade_place.to_vec()),
        docu_stat: Some("Y".to_string()),
        mcc_code_name: None,
    }
}

#[tokio::test]
async fn unknown_employee_is_404_with_fixed_message() {
    let app = app(Arc::new(MemoryStore::new()));

    let response = send(&app, Method::GET, "/api/employee/42", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Employee not found");
}

#[tokio::test]
async fn created_employee_can_be_fetched_by_new_id() {
    let app = app(Arc::new(MemoryStore::new()));

    let created = send(
        &app,
        Method::POST,
        "/api/employee",
        Some(r#"{"name":"Kim","position":"Engineer"}"#),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.json(), json!({ "message": "Employee created" }));
    assert_eq!(created.headers[header::LOCATION], "/api/employee/1");

    let fetched = send(&app, Method::GET, "/api/employee/1", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.headers[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(
        fetched.json(),
        json!({ "id": 1, "name": "Kim", "position": "Engineer" })
    );
}

#[tokio::test]
async fn list_returns_all_employees_as_array() {
    let app = app(Arc::new(MemoryStore::new()));

    let empty = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.json(), json!([]));

    for name in ["Kim", "Lee"] {
        let body = format!(r#"{{"name":"{name}","position":"Staff"}}"#);
        send(&app, Method::POST, "/api/employee", Some(&body)).await;
    }

    let listed = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(
        listed.json(),
        json!([
            { "id": 1, "name": "Kim", "position": "Staff" },
            { "id": 2, "name": "Lee", "position": "Staff" },
        ])
    );
}

#[tokio::test]
async fn update_replaces_name_and_position() {
    let app = app(Arc::new(MemoryStore::new()));
    send(
        &app,
        Method::POST,
        "/api/employee",
        Some(r#"{"name":"Kim","position":"Engineer"}"#),
    )
    .await;

    let updated = send(
        &app,
        Method::PUT,
        "/api/employee/1",
        Some(r#"{"name":"Kim","position":"Lead"}"#),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json(), json!({ "message": "Employee updated" }));

    let fetched = send(&app, Method::GET, "/api/employee/1", None).await;
    assert_eq!(fetched.json()["position"], "Lead");
}

#[tokio::test]
async fn update_of_missing_employee_still_reports_success() {
    let app = app(Arc::new(MemoryStore::new()));

    let response = send(
        &app,
        Method::PUT,
        "/api/employee/999",
        Some(r#"{"name":"Ghost","position":"None"}"#),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "message": "Employee updated" }));
}

#[tokio::test]
async fn delete_removes_row_and_ignores_missing_ids() {
    let app = app(Arc::new(MemoryStore::new()));
    send(
        &app,
        Method::POST,
        "/api/employee",
        Some(r#"{"name":"Park","position":"Analyst"}"#),
    )
    .await;

    let deleted = send(&app, Method::DELETE, "/api/employee/1", None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.json(), json!({ "message": "Employee deleted" }));

    let gone = send(&app, Method::GET, "/api/employee/1", None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let again = send(&app, Method::DELETE, "/api/employee/1", None).await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_body_is_400_with_parse_error_text() {
    let app = app(Arc::new(MemoryStore::new()));

    let response = send(&app, Method::POST, "/api/employee", Some(r#"{"name":"Kim""#)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("line 1"), "body={}", response.body);
}

#[tokio::test]
async fn body_without_content_type_is_still_parsed() {
    let app = app(Arc::new(MemoryStore::new()));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/employee")
        .body(Body::from(r#"{"name":"Choi","position":"Designer"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn missing_fields_default_to_empty_strings() {
    let app = app(Arc::new(MemoryStore::new()));

    let created = send(&app, Method::POST, "/api/employee", Some(r#"{"name":"Kim"}"#)).await;
    assert_eq!(created.status, StatusCode::CREATED);

    let fetched = send(&app, Method::GET, "/api/employee/1", None).await;
    assert_eq!(fetched.json()["position"], "");
}

#[tokio::test]
async fn field_names_match_case_insensitively() {
    let app = app(Arc::new(MemoryStore::new()));

    let created = send(
        &app,
        Method::POST,
        "/api/employee",
        Some(r#"{"Name":"Kim","Position":"Engineer"}"#),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let fetched = send(&app, Method::GET, "/api/employee/1", None).await;
    assert_eq!(
        fetched.json(),
        json!({ "id": 1, "name": "Kim", "position": "Engineer" })
    );
}

#[tokio::test]
async fn bytes_after_first_json_value_are_ignored() {
    let app = app(Arc::new(MemoryStore::new()));

    let created = send(
        &app,
        Method::POST,
        "/api/employee",
        Some(r#"{"name":"a","position":"b"} x"#),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let fetched = send(&app, Method::GET, "/api/employee/1", None).await;
    assert_eq!(fetched.json()["position"], "b");
}

#[tokio::test]
async fn empty_body_is_400() {
    let app = app(Arc::new(MemoryStore::new()));

    let response = send(&app, Method::POST, "/api/employee", Some("")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("EOF"), "body={}", response.body);
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let app = app(Arc::new(MemoryStore::new()));

    let response = send(&app, Method::GET, "/api/employee/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn store_failure_is_500_with_raw_error() {
    let app = app(Arc::new(MemoryStore::offline()));

    for (method, uri, body) in [
        (Method::GET, "/api/employees", None),
        (Method::GET, "/api/employee/1", None),
        (Method::POST, "/api/employee", Some(r#"{"name":"a","position":"b"}"#)),
        (Method::PUT, "/api/employee/1", Some(r#"{"name":"a","position":"b"}"#)),
        (Method::DELETE, "/api/employee/1", None),
        (Method::GET, "/api/cards", None),
    ] {
        let response = send(&app, method, uri, body).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(response.body, sqlx::Error::PoolTimedOut.to_string());
    }
}

#[tokio::test]
async fn cards_default_to_owner_code_7000() {
    let store = Arc::new(MemoryStore::new().with_cards(vec![
        card_row("7000", b"Cafe"),
        card_row("8000", b"Hotel"),
    ]));
    let app = app(store.clone());

    let response = send(&app, Method::GET, "/api/cards", None).await;
    let empty_param = send(&app, Method::GET, "/api/cards?c_code=", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(store.card_queries(), vec!["7000", "7000"]);
    assert_eq!(
        response.json(),
        json!([{
            "c_code": "7000",
            "client_note": "",
            "trade_place": "Cafe",
            "docu_stat": "Y",
            "mcc_code_name": "",
        }])
    );
    assert_eq!(empty_param.json(), response.json());
}

#[tokio::test]
async fn cards_filter_by_requested_owner_code() {
    let store = Arc::new(MemoryStore::new().with_cards(vec![
        card_row("7000", b"Cafe"),
        card_row("8000", b"Hotel"),
    ]));
    let app = app(store.clone());

    let response = send(&app, Method::GET, "/api/cards?c_code=8000", None).await;

    assert_eq!(store.card_queries(), vec!["8000"]);
    let cards = response.json();
    assert_eq!(cards.as_array().map(Vec::len), Some(1));
    assert_eq!(cards[0]["trade_place"], "Hotel");
}

#[tokio::test]
async fn legacy_encoded_trade_place_is_returned_as_utf8() {
    // "한글 식당" (EUC-KR)
    let euc_kr: [u8; 9] = [0xC7, 0xD1, 0xB1, 0xDB, 0x20, 0xBD, 0xC4, 0xB4, 0xE7];
    let store = Arc::new(MemoryStore::new().with_cards(vec![card_row("7000", &euc_kr)]));
    let app = app(store);

    let response = send(&app, Method::GET, "/api/cards", None).await;
    assert_eq!(response.json()[0]["trade_place"], "한글 식당");

    let health = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(
        health.json(),
        json!({ "status": "ok", "encoding": { "converted": 1, "fallback": 0 } })
    );
}

#[tokio::test]
async fn payroll_view_lists_salary_shape() {
    let store = Arc::new(MemoryStore::new().with_payroll(vec![
        PayrollRow {
            id: 1,
            name: Some("Kim".to_string()),
            job_position: Some("Engineer".to_string()),
            salary: Some(5200.5),
        },
        PayrollRow {
            id: 2,
            name: Some("Lee".to_string()),
            job_position: None,
            salary: None,
        },
    ]));
    let app = app_with(store, EmployeeView::Payroll);

    let response = send(&app, Method::GET, "/api/employees", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!([
            { "id": 1, "name": "Kim", "job_position": "Engineer", "salary": 5200.5 },
            { "id": 2, "name": "Lee", "job_position": "", "salary": null },
        ])
    );
}

#[tokio::test]
async fn health_fails_when_store_is_unreachable() {
    let app = app(Arc::new(MemoryStore::offline()));

    let response = send(&app, Method::GET, "/api/health", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}
