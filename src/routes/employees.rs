//! # 직원(Employee) 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | GET | /api/employees | 200 직원 배열 | 500 |
//! | GET | /api/employee/{id} | 200 직원 | 404 "Employee not found", 500 |
//! | POST | /api/employee | 201 `{"message":"Employee created"}` | 400, 500 |
//! | PUT | /api/employee/{id} | 200 `{"message":"Employee updated"}` | 400, 500 |
//! | DELETE | /api/employee/{id} | 200 `{"message":"Employee deleted"}` | 400, 500 |
//!
//! PUT과 DELETE는 대상 행이 있는지 확인하지 않습니다.
//! 없는 ID여도 성공 메시지를 반환하고, 영향받은 행 수는 debug 로그로만 남깁니다.

use crate::{
    error::AppError,
    extract::{EmployeeId, JsonBody},
    models::*,
    routes::AppState,
    services::records,
};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

fn message(text: &str) -> Json<Value> {
    Json(json!({ "message": text }))
}

/// `GET /api/employees` — 기본 스키마 직원 목록
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = state.store.list_employees().await?;
    Ok(Json(employees))
}

/// `GET /api/employees` (EMPLOYEE_VIEW=payroll) — 급여 스키마 직원 목록
pub async fn list_payroll(
    State(state): State<AppState>,
) -> Result<Json<Vec<PayrollEmployee>>, AppError> {
    let rows = state.store.list_payroll().await?;
    // into_iter().map(...).collect(): 행마다 매퍼를 적용해 새 Vec을 만듭니다.
    Ok(Json(rows.into_iter().map(records::payroll_employee).collect()))
}

/// `GET /api/employee/{id}` — 단일 직원 조회
pub async fn get_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> Result<Json<Employee>, AppError> {
    let employee = state
        .store
        .get_employee(id)
        .await?
        .ok_or(AppError::NotFound(EMPLOYEE_NOT_FOUND))?;
    Ok(Json(employee))
}

/// `POST /api/employee` — 직원 생성
///
/// 본문은 고정 메시지입니다. 새 ID는 `Location` 헤더로 알려줍니다.
pub async fn create_employee(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<EmployeeInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.store.create_employee(&input).await?;
    tracing::info!(id, "employee created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/employee/{id}"))],
        message("Employee created"),
    ))
}

/// `PUT /api/employee/{id}` — name과 position을 덮어씁니다.
pub async fn update_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
    JsonBody(input): JsonBody<EmployeeInput>,
) -> Result<Json<Value>, AppError> {
    let affected = state.store.update_employee(id, &input).await?;
    tracing::debug!(id, affected, "employee update executed");
    Ok(message("Employee updated"))
}

/// `DELETE /api/employee/{id}` — 직원 삭제
pub async fn delete_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> Result<Json<Value>, AppError> {
    let affected = state.store.delete_employee(id).await?;
    tracing::debug!(id, affected, "employee delete executed");
    Ok(message("Employee deleted"))
}
