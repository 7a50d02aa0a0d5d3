//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수와 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `employees`: 직원 CRUD와 급여 목록
//! - `cards`: 레거시 카드 거래 조회
//! - `health`: 서버/DB 상태와 인코딩 변환 통계

pub mod cards;
pub mod employees;
pub mod health;
#[cfg(test)]
mod tests;

pub use cards::*;
pub use employees::*;
pub use health::*;

use crate::{config::EmployeeView, db::Store, services::encoding::EncodingStats};
use axum::{
    routing::{get, post, MethodRouter},
    Router,
};
use std::sync::Arc;

/// 애플리케이션 공유 상태
///
/// 모든 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 전역 변수 대신 저장소를 이 구조체에 담아 주입합니다.
/// `Arc`라서 clone해도 저장소와 통계는 하나입니다.
#[derive(Clone)]
pub struct AppState {
    /// 데이터 저장소 (운영: `PgStore`, 테스트: `MemoryStore`)
    pub store: Arc<dyn Store>,
    /// 레거시 텍스트 인코딩 변환 통계
    pub encoding: Arc<EncodingStats>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            encoding: Arc::new(EncodingStats::default()),
        }
    }
}

/// API 라우터를 만듭니다.
///
/// `view`에 따라 `GET /api/employees`가 기본 스키마 또는 급여 스키마를 조회합니다.
/// CORS, 요청 로깅 같은 레이어는 `main`에서 씌웁니다.
pub fn router(state: AppState, view: EmployeeView) -> Router {
    let list: MethodRouter<AppState> = match view {
        EmployeeView::Basic => get(list_employees),
        EmployeeView::Payroll => get(list_payroll),
    };

    Router::new()
        .route("/api/employees", list)
        .route("/api/employee", post(create_employee))
        // axum 0.8부터 경로 변수는 `{id}` 문법을 씁니다.
        .route(
            "/api/employee/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/api/cards", get(list_cards))
        .route("/api/health", get(health_check))
        .with_state(state)
}
