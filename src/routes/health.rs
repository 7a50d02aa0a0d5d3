//! # 헬스체크(Health Check) 핸들러
//!
//! - `GET /api/health` → `{ "status": "ok", "encoding": { "converted": n, "fallback": m } }`
//!
//! DB에 `SELECT 1`을 보내 연결을 확인하고, 레거시 텍스트 변환 통계를 함께 보여줍니다.
//! `fallback`이 늘어난다면 EUC-KR로도 읽을 수 없는 데이터가 있다는 뜻입니다.

use crate::{error::AppError, routes::AppState};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// `GET /api/health`
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.store.ping().await?;
    Ok(Json(json!({
        "status": "ok",
        "encoding": state.encoding.snapshot(),
    })))
}
