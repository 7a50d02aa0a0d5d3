//! # 에러 처리 모듈
//!
//! 핸들러에서 발생하는 모든 에러를 `AppError` 하나로 모읍니다.
//! 핸들러가 `Result<T, AppError>`를 반환하면 Axum이 `IntoResponse`를 호출해
//! 적절한 HTTP 상태 코드와 **평문(text/plain)** 메시지로 바꿉니다.
//!
//! | variant | 상태 코드 | 본문 |
//! |---------|-----------|------|
//! | `NotFound` | 404 | 고정 메시지 (예: "Employee not found") |
//! | `BadRequest` | 400 | 파싱 에러 원문 |
//! | `Database` | 500 | DB 에러 원문 |
//!
//! 인코딩 변환 실패는 여기에 없습니다. `services::encoding`에서 원본 텍스트로
//! 대체되며 요청을 실패시키지 않습니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// 애플리케이션 에러
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    /// `&'static str`: 프로그램에 박힌 고정 문자열만 받습니다.
    #[error("{0}")]
    NotFound(&'static str),

    /// 잘못된 요청 본문이나 경로 파라미터 (HTTP 400)
    #[error("{0}")]
    BadRequest(String),

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from]: sqlx 함수 결과에 `?`를 쓰면 자동으로 이 variant로 변환됩니다.
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    /// 상태 코드와 에러 메시지 원문을 평문으로 반환합니다.
    ///
    /// DB 에러는 서버 로그에도 남깁니다.
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {}", e),
            AppError::BadRequest(msg) => tracing::debug!("Bad request: {}", msg),
            AppError::NotFound(_) => {}
        }

        // (StatusCode, String) 튜플은 text/plain 응답이 됩니다.
        (status, self.to_string()).into_response()
    }
}
