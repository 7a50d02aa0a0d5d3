//! # 커스텀 추출자(Extractor)
//!
//! Axum 기본 추출자는 실패 시 각자 정한 상태 코드(415, 422 등)로 응답합니다.
//! 이 API는 잘못된 입력을 모두 **400 + 에러 원문**으로 돌려주므로,
//! 기본 추출자를 감싸서 거절(rejection)을 `AppError::BadRequest`로 바꿉니다.
//!
//! - `JsonBody<T>`: 요청 본문의 첫 JSON 값을 파싱. Content-Type 헤더는 보지 않습니다.
//! - `EmployeeId`: 경로의 `{id}`를 정수로 파싱

use crate::error::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// JSON 요청 본문
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        // 첫 번째 JSON 값만 읽고 그 뒤의 바이트는 무시합니다.
        // serde_json 에러 메시지는 그대로 전달합니다.
        // 예: "expected `,` or `}` at line 1 column 15"
        let value = match serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<T>()
            .next()
        {
            Some(parsed) => parsed,
            // 본문이 비었거나 공백뿐이면 "EOF while parsing a value" 에러
            None => serde_json::from_slice(&bytes),
        }
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(JsonBody(value))
    }
}

/// `/api/employee/{id}`의 정수 ID
#[derive(Debug, Clone, Copy)]
pub struct EmployeeId(pub i32);

impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(EmployeeId(id))
    }
}
