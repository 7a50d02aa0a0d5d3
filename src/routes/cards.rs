//! # 카드 거래 라우트 핸들러
//!
//! `GET /api/cards?c_code=7000` → 정규화된 카드 거래 배열
//!
//! `c_code`가 없거나 비어 있으면 기본 소유 코드 `"7000"`으로 조회합니다.

use crate::{error::AppError, models::CardTransaction, routes::AppState, services::records};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

/// 쿼리 파라미터가 없을 때 쓰는 소유 코드
pub const DEFAULT_OWNER_CODE: &str = "7000";

/// `?c_code=...` 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct CardQuery {
    pub c_code: Option<String>,
}

impl CardQuery {
    pub fn owner_code(&self) -> &str {
        match self.c_code.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => DEFAULT_OWNER_CODE,
        }
    }
}

/// 소유 코드로 카드 거래를 조회하고, 레거시 텍스트를 UTF-8로 정규화해 반환합니다.
pub async fn list_cards(
    State(state): State<AppState>,
    Query(query): Query<CardQuery>,
) -> Result<Json<Vec<CardTransaction>>, AppError> {
    let owner_code = query.owner_code();
    let rows = state.store.list_card_transactions(owner_code).await?;
    tracing::debug!(owner_code, rows = rows.len(), "card transactions fetched");

    let cards = rows
        .into_iter()
        .map(|row| records::card_transaction(row, &state.encoding))
        .collect();
    Ok(Json(cards))
}
