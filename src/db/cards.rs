//! # 카드 거래 조회 쿼리
//!
//! `card_transactions`는 레거시 시스템에서 적재된 읽기 전용 릴레이션입니다.
//! 자유 입력 컬럼은 `bytea`라서 EUC-KR 바이트가 손상 없이 넘어옵니다.

use crate::error::AppError;
use crate::models::CardTransactionRow;
use sqlx::PgPool;

/// 소유 코드로 필터링한 카드 거래 목록. 컬럼 구성은 고정입니다.
pub async fn list_card_transactions(
    pool: &PgPool,
    owner_code: &str,
) -> Result<Vec<CardTransactionRow>, AppError> {
    let rows = sqlx::query_as::<_, CardTransactionRow>(
        r#"
        SELECT c_code, client_note, trade_place, docu_stat, mcc_code_name
        FROM card_transactions
        WHERE c_code = $1
        "#,
    )
    .bind(owner_code)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
