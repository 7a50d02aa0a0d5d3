//! # 카드 거래 모델 정의
//!
//! 카드 거래는 레거시 시스템에서 넘어온 읽기 전용 데이터입니다.
//! 자유 입력 텍스트 컬럼(`client_note`, `trade_place`, `mcc_code_name`)은
//! EUC-KR 바이트가 섞여 있을 수 있으므로 문자열이 아닌 **바이트열**로 읽습니다.
//! Rust의 `String`은 항상 올바른 UTF-8이어야 하므로,
//! 잘못된 바이트를 `String`으로 읽으면 디코딩 단계에서 에러가 납니다.

use serde::Serialize;

/// `card_transactions`에서 읽은 원본 행
///
/// `Vec<u8>` 컬럼은 PostgreSQL의 `bytea`에 대응합니다.
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct CardTransactionRow {
    /// 소유 코드 (필터 키)
    pub c_code: Option<String>,
    pub client_note: Option<Vec<u8>>,
    pub trade_place: Option<Vec<u8>>,
    /// 전표 상태
    pub docu_stat: Option<String>,
    pub mcc_code_name: Option<Vec<u8>>,
}

/// 정규화를 마친 카드 거래 — JSON 응답 형태
///
/// 모든 필드는 NULL 대신 빈 문자열을 가집니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardTransaction {
    pub c_code: String,
    pub client_note: String,
    pub trade_place: String,
    pub docu_stat: String,
    pub mcc_code_name: String,
}
