//! # 레코드 매퍼(Record Mapper)
//!
//! DB에서 읽은 원본 행(`*Row`)을 JSON 응답용 레코드로 바꿉니다.
//!
//! | 형태 | 처리 |
//! |------|------|
//! | `Employee` | 변환 없이 그대로 (이미 UTF-8) |
//! | `PayrollRow` | NULL 텍스트 → `""` |
//! | `CardTransactionRow` | 자유 입력 컬럼마다 인코딩 정규화, NULL → `""` |

use crate::models::*;
use crate::services::encoding::{normalize, EncodingStats};

/// 급여 스키마 행을 응답 형태로 바꿉니다.
pub fn payroll_employee(row: PayrollRow) -> PayrollEmployee {
    PayrollEmployee {
        id: row.id,
        name: row.name.unwrap_or_default(),
        job_position: row.job_position.unwrap_or_default(),
        salary: row.salary,
    }
}

/// 카드 거래 행을 응답 형태로 바꿉니다.
///
/// `client_note`, `trade_place`, `mcc_code_name`은 각각 따로 정규화합니다.
/// `c_code`와 `docu_stat`은 코드 값이므로 그대로 둡니다.
pub fn card_transaction(row: CardTransactionRow, stats: &EncodingStats) -> CardTransaction {
    CardTransaction {
        c_code: row.c_code.unwrap_or_default(),
        client_note: legacy_text("client_note", row.client_note.as_deref(), stats),
        trade_place: legacy_text("trade_place", row.trade_place.as_deref(), stats),
        docu_stat: row.docu_stat.unwrap_or_default(),
        mcc_code_name: legacy_text("mcc_code_name", row.mcc_code_name.as_deref(), stats),
    }
}

fn legacy_text(field: &'static str, raw: Option<&[u8]>, stats: &EncodingStats) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let normalized = normalize(raw);
    stats.record(field, &normalized);
    normalized.into_string()
}
