//! # 인코딩 정규화(Encoding Normalizer) 서비스
//!
//! 레거시 시스템에서 넘어온 텍스트는 UTF-8이 아닐 수 있습니다.
//! 주로 EUC-KR(정확히는 그 확장인 CP949)로 저장된 한글이 그렇습니다.
//! 이 모듈은 바이트열을 받아 JSON으로 내보낼 수 있는 UTF-8 문자열로 바꿉니다.
//!
//! ## 처리 순서
//! 1. 바이트열 전체가 올바른 UTF-8인지 검사합니다 (휴리스틱이 아닌 전체 검사).
//!    맞으면 그대로 돌려줍니다. 대부분의 데이터가 여기서 끝납니다.
//! 2. 아니면 EUC-KR로 디코딩하여 UTF-8로 변환합니다.
//! 3. EUC-KR로도 해석할 수 없으면 원본 바이트를 그대로 유지합니다.
//!    변환 실패가 요청 전체를 실패시키지는 않습니다.
//!
//! 우연히 UTF-8로도 해석되는 EUC-KR 바이트열은 구분하지 않습니다.

use encoding_rs::EUC_KR;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// 정규화 결과
///
/// 라이프타임 `'a`는 입력 바이트열을 빌려온다는 뜻입니다.
/// 이미 UTF-8이거나 변환에 실패한 경우에는 복사 없이 원본을 가리킵니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized<'a> {
    /// 이미 올바른 UTF-8 (빈 문자열, ASCII 포함)
    Unchanged(&'a str),
    /// EUC-KR에서 UTF-8로 변환됨
    Converted(String),
    /// UTF-8도 EUC-KR도 아님. 원본 바이트를 그대로 보관합니다.
    Fallback(&'a [u8]),
}

impl Normalized<'_> {
    /// 정규화된 바이트열. `Fallback`이면 원본 바이트 그대로입니다.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Normalized::Unchanged(text) => text.as_bytes(),
            Normalized::Converted(text) => text.as_bytes(),
            Normalized::Fallback(raw) => *raw,
        }
    }

    /// JSON 응답에 넣을 `String`으로 변환합니다.
    ///
    /// JSON 문자열은 UTF-8이어야 하므로 `Fallback`은 여기서만
    /// 손실 변환(잘못된 시퀀스마다 U+FFFD)을 거칩니다.
    pub fn into_string(self) -> String {
        match self {
            Normalized::Unchanged(text) => text.to_owned(),
            Normalized::Converted(text) => text,
            Normalized::Fallback(raw) => String::from_utf8_lossy(raw).into_owned(),
        }
    }
}

/// 바이트열을 UTF-8로 정규화합니다. 부수 효과가 없는 순수 함수입니다.
///
/// ```text
/// b"hello"             → Unchanged("hello")
/// [C7 D1 B1 DB]        → Converted("한글")
/// [FF FF]              → Fallback([FF FF])
/// ```
pub fn normalize(raw: &[u8]) -> Normalized<'_> {
    if let Ok(text) = std::str::from_utf8(raw) {
        return Normalized::Unchanged(text);
    }

    // without_replacement: 잘못된 시퀀스를 U+FFFD로 바꾸지 않고 None을 반환합니다.
    // BOM 처리도 하지 않습니다 (레거시 컬럼에는 BOM이 없음).
    match EUC_KR.decode_without_bom_handling_and_without_replacement(raw) {
        Some(decoded) => Normalized::Converted(decoded.into_owned()),
        None => Normalized::Fallback(raw),
    }
}

/// 인코딩 변환 통계
///
/// 변환 실패를 조용히 넘기지 않고 셀 수 있도록 카운터를 둡니다.
/// 여러 요청이 동시에 기록하므로 원자적(atomic) 정수를 사용합니다.
#[derive(Debug, Default)]
pub struct EncodingStats {
    converted: AtomicU64,
    fallback: AtomicU64,
}

/// `/api/health`로 내보내는 통계 스냅샷
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodingSnapshot {
    pub converted: u64,
    pub fallback: u64,
}

impl EncodingStats {
    /// 정규화 결과 하나를 기록합니다. `field`는 로그용 컬럼 이름입니다.
    pub fn record(&self, field: &'static str, normalized: &Normalized<'_>) {
        match normalized {
            Normalized::Unchanged(_) => {}
            Normalized::Converted(_) => {
                self.converted.fetch_add(1, Ordering::Relaxed);
            }
            Normalized::Fallback(_) => {
                self.fallback.fetch_add(1, Ordering::Relaxed);
                // 내용은 남기지 않습니다. 개인정보가 섞인 컬럼일 수 있습니다.
                tracing::warn!(
                    field,
                    bytes = normalized.as_bytes().len(),
                    "legacy text is neither UTF-8 nor EUC-KR, passing original through"
                );
            }
        }
    }

    pub fn snapshot(&self) -> EncodingSnapshot {
        EncodingSnapshot {
            converted: self.converted.load(Ordering::Relaxed),
            fallback: self.fallback.load(Ordering::Relaxed),
        }
    }
}
