//! # 서비스 계층
//!
//! DB나 HTTP에 묶이지 않는 순수한 변환 로직입니다.
//! - `encoding`: 레거시 텍스트 인코딩 정규화
//! - `records`: DB 원본 행 → 응답 레코드 매핑

pub mod encoding;
pub mod records;
