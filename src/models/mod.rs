//! # 데이터 모델 모듈
//!
//! API가 주고받는 구조체들을 정의합니다.
//! - `employee`: 직원(Employee)과 급여 뷰(PayrollEmployee)
//! - `card`: 레거시 카드 거래(CardTransaction)
//!
//! 이름이 `*Row`로 끝나는 구조체는 DB에서 읽은 원본 행이고,
//! 나머지는 JSON 응답으로 나가는 형태입니다.
//! 원본 행 → 응답 변환은 `services::records`가 담당합니다.

pub mod card;
pub mod employee;

pub use card::*;
pub use employee::*;
