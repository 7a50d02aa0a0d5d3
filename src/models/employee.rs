//! # 직원 모델 정의
//!
//! - `Employee`: `employees` 테이블 한 행. DB 값이 이미 UTF-8이므로 그대로 응답합니다.
//! - `EmployeeInput`: 생성/수정 요청 본문 `{ "name": ..., "position": ... }`
//! - `PayrollRow` / `PayrollEmployee`: 급여 컬럼이 있는 두 번째 스키마용

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 직원 엔티티 — `SELECT id, name, position FROM employees`의 한 행
///
/// `sqlx::FromRow`: 컬럼 이름과 필드 이름을 맞춰 자동으로 매핑합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    /// DB가 부여하는 정수 ID (SERIAL)
    pub id: i32,
    pub name: String,
    pub position: String,
}

/// 직원 생성(POST)/수정(PUT) 요청 본문
///
/// 키 이름은 대소문자를 구분하지 않습니다 (`"Name"`, `"NAME"`도 name으로 읽음).
/// 키가 빠져 있거나 값이 `null`이면 빈 문자열로 둡니다.
/// JSON 문법이 틀렸거나 값이 문자열이 아니면 400으로 거절합니다.
/// PUT도 같은 구조체를 쓰므로 name과 position을 항상 함께 덮어씁니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeInput {
    pub name: String,
    pub position: String,
}

// derive(Deserialize)는 키를 정확히 일치할 때만 매핑하므로 직접 구현합니다.
// 객체를 먼저 Map으로 읽은 뒤 키를 하나씩 비교합니다.
impl<'de> Deserialize<'de> for EmployeeInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        let mut input = EmployeeInput::default();

        for (key, value) in fields {
            let slot = if key.eq_ignore_ascii_case("name") {
                &mut input.name
            } else if key.eq_ignore_ascii_case("position") {
                &mut input.position
            } else {
                continue;
            };

            if value.is_null() {
                continue;
            }
            // 숫자나 배열이 오면 "invalid type: integer `5`, expected a string" 에러
            *slot = String::deserialize(value).map_err(<D::Error as de::Error>::custom)?;
        }

        Ok(input)
    }
}

/// 급여 스키마의 원본 행 — `SELECT id, name, job_position, salary`
///
/// 이 스키마는 텍스트 컬럼이 NULL일 수 있어서 `Option`으로 받습니다.
/// `salary`는 DB에서 NUMERIC이지만 쿼리에서 float8로 캐스팅해 읽습니다.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PayrollRow {
    pub id: i32,
    pub name: Option<String>,
    pub job_position: Option<String>,
    pub salary: Option<f64>,
}

/// 급여 스키마의 응답 형태
///
/// 급여가 없는 직원은 `"salary": null`로 나갑니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollEmployee {
    pub id: i32,
    pub name: String,
    pub job_position: String,
    pub salary: Option<f64>,
}
