//! # 직원 데이터베이스 쿼리 모듈
//!
//! `employees` 테이블에 대한 단일 SQL 문 함수들입니다.
//! 모든 값은 `$1`, `$2` 플레이스홀더에 `.bind()`로 넘깁니다 (SQL 인젝션 방지).
//! 트랜잭션은 쓰지 않습니다. 각 함수는 문장 하나를 실행하고 연결을 풀에 돌려줍니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::PgPool;

/// 전체 직원 목록. 정렬 순서는 정하지 않습니다.
pub async fn list_employees(pool: &PgPool) -> Result<Vec<Employee>, AppError> {
    let employees = sqlx::query_as::<_, Employee>("SELECT id, name, position FROM employees")
        .fetch_all(pool)
        .await?;

    Ok(employees)
}

/// ID로 직원 한 명을 조회합니다. 없으면 `None`.
pub async fn get_employee(pool: &PgPool, id: i32) -> Result<Option<Employee>, AppError> {
    let employee =
        sqlx::query_as::<_, Employee>("SELECT id, name, position FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(employee)
}

/// 직원을 추가하고 DB가 부여한 ID를 반환합니다.
///
/// `RETURNING id`: INSERT와 ID 조회를 한 문장으로 처리합니다.
pub async fn create_employee(pool: &PgPool, input: &EmployeeInput) -> Result<i32, AppError> {
    let id: i32 =
        sqlx::query_scalar("INSERT INTO employees (name, position) VALUES ($1, $2) RETURNING id")
            .bind(&input.name)
            .bind(&input.position)
            .fetch_one(pool)
            .await?;

    Ok(id)
}

/// name과 position을 덮어씁니다. 영향받은 행 수를 반환합니다 (없는 ID면 0).
pub async fn update_employee(
    pool: &PgPool,
    id: i32,
    input: &EmployeeInput,
) -> Result<u64, AppError> {
    let result = sqlx::query("UPDATE employees SET name = $1, position = $2 WHERE id = $3")
        .bind(&input.name)
        .bind(&input.position)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// 직원을 삭제합니다. 영향받은 행 수를 반환합니다.
pub async fn delete_employee(pool: &PgPool, id: i32) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// 급여 스키마의 직원 목록
///
/// NUMERIC 급여를 `float8`로 캐스팅합니다. JSON에는 숫자로 나가면 충분합니다.
pub async fn list_payroll(pool: &PgPool) -> Result<Vec<PayrollRow>, AppError> {
    let rows = sqlx::query_as::<_, PayrollRow>(
        "SELECT id, name, job_position, salary::float8 AS salary FROM employees",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
