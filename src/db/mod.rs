//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! - `employees`, `cards`: 테이블별 SQL 함수 (`&PgPool`을 받음)
//! - `Store`: 핸들러가 의존하는 저장소 기능(capability) 트레이트
//! - `PgStore`: PostgreSQL 연결 풀 위에서 `Store`를 구현
//!
//! 핸들러는 전역 풀 대신 `AppState`에 담긴 `Arc<dyn Store>`를 받습니다.
//! 테스트에서는 같은 트레이트를 메모리 구현(`memory::MemoryStore`)으로 바꿔 끼웁니다.

pub mod cards;
pub mod employees;
#[cfg(test)]
pub mod memory;

use crate::error::AppError;
use crate::models::*;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// 저장소 기능
///
/// `Send + Sync`: 여러 요청(스레드)이 동시에 같은 저장소를 공유하기 위한 조건입니다.
/// 동시성 제어는 DB와 연결 풀에 맡깁니다.
#[async_trait]
pub trait Store: Send + Sync {
    /// 연결 확인 (`SELECT 1`)
    async fn ping(&self) -> Result<(), AppError>;

    async fn list_employees(&self) -> Result<Vec<Employee>, AppError>;

    async fn get_employee(&self, id: i32) -> Result<Option<Employee>, AppError>;

    /// 새 직원의 ID를 반환합니다.
    async fn create_employee(&self, input: &EmployeeInput) -> Result<i32, AppError>;

    /// 영향받은 행 수를 반환합니다. 존재 여부는 확인하지 않습니다.
    async fn update_employee(&self, id: i32, input: &EmployeeInput) -> Result<u64, AppError>;

    /// 영향받은 행 수를 반환합니다.
    async fn delete_employee(&self, id: i32) -> Result<u64, AppError>;

    async fn list_payroll(&self) -> Result<Vec<PayrollRow>, AppError>;

    async fn list_card_transactions(
        &self,
        owner_code: &str,
    ) -> Result<Vec<CardTransactionRow>, AppError>;
}

/// PostgreSQL 저장소
///
/// `PgPool`은 내부적으로 Arc를 쓰므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// 연결 풀을 만들고 첫 연결을 맺습니다.
    pub async fn connect(config: &crate::config::DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options())
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        employees::list_employees(&self.pool).await
    }

    async fn get_employee(&self, id: i32) -> Result<Option<Employee>, AppError> {
        employees::get_employee(&self.pool, id).await
    }

    async fn create_employee(&self, input: &EmployeeInput) -> Result<i32, AppError> {
        employees::create_employee(&self.pool, input).await
    }

    async fn update_employee(&self, id: i32, input: &EmployeeInput) -> Result<u64, AppError> {
        employees::update_employee(&self.pool, id, input).await
    }

    async fn delete_employee(&self, id: i32) -> Result<u64, AppError> {
        employees::delete_employee(&self.pool, id).await
    }

    async fn list_payroll(&self) -> Result<Vec<PayrollRow>, AppError> {
        employees::list_payroll(&self.pool).await
    }

    async fn list_card_transactions(
        &self,
        owner_code: &str,
    ) -> Result<Vec<CardTransactionRow>, AppError> {
        cards::list_card_transactions(&self.pool, owner_code).await
    }
}
