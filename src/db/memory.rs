//! 테스트용 메모리 저장소
//!
//! `Store`를 Vec과 Mutex로 구현합니다. 카드 조회에 쓰인 소유 코드를 기록해 두어
//! 핸들러가 어떤 값으로 필터링했는지 확인할 수 있습니다.

use super::Store;
use crate::error::AppError;
use crate::models::*;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    employees: Mutex<Vec<Employee>>,
    next_id: Mutex<i32>,
    payroll: Vec<PayrollRow>,
    cards: Vec<CardTransactionRow>,
    card_queries: Mutex<Vec<String>>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payroll(mut self, rows: Vec<PayrollRow>) -> Self {
        self.payroll = rows;
        self
    }

    pub fn with_cards(mut self, rows: Vec<CardTransactionRow>) -> Self {
        self.cards = rows;
        self
    }

    /// 모든 호출이 연결 에러를 내는 저장소
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// 지금까지 카드 조회에 사용된 소유 코드들
    pub fn card_queries(&self) -> Vec<String> {
        self.card_queries.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.offline {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.check()?;
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn get_employee(&self, id: i32) -> Result<Option<Employee>, AppError> {
        self.check()?;
        let employees = self.employees.lock().unwrap();
        Ok(employees.iter().find(|e| e.id == id).cloned())
    }

    async fn create_employee(&self, input: &EmployeeInput) -> Result<i32, AppError> {
        self.check()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        self.employees.lock().unwrap().push(Employee {
            id: *next_id,
            name: input.name.clone(),
            position: input.position.clone(),
        });
        Ok(*next_id)
    }

    async fn update_employee(&self, id: i32, input: &EmployeeInput) -> Result<u64, AppError> {
        self.check()?;
        let mut employees = self.employees.lock().unwrap();
        let mut affected = 0;
        for employee in employees.iter_mut().filter(|e| e.id == id) {
            employee.name = input.name.clone();
            employee.position = input.position.clone();
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete_employee(&self, id: i32) -> Result<u64, AppError> {
        self.check()?;
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.id != id);
        Ok((before - employees.len()) as u64)
    }

    async fn list_payroll(&self) -> Result<Vec<PayrollRow>, AppError> {
        self.check()?;
        Ok(self.payroll.clone())
    }

    async fn list_card_transactions(
        &self,
        owner_code: &str,
    ) -> Result<Vec<CardTransactionRow>, AppError> {
        self.check()?;
        self.card_queries
            .lock()
            .unwrap()
            .push(owner_code.to_string());
        Ok(self
            .cards
            .iter()
            .filter(|row| row.c_code.as_deref() == Some(owner_code))
            .cloned()
            .collect())
    }
}
