//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어옵니다.
//! `.env` 파일은 `main`에서 dotenvy로 먼저 로딩합니다.
//!
//! 설정 항목:
//! - `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`: 필수
//! - `DB_PORT`: PostgreSQL 포트 (기본값 5432)
//! - `DB_MAX_CONNECTIONS`: 연결 풀 크기 (기본값 5)
//! - `HOST`: 서버 바인딩 주소 (기본값 "0.0.0.0")
//! - `SERVER_PORT`: 서버 포트 (기본값 8080)
//! - `EMPLOYEE_VIEW`: `basic` 또는 `payroll` (기본값 basic)
//!
//! 비밀번호는 로그에 남기지 않습니다. `Debug` 출력에서도 가려집니다.

use sqlx::postgres::PgConnectOptions;
use std::{env, fmt, str::FromStr};
use thiserror::Error;

/// 설정 로딩 에러. 서버 시작 단계에서만 발생하며 프로세스를 종료시킵니다.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// `GET /api/employees`가 어떤 스키마를 조회할지 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeView {
    /// `id, name, position`
    #[default]
    Basic,
    /// `id, name, job_position, salary`
    Payroll,
}

impl FromStr for EmployeeView {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(EmployeeView::Basic),
            "payroll" => Ok(EmployeeView::Payroll),
            _ => Err(()),
        }
    }
}

/// 데이터베이스 접속 정보
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// sqlx 접속 옵션을 만듭니다.
    ///
    /// 접속 문자열을 `format!`으로 조립하지 않습니다. 비밀번호에 `@`나 `/` 같은
    /// 문자가 있어도 안전하고, 비밀번호가 담긴 URL이 만들어지지 않습니다.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

// derive(Debug) 대신 직접 구현하여 비밀번호를 가립니다.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    pub port: u16,
    pub employee_view: EmployeeView,
}

impl Config {
    /// 프로세스 환경변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 → 값 조회 함수로부터 설정을 만듭니다.
    ///
    /// 테스트에서는 HashMap을 넘겨 프로세스 환경을 건드리지 않습니다.
    /// 빈 문자열은 값이 없는 것으로 취급합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            database: DatabaseConfig {
                host: required("DB_HOST")?,
                port: parsed(get("DB_PORT"), "DB_PORT", 5432)?,
                user: required("DB_USER")?,
                password: required("DB_PASSWORD")?,
                name: required("DB_NAME")?,
                max_connections: parsed(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", 5)?,
            },
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parsed(get("SERVER_PORT"), "SERVER_PORT", 8080)?,
            employee_view: parsed(get("EMPLOYEE_VIEW"), "EMPLOYEE_VIEW", EmployeeView::Basic)?,
        })
    }
}

/// 값이 없으면 기본값, 있으면 파싱합니다. 파싱에 실패하면 에러입니다.
fn parsed<T: FromStr>(value: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
