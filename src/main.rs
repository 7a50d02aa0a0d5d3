//! # employee-api 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 읽기 (DB 접속 정보, 포트 등)
//! 4. PostgreSQL 연결 풀 생성 및 연결 확인(ping)
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작
//!
//! 3~6단계 중 하나라도 실패하면 에러를 출력하고 프로세스가 종료됩니다.

mod config;
mod db;
mod error;
mod extract;
mod models;
mod routes;
mod services;

use anyhow::{Context, Result};
use config::Config;
use db::{PgStore, Store};
use routes::AppState;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없으면 프로세스 환경변수만 사용합니다.
    // 필수 값이 빠져 있으면 3단계에서 실패합니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅 초기화 ──
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_api=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env().context("failed to load configuration")?;
    // DB 접속 정보는 어떤 항목도 로그에 남기지 않습니다.
    tracing::info!(employee_view = ?config.employee_view, "configuration loaded");

    // ── 4단계: 연결 풀 생성 + ping ──
    let store = PgStore::connect(&config.database)
        .await
        .context("failed to create database connection pool")?;
    store
        .ping()
        .await
        .context("failed to ping database")?;
    tracing::info!("Successfully connected to database!");

    // ── 5단계: 라우터 설정 ──
    let state = AppState::new(Arc::new(store));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router(state, config.employee_view)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // ── 6단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server running on {}", addr);

    // 서버가 실행 중에 실패해도 에러로 종료합니다.
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
