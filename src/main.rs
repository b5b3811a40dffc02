//! # 북마크 매니저 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 저장소 준비 (JSON 파일 또는 SQLite)
//! 4. API 라우터 설정
//! 5. HTTP 서버 시작

use anyhow::Result;
use bookmark_manager::{
    config::Config,
    db::Store,
    routes::{self, AppState},
};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookmark_manager=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!("Starting Bookmark Manager on {}:{}", config.host, config.port);

    // DATABASE_URL이 있으면 SQLite, 없으면 JSON 파일 저장소를 사용합니다.
    let store = match &config.database_url {
        Some(url) => {
            tracing::info!("Using SQLite store at {}", url);
            Store::sqlite(url).await?
        }
        None => {
            tracing::info!("Using JSON file store at {}", config.data_file);
            Store::json_file(&config.data_file)
        }
    };

    let state = AppState { store };
    let app = routes::app(state, Path::new(&config.static_dir));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
