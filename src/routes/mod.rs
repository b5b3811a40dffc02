//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 조립 함수를 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `bookmarks`: 북마크 CRUD 핸들러
//! - `categories`: 카테고리 목록/생성/삭제 핸들러
//! - `health`: 헬스체크와 루트 안내 메시지

pub mod bookmarks;
pub mod categories;
pub mod health;

pub use bookmarks::*;
pub use categories::*;
pub use health::*;

use crate::db::Store;
use crate::error::AppError;
use axum::{
    extract::FromRequest,
    routing::{delete, get, put},
    Router,
};
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// `Store`는 내부가 Arc이므로 clone해도 같은 저장소와 잠금을 공유합니다.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

/// `axum::Json` 대신 쓰는 요청 본문 추출자
///
/// 파싱 실패(필드 타입 불일치 등)를 `AppError::BadRequest`로 바꿔
/// 다른 검증 에러와 같은 `{ "error": ... }` 400 응답을 돌려줍니다.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// URL 경로의 `:id`를 정수로 해석합니다.
///
/// 정수가 아닌 ID는 존재하지 않는 ID와 똑같이 404로 처리하기 위해
/// 추출자 대신 문자열로 받아 여기서 변환합니다.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// `/api` 아래에 중첩될 API 라우터를 만듭니다.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route("/bookmarks/{id}", put(update_bookmark).delete(delete_bookmark))
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/{id}", delete(delete_category))
        .route("/health", get(health_check))
        .with_state(state)
}

/// 전체 애플리케이션 라우터를 만듭니다.
///
/// `static_dir`에 빌드된 클라이언트가 있으면 API 외의 경로는 정적 파일로 서빙하고,
/// 찾을 수 없는 경로는 `index.html`로 돌려보냅니다 (SPA 라우팅).
/// 없으면 `GET /`에서 안내 메시지만 반환합니다.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new().nest("/api", api_router(state));

    let router = if static_dir.exists() {
        tracing::info!("Serving client static files from {}", static_dir.display());
        let serve_dir =
            ServeDir::new(static_dir).not_found_service(ServeFile::new(static_dir.join("index.html")));
        router.fallback_service(serve_dir)
    } else {
        tracing::warn!(
            "Client build directory {} not found, serving API only",
            static_dir.display()
        );
        router.route("/", get(api_banner))
    };

    router.layer(cors).layer(TraceLayer::new_for_http())
}
