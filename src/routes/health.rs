//! # 헬스체크와 루트 안내 핸들러
//!
//! - `GET /api/health` → `{ "status": "ok" }`
//! - `GET /` → `{ "message": "Bookmark Manager API is running" }`
//!   (빌드된 클라이언트가 없어 API만 서빙할 때)

use axum::Json;
use serde_json::{json, Value};

/// `GET /health` — 서버 상태를 확인합니다. 실패하지 않습니다.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

pub async fn api_banner() -> Json<Value> {
    Json(json!({
        "message": "Bookmark Manager API is running"
    }))
}
