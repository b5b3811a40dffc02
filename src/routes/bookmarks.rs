//! # 북마크 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/bookmarks?category=&search= | `list_bookmarks` | 필터링된 북마크 목록 |
//! | POST | /api/bookmarks | `create_bookmark` | 새 북마크 생성 (201) |
//! | PUT | /api/bookmarks/:id | `update_bookmark` | 부분 업데이트 |
//! | DELETE | /api/bookmarks/:id | `delete_bookmark` | 삭제 |
//!
//! 입력 검증은 저장소를 읽기 전에 핸들러에서 끝냅니다.
//! 검증에 실패한 요청은 문서를 건드리지 않습니다.

use crate::{
    db,
    error::AppError,
    models::*,
    routes::{parse_id, AppJson, AppState},
    services::validation,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `GET /bookmarks` → `{ "bookmarks": [...] }`
pub async fn list_bookmarks(
    State(state): State<AppState>,
    Query(query): Query<BookmarkQuery>,
) -> Result<Json<Value>, AppError> {
    let bookmarks = db::list_bookmarks(&state.store, &query).await?;
    Ok(Json(json!({ "bookmarks": bookmarks })))
}

/// `POST /bookmarks` + `{ "title", "url", "description"?, "categoryId"? }` → `201 Created`
pub async fn create_bookmark(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), AppError> {
    let (title, url) = validation::validate_new_bookmark(req.title.as_deref(), req.url.as_deref())?;
    let bookmark = db::create_bookmark(&state.store, title, url, &req).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// `PUT /bookmarks/:id` + 변경할 필드들
///
/// `url`이 비어 있지 않으면 먼저 검증합니다. 북마크가 없으면 404.
pub async fn update_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateBookmarkRequest>,
) -> Result<Json<Bookmark>, AppError> {
    if let Some(url) = req.url.as_deref().filter(|u| !u.is_empty()) {
        validation::validate_url(url)?;
    }

    let not_found = AppError::NotFound("Bookmark not found");
    let Some(id) = parse_id(&id) else {
        return Err(not_found);
    };
    let bookmark = db::update_bookmark(&state.store, id, &req)
        .await?
        .ok_or(not_found)?;
    Ok(Json(bookmark))
}

/// `DELETE /bookmarks/:id` → `{ "message": "Bookmark deleted successfully" }`
pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = match parse_id(&id) {
        Some(id) => db::delete_bookmark(&state.store, id).await?,
        None => false,
    };
    if !deleted {
        return Err(AppError::NotFound("Bookmark not found"));
    }
    Ok(Json(json!({ "message": "Bookmark deleted successfully" })))
}
