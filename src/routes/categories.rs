//! # 카테고리 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/categories | `list_categories` | 북마크 수가 포함된 카테고리 목록 |
//! | POST | /api/categories | `create_category` | 새 카테고리 생성 (201) |
//! | DELETE | /api/categories/:id | `delete_category` | 삭제 (북마크는 분류 해제) |

use crate::{
    db,
    error::AppError,
    models::*,
    routes::{parse_id, AppJson, AppState},
    services::validation,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `GET /categories` → `{ "categories": [{ ..., "bookmarkCount": n }] }`
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let categories = db::list_categories(&state.store).await?;
    Ok(Json(json!({ "categories": categories })))
}

/// `POST /categories` + `{ "name": "..." }` → `201 Created`
///
/// 이름은 앞뒤 공백을 제거해 저장합니다. 빈 이름과 중복 이름은 400.
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let name = validation::validate_category_name(req.name.as_deref())?;
    let category = db::create_category(&state.store, name).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// `DELETE /categories/:id` → `{ "message": "Category deleted successfully" }`
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = match parse_id(&id) {
        Some(id) => db::delete_category(&state.store, id).await?,
        None => None,
    };
    if deleted.is_none() {
        return Err(AppError::NotFound("Category not found"));
    }
    Ok(Json(json!({ "message": "Category deleted successfully" })))
}
