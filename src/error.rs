//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환
//!
//! 응답 본문은 `{ "error": "메시지", "code": "코드" }` 형태입니다.
//! 브라우저 클라이언트는 `error` 키의 문자열을 그대로 토스트로 보여줍니다.

use crate::services::validation::ValidationError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 리소스를 찾을 수 없음 (HTTP 404)
    /// 필드는 클라이언트에 보여줄 메시지입니다 (예: "Bookmark not found").
    #[error("{0}")]
    NotFound(&'static str),

    /// 입력 검증 실패 (HTTP 400)
    /// #[from]: `?`로 ValidationError를 바로 전파할 수 있습니다.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 요청 본문을 읽을 수 없음 (HTTP 400)
    /// JSON 문법 오류, 필드 타입 불일치, Content-Type 누락 등
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// SQLite 백엔드 오류 (HTTP 500)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// SQLite 마이그레이션 오류 (HTTP 500, 주로 서버 시작 시)
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// 파일 입출력 오류 (HTTP 500)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 문서 직렬화 오류 (HTTP 500)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// `AppJson` 추출자가 본문 파싱에 실패하면 axum의 422/415 텍스트 응답 대신
/// `{ "error": ... }` 형태의 400 응답이 되도록 변환합니다.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 내부 에러(Database, IO, Serialization)는 실제 에러 내용을 로그에만 기록하고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.to_string()),
            AppError::Validation(ref e) => {
                (StatusCode::BAD_REQUEST, e.code(), e.to_string())
            }
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Migration(ref e) => {
                tracing::error!("Migration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Io(ref e) => {
                tracing::error!("IO error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "io_error",
                    "An IO error occurred".to_string(),
                )
            }
            AppError::Serialization(ref e) => {
                tracing::error!("Serialization error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "serialization_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        // 결과: { "error": "Bookmark not found", "code": "not_found" }
        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn not_found_keeps_its_message() {
        let (status, body) = body_json(AppError::NotFound("Bookmark not found")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Bookmark not found");
        assert_eq!(body["code"], "not_found");
    }

    #[tokio::test]
    async fn validation_maps_to_bad_request() {
        let (status, body) = body_json(ValidationError::InvalidUrl.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid URL format");
        assert_eq!(body["code"], "invalid_url");
    }

    #[tokio::test]
    async fn io_errors_hide_details() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full at /var");
        let (status, body) = body_json(AppError::Io(io)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An IO error occurred");
        assert!(!body.to_string().contains("/var"));
    }
}
