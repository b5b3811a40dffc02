//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `bookmark`: 북마크와 북마크 요청/응답 구조체
//! - `category`: 카테고리와 카테고리 요청/응답 구조체
//! - `library`: 두 목록을 담는 저장 문서(`Library`)
//!
//! JSON 필드 이름은 모두 camelCase입니다 (`categoryId`, `createdAt` 등).

pub mod bookmark;
pub mod category;
pub mod library;

pub use bookmark::*;
pub use category::*;
pub use library::*;

/// 현재 시각을 `2024-05-01T12:00:00.000Z` 형태의 UTC 문자열로 반환합니다.
pub fn now_timestamp() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}
