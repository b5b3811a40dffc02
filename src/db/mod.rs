//! # 데이터 접근 계층 (Data Access Layer)
//!
//! 저장소와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출합니다.
//!
//! 각 하위 모듈:
//! - `store`: 문서 전체를 읽고 쓰는 저장소 (JSON 파일 / SQLite)
//! - `bookmarks`: 북마크 목록 필터링, 생성, 수정, 삭제
//! - `categories`: 카테고리 목록, 생성, 삭제 (북마크 분류 해제 포함)

pub mod bookmarks;
pub mod categories;
pub mod store;

pub use bookmarks::*;
pub use categories::*;
pub use store::*;
