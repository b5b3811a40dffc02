//! # 북마크 매니저
//!
//! URL을 사용자 정의 카테고리로 정리하는 북마크 관리 애플리케이션입니다.
//!
//! - `routes`: `/api` 아래의 REST 엔드포인트 (axum)
//! - `db`: 문서 전체를 읽고 쓰는 저장소와 북마크/카테고리 데이터 함수
//! - `client`: 브라우저 UI의 상태 컨트롤러와 API 클라이언트
//!
//! 서버 바이너리는 `src/main.rs`에 있습니다.

pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
