//! # 서비스 모듈
//!
//! 라우트 핸들러와 저장소 사이에서 쓰이는 순수 로직을 모아둔 모듈입니다.
//! - `validation`: 요청 본문 검증 (제목/URL/카테고리 이름)

pub mod validation;

pub use validation::*;
