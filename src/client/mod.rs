//! # 클라이언트 모듈
//!
//! 브라우저 UI가 들고 있는 상태와 동작을 옮겨 놓은 모듈입니다.
//! - `api`: REST API 호출 트레이트(`BookmarkApi`)와 reqwest 구현(`ApiClient`)
//! - `controller`: 목록, 필터, 모달/토스트/확인창 상태를 관리하는 `Controller`
//!
//! 컨트롤러는 로컬에서 목록을 고치지 않습니다. 변경이 성공하면 항상
//! 영향을 받은 목록을 서버에서 다시 가져옵니다.

pub mod api;
pub mod controller;

pub use api::*;
pub use controller::*;
