//! # 카테고리 모델 정의
//!
//! 카테고리는 북마크를 묶는 이름 붙은 그룹입니다.
//! 북마크는 `categoryId`로 카테고리를 참조하며, 카테고리가 삭제되면
//! 참조하던 북마크의 `categoryId`는 null이 됩니다 (cascade-to-null).

use serde::{Deserialize, Serialize};

/// 저장 문서의 `categories` 배열 한 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    /// 대소문자를 무시하고 유일한 이름
    pub name: String,
    pub created_at: String,
}

/// 목록 응답용 카테고리 — 소속 북마크 수가 함께 붙습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithCount {
    #[serde(flatten)]
    pub category: Category,
    pub bookmark_count: usize,
}

/// 북마크 목록 응답에 붙는 카테고리 요약 `{id, name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

impl From<&Category> for CategoryRef {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

/// 카테고리 생성 요청 — `POST /categories`의 요청 본문
///
/// `name`이 Option인 이유: 누락된 경우에도 JSON 파싱 에러(422)가 아니라
/// 검증 에러(400)로 응답하기 위해서입니다.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}
