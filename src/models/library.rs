//! # 저장 문서(Library) 모델
//!
//! 북마크 매니저의 모든 데이터는 하나의 JSON 문서로 저장됩니다:
//!
//! ```json
//! { "bookmarks": [ ... ], "categories": [ ... ] }
//! ```
//!
//! 핸들러는 문서 전체를 읽고, 필요한 배열을 수정한 뒤, 문서 전체를 다시 씁니다.

use serde::{Deserialize, Serialize};

use super::{Bookmark, Category};

/// 저장소에 통째로 읽고 쓰는 문서
///
/// `#[serde(default)]`: 최상위 키가 빠진 문서도 빈 배열로 읽어들입니다.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Library {
    /// 다음 북마크 ID: 기존 최댓값 + 1 (비어 있으면 1)
    pub fn next_bookmark_id(&self) -> i64 {
        next_id(self.bookmarks.iter().map(|b| b.id))
    }

    /// 다음 카테고리 ID: 기존 최댓값 + 1 (비어 있으면 1)
    pub fn next_category_id(&self) -> i64 {
        next_id(self.categories.iter().map(|c| c.id))
    }

    pub fn find_category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// 대소문자를 무시하고 같은 이름의 카테고리를 찾습니다.
    pub fn find_category_by_name(&self, name: &str) -> Option<&Category> {
        let needle = name.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == needle)
    }

    /// 해당 카테고리를 참조하는 북마크 수 (선형 탐색)
    pub fn bookmark_count(&self, category_id: i64) -> usize {
        self.bookmarks
            .iter()
            .filter(|b| b.category_id == Some(category_id))
            .count()
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max + 1)
}
