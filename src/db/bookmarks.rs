//! # 북마크 데이터 접근 함수
//!
//! 모든 함수는 `Store`를 받아 문서 전체를 읽거나(`read`) 잠금 아래에서
//! 읽기-수정-쓰기(`update`)를 수행합니다. 색인이 없으므로 조회는 모두 선형 탐색입니다.

use crate::db::Store;
use crate::error::AppError;
use crate::models::*;

/// 북마크 목록을 필터링하고 카테고리 요약을 붙여 반환합니다.
///
/// ## 필터
/// - `category`: `categoryId`가 정확히 일치하는 북마크만 (숫자가 아니면 결과 없음)
/// - `search`: 제목 또는 설명에 대소문자 무시 부분 문자열로 포함된 북마크만
///
/// 두 필터는 AND로 결합됩니다. 빈 문자열은 필터가 없는 것으로 취급합니다.
pub async fn list_bookmarks(
    store: &Store,
    query: &BookmarkQuery,
) -> Result<Vec<BookmarkView>, AppError> {
    let library = store.read().await;
    Ok(filter_bookmarks(&library, query))
}

fn filter_bookmarks(library: &Library, query: &BookmarkQuery) -> Vec<BookmarkView> {
    let category = query
        .category
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map(|raw| raw.trim().parse::<i64>().ok());
    let needle = query
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    library
        .bookmarks
        .iter()
        .filter(|b| match category {
            // 숫자로 해석되지 않는 값은 어떤 북마크와도 일치하지 않습니다.
            Some(Some(id)) => b.category_id == Some(id),
            Some(None) => false,
            None => true,
        })
        .filter(|b| match &needle {
            Some(needle) => {
                b.title.to_lowercase().contains(needle)
                    || b.description.to_lowercase().contains(needle)
            }
            None => true,
        })
        .map(|b| BookmarkView {
            bookmark: b.clone(),
            category: b
                .category_id
                .and_then(|id| library.find_category(id))
                .map(CategoryRef::from),
        })
        .collect()
}

/// 새 북마크를 추가하고 생성된 북마크를 반환합니다.
///
/// 요청은 라우트 핸들러에서 이미 검증된 상태여야 합니다.
/// `categoryId`가 0이면 null로 저장합니다.
pub async fn create_bookmark(
    store: &Store,
    title: &str,
    url: &str,
    req: &CreateBookmarkRequest,
) -> Result<Bookmark, AppError> {
    let bookmark = store
        .update(|library| {
            let now = now_timestamp();
            let bookmark = Bookmark {
                id: library.next_bookmark_id(),
                title: title.to_string(),
                url: url.to_string(),
                description: req.description.clone().unwrap_or_default(),
                category_id: req.category_id.filter(|id| *id != 0),
                created_at: now.clone(),
                updated_at: now,
            };
            library.bookmarks.push(bookmark.clone());
            Ok(bookmark)
        })
        .await?;

    tracing::info!("Created bookmark {}", bookmark.id);
    Ok(bookmark)
}

/// 북마크를 부분 업데이트합니다.
///
/// - `title`, `url`: 비어 있지 않은 값일 때만 변경
/// - `description`, `categoryId`: 필드가 있으면 빈 문자열/null이라도 그대로 반영
///   (description이 null이면 빈 문자열로 저장)
///
/// ## 반환값
/// - `Ok(Some(Bookmark))`: 업데이트된 북마크
/// - `Ok(None)`: 해당 ID의 북마크가 없음 (문서는 다시 쓰지 않음)
pub async fn update_bookmark(
    store: &Store,
    id: i64,
    req: &UpdateBookmarkRequest,
) -> Result<Option<Bookmark>, AppError> {
    let result = store
        .update(|library| {
            let Some(bookmark) = library.bookmarks.iter_mut().find(|b| b.id == id) else {
                return Err(AppError::NotFound("Bookmark not found"));
            };

            if let Some(title) = req.title.as_deref().filter(|t| !t.is_empty()) {
                bookmark.title = title.to_string();
            }
            if let Some(url) = req.url.as_deref().filter(|u| !u.is_empty()) {
                bookmark.url = url.to_string();
            }
            if let Some(description) = &req.description {
                bookmark.description = description.clone().unwrap_or_default();
            }
            if let Some(category_id) = req.category_id {
                bookmark.category_id = category_id;
            }
            bookmark.updated_at = now_timestamp();

            Ok(bookmark.clone())
        })
        .await;

    match result {
        Ok(bookmark) => Ok(Some(bookmark)),
        Err(AppError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// ID로 북마크를 삭제합니다.
///
/// ## 반환값
/// - `true`: 삭제 성공
/// - `false`: 해당 ID의 북마크가 없음 (문서는 다시 쓰지 않음)
pub async fn delete_bookmark(store: &Store, id: i64) -> Result<bool, AppError> {
    let result = store
        .update(|library| {
            let Some(index) = library.bookmarks.iter().position(|b| b.id == id) else {
                return Err(AppError::NotFound("Bookmark not found"));
            };
            library.bookmarks.remove(index);
            Ok(())
        })
        .await;

    match result {
        Ok(()) => {
            tracing::info!("Deleted bookmark {}", id);
            Ok(true)
        }
        Err(AppError::NotFound(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(id: i64, title: &str, description: &str, category_id: Option<i64>) -> Bookmark {
        Bookmark {
            id,
            title: title.to_string(),
            url: format!("https://example.com/{id}"),
            description: description.to_string(),
            category_id,
            created_at: now_timestamp(),
            updated_at: now_timestamp(),
        }
    }

    fn sample_library() -> Library {
        Library {
            bookmarks: vec![
                bookmark(1, "GitHub", "Code hosting", Some(1)),
                bookmark(2, "Rust Book", "Learn rust", Some(2)),
                bookmark(3, "Blog", "My notes about GIT internals", None),
                bookmark(4, "News", "", Some(1)),
            ],
            categories: vec![
                Category { id: 1, name: "Dev".into(), created_at: now_timestamp() },
                Category { id: 2, name: "Reading".into(), created_at: now_timestamp() },
            ],
        }
    }

    fn ids(views: &[BookmarkView]) -> Vec<i64> {
        views.iter().map(|v| v.bookmark.id).collect()
    }

    fn query(category: Option<&str>, search: Option<&str>) -> BookmarkQuery {
        BookmarkQuery {
            category: category.map(str::to_string),
            search: search.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn updating_a_missing_bookmark_leaves_storage_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let store = Store::json_file(&path);

        let req = UpdateBookmarkRequest {
            title: Some("x".into()),
            ..Default::default()
        };
        assert_eq!(update_bookmark(&store, 99, &req).await.unwrap(), None);
        assert!(!path.exists());

        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(update_bookmark(&store, 99, &req).await.unwrap(), None);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn search_matches_title_or_description_ignoring_case() {
        let views = filter_bookmarks(&sample_library(), &query(None, Some("git")));
        assert_eq!(ids(&views), vec![1, 3]);
    }

    #[test]
    fn category_and_search_compose_with_and() {
        let library = sample_library();
        assert_eq!(ids(&filter_bookmarks(&library, &query(Some("1"), None))), vec![1, 4]);
        assert_eq!(
            ids(&filter_bookmarks(&library, &query(Some("1"), Some("news")))),
            vec![4]
        );
    }

    #[test]
    fn empty_filters_are_ignored_and_garbage_category_matches_nothing() {
        let library = sample_library();
        assert_eq!(filter_bookmarks(&library, &query(Some(""), Some(""))).len(), 4);
        assert!(filter_bookmarks(&library, &query(Some("abc"), None)).is_empty());
    }

    #[test]
    fn results_carry_category_summary_or_null() {
        let views = filter_bookmarks(&sample_library(), &BookmarkQuery::default());
        assert_eq!(
            views[0].category,
            Some(CategoryRef { id: 1, name: "Dev".into() })
        );
        assert_eq!(views[2].category, None);
    }
}
