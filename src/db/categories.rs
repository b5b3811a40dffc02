//! # 카테고리 데이터 접근 함수
//!
//! 카테고리 목록(북마크 수 포함), 생성, 삭제를 처리합니다.
//! 삭제 시 참조하던 북마크는 지우지 않고 `categoryId`만 null로 바꿉니다.

use crate::db::Store;
use crate::error::AppError;
use crate::models::*;
use crate::services::ValidationError;

/// 모든 카테고리를 저장된 순서대로, 소속 북마크 수와 함께 반환합니다.
pub async fn list_categories(store: &Store) -> Result<Vec<CategoryWithCount>, AppError> {
    let library = store.read().await;
    let categories = library
        .categories
        .iter()
        .map(|category| CategoryWithCount {
            category: category.clone(),
            bookmark_count: library.bookmark_count(category.id),
        })
        .collect();
    Ok(categories)
}

/// 새 카테고리를 생성합니다.
///
/// `name`은 이미 앞뒤 공백이 제거된 값이어야 합니다.
/// 같은 이름(대소문자 무시)이 있으면 `ValidationError::DuplicateCategory`를 반환하고
/// 문서는 저장하지 않습니다.
pub async fn create_category(store: &Store, name: &str) -> Result<Category, AppError> {
    let category = store
        .update(|library| {
            if library.find_category_by_name(name).is_some() {
                return Err(ValidationError::DuplicateCategory.into());
            }
            let category = Category {
                id: library.next_category_id(),
                name: name.to_string(),
                created_at: now_timestamp(),
            };
            library.categories.push(category.clone());
            Ok(category)
        })
        .await?;

    tracing::info!("Created category {} ({})", category.id, category.name);
    Ok(category)
}

/// 카테고리를 삭제하고, 참조하던 북마크의 `categoryId`를 null로 만듭니다.
///
/// ## 반환값
/// - `Ok(Some(n))`: 삭제 성공, n개의 북마크가 분류 해제됨
/// - `Ok(None)`: 해당 ID의 카테고리가 없음
pub async fn delete_category(store: &Store, id: i64) -> Result<Option<usize>, AppError> {
    let result = store
        .update(|library| {
            let Some(index) = library.categories.iter().position(|c| c.id == id) else {
                return Err(AppError::NotFound("Category not found"));
            };

            let mut unlinked = 0;
            for bookmark in library
                .bookmarks
                .iter_mut()
                .filter(|b| b.category_id == Some(id))
            {
                bookmark.category_id = None;
                unlinked += 1;
            }
            library.categories.remove(index);
            Ok(unlinked)
        })
        .await;

    match result {
        Ok(unlinked) => {
            tracing::info!("Deleted category {}, unlinked {} bookmarks", id, unlinked);
            Ok(Some(unlinked))
        }
        Err(AppError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::bookmarks;

    fn store() -> (Store, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        (Store::json_file(dir.path().join("data.json")), dir)
    }

    async fn add_bookmark(store: &Store, title: &str, category_id: Option<i64>) -> Bookmark {
        let req = CreateBookmarkRequest {
            category_id,
            ..Default::default()
        };
        bookmarks::create_bookmark(store, title, "https://example.com", &req)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn duplicate_names_are_rejected_case_insensitively() {
        let (store, _dir) = store();
        create_category(&store, "Work").await.unwrap();

        let err = create_category(&store, "work").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::DuplicateCategory)
        ));
        assert_eq!(list_categories(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn counts_follow_bookmark_membership() {
        let (store, _dir) = store();
        let work = create_category(&store, "Work").await.unwrap();
        let home = create_category(&store, "Home").await.unwrap();
        add_bookmark(&store, "a", Some(work.id)).await;
        add_bookmark(&store, "b", Some(work.id)).await;
        add_bookmark(&store, "c", None).await;

        let listed = list_categories(&store).await.unwrap();
        assert_eq!(listed[0].category.id, work.id);
        assert_eq!(listed[0].bookmark_count, 2);
        assert_eq!(listed[1].category.id, home.id);
        assert_eq!(listed[1].bookmark_count, 0);
    }

    #[tokio::test]
    async fn delete_cascades_to_null() {
        let (store, _dir) = store();
        let work = create_category(&store, "Work").await.unwrap();
        let other = create_category(&store, "Other").await.unwrap();
        add_bookmark(&store, "a", Some(work.id)).await;
        add_bookmark(&store, "b", Some(work.id)).await;
        let kept = add_bookmark(&store, "c", Some(other.id)).await;

        assert_eq!(delete_category(&store, work.id).await.unwrap(), Some(2));

        let library = store.read().await;
        assert!(library.find_category(work.id).is_none());
        assert_eq!(library.bookmarks.len(), 3);
        for b in &library.bookmarks {
            let expected = if b.id == kept.id { Some(other.id) } else { None };
            assert_eq!(b.category_id, expected);
        }
    }

    #[tokio::test]
    async fn deleting_unknown_category_reports_none() {
        let (store, _dir) = store();
        assert_eq!(delete_category(&store, 42).await.unwrap(), None);
    }
}
