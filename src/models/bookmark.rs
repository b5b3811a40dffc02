use serde::{Deserialize, Deserializer, Serialize};

use super::CategoryRef;

/// 저장 문서의 `bookmarks` 배열 한 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// 소속 카테고리. 없으면 null ("Uncategorized")
    #[serde(default)]
    pub category_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// 목록 응답용 북마크 — 카테고리의 `{id, name}`이 함께 붙습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkView {
    #[serde(flatten)]
    pub bookmark: Bookmark,
    pub category: Option<CategoryRef>,
}

/// `GET /bookmarks`의 쿼리 파라미터
///
/// 빈 문자열은 필터가 없는 것으로 취급합니다.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BookmarkQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// `POST /bookmarks` 요청 본문
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmarkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i64>,
}

/// `PUT /bookmarks/:id` 요청 본문 (부분 업데이트)
///
/// `description`과 `category_id`는 "필드 누락"과 "명시적 null"을 구분합니다:
/// None = 필드 누락 (변경 안 함), Some(None) = null, Some(Some(v)) = 값 지정
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookmarkRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<Option<i64>>,
}

/// 필드가 존재하면 (null이라도) `Some`으로 감쌉니다.
/// 필드가 아예 없을 때는 `#[serde(default)]`가 None을 채웁니다.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_request_distinguishes_missing_from_null() {
        let missing: UpdateBookmarkRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.description, None);
        assert_eq!(missing.category_id, None);

        let nulls: UpdateBookmarkRequest =
            serde_json::from_value(json!({ "description": null, "categoryId": null })).unwrap();
        assert_eq!(nulls.description, Some(None));
        assert_eq!(nulls.category_id, Some(None));

        let values: UpdateBookmarkRequest =
            serde_json::from_value(json!({ "description": "", "categoryId": 3 })).unwrap();
        assert_eq!(values.description, Some(Some(String::new())));
        assert_eq!(values.category_id, Some(Some(3)));
    }

    #[test]
    fn view_flattens_bookmark_fields() {
        let view = BookmarkView {
            bookmark: Bookmark {
                id: 1,
                title: "GitHub".into(),
                url: "https://github.com".into(),
                description: String::new(),
                category_id: Some(2),
                created_at: "2024-01-01T00:00:00.000Z".into(),
                updated_at: "2024-01-01T00:00:00.000Z".into(),
            },
            category: Some(CategoryRef { id: 2, name: "Dev".into() }),
        };
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["categoryId"], 2);
        assert_eq!(value["category"]["name"], "Dev");
        assert_eq!(value["createdAt"], "2024-01-01T00:00:00.000Z");
    }
}
