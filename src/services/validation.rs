//! # 입력 검증 서비스
//!
//! 북마크와 카테고리 요청 본문을 검증하는 함수들입니다.
//! 예외 기반 파싱 대신, 검증 결과를 `Result<_, ValidationError>`로 돌려줍니다.
//! 핸들러는 `?` 한 번으로 실패를 HTTP 400 응답으로 바꿀 수 있습니다.

use thiserror::Error;
use url::Url;

/// 검증 실패 사유
///
/// Display 메시지는 그대로 API 응답의 `error` 필드가 됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 제목 또는 URL이 비어 있음
    #[error("Title and URL are required")]
    MissingTitleOrUrl,

    /// URL이 절대 URL로 파싱되지 않음
    #[error("Invalid URL format")]
    InvalidUrl,

    /// 카테고리 이름이 비어 있거나 공백뿐임
    #[error("Category name is required")]
    MissingCategoryName,

    /// 대소문자를 무시하고 같은 이름의 카테고리가 이미 존재함
    #[error("Category already exists")]
    DuplicateCategory,
}

impl ValidationError {
    /// 응답 본문의 `code` 필드에 들어가는 기계용 코드
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingTitleOrUrl => "missing_fields",
            ValidationError::InvalidUrl => "invalid_url",
            ValidationError::MissingCategoryName => "missing_name",
            ValidationError::DuplicateCategory => "duplicate_category",
        }
    }
}

/// URL 문자열이 절대 URL인지 확인하고 파싱된 `Url`을 돌려줍니다.
///
/// `"not-a-url"`처럼 스킴이 없는 상대 경로는 거부됩니다.
pub fn validate_url(raw: &str) -> Result<Url, ValidationError> {
    Url::parse(raw).map_err(|_| ValidationError::InvalidUrl)
}

/// 새 북마크의 필수 필드를 검증합니다.
///
/// 제목과 URL이 모두 있어야 하고, URL은 절대 URL이어야 합니다.
/// 검증을 통과하면 `(title, url)`을 빌려서 돌려줍니다.
pub fn validate_new_bookmark<'a>(
    title: Option<&'a str>,
    url: Option<&'a str>,
) -> Result<(&'a str, &'a str), ValidationError> {
    let (title, url) = match (title, url) {
        (Some(t), Some(u)) if !t.is_empty() && !u.is_empty() => (t, u),
        _ => return Err(ValidationError::MissingTitleOrUrl),
    };
    validate_url(url)?;
    Ok((title, url))
}

/// 카테고리 이름을 검증하고 앞뒤 공백을 제거한 이름을 돌려줍니다.
pub fn validate_category_name(name: Option<&str>) -> Result<&str, ValidationError> {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(ValidationError::MissingCategoryName),
    }
}
