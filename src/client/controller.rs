//! # 클라이언트 상태 컨트롤러
//!
//! 브라우저 UI가 메모리에 들고 있는 상태를 관리합니다:
//! 북마크/카테고리 목록, 선택된 카테고리, 검색어, 그리고 오버레이
//! (북마크 폼 모달, 토스트 알림, 삭제 확인창).
//!
//! ## 규칙
//! - 필터(카테고리/검색어)가 바뀌면 북마크 목록을 다시 가져옵니다.
//! - 변경이 성공하면 영향을 받은 목록을 다시 가져옵니다. 로컬 보정은 하지 않습니다.
//! - 삭제는 항상 확인창을 거칩니다 (`request_delete_*` → `confirm`).
//! - 모든 실패는 에러 토스트로만 표시되며, 컨트롤러는 계속 사용할 수 있습니다.

use super::api::{BookmarkApi, ClientError};
use crate::models::*;
use crate::services::validation;

/// 열려 있는 모달
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    AddBookmark,
    EditBookmark(BookmarkView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// 잠깐 보였다 사라지는 알림
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// 확인창에서 "확인"을 눌렀을 때 실행할 작업
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteBookmark(i64),
    DeleteCategory(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub action: PendingAction,
}

/// 북마크 추가/수정 폼의 입력값 (모두 입력창의 문자열 그대로)
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookmarkForm {
    pub title: String,
    pub url: String,
    pub description: String,
    /// 카테고리 선택 상자 값. 빈 문자열은 "Uncategorized"
    pub category_id: String,
}

impl BookmarkForm {
    /// 수정 모달을 열 때 기존 값으로 채운 폼
    pub fn from_bookmark(bookmark: &Bookmark) -> Self {
        Self {
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            description: bookmark.description.clone(),
            category_id: bookmark
                .category_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }

    /// 제출 전 폼 검증. 실패한 필드마다 메시지를 채워 돌려줍니다.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        if self.title.trim().is_empty() {
            errors.title = Some("Title is required".to_string());
        }
        if self.url.trim().is_empty() {
            errors.url = Some("URL is required".to_string());
        } else if validation::validate_url(&self.url).is_err() {
            errors.url = Some("Please enter a valid URL (e.g., https://example.com)".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn category(&self) -> Option<i64> {
        self.category_id.trim().parse().ok()
    }
}

/// 필드별 폼 검증 메시지
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<String>,
    pub url: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none()
    }
}

/// UI 상태 컨트롤러
pub struct Controller<A> {
    api: A,
    pub bookmarks: Vec<BookmarkView>,
    pub categories: Vec<CategoryWithCount>,
    pub selected_category: Option<i64>,
    pub search: String,
    pub loading: bool,
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub confirm: Option<ConfirmDialog>,
}

impl<A: BookmarkApi> Controller<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            bookmarks: Vec::new(),
            categories: Vec::new(),
            selected_category: None,
            search: String::new(),
            loading: true,
            modal: None,
            toast: None,
            confirm: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// 첫 화면: 북마크와 카테고리를 모두 가져옵니다.
    pub async fn load(&mut self) {
        self.loading = true;
        self.fetch_bookmarks().await;
        self.fetch_categories().await;
        self.loading = false;
    }

    /// 현재 필터로 북마크 목록을 다시 가져옵니다.
    pub async fn fetch_bookmarks(&mut self) {
        let query = BookmarkQuery {
            category: self.selected_category.map(|id| id.to_string()),
            search: Some(self.search.clone()).filter(|s| !s.is_empty()),
        };
        match self.api.list_bookmarks(&query).await {
            Ok(bookmarks) => self.bookmarks = bookmarks,
            Err(e) => {
                tracing::warn!("Error fetching bookmarks: {}", e);
                self.show_error("Failed to load bookmarks");
            }
        }
    }

    /// 카테고리 목록을 다시 가져옵니다. 실패는 로그만 남깁니다.
    pub async fn fetch_categories(&mut self) {
        match self.api.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(e) => tracing::warn!("Error fetching categories: {}", e),
        }
    }

    /// `None`은 "All Bookmarks"
    pub async fn select_category(&mut self, category: Option<i64>) {
        self.selected_category = category;
        self.fetch_bookmarks().await;
    }

    pub async fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.fetch_bookmarks().await;
    }

    /// 사이드바의 "All Bookmarks" 옆 숫자: 카테고리별 `bookmarkCount`의 합
    ///
    /// 필터와 무관하게 카테고리 목록에서 계산하므로, 분류되지 않은 북마크는 포함되지 않습니다.
    pub fn total_bookmarks(&self) -> usize {
        self.categories.iter().map(|c| c.bookmark_count).sum()
    }

    pub fn open_add_modal(&mut self) {
        self.modal = Some(Modal::AddBookmark);
    }

    pub fn open_edit_modal(&mut self, bookmark: BookmarkView) {
        self.modal = Some(Modal::EditBookmark(bookmark));
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// 열린 모달에 맞춰 북마크를 생성하거나 수정합니다.
    ///
    /// 폼 검증에 실패하면 요청을 보내지 않고 필드별 메시지를 돌려줍니다.
    /// 서버 에러는 토스트로 표시하고 모달은 열어 둡니다.
    pub async fn submit_bookmark(&mut self, form: &BookmarkForm) -> Result<(), FormErrors> {
        form.validate()?;

        let editing = match &self.modal {
            Some(Modal::EditBookmark(view)) => Some(view.bookmark.id),
            _ => None,
        };

        let result = match editing {
            Some(id) => {
                let req = UpdateBookmarkRequest {
                    title: Some(form.title.clone()),
                    url: Some(form.url.clone()),
                    description: Some(Some(form.description.clone())),
                    category_id: Some(form.category()),
                };
                self.api.update_bookmark(id, &req).await
            }
            None => {
                let req = CreateBookmarkRequest {
                    title: Some(form.title.clone()),
                    url: Some(form.url.clone()),
                    description: Some(form.description.clone()),
                    category_id: form.category(),
                };
                self.api.create_bookmark(&req).await
            }
        };

        let (failure, success) = if editing.is_some() {
            ("Failed to update bookmark", "Bookmark updated successfully!")
        } else {
            ("Failed to add bookmark", "Bookmark added successfully!")
        };

        match result {
            Ok(_) => {
                self.fetch_bookmarks().await;
                self.fetch_categories().await;
                self.modal = None;
                self.show_success(success);
            }
            Err(e) => self.show_api_error(&e, failure),
        }
        Ok(())
    }

    /// 사이드바에서 새 카테고리를 추가합니다. 공백뿐인 이름은 무시합니다.
    pub async fn add_category(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let req = CreateCategoryRequest {
            name: Some(name.to_string()),
        };
        match self.api.create_category(&req).await {
            Ok(_) => {
                self.fetch_categories().await;
                self.show_success("Category added successfully!");
            }
            Err(e) => self.show_api_error(&e, "Failed to add category"),
        }
    }

    pub fn request_delete_bookmark(&mut self, id: i64) {
        self.confirm = Some(ConfirmDialog {
            title: "Delete Bookmark".to_string(),
            message: "Are you sure you want to delete this bookmark? This action cannot be undone."
                .to_string(),
            action: PendingAction::DeleteBookmark(id),
        });
    }

    pub fn request_delete_category(&mut self, id: i64) {
        self.confirm = Some(ConfirmDialog {
            title: "Delete Category".to_string(),
            message: "Are you sure you want to delete this category? Its bookmarks will become uncategorized."
                .to_string(),
            action: PendingAction::DeleteCategory(id),
        });
    }

    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
    }

    /// 확인창의 작업을 실행합니다. 확인창이 없으면 아무것도 하지 않습니다.
    pub async fn confirm(&mut self) {
        let Some(dialog) = self.confirm.take() else {
            return;
        };

        match dialog.action {
            PendingAction::DeleteBookmark(id) => match self.api.delete_bookmark(id).await {
                Ok(()) => {
                    self.fetch_bookmarks().await;
                    self.fetch_categories().await;
                    self.show_success("Bookmark deleted successfully!");
                }
                Err(e) => {
                    tracing::warn!("Error deleting bookmark {}: {}", id, e);
                    self.show_error("Failed to delete bookmark");
                }
            },
            PendingAction::DeleteCategory(id) => match self.api.delete_category(id).await {
                Ok(()) => {
                    if self.selected_category == Some(id) {
                        self.selected_category = None;
                    }
                    self.fetch_categories().await;
                    self.fetch_bookmarks().await;
                    self.show_success("Category deleted successfully!");
                }
                Err(e) => {
                    tracing::warn!("Error deleting category {}: {}", id, e);
                    self.show_error("Failed to delete category");
                }
            },
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    fn show_success(&mut self, message: &str) {
        self.toast = Some(Toast {
            message: message.to_string(),
            kind: ToastKind::Success,
        });
    }

    fn show_error(&mut self, message: &str) {
        self.toast = Some(Toast {
            message: message.to_string(),
            kind: ToastKind::Error,
        });
    }

    /// 서버 메시지가 있으면 그것을, 없으면 `fallback`을 에러 토스트로 표시합니다.
    fn show_api_error(&mut self, error: &ClientError, fallback: &str) {
        tracing::warn!("{}: {}", fallback, error);
        let message = error.server_message().unwrap_or(fallback).to_string();
        self.show_error(&message);
    }
}
