//! # REST API 클라이언트
//!
//! `BookmarkApi` 트레이트는 컨트롤러가 필요로 하는 API 호출을 정의합니다.
//! 실제 구현(`ApiClient`)은 reqwest로 HTTP 요청을 보내고,
//! 테스트에서는 저장소를 직접 호출하는 가짜 구현으로 바꿔 끼울 수 있습니다.

use crate::config::ClientConfig;
use crate::models::*;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// 클라이언트 쪽 에러
#[derive(Debug, Error)]
pub enum ClientError {
    /// 연결 실패, 응답 파싱 실패 등
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 서버가 에러 상태 코드를 반환함. `message`는 응답 본문의 `error` 값
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// 서버가 보낸 에러 메시지 (있으면)
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// 컨트롤러가 사용하는 API 호출 목록
#[allow(async_fn_in_trait)]
pub trait BookmarkApi {
    async fn list_bookmarks(&self, query: &BookmarkQuery)
        -> Result<Vec<BookmarkView>, ClientError>;
    async fn create_bookmark(&self, req: &CreateBookmarkRequest) -> Result<Bookmark, ClientError>;
    async fn update_bookmark(
        &self,
        id: i64,
        req: &UpdateBookmarkRequest,
    ) -> Result<Bookmark, ClientError>;
    async fn delete_bookmark(&self, id: i64) -> Result<(), ClientError>;
    async fn list_categories(&self) -> Result<Vec<CategoryWithCount>, ClientError>;
    async fn create_category(&self, req: &CreateCategoryRequest) -> Result<Category, ClientError>;
    async fn delete_category(&self, id: i64) -> Result<(), ClientError>;
}

#[derive(Deserialize)]
struct BookmarksEnvelope {
    bookmarks: Vec<BookmarkView>,
}

#[derive(Deserialize)]
struct CategoriesEnvelope {
    categories: Vec<CategoryWithCount>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// reqwest 기반 `BookmarkApi` 구현
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 성공 응답이면 본문을 `T`로 파싱하고, 아니면 `error` 메시지를 담은 에러로 바꿉니다.
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let response = Self::check(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // 본문이 JSON이 아니면 메시지 없이 상태 코드만 전달
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| default_message(status));
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn default_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}

impl BookmarkApi for ApiClient {
    async fn list_bookmarks(
        &self,
        query: &BookmarkQuery,
    ) -> Result<Vec<BookmarkView>, ClientError> {
        let response = self
            .http
            .get(self.url("/bookmarks"))
            .query(query)
            .send()
            .await?;
        Ok(Self::parse::<BookmarksEnvelope>(response).await?.bookmarks)
    }

    async fn create_bookmark(&self, req: &CreateBookmarkRequest) -> Result<Bookmark, ClientError> {
        let response = self.http.post(self.url("/bookmarks")).json(req).send().await?;
        Self::parse(response).await
    }

    async fn update_bookmark(
        &self,
        id: i64,
        req: &UpdateBookmarkRequest,
    ) -> Result<Bookmark, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/bookmarks/{id}")))
            .json(req)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn delete_bookmark(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/bookmarks/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<CategoryWithCount>, ClientError> {
        let response = self.http.get(self.url("/categories")).send().await?;
        Ok(Self::parse::<CategoriesEnvelope>(response).await?.categories)
    }

    async fn create_category(&self, req: &CreateCategoryRequest) -> Result<Category, ClientError> {
        let response = self.http.post(self.url("/categories")).json(req).send().await?;
        Self::parse(response).await
    }

    async fn delete_category(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/categories/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
