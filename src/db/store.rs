//! # 저장소(Store) 모듈
//!
//! 북마크 문서(`Library`) 전체를 읽고 쓰는 저장소 추상화입니다.
//!
//! ## 백엔드
//! - `JsonFileStore`: JSON 파일 하나에 문서를 통째로 저장 (기본값)
//! - `SqliteStore`: SQLite 테이블 한 행에 문서를 JSON으로 저장 (`DATABASE_URL` 설정 시)
//!
//! ## 읽기-수정-쓰기 직렬화
//! 모든 변경은 `Store::update()`를 거칩니다. 이 함수는 비동기 Mutex를 잡은 상태로
//! 문서를 읽고, 클로저로 수정하고, 다시 씁니다. 동시에 들어온 두 요청이
//! 같은 문서를 읽고 서로의 변경을 덮어쓰는 일(lost update)이 생기지 않습니다.
//!
//! ## 읽기 실패
//! 파일이 없거나 깨져 있으면 빈 문서(`{bookmarks: [], categories: []}`)로 취급합니다.
//! 쓰기 실패는 그대로 에러로 전파되어 HTTP 500이 됩니다.

use crate::error::AppError;
use crate::models::{now_timestamp, Library};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

/// SQLite 백엔드에서 문서를 저장하는 행의 이름
const DOCUMENT_NAME: &str = "default";

/// JSON 파일 하나에 문서를 저장하는 백엔드
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 파일 전체를 읽어 문서로 파싱합니다. 실패하면 빈 문서를 반환합니다.
    pub async fn load(&self) -> Library {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Data file {} not found, starting empty", self.path.display());
                return Library::default();
            }
            Err(e) => {
                tracing::warn!("Error reading data file {}: {}", self.path.display(), e);
                return Library::default();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!("Error parsing data file {}: {}", self.path.display(), e);
            Library::default()
        })
    }

    /// 문서 전체를 2칸 들여쓰기 JSON으로 덮어씁니다.
    ///
    /// 같은 디렉토리의 임시 파일에 먼저 쓰고 `rename`으로 교체하므로,
    /// 쓰는 도중 프로세스가 죽어도 데이터 파일이 잘린 채로 남지 않습니다.
    pub async fn save(&self, library: &Library) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let body = serde_json::to_string_pretty(library)?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, body).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    /// `data.json` → `data.json.tmp`
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

/// SQLite `library_documents` 테이블의 한 행에 문서를 저장하는 백엔드
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// 데이터베이스에 연결하고 마이그레이션을 실행합니다.
    ///
    /// `sqlite::memory:`는 연결마다 별도의 DB가 생기므로 연결 수를 1로 제한합니다.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn load(&self) -> Library {
        let row: Result<Option<(String,)>, sqlx::Error> =
            sqlx::query_as("SELECT body FROM library_documents WHERE name = ?")
                .bind(DOCUMENT_NAME)
                .fetch_optional(&self.pool)
                .await;

        match row {
            Ok(Some((body,))) => serde_json::from_str(&body).unwrap_or_else(|e| {
                tracing::warn!("Error parsing stored library document: {}", e);
                Library::default()
            }),
            Ok(None) => Library::default(),
            Err(e) => {
                tracing::warn!("Error reading library document: {}", e);
                Library::default()
            }
        }
    }

    pub async fn save(&self, library: &Library) -> Result<(), AppError> {
        let body = serde_json::to_string(library)?;
        sqlx::query(
            r#"
            INSERT INTO library_documents (name, body, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(name) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at
            "#,
        )
        .bind(DOCUMENT_NAME)
        .bind(body)
        .bind(now_timestamp())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// 저장 백엔드 종류
#[derive(Debug, Clone)]
pub enum Backend {
    Json(JsonFileStore),
    Sqlite(SqliteStore),
}

impl Backend {
    async fn load(&self) -> Library {
        match self {
            Backend::Json(store) => store.load().await,
            Backend::Sqlite(store) => store.load().await,
        }
    }

    async fn save(&self, library: &Library) -> Result<(), AppError> {
        match self {
            Backend::Json(store) => store.save(library).await,
            Backend::Sqlite(store) => store.save(library).await,
        }
    }
}

/// 핸들러들이 공유하는 저장소 핸들
///
/// `Clone`해도 같은 백엔드와 같은 잠금을 가리킵니다 (내부가 Arc).
#[derive(Debug, Clone)]
pub struct Store {
    backend: Arc<Backend>,
    lock: Arc<Mutex<()>>,
}

impl Store {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend: Arc::new(backend),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// JSON 파일 백엔드로 저장소를 만듭니다.
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Backend::Json(JsonFileStore::new(path)))
    }

    /// SQLite 백엔드로 저장소를 만듭니다.
    pub async fn sqlite(database_url: &str) -> Result<Self, AppError> {
        Ok(Self::new(Backend::Sqlite(SqliteStore::connect(database_url).await?)))
    }

    /// 현재 문서의 스냅샷을 읽습니다.
    ///
    /// 진행 중인 `update()`가 있으면 끝날 때까지 기다리므로
    /// 반쯤 쓰인 파일을 읽지 않습니다.
    pub async fn read(&self) -> Library {
        let _guard = self.lock.lock().await;
        self.backend.load().await
    }

    /// 잠금을 잡은 채로 문서를 읽고, `apply`로 수정하고, 다시 씁니다.
    ///
    /// `apply`가 에러를 반환하면 문서는 저장되지 않습니다.
    pub async fn update<T, F>(&self, apply: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Library) -> Result<T, AppError>,
    {
        let _guard = self.lock.lock().await;
        let mut library = self.backend.load().await;
        let output = apply(&mut library)?;
        self.backend.save(&library).await?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn sample_category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            created_at: now_timestamp(),
        }
    }

    #[tokio::test]
    async fn json_store_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json"));
        assert_eq!(store.load().await, Library::default());
    }

    #[tokio::test]
    async fn json_store_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert_eq!(store.load().await, Library::default());
    }

    #[tokio::test]
    async fn json_store_writes_both_top_level_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data.json");
        let store = JsonFileStore::new(&path);

        let library = Library {
            categories: vec![sample_category(1, "Work")],
            ..Default::default()
        };
        store.save(&library).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw["bookmarks"].as_array().unwrap().is_empty());
        assert_eq!(raw["categories"][0]["name"], "Work");
        assert_eq!(store.load().await, library);
    }

    #[tokio::test]
    async fn json_store_replaces_the_file_without_leaving_a_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{ \"bookmarks\": [], \"categories\": [] }").unwrap();
        let store = JsonFileStore::new(&path);

        let library = Library {
            categories: vec![sample_category(1, "Work")],
            ..Default::default()
        };
        store.save(&library).await.unwrap();

        assert_eq!(store.load().await, library);
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("data.json")]);
    }

    #[tokio::test]
    async fn failed_update_does_not_persist() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::json_file(dir.path().join("data.json"));

        let result: Result<(), AppError> = store
            .update(|library| {
                library.categories.push(sample_category(1, "Work"));
                Err(AppError::BadRequest("nope".into()))
            })
            .await;
        assert!(result.is_err());
        assert!(store.read().await.categories.is_empty());
    }

    #[tokio::test]
    async fn concurrent_updates_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::json_file(dir.path().join("data.json"));

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .update(|library| {
                        let id = library.next_category_id();
                        library.categories.push(sample_category(id, &format!("c{i}")));
                        Ok(id)
                    })
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let library = store.read().await;
        let mut ids: Vec<i64> = library.categories.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn sqlite_store_round_trips_the_document() {
        let store = Store::sqlite("sqlite::memory:").await.unwrap();
        assert_eq!(store.read().await, Library::default());

        store
            .update(|library| {
                library.categories.push(sample_category(1, "Reading"));
                Ok(())
            })
            .await
            .unwrap();
        store
            .update(|library| {
                library.categories.push(sample_category(2, "Tools"));
                Ok(())
            })
            .await
            .unwrap();

        let names: Vec<String> = store
            .read()
            .await
            .categories
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Reading", "Tools"]);
    }
}
