//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버와 클라이언트 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 서버 설정 항목:
//! - `HOST`: 서버 바인딩 주소 (기본값 `0.0.0.0`)
//! - `PORT`: 서버 포트 번호 (기본값 `5000`)
//! - `DATA_FILE`: JSON 데이터 파일 경로 (기본값 `data/data.json`)
//! - `DATABASE_URL`: 설정되면 JSON 파일 대신 SQLite 저장소 사용
//!   (예: `sqlite:data/bookmarks.db?mode=rwc`)
//! - `STATIC_DIR`: 빌드된 클라이언트 디렉토리 (기본값 `../client/dist`)
//!
//! 클라이언트 설정 항목:
//! - `API_URL`: REST API 기본 주소 (기본값 `http://localhost:5000/api`)

use std::env;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// 서버 설정
///
/// 서버 시작 시 환경변수에서 한 번 읽어옵니다.
/// 모든 항목에 기본값이 있으므로 실패하지 않습니다.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_file: String,
    pub database_url: Option<String>,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            // 파싱 실패 시 기본 포트 사용
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            data_file: env::var("DATA_FILE").unwrap_or_else(|_| "data/data.json".to_string()),
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "../client/dist".to_string()),
        }
    }
}

/// 클라이언트 컨트롤러 설정
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 끝에 `/`가 없는 API 기본 주소
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(api_url)
    }

    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_config_strips_trailing_slash() {
        assert_eq!(
            ClientConfig::new("http://localhost:5000/api/").api_url,
            "http://localhost:5000/api"
        );
        assert_eq!(ClientConfig::default().api_url, DEFAULT_API_URL);
    }
}
