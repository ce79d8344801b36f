//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소, 서버, 환경, 비밀번호 해싱, CORS 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 누락되거나 잘못된 값은 기본값으로 대체됩니다.

use std::env;
use log::warn;

/// 애플리케이션 실행 환경
///
/// `ENVIRONMENT` 환경 변수로 결정되며, bcrypt cost 같은
/// 환경 의존 기본값을 고르는 데 사용됩니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 반환합니다.
    ///
    /// 값이 없거나 알 수 없는 값이면 가장 보수적인 `Production`으로 간주합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string());
        Self::from_str(&raw)
    }

    /// 문자열에서 실행 환경을 파싱합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
///
/// bcrypt cost는 프로세스 단위로 한 번 결정되며, 요청마다 바꿀 수 없습니다.
pub struct PasswordConfig;

impl PasswordConfig {
    /// 허용되는 bcrypt cost 범위
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 15;

    /// 환경별 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 숫자면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        match env::var("BCRYPT_COST") {
            Ok(raw) => Self::parse_cost(&raw).unwrap_or_else(|| {
                warn!("BCRYPT_COST 값이 유효하지 않습니다: {}. 환경 기본값 사용", raw);
                Self::bcrypt_cost_for_env(&Environment::current())
            }),
            Err(_) => Self::bcrypt_cost_for_env(&Environment::current()),
        }
    }

    fn parse_cost(raw: &str) -> Option<u32> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 바인딩 포트. `PORT`, `SERVER_PORT` 순서로 확인합니다 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .or_else(|_| env::var("SERVER_PORT"))
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .filter(|workers: &usize| *workers > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// MongoDB `users` 컬렉션 (기본값)
    MongoDb,
    /// 프로세스 메모리. 로컬 실행 및 데모용이며 재시작 시 데이터가 사라집니다.
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "in_memory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }
}

/// 데이터베이스 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub mongodb_uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    /// 환경 변수에서 데이터베이스 설정을 읽습니다.
    ///
    /// - `STORAGE_BACKEND`: `mongodb` (기본값) 또는 `memory`
    /// - `MONGODB_URI`: 기본값 `mongodb://localhost:27017`
    /// - `DATABASE_NAME`: 기본값 `registration_dev`
    pub fn from_env() -> Self {
        Self {
            backend: env::var("STORAGE_BACKEND")
                .map(|raw| StorageBackend::from_str(&raw))
                .unwrap_or(StorageBackend::MongoDb),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "registration_dev".to_string()),
        }
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
    ];

    /// 허용할 Origin 목록. `CORS_ALLOWED_ORIGINS`에 쉼표로 구분해 지정합니다.
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => Self::parse_origins(&raw),
            Err(_) => Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
