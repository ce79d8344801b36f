//! # Configuration Module
//!
//! 회원가입 백엔드의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 서버, 환경, 비밀번호 해싱, CORS 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, Environment, ServerConfig};
//!
//! let env = Environment::current();
//! let database = DatabaseConfig::from_env();
//! println!("{:?} / {:?} -> {}", env, database.backend, ServerConfig::bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"            # SERVER_PORT도 인식
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongodb"   # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="registration_dev"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
//! ```

pub mod data_config;

pub use data_config::*;
