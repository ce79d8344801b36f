//! 사용자 관리 서비스 모듈
//!
//! # Features
//!
//! - 회원가입 (검증 체인 → 비밀번호 해싱 → 저장)
//! - 사용자명 사용 가능 여부 조회
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 이메일/사용자명/전화번호 중복 방지
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::RegistrationService;
//!
//! let service = RegistrationService::new(store);
//! let user_id = service.register(&request).await?;
//! ```

pub mod id_generator;
pub mod password_hasher;
pub mod registration_service;

pub use id_generator::{IdGenerator, UuidGenerator};
pub use password_hasher::{BcryptPasswordHasher, PasswordHasher};
pub use registration_service::RegistrationService;
