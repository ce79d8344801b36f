//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - [`validation`]: 필드 / 교차 필드 / 유일성 검증과 검증 체인
//! - [`users`]: 회원가입 오케스트레이션, 비밀번호 해싱, 사용자명 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::RegistrationService;
//!
//! let service = RegistrationService::new(store);
//! let available = service.check_username_available("johndoe123").await?;
//! ```

pub mod users;
pub mod validation;
