//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 저장소, 해싱, 설정 등 인프라 계층 에러
//! - **RegistrationError**: 회원가입 결과 태그 (Syntactic / Business / Internal)
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현

pub mod errors;

pub use errors::*;
