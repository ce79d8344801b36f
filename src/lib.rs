//! 회원가입 서비스 백엔드
//!
//! 회원가입 폼을 받아 세 단계로 검증하고, 비밀번호를 해싱한 뒤 사용자를 저장합니다.
//!
//! # Features
//!
//! - **필드 검증**: 필수 값, 이메일/전화번호 형식, 비밀번호 정책, 약관 동의
//! - **교차 검증**: 비밀번호 확인, 이메일 도메인과 국가 코드 일치
//! - **유일성 검증**: 이메일, 사용자명, 전화번호 중복 확인
//! - **사용자명 조회**: 가입 전 사용자명 사용 가능 여부
//! - **MongoDB**: 유니크 인덱스로 최종 중복 방지
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 체인, 회원가입
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (MongoDB / 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use registration_service_backend::repositories::users::InMemoryUserStore;
//! use registration_service_backend::services::users::RegistrationService;
//!
//! let service = RegistrationService::new(Arc::new(InMemoryUserStore::new()));
//! let user_id = service.register(&request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod test_support;
