//! # Domain Layer Module
//!
//! 회원가입 도메인의 데이터 구조를 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장되는 사용자 (User, NewUser)
//! ├── DTOs          - 요청/응답 (RegistrationRequest, ErrorEnvelope ...)
//! └── Models        - 검증 단계 간 값 객체 (FieldErrorSet)
//!      │
//!      ▼
//! Application Layer (Services: validation chain, registration)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
