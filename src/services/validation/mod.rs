//! # Validation Module
//!
//! 회원가입 요청을 세 단계로 검증합니다.
//!
//! | 단계 | 타입 | I/O | 실패 시 |
//! |------|------|-----|---------|
//! | 필드 | [`FieldValidator`] | 없음 | 400 `validation_error` |
//! | 교차 필드 | [`CrossFieldValidator`] | 없음 | 400 `validation_error` |
//! | 비즈니스 | [`BusinessValidator`] | 저장소 조회 | 422 `business_error` |
//!
//! 단계 순서와 에러 병합 규칙은 [`ValidationChain`]이 정합니다.

pub mod business_validator;
pub mod chain;
pub mod country_domains;
pub mod cross_field_validator;
pub mod field_validator;
pub mod rules;

pub use business_validator::*;
pub use chain::ValidationChain;
pub use cross_field_validator::*;
pub use field_validator::*;
