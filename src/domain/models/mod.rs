//! # Domain Models
//!
//! 검증 파이프라인이 단계 사이에서 주고받는 값 객체를 정의합니다.

pub mod field_errors;

pub use field_errors::FieldErrorSet;
