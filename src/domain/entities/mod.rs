//! # Domain Entities
//!
//! 저장소가 소유하는 핵심 도메인 엔티티입니다.
//! 엔티티는 등록 오케스트레이터가 검증을 모두 통과한 뒤에만 생성합니다.

pub mod users;

pub use users::*;
