//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! [`RegistrationRequest`]는 세 단계 검증을 거칩니다.
//!
//! 1. **필드 검증**: 공백, 이메일/전화번호 형식, 비밀번호 정책, 약관 동의
//! 2. **교차 필드 검증**: 비밀번호 확인 일치, 이메일 도메인과 국가 코드 일치
//! 3. **비즈니스 검증**: 이메일/사용자명/전화번호 중복 (저장소 조회)
//!
//! 1, 2단계는 이 DTO와 [`services::validation`](crate::services::validation)에서,
//! 3단계는 저장소를 가진 [`BusinessValidator`](crate::services::validation::BusinessValidator)에서 수행합니다.

pub mod registration_request;

pub use registration_request::RegistrationRequest;
