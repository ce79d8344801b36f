//! # 사용자 관련 응답 DTO 모듈
//!
//! 회원가입 API가 클라이언트에게 돌려주는 응답 구조를 정의합니다.
//!
//! - [`RegistrationResponse`] - 회원가입 성공 (`user_id`, `message`)
//! - [`UsernameAvailabilityResponse`] - 사용자명 사용 가능 여부
//! - [`ErrorEnvelope`] - 모든 실패 응답의 공통 봉투
//!
//! 비밀번호 해시 등 저장 전용 값은 어떤 응답에도 포함되지 않습니다.

pub mod registration_response;
pub mod error_response;

pub use registration_response::{RegistrationResponse, UsernameAvailabilityResponse};
pub use error_response::{
    ErrorBody, ErrorEnvelope, BUSINESS_ERROR_CODE, INTERNAL_ERROR_CODE, VALIDATION_ERROR_CODE,
};
