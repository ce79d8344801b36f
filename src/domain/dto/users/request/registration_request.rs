//! # 회원가입 요청 DTO
//!
//! 회원가입 폼 전체를 표현하는 HTTP 요청 데이터 구조입니다.
//! 필드 단위 형식 규칙은 `validator` derive 속성으로 선언하고,
//! 실제 규칙 판정은 [`rules`](crate::services::validation::rules) 모듈의 순수 함수에 위임합니다.
//!
//! ## 검증 규칙 (필드 단위)
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `first_name`, `last_name`, `street`, `city`, `state`, `country` | 공백 제거 후 비어 있으면 안 됨 |
//! | `email` | 공백 제거 후 `local@domain.tld` 형태 |
//! | `phone` | 값이 있으면 국제 전화번호 형식 (선택 항목) |
//! | `username` | 최소 6자 (문자 단위, 공백 제거 없음) |
//! | `password` | 8자 이상, 대문자/소문자/숫자/특수문자 각 1개 이상 |
//! | `terms_accepted` | 반드시 `true` ([`FieldValidator`](crate::services::validation::FieldValidator)에서 확인) |
//!
//! `confirm_password`와 `country_iso`는 교차 검증에만 사용되며 저장되지 않습니다.
//!
//! ## 요청 예시
//!
//! ```json
//! {
//!   "first_name": "John",
//!   "last_name": "Doe",
//!   "email": "john.doe@example.us",
//!   "phone": "+12015550123",
//!   "street": "123 Main St",
//!   "city": "New York",
//!   "state": "NY",
//!   "country": "United States",
//!   "country_iso": "US",
//!   "username": "johndoe123",
//!   "password": "Test123!@#",
//!   "confirm_password": "Test123!@#",
//!   "terms_accepted": true,
//!   "newsletter": false
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::services::validation::rules;
use crate::utils::string_utils::is_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(custom(function = "validate_not_blank", message = "First name is required"))]
    pub first_name: String,

    #[validate(custom(function = "validate_not_blank", message = "Last name is required"))]
    pub last_name: String,

    #[validate(custom(function = "validate_email_shape", message = "Invalid email address"))]
    pub email: String,

    /// 선택 항목. `null`, 누락, 빈 문자열 모두 "없음"으로 취급합니다.
    #[serde(default)]
    #[validate(custom(function = "validate_phone_number", message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(custom(function = "validate_not_blank", message = "Street address is required"))]
    pub street: String,

    #[validate(custom(function = "validate_not_blank", message = "City is required"))]
    pub city: String,

    #[validate(custom(function = "validate_not_blank", message = "State/Province is required"))]
    pub state: String,

    #[validate(custom(function = "validate_not_blank", message = "Country is required"))]
    pub country: String,

    /// ISO 3166-1 alpha-2 국가 코드 (예: "US", "GB"). 교차 검증 전용
    #[serde(default)]
    pub country_iso: String,

    #[validate(length(min = 6, message = "Username must be at least 6 characters"))]
    pub username: String,

    #[validate(custom(
        function = "validate_password_policy",
        message = "Password must be at least 8 chars, with upper, lower, number, and special character"
    ))]
    pub password: String,

    pub confirm_password: String,

    #[serde(default)]
    pub terms_accepted: bool,

    #[serde(default)]
    pub newsletter: bool,
}

impl RegistrationRequest {
    /// E.164 형식 전화번호. 비어 있으면 `None`
    ///
    /// 중복 조회와 저장 모두 이 값을 사용합니다.
    pub fn normalized_phone(&self) -> Option<String> {
        self.phone.as_deref().and_then(rules::normalize_phone)
    }

    /// 공백을 제거하고 소문자로 바꾼 이메일
    ///
    /// 중복 조회와 저장 모두 이 값을 사용합니다.
    pub fn normalized_email(&self) -> String {
        rules::normalize_email(&self.email)
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    if !rules::is_valid_email(email) {
        return Err(ValidationError::new("invalid_email"));
    }
    Ok(())
}

/// 빈 값은 "없음"이므로 통과시킵니다.
fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if !is_blank(phone) && !rules::is_valid_phone(phone) {
        return Err(ValidationError::new("invalid_phone"));
    }
    Ok(())
}

fn validate_password_policy(password: &str) -> Result<(), ValidationError> {
    if !rules::is_strong_password(password) {
        return Err(ValidationError::new("weak_password"));
    }
    Ok(())
}
