//! 에러 응답 DTO
//!
//! 모든 실패 응답은 같은 봉투(envelope) 구조를 사용합니다.
//!
//! ```json
//! {
//!   "error": {
//!     "code": "validation_error",
//!     "message": "There are validation errors",
//!     "field_errors": { "email": "Invalid email address" }
//!   }
//! }
//! ```
//!
//! `code`는 `validation_error`(400), `business_error`(422), `internal_error`(500/503) 중 하나이며,
//! 클라이언트는 이 값으로 "형식을 고치세요"와 "이미 사용 중입니다"를 구분합니다.

use serde::{Deserialize, Serialize};
use crate::domain::models::field_errors::FieldErrorSet;

pub const VALIDATION_ERROR_CODE: &str = "validation_error";
pub const BUSINESS_ERROR_CODE: &str = "business_error";
pub const INTERNAL_ERROR_CODE: &str = "internal_error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "FieldErrorSet::is_empty")]
    pub field_errors: FieldErrorSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: impl Into<String>, field_errors: FieldErrorSet) -> Self {
        Self {
            error: ErrorBody {
                code: code.to_string(),
                message: message.into(),
                field_errors,
            },
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: FieldErrorSet) -> Self {
        Self::new(VALIDATION_ERROR_CODE, message, field_errors)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_ERROR_CODE, message, FieldErrorSet::new())
    }
}
