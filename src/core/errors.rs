//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 두 종류의 에러 타입을 제공합니다.
//!
//! - [`AppError`]: 저장소, 해싱, 설정 등 인프라 계층의 실패
//! - [`RegistrationError`]: 회원가입 요청 하나의 최종 실패 결과.
//!   `Syntactic`(400) / `Business`(422) / `Internal`(500) 세 가지로 태그됩니다.
//!
//! 검증 단계는 필드 에러를 [`FieldErrorSet`]으로 돌려주고,
//! 인프라 실패는 `AppError`로 돌려줍니다. 체인은 `AppError`를 만나면 즉시 중단하고
//! `RegistrationError::Internal`로 변환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, RegistrationError};
//!
//! async fn register(request: RegistrationRequest) -> Result<Uuid, RegistrationError> {
//!     chain.run(&request).await?;            // Syntactic / Business / Internal
//!     let id = store.create_user(user).await?; // AppError -> Internal
//!     Ok(id)
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;
use crate::domain::dto::users::response::{
    ErrorEnvelope, BUSINESS_ERROR_CODE, INTERNAL_ERROR_CODE, VALIDATION_ERROR_CODE,
};
use crate::domain::models::field_errors::FieldErrorSet;

/// 인프라 계층 에러 타입
///
/// 클라이언트에게 직접 노출되지 않으며, 항상 서버 로그에만 상세 내용이 남습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 연결/쿼리 실패
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 저장소 유니크 제약 위반 (검증 이후 동시 가입 등)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 비밀번호 해싱 실패
    #[error("Hashing error: {0}")]
    HashingError(String),

    /// 잘못된 설정값
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 기타 내부 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

pub const SYNTACTIC_FAILURE_MESSAGE: &str = "There are validation errors";
pub const BUSINESS_FAILURE_MESSAGE: &str = "Business validation failed";
pub const INTERNAL_FAILURE_MESSAGE: &str = "Internal server error";

/// 회원가입 요청의 실패 결과
///
/// 상태 코드를 문자열 코드에서 추론하지 않고, 변형(variant) 자체가 종류를 결정합니다.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// 필드/교차 필드 규칙 위반 (400). 클라이언트가 입력을 고치면 해결됩니다.
    #[error("There are validation errors")]
    Syntactic(FieldErrorSet),

    /// 이미 사용 중인 이메일/사용자명/전화번호 (422)
    #[error("Business validation failed")]
    Business(FieldErrorSet),

    /// 저장소/해싱 실패 (500). 내부 상세는 로그에만 남깁니다.
    #[error("Internal fault: {0}")]
    Internal(String),
}

impl RegistrationError {
    /// 에러 종류 태그 (`validation_error` / `business_error` / `internal_error`)
    pub fn code(&self) -> &'static str {
        match self {
            RegistrationError::Syntactic(_) => VALIDATION_ERROR_CODE,
            RegistrationError::Business(_) => BUSINESS_ERROR_CODE,
            RegistrationError::Internal(_) => INTERNAL_ERROR_CODE,
        }
    }

    /// 필드 에러 집합. 내부 에러는 필드 에러를 갖지 않습니다.
    pub fn field_errors(&self) -> Option<&FieldErrorSet> {
        match self {
            RegistrationError::Syntactic(fields) | RegistrationError::Business(fields) => Some(fields),
            RegistrationError::Internal(_) => None,
        }
    }

    /// 클라이언트에게 보낼 응답 본문
    pub fn to_envelope(&self) -> ErrorEnvelope {
        let message = match self {
            RegistrationError::Syntactic(_) => SYNTACTIC_FAILURE_MESSAGE,
            RegistrationError::Business(_) => BUSINESS_FAILURE_MESSAGE,
            RegistrationError::Internal(_) => INTERNAL_FAILURE_MESSAGE,
        };

        ErrorEnvelope::new(
            self.code(),
            message,
            self.field_errors().cloned().unwrap_or_default(),
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorEnvelope::internal(INTERNAL_FAILURE_MESSAGE))
    }
}

impl From<AppError> for RegistrationError {
    fn from(error: AppError) -> Self {
        RegistrationError::Internal(error.to_string())
    }
}

impl actix_web::ResponseError for RegistrationError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistrationError::Syntactic(_) => StatusCode::BAD_REQUEST,
            RegistrationError::Business(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegistrationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 내부 에러의 상세 메시지는 응답에 포함하지 않습니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_envelope())
    }
}
