//! # 회원가입 핸들러
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/register` | 회원가입 | 201 / 400 / 422 / 500 |
//!
//! 잘못된 JSON 본문은 [`json_config`]의 에러 핸들러가 400 `validation_error`로 바꿉니다.

use actix_web::{error::InternalError, post, web, HttpResponse};
use log::debug;
use crate::core::errors::RegistrationError;
use crate::domain::dto::users::request::RegistrationRequest;
use crate::domain::dto::users::response::{ErrorEnvelope, RegistrationResponse};
use crate::domain::models::FieldErrorSet;
use crate::services::users::RegistrationService;

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON payload";

/// JSON 본문 추출 설정
///
/// 파싱 실패를 표준 에러 봉투로 응답합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("JSON 본문 파싱 실패: {}", err);
        let response = HttpResponse::BadRequest()
            .json(ErrorEnvelope::validation(INVALID_JSON_MESSAGE, FieldErrorSet::new()));
        InternalError::from_response(err, response).into()
    })
}

/// 회원가입
///
/// ```bash
/// curl -X POST http://localhost:8080/api/register \
///   -H "Content-Type: application/json" \
///   -d '{"first_name":"John","last_name":"Doe","email":"john.doe@example.us", ...}'
/// ```
///
/// 성공 응답 (201):
/// ```json
/// { "user_id": "6f1c...", "message": "Registration successful" }
/// ```
#[post("/register")]
pub async fn register(
    service: web::Data<RegistrationService>,
    payload: web::Json<RegistrationRequest>,
) -> Result<HttpResponse, RegistrationError> {
    let user_id = service.register(&payload).await?;

    Ok(HttpResponse::Created().json(RegistrationResponse::created(user_id)))
}
