//! 사용자명 사용 가능 여부 핸들러
//!
//! `GET /api/username-availability?username=johndoe123`
//!
//! 쿼리 값의 앞뒤 공백을 제거한 뒤 조회합니다. 파라미터가 없으면 빈 문자열로 취급합니다.

use actix_web::{get, web, HttpResponse};
use log::warn;
use serde::Deserialize;
use crate::domain::dto::users::response::{ErrorEnvelope, UsernameAvailabilityResponse};
use crate::services::users::RegistrationService;

pub const USERNAME_LOOKUP_FAILED_MESSAGE: &str = "Failed to verify username";

#[derive(Debug, Deserialize)]
pub struct UsernameQuery {
    #[serde(default)]
    pub username: String,
}

#[get("/username-availability")]
pub async fn username_availability(
    service: web::Data<RegistrationService>,
    query: web::Query<UsernameQuery>,
) -> HttpResponse {
    let username = query.username.trim();

    match service.check_username_available(username).await {
        Ok(available) => HttpResponse::Ok().json(UsernameAvailabilityResponse {
            username: username.to_string(),
            available,
        }),
        Err(e) => {
            warn!("사용자명 조회 실패: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorEnvelope::internal(USERNAME_LOOKUP_FAILED_MESSAGE))
        }
    }
}
