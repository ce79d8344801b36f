//! 회원가입/사용자명 확인 성공 응답 DTO

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 회원가입 성공 응답 (201 Created)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// 새로 생성된 사용자 식별자 (UUID v4)
    pub user_id: String,
    pub message: String,
}

impl RegistrationResponse {
    pub fn created(user_id: Uuid) -> Self {
        Self {
            user_id: user_id.to_string(),
            message: "Registration successful".to_string(),
        }
    }
}

/// 사용자명 사용 가능 여부 응답 (200 OK)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsernameAvailabilityResponse {
    pub username: String,
    pub available: bool,
}
