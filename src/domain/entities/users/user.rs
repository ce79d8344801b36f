//! User Entity Implementation
//!
//! 회원가입으로 생성되는 사용자 엔티티입니다.
//! 한 번 생성된 뒤 이 서비스에서는 수정하거나 삭제하지 않습니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::dto::users::request::RegistrationRequest;

/// 저장 직전의 사용자 데이터
///
/// 검증을 통과한 요청에서 `confirm_password`와 `country_iso`를 제외하고,
/// 새로 발급한 식별자와 비밀번호 해시를 더한 값입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub username: String,
    pub password_hash: String,
    pub terms_accepted: bool,
    pub newsletter: bool,
}

impl NewUser {
    /// 검증을 통과한 요청으로부터 저장용 데이터를 만듭니다.
    ///
    /// 이메일과 전화번호는 정규화한 값을 저장하고, 빈 전화번호는 저장하지 않습니다.
    pub fn from_request(id: Uuid, request: &RegistrationRequest, password_hash: String) -> Self {
        Self {
            id,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.normalized_email(),
            phone: request.normalized_phone(),
            street: request.street.clone(),
            city: request.city.clone(),
            state: request.state.clone(),
            country: request.country.clone(),
            username: request.username.clone(),
            password_hash,
            terms_accepted: request.terms_accepted,
            newsletter: request.newsletter,
        }
    }
}

/// 사용자 엔티티 (`users` 컬렉션 문서)
///
/// `_id`에는 UUID 문자열을 저장합니다. MongoDB ObjectId는 사용하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 전화번호 (선택, 값이 있으면 unique)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    /// 사용자명 (unique)
    pub username: String,
    /// bcrypt 해시 (평문 비밀번호는 저장하지 않음)
    pub password_hash: String,
    pub terms_accepted: bool,
    pub newsletter: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 엔티티 생성
    pub fn new_local(new_user: NewUser) -> Self {
        let now = DateTime::now();

        Self {
            id: new_user.id.to_string(),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            phone: new_user.phone,
            street: new_user.street,
            city: new_user.city,
            state: new_user.state,
            country: new_user.country,
            username: new_user.username,
            password_hash: new_user.password_hash,
            terms_accepted: new_user.terms_accepted,
            newsletter: new_user.newsletter,
            created_at: now,
            updated_at: now,
        }
    }
}
