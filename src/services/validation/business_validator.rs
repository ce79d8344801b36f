//! 비즈니스(유일성) 검증기
//!
//! 저장소에 이미 같은 이메일, 사용자명, 전화번호가 있는지 확인합니다.
//! 조회 자체가 실패하면 필드 에러로 합치지 않고 `AppError`로 즉시 반환합니다.
//!
//! 여기서의 존재 확인은 안내용입니다. 동시 가입 경쟁은 저장소의 유니크 인덱스가 막습니다.

use std::sync::Arc;
use futures_util::try_join;
use log::debug;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::RegistrationRequest;
use crate::domain::models::FieldErrorSet;
use crate::repositories::users::UserStore;

pub const EMAIL_TAKEN_MESSAGE: &str = "Email is already registered";
pub const USERNAME_TAKEN_MESSAGE: &str = "Username is already taken";
pub const PHONE_TAKEN_MESSAGE: &str = "Phone number is already registered";

#[derive(Clone)]
pub struct BusinessValidator {
    store: Arc<dyn UserStore>,
}

impl BusinessValidator {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 세 가지 존재 여부를 동시에 조회합니다.
    ///
    /// 이메일과 전화번호는 저장할 때와 같은 형태로 정규화해서 조회합니다.
    /// 전화번호 조회는 값이 있을 때만 수행하며, 첫 번째 실패가 전체 결과가 됩니다.
    pub async fn validate(&self, request: &RegistrationRequest) -> Result<FieldErrorSet, AppError> {
        let email = request.normalized_email();
        let phone = request.normalized_phone();

        let (email_taken, username_taken, phone_taken) = try_join!(
            self.store.exists_by_email(&email),
            self.store.exists_by_username(&request.username),
            async {
                match phone.as_deref() {
                    Some(phone) => self.store.exists_by_phone(phone).await,
                    None => Ok(false),
                }
            }
        )?;

        debug!(
            "유일성 조회 결과 - email: {}, username: {}, phone: {}",
            email_taken, username_taken, phone_taken
        );

        let mut errors = FieldErrorSet::new();
        if email_taken {
            errors.add("email", EMAIL_TAKEN_MESSAGE);
        }
        if username_taken {
            errors.add("username", USERNAME_TAKEN_MESSAGE);
        }
        if phone_taken {
            errors.add("phone", PHONE_TAKEN_MESSAGE);
        }

        Ok(errors)
    }
}
