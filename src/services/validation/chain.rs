//! 검증 체인
//!
//! 1. 필드 검증기와 교차 필드 검증기를 모두 실행하고 결과를 합칩니다.
//! 2. 하나라도 에러가 있으면 `Syntactic`으로 끝냅니다. 비즈니스 검증은 실행하지 않습니다.
//! 3. 비즈니스 검증기가 저장소 조회에 실패하면 `Internal`, 충돌이 있으면 `Business`
//!
//! 두 필드 단계가 같은 키(`email`)를 보고하면 필드 검증기의 메시지가 남습니다.

use std::sync::Arc;
use log::{debug, warn};
use crate::core::errors::RegistrationError;
use crate::domain::dto::users::request::RegistrationRequest;
use crate::repositories::users::UserStore;
use super::{BusinessValidator, CrossFieldValidator, FieldValidator};

#[derive(Clone)]
pub struct ValidationChain {
    field: FieldValidator,
    cross_field: CrossFieldValidator,
    business: BusinessValidator,
}

impl ValidationChain {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            field: FieldValidator,
            cross_field: CrossFieldValidator,
            business: BusinessValidator::new(store),
        }
    }

    pub async fn run(&self, request: &RegistrationRequest) -> Result<(), RegistrationError> {
        let mut errors = self.field.validate(request);
        errors.merge(self.cross_field.validate(request));

        if !errors.is_empty() {
            debug!("필드 검증 실패: {:?}", errors.fields().collect::<Vec<_>>());
            return Err(RegistrationError::Syntactic(errors));
        }

        let conflicts = self.business.validate(request).await.map_err(|e| {
            warn!("유일성 조회 실패: {}", e);
            RegistrationError::from(e)
        })?;

        if !conflicts.is_empty() {
            debug!("비즈니스 검증 실패: {:?}", conflicts.fields().collect::<Vec<_>>());
            return Err(RegistrationError::Business(conflicts));
        }

        Ok(())
    }
}
