//! # 회원가입 서비스
//!
//! 검증 체인을 통과한 요청만 저장합니다.
//!
//! ```text
//! RegistrationRequest
//!        │
//!        ▼
//! ValidationChain ── Syntactic (400) / Business (422) / Internal (500)
//!        │
//!        ▼
//! PasswordHasher (bcrypt) ── 실패 시 Internal
//!        │
//!        ▼
//! IdGenerator (UUID v4) → UserStore::create_user ── 실패 시 Internal
//!        │
//!        ▼
//!     Uuid
//! ```
//!
//! 저장 직전에 다른 요청이 같은 이메일/사용자명을 먼저 저장하면
//! 저장소의 유니크 인덱스가 거부하고, 이 경우 재검증 없이 `Internal`로 보고합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let service = RegistrationService::new(store);
//!
//! match service.register(&request).await {
//!     Ok(user_id) => println!("가입 완료: {}", user_id),
//!     Err(RegistrationError::Business(fields)) => println!("이미 사용 중: {:?}", fields),
//!     Err(e) => println!("실패: {}", e),
//! }
//! ```

use std::sync::Arc;
use std::time::Instant;
use log::{debug, info, warn};
use uuid::Uuid;
use crate::core::errors::{AppError, RegistrationError};
use crate::domain::dto::users::request::RegistrationRequest;
use crate::domain::entities::users::NewUser;
use crate::repositories::users::UserStore;
use crate::services::validation::rules::meets_username_length;
use crate::services::validation::ValidationChain;
use super::id_generator::{IdGenerator, UuidGenerator};
use super::password_hasher::{BcryptPasswordHasher, PasswordHasher};

#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    ids: Arc<dyn IdGenerator>,
    chain: ValidationChain,
}

impl RegistrationService {
    /// bcrypt(환경별 cost)와 UUID v4 생성기를 사용하는 기본 구성
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self::with_components(
            store,
            Arc::new(BcryptPasswordHasher::new()),
            Arc::new(UuidGenerator),
        )
    }

    pub fn with_components(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            chain: ValidationChain::new(store.clone()),
            store,
            hasher,
            ids,
        }
    }

    /// 요청을 검증하고 새 사용자를 저장합니다.
    ///
    /// 성공하면 새로 발급한 사용자 식별자를 반환합니다.
    /// 검증을 모두 통과하기 전에는 아무것도 저장하지 않습니다.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<Uuid, RegistrationError> {
        let start_time = Instant::now();

        self.chain.run(request).await?;

        let password_hash = self.hasher.hash(&request.password).map_err(|e| {
            warn!("비밀번호 해싱 실패: {}", e);
            RegistrationError::from(e)
        })?;

        let new_user = NewUser::from_request(self.ids.generate(), request, password_hash);

        let user_id = self.store.create_user(new_user).await.map_err(|e| {
            warn!("사용자 저장 실패: {}", e);
            RegistrationError::from(e)
        })?;

        info!("새 사용자 가입 완료: {} ({})", user_id, request.username);
        debug!("Total registration took: {:?}", start_time.elapsed());

        Ok(user_id)
    }

    /// 사용자명 사용 가능 여부
    ///
    /// 6자 미만이면 저장소를 조회하지 않고 `false`를 반환합니다.
    /// 길이는 입력 그대로 문자 단위로 셉니다. 공백 제거는 호출하는 쪽의 몫입니다.
    pub async fn check_username_available(&self, username: &str) -> Result<bool, AppError> {
        if !meets_username_length(username) {
            return Ok(false);
        }

        let taken = self.store.exists_by_username(username).await?;
        Ok(!taken)
    }

    /// 저장소 연결 상태
    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserStore;
    use crate::test_support::{test_service, valid_request, CountingUserStore, FailingUserStore};

    #[actix_web::test]
    async fn test_register_returns_new_id_and_stores_hash() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = test_service(store.clone());
        let request = valid_request();

        let user_id = service.register(&request).await.unwrap();
        let user = store.get(&user_id).expect("stored user");

        assert_eq!(user.id, user_id.to_string());
        assert_eq!(user.email, request.email);
        assert_ne!(user.password_hash, request.password);
        assert!(bcrypt::verify(&request.password, &user.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_second_registration_with_same_email_is_business_failure() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = test_service(store.clone());

        let first = valid_request();
        assert!(service.register(&first).await.is_ok());

        let mut second = valid_request();
        second.username = "anotheruser".to_string();
        second.phone = None;

        match service.register(&second).await {
            Err(RegistrationError::Business(errors)) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email"]);
            }
            other => panic!("Expected Business, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_second_registration_with_same_username_is_business_failure() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = test_service(store.clone());

        assert!(service.register(&valid_request()).await.is_ok());

        let mut second = valid_request();
        second.email = "jane.roe@example.us".to_string();
        second.phone = Some("+12015550124".to_string());

        match service.register(&second).await {
            Err(RegistrationError::Business(errors)) => {
                assert!(errors.contains("username"));
                assert!(!errors.contains("email"));
            }
            other => panic!("Expected Business, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_email_differing_in_case_or_padding_is_taken() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = test_service(store.clone());

        assert!(service.register(&valid_request()).await.is_ok());

        let mut second = valid_request();
        second.email = "  John.Doe@EXAMPLE.us ".to_string();
        second.username = "anotheruser".to_string();
        second.phone = None;

        match service.register(&second).await {
            Err(RegistrationError::Business(errors)) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email"]);
            }
            other => panic!("Expected Business, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_phone_without_plus_matches_stored_number() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = test_service(store.clone());

        let id = service.register(&valid_request()).await.unwrap();
        assert_eq!(store.get(&id).unwrap().phone.as_deref(), Some("+12015550123"));

        let mut second = valid_request();
        second.email = "jane.roe@example.us".to_string();
        second.username = "janeroe123".to_string();
        second.phone = Some("12015550123".to_string());

        match service.register(&second).await {
            Err(RegistrationError::Business(errors)) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["phone"]);
            }
            other => panic!("Expected Business, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_hashing_failure_is_internal_and_not_persisted() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = RegistrationService::with_components(
            store.clone(),
            Arc::new(BcryptPasswordHasher::with_cost(99)),
            Arc::new(UuidGenerator),
        );

        assert!(matches!(
            service.register(&valid_request()).await,
            Err(RegistrationError::Internal(_))
        ));
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_invalid_request_is_not_persisted() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = test_service(store.clone());

        let mut request = valid_request();
        request.password = "weak".to_string();
        request.confirm_password = "weak".to_string();

        assert!(matches!(
            service.register(&request).await,
            Err(RegistrationError::Syntactic(_))
        ));
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_lookup_fault_is_internal() {
        let service = test_service(Arc::new(FailingUserStore));

        assert!(matches!(
            service.register(&valid_request()).await,
            Err(RegistrationError::Internal(_))
        ));
    }

    #[actix_web::test]
    async fn test_create_conflict_after_validation_is_internal() {
        let store = Arc::new(CountingUserStore::failing_create());
        let service = test_service(store.clone());

        assert!(matches!(
            service.register(&valid_request()).await,
            Err(RegistrationError::Internal(_))
        ));
        assert_eq!(store.creates(), 1);
    }

    #[actix_web::test]
    async fn test_short_username_is_unavailable_without_lookup() {
        let store = Arc::new(CountingUserStore::new());
        let service = test_service(store.clone());

        assert!(!service.check_username_available("short").await.unwrap());
        assert_eq!(store.lookups(), 0);
    }

    #[actix_web::test]
    async fn test_username_length_is_not_trimmed() {
        let store = Arc::new(CountingUserStore::new());
        let service = test_service(store.clone());

        assert!(!service.check_username_available("abcde").await.unwrap());
        assert!(service.check_username_available(" abcde").await.unwrap());
        assert_eq!(store.lookups(), 1);
    }

    #[actix_web::test]
    async fn test_username_availability() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = test_service(store);

        assert!(service.check_username_available("availableuser").await.unwrap());

        service.register(&valid_request()).await.unwrap();
        assert!(!service.check_username_available("johndoe123").await.unwrap());
    }

    #[actix_web::test]
    async fn test_username_lookup_fault_is_error() {
        let service = test_service(Arc::new(FailingUserStore));

        assert!(service.check_username_available("availableuser").await.is_err());
    }
}
