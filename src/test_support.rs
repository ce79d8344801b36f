//! 테스트 공용 헬퍼
//!
//! 정상 요청 샘플과 장애 주입용 저장소를 제공합니다.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::RegistrationRequest;
use crate::domain::entities::users::NewUser;
use crate::repositories::users::{InMemoryUserStore, UserStore};
use crate::services::users::{BcryptPasswordHasher, RegistrationService, UuidGenerator};

/// 모든 검증을 통과하는 요청
pub fn valid_request() -> RegistrationRequest {
    RegistrationRequest {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@example.us".to_string(),
        phone: Some("+12015550123".to_string()),
        street: "123 Main St".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        country: "United States".to_string(),
        country_iso: "US".to_string(),
        username: "johndoe123".to_string(),
        password: "Test123!@#".to_string(),
        confirm_password: "Test123!@#".to_string(),
        terms_accepted: true,
        newsletter: false,
    }
}

/// 최소 bcrypt cost를 사용하는 서비스
pub fn test_service(store: Arc<dyn UserStore>) -> RegistrationService {
    RegistrationService::with_components(
        store,
        Arc::new(BcryptPasswordHasher::with_cost(4)),
        Arc::new(UuidGenerator),
    )
}

/// 모든 호출이 데이터베이스 에러로 실패하는 저장소
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn exists_by_email(&self, _email: &str) -> Result<bool, AppError> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }

    async fn exists_by_username(&self, _username: &str) -> Result<bool, AppError> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }

    async fn exists_by_phone(&self, _phone: &str) -> Result<bool, AppError> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }

    async fn create_user(&self, _user: NewUser) -> Result<Uuid, AppError> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }
}

/// 호출 횟수를 세는 메모리 저장소
///
/// `failing_create`로 만들면 조회는 성공하지만 저장은 유니크 제약 위반으로 실패합니다.
#[derive(Default)]
pub struct CountingUserStore {
    inner: InMemoryUserStore,
    identity_lookups: AtomicUsize,
    phone_lookups: AtomicUsize,
    creates: AtomicUsize,
    fail_create: bool,
}

impl CountingUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    /// 전체 존재 여부 조회 횟수
    pub fn lookups(&self) -> usize {
        self.identity_lookups.load(Ordering::SeqCst) + self.phone_lookups()
    }

    pub fn phone_lookups(&self) -> usize {
        self.phone_lookups.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for CountingUserStore {
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        self.identity_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.exists_by_email(email).await
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        self.identity_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.exists_by_username(username).await
    }

    async fn exists_by_phone(&self, phone: &str) -> Result<bool, AppError> {
        self.phone_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.exists_by_phone(phone).await
    }

    async fn create_user(&self, user: NewUser) -> Result<Uuid, AppError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_create {
            return Err(AppError::ConflictError("E11000 duplicate key error".to_string()));
        }
        self.inner.create_user(user).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.inner.ping().await
    }
}
