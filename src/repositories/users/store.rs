//! 사용자 저장소 추상화
//!
//! 검증 체인과 회원가입 서비스는 이 trait에만 의존합니다.
//! 운영에서는 [`UserRepository`](super::UserRepository)(MongoDB),
//! 로컬 실행과 테스트에서는 [`InMemoryUserStore`](super::InMemoryUserStore)를 사용합니다.

use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::AppError;
use crate::domain::entities::users::NewUser;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError>;

    async fn exists_by_phone(&self, phone: &str) -> Result<bool, AppError>;

    /// 새 사용자를 저장하고 식별자를 반환합니다.
    ///
    /// 유니크 제약 위반은 재검증하지 않고 에러로 돌려줍니다.
    async fn create_user(&self, user: NewUser) -> Result<Uuid, AppError>;

    /// 저장소 연결 상태 확인 (`/ready`)
    async fn ping(&self) -> Result<(), AppError>;
}
