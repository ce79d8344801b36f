//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션 기반 [`UserStore`] 구현입니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 옵션 |
//! |------|----|------|
//! | `email_unique` | `email` | unique |
//! | `username_unique` | `username` | unique |
//! | `phone_unique` | `phone` | unique, 문자열 값이 있는 문서만 (partial) |
//!
//! 애플리케이션의 존재 확인과 실제 저장 사이에 다른 요청이 끼어들 수 있으므로,
//! 최종 유일성은 이 인덱스가 보장합니다. 인덱스 위반은 `ConflictError`로 돌려줍니다.

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::{doc, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use uuid::Uuid;
use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::entities::users::{NewUser, User};
use super::store::UserStore;

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.get_database().collection::<T>(COLLECTION_NAME)
    }

    /// 필터와 일치하는 문서가 있는지 확인합니다. `_id`만 읽어옵니다.
    async fn exists(&self, filter: Document) -> Result<bool, AppError> {
        let found = self
            .collection::<Document>()
            .find_one(filter)
            .projection(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    /// 유니크 인덱스 생성
    ///
    /// 서버 시작 시 한 번 호출합니다. 이미 같은 인덱스가 있으면 MongoDB가 무시합니다.
    /// 기존 데이터에 중복이 있으면 실패합니다.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        // 전화번호는 선택 항목이므로 값이 있는 문서에만 유일성 적용
        let phone_index = IndexModel::builder()
            .keys(doc! { "phone": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("phone_unique".to_string())
                .partial_filter_expression(doc! { "phone": { "$type": "string" } })
                .build())
            .build();

        self.collection::<User>()
            .create_indexes([email_index, username_index, phone_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ users 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserStore for UserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        self.exists(doc! { "email": email }).await
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        self.exists(doc! { "username": username }).await
    }

    async fn exists_by_phone(&self, phone: &str) -> Result<bool, AppError> {
        self.exists(doc! { "phone": phone }).await
    }

    async fn create_user(&self, user: NewUser) -> Result<Uuid, AppError> {
        let id = user.id;
        let document = User::new_local(user);

        self.collection::<User>()
            .insert_one(&document)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(e.to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        debug!("users 문서 저장 완료: {}", id);
        Ok(id)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.ping().await
    }
}
