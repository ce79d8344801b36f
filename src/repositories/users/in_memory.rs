//! 메모리 기반 사용자 저장소
//!
//! MongoDB 인덱스와 같은 유일성 규칙(이메일, 사용자명, 값이 있는 전화번호)을 지킵니다.
//! 재시작하면 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use uuid::Uuid;
use crate::core::errors::AppError;
use crate::domain::entities::users::{NewUser, User};
use super::store::UserStore;

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &Uuid) -> Option<User> {
        self.users.read().ok().and_then(|users| users.get(id).cloned())
    }

    fn any<F>(&self, predicate: F) -> Result<bool, AppError>
    where
        F: Fn(&User) -> bool,
    {
        let users = self
            .users
            .read()
            .map_err(|e| AppError::InternalError(format!("User store lock poisoned: {}", e)))?;

        Ok(users.values().any(predicate))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        self.any(|user| user.email == email)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        self.any(|user| user.username == username)
    }

    async fn exists_by_phone(&self, phone: &str) -> Result<bool, AppError> {
        self.any(|user| user.phone.as_deref() == Some(phone))
    }

    async fn create_user(&self, user: NewUser) -> Result<Uuid, AppError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| AppError::InternalError(format!("User store lock poisoned: {}", e)))?;

        if users.contains_key(&user.id) {
            return Err(AppError::ConflictError(format!("Duplicate user id: {}", user.id)));
        }

        for existing in users.values() {
            if existing.email == user.email {
                return Err(AppError::ConflictError("Duplicate email".to_string()));
            }
            if existing.username == user.username {
                return Err(AppError::ConflictError("Duplicate username".to_string()));
            }
            if user.phone.is_some() && existing.phone == user.phone {
                return Err(AppError::ConflictError("Duplicate phone".to_string()));
            }
        }

        let id = user.id;
        users.insert(id, User::new_local(user));

        Ok(id)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
