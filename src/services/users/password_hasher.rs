//! 비밀번호 해싱
//!
//! bcrypt는 해시마다 새 솔트를 만들기 때문에 같은 비밀번호도 매번 다른 해시가 나옵니다.
//! cost는 생성 시점에 고정되며 호출마다 바꿀 수 없습니다.

use std::time::Instant;
use log::debug;
use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> AppResult<String>;

    fn verify(&self, password: &str, hash: &str) -> AppResult<bool>;
}

#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// 환경별 cost (`PasswordConfig::bcrypt_cost`)를 사용합니다.
    pub fn new() -> Self {
        Self::with_cost(PasswordConfig::bcrypt_cost())
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> AppResult<String> {
        let hash_start = Instant::now();
        let hashed = bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::HashingError(format!("비밀번호 해싱 실패: {}", e)))?;

        debug!("Password hashing took: {:?} (cost {})", hash_start.elapsed(), self.cost);
        Ok(hashed)
    }

    fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        bcrypt::verify(password, hash)
            .map_err(|e| AppError::HashingError(format!("비밀번호 검증 실패: {}", e)))
    }
}
