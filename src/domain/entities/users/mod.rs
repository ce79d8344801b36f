//! 사용자 엔티티 모듈
//!
//! - [`User`](user::User) - 저장된 사용자 (`users` 컬렉션 문서)
//! - [`NewUser`](user::NewUser) - 검증 통과 후 저장 직전의 데이터

pub mod user;

pub use user::{NewUser, User};
