//! 사용자 데이터 액세스 계층
//!
//! - [`UserStore`]: 검증/가입 로직이 의존하는 저장소 trait
//! - [`UserRepository`]: MongoDB 구현
//! - [`InMemoryUserStore`]: 메모리 구현
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let repo = UserRepository::new(database);
//! repo.ensure_indexes().await?;
//! let store: Arc<dyn UserStore> = Arc::new(repo);
//! let taken = store.exists_by_email("user@example.com").await?;
//! ```

pub mod in_memory;
pub mod store;
pub mod user_repo;

pub use in_memory::InMemoryUserStore;
pub use store::UserStore;
pub use user_repo::UserRepository;
