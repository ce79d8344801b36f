//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserStore;
//!
//! let taken = store.exists_by_username("johndoe123").await?;
//! ```

pub mod users;
