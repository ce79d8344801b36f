//! 공통 유틸리티 함수 모듈
//! 
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 공백 판정, 선택 문자열 정리, 문자 단위 길이 계산
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::is_blank;
//!
//! if is_blank(&request.first_name) {
//!     // "First name is required"
//! }
//! ```

pub mod string_utils;
