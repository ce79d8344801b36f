//! # User Data Transfer Objects Module
//!
//! 회원가입 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   └── registration_request.rs   # 회원가입 폼
//! └── response/
//!     ├── registration_response.rs  # 가입 성공, 사용자명 확인
//!     └── error_response.rs         # 에러 봉투
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
