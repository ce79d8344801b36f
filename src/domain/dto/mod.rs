//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! | 역할 | 모듈 |
//! |------|------|
//! | HTTP 요청 본문 매핑 | `users::request` |
//! | HTTP 응답 본문 매핑 | `users::response` |
//! | 입력값 유효성 검증 | `validator` derive + `services::validation` |
//! | JSON 필드 매핑 | `serde` (snake_case 그대로 사용) |

pub mod users;

pub use users::*;
