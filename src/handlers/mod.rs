//! # HTTP Handlers
//!
//! actix-web 엔드포인트 핸들러 모음입니다.
//! 서비스는 `web::Data<RegistrationService>`로 주입받습니다.
//!
//! ## 모듈 구성
//!
//! - **`registration`**: 회원가입 (`POST /api/register`)
//! - **`username`**: 사용자명 사용 가능 여부 (`GET /api/username-availability`)
//! - **`health`**: 헬스체크 (`GET /health`, `GET /ready`)
//!
//! ## 에러 응답
//!
//! 모든 실패 응답은 `{"error": {"code", "message", "field_errors"}}` 형태입니다.
//!
//! | code | 상태 코드 | 의미 |
//! |------|-----------|------|
//! | `validation_error` | 400 | 입력 형식 오류 |
//! | `business_error` | 422 | 이미 사용 중인 이메일/사용자명/전화번호 |
//! | `internal_error` | 500 / 503 | 저장소 또는 해싱 실패 |

pub mod health;
pub mod registration;
pub mod username;
