//! API 라우트 설정 모듈
//!
//! # Routes
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/health` | [`handlers::health::health_check`] |
//! | `GET` | `/ready` | [`handlers::health::readiness`] |
//! | `POST` | `/api/register` | [`handlers::registration::register`] |
//! | `GET` | `/api/username-availability` | [`handlers::username::username_availability`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(service))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health::health_check)
        .service(handlers::health::readiness);

    configure_registration_routes(cfg);
}

/// 회원가입 관련 라우트 (`/api`)
///
/// ```bash
/// curl -X POST http://localhost:8080/api/register \
///   -H "Content-Type: application/json" \
///   -d @registration.json
///
/// curl "http://localhost:8080/api/username-availability?username=johndoe123"
/// ```
fn configure_registration_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(handlers::registration::json_config())
            .service(handlers::registration::register)
            .service(handlers::username::username_availability),
    );
}
