//! 헬스체크 핸들러
//!
//! - `GET /health`: 프로세스 생존 여부 (저장소를 확인하지 않음)
//! - `GET /ready`: 저장소 연결까지 확인

use actix_web::{get, web, HttpResponse};
use log::warn;
use serde_json::json;
use crate::domain::dto::users::response::ErrorEnvelope;
use crate::services::users::RegistrationService;

pub const SERVICE_NAME: &str = "registration_service";

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 저장소 준비 상태 확인
#[get("/ready")]
pub async fn readiness(service: web::Data<RegistrationService>) -> HttpResponse {
    match service.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({ "status": "ready" })),
        Err(e) => {
            warn!("저장소 준비 안 됨: {}", e);
            HttpResponse::ServiceUnavailable().json(ErrorEnvelope::internal("database not ready"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use crate::repositories::users::InMemoryUserStore;
    use crate::test_support::{test_service, FailingUserStore};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], SERVICE_NAME);
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_ready_with_reachable_store() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_service(Arc::new(InMemoryUserStore::new()))))
                .service(readiness),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_not_ready_when_store_fails() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_service(Arc::new(FailingUserStore))))
                .service(readiness),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "database not ready");
    }
}
