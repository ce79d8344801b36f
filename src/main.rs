//! 회원가입 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 사용자 저장소(MongoDB 또는 메모리)를 준비하고 회원가입 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use registration_service_backend::config::{
    CorsConfig, DatabaseConfig, Environment, PasswordConfig, ServerConfig, StorageBackend,
};
use registration_service_backend::db::Database;
use registration_service_backend::repositories::users::{InMemoryUserStore, UserRepository, UserStore};
use registration_service_backend::routes::configure_all_routes;
use registration_service_backend::services::users::RegistrationService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    init_logging();

    info!("🚀 회원가입 서비스 시작중...");
    match env_file {
        Ok(name) => info!("{} 파일 로드 됨", name),
        Err(e) => warn!("환경 파일 로드 실패: {}", e),
    }
    info!(
        "실행 환경: {:?}, bcrypt cost: {}",
        Environment::current(),
        PasswordConfig::bcrypt_cost()
    );

    let store = initialize_user_store().await?;
    let service = web::Data::new(RegistrationService::new(store));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(service: web::Data<RegistrationService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/register", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로깅 초기화 전에 호출되므로 결과만 돌려주고 로그는 호출하는 쪽에서 남깁니다.
fn load_env_file() -> Result<String, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod".to_string()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev".to_string()),
        _ => dotenv().map(|_| ".env".to_string()),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 검증 체인만 debug
/// RUST_LOG=registration_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정된 백엔드로 사용자 저장소를 준비합니다
///
/// MongoDB는 연결 확인 후 유니크 인덱스를 만듭니다. 실패하면 서버를 시작하지 않습니다.
async fn initialize_user_store() -> io::Result<Arc<dyn UserStore>> {
    let config = DatabaseConfig::from_env();

    match config.backend {
        StorageBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용 중. 재시작하면 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new(&config).await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            let repository = UserRepository::new(database);
            repository.ensure_indexes().await.map_err(|e| {
                error!("인덱스 생성 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            Ok(Arc::new(repository))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
