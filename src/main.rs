//! Devora 백엔드 메인 애플리케이션
//!
//! 설정을 읽고 저장소와 서비스를 조립한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::io;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use devora_backend::config::{AppConfig, CorsConfig, StoreBackend};
use devora_backend::db::Database;
use devora_backend::routes::configure_all_routes;
use devora_backend::services::billing::gateway_from_config;
use devora_backend::state::{AppState, Stores};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Devora 백엔드 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    info!("실행 환경: {:?}", config.environment);

    let stores = initialize_stores(&config).await?;

    let billing = gateway_from_config(&config.stripe);

    let state = web::Data::new(AppState::new(stores, billing, &config.password, &config.jwt));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limit 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig, state: web::Data<AppState>) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Rate Limit 설정값은 0보다 커야 합니다")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    let cors_config = config.cors.clone();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(config.server.workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => println!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => println!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 "info,actix_web=info"를 사용합니다.
///
/// ```bash
/// RUST_LOG=devora_backend=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// `STORE_BACKEND`에 따라 저장소를 준비합니다
///
/// MongoDB는 연결 확인(ping)과 인덱스 생성까지 마친 뒤 반환합니다.
async fn initialize_stores(config: &AppConfig) -> io::Result<Stores> {
    match config.database.backend {
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(&config.database).await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
            })?;

            Stores::mongo(&database)
                .await
                .map_err(|e| io::Error::other(e.to_string()))
        }
        StoreBackend::Memory => {
            warn!("⚠️ 인메모리 저장소 사용: 재시작하면 데이터가 사라집니다");
            Ok(Stores::in_memory())
        }
    }
}

/// CORS 설정을 구성합니다
///
/// `CORS_ORIGINS`가 비어 있으면 모든 Origin을 허용합니다.
fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = if config.allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
    };

    cors
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
