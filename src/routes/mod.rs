//! API 라우트 설정 모듈
//!
//! 모든 API는 `/api` 아래에 기능별 스코프로 등록됩니다.
//!
//! | 스코프 | 인증 |
//! |--------|------|
//! | `/api/auth` | 가입/로그인은 불필요, `/me`만 Bearer |
//! | `/api/admin` | 활성 관리자 (`AuthMiddleware::admin()`) |
//! | `/api/projects`, `/api/conversations`, `/api/settings` | Bearer (`AuthMiddleware::required()`) |
//!
//! 헬스체크는 `GET /api/`와 `GET /health` 두 곳에서 응답합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(state.clone())
//!     .configure(configure_all_routes);
//! ```

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    get, web, HttpRequest, HttpResponse,
};
use serde_json::json;
use crate::errors::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트와 추출기 에러 설정을 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.app_data(query_config());
    cfg.app_data(path_config());

    cfg.service(health_check);
    cfg.service(api_root);

    configure_auth_routes(cfg);
    configure_admin_routes(cfg);
    configure_workspace_routes(cfg);
}

/// 잘못된 JSON 본문을 `ValidationError`(400, `{"error": ...}`)로 변환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        log::debug!("요청 본문 파싱 실패: {}", err);
        AppError::ValidationError(err.to_string()).into()
    })
}

/// 잘못된 쿼리 문자열(`?skip=-1` 등)을 `ValidationError`로 변환합니다.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        log::debug!("쿼리 파싱 실패: {}", err);
        AppError::ValidationError(err.to_string()).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        log::debug!("경로 파라미터 파싱 실패: {}", err);
        AppError::ValidationError(err.to_string()).into()
    })
}

/// 인증 관련 라우트
///
/// - `POST /api/auth/register` - 회원가입
/// - `POST /api/auth/login` - 로그인
/// - `GET /api/auth/me` - 현재 사용자 (핸들러에 인증 미들웨어 적용)
///
/// ```bash
/// curl -X POST http://localhost:8001/api/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"password123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::me)
    );
}

/// 관리자 라우트. 스코프 전체에 관리자 검사가 한 번 적용됩니다.
fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .wrap(AuthMiddleware::admin())
            .service(handlers::admin::stats)
            .service(handlers::admin::list_users)
            .service(handlers::admin::update_user_status)
            .service(handlers::admin::promote_admin)
            .service(handlers::admin::revoke_admin)
            .service(handlers::admin::user_projects)
            .service(handlers::admin::user_invoices)
            .service(handlers::admin::gift_months)
            .service(handlers::admin::toggle_billing)
            .service(handlers::admin::get_config)
            .service(handlers::admin::update_config)
    );
}

fn configure_workspace_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/projects")
            .wrap(AuthMiddleware::required())
            .service(handlers::projects::list_projects)
            .service(handlers::projects::create_project)
            .service(handlers::projects::get_project)
            .service(handlers::projects::update_project)
            .service(handlers::projects::delete_project)
    );

    cfg.service(
        web::scope("/api/conversations")
            .wrap(AuthMiddleware::required())
            .service(handlers::conversations::list_conversations)
            .service(handlers::conversations::create_conversation)
            .service(handlers::conversations::get_conversation)
            .service(handlers::conversations::append_message)
            .service(handlers::conversations::delete_conversation)
    );

    cfg.service(
        web::scope("/api/settings")
            .wrap(AuthMiddleware::required())
            .service(handlers::settings::get_settings)
            .service(handlers::settings::update_settings)
    );
}

fn health_body() -> serde_json::Value {
    json!({
        "status": "healthy",
        "service": "devora_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8001/health
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(health_body())
}

/// `GET /api/`
///
/// `NormalizePath::trim` 뒤에서는 `/api`로 도착합니다.
#[get("/api")]
async fn api_root() -> HttpResponse {
    HttpResponse::Ok().json(health_body())
}
