//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 기반 회원가입, 로그인, 현재 사용자 조회 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | `POST` | `/api/auth/register` | 불필요 |
//! | `POST` | `/api/auth/login` | 불필요 |
//! | `GET` | `/api/auth/me` | Bearer |
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::auth::{LoginRequest, RegisterRequest};
use crate::domain::models::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::state::AppState;

/// 회원가입 핸들러
///
/// 가입과 동시에 액세스 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /api/auth/register`
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token = state.auth.register(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(token))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token = state.auth.login(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(token))
}

/// 현재 사용자 정보 조회
///
/// 같은 스코프의 가입/로그인과 달리 이 엔드포인트만 인증 미들웨어를 거칩니다.
///
/// # Endpoint
/// `GET /api/auth/me`
#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn me(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state.auth.current_user(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}
