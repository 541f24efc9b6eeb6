//! 관리자 HTTP 핸들러
//!
//! `/api/admin` 스코프 전체가 `AuthMiddleware::admin()`으로 보호됩니다.
//! 핸들러에 도달한 요청의 [`AuthenticatedUser`]는 활성 상태의 관리자입니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::admin::{
    GiftMonthsRequest, PaginationQuery, ToggleBillingRequest, UpdateStatusRequest,
};
use crate::domain::entities::settings::SystemConfigUpdate;
use crate::domain::models::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::state::AppState;

/// `GET /api/admin/stats`
#[get("/stats")]
pub async fn stats(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = state.admin.stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// `GET /api/admin/users?skip=0&limit=50`
#[get("/users")]
pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state.admin.list_users(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// `PUT /api/admin/users/{user_id}/status`
#[put("/users/{user_id}/status")]
pub async fn update_user_status(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.admin.set_user_active(&user_id, payload.is_active).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// `POST /api/admin/users/{user_id}/promote-admin`
#[post("/users/{user_id}/promote-admin")]
pub async fn promote_admin(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.admin.promote_admin(&user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// `DELETE /api/admin/users/{user_id}/revoke-admin`
#[delete("/users/{user_id}/revoke-admin")]
pub async fn revoke_admin(
    state: web::Data<AppState>,
    admin: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.admin.revoke_admin(&admin.user_id, &user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/users/{user_id}/projects")]
pub async fn user_projects(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.admin.user_projects(&user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/users/{user_id}/invoices")]
pub async fn user_invoices(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.admin.user_invoices(&user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// `POST /api/admin/users/{user_id}/gift-months`
///
/// `months`는 1-12 범위여야 합니다.
#[post("/users/{user_id}/gift-months")]
pub async fn gift_months(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    payload: web::Json<GiftMonthsRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.admin.gift_months(&user_id, payload.months).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// `POST /api/admin/users/{user_id}/toggle-billing`
#[post("/users/{user_id}/toggle-billing")]
pub async fn toggle_billing(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    payload: web::Json<ToggleBillingRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.admin.toggle_billing(&user_id, payload.enable).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// `GET /api/admin/config`
///
/// 비밀 값(API 키 등)도 마스킹하지 않고 반환합니다.
#[get("/config")]
pub async fn get_config(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let config = state.admin.get_config().await?;
    Ok(HttpResponse::Ok().json(config))
}

/// `PUT /api/admin/config`
#[put("/config")]
pub async fn update_config(
    state: web::Data<AppState>,
    admin: AuthenticatedUser,
    payload: web::Json<SystemConfigUpdate>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let config = state.admin.update_config(payload.into_inner(), &admin.user_id).await?;
    Ok(HttpResponse::Ok().json(config))
}
