//! 사용자 연동 설정 HTTP 핸들러 (`/api/settings`, 인증 필요)

use actix_web::{get, put, web, HttpResponse};
use crate::domain::entities::settings::UserSettingsUpdate;
use crate::domain::models::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::state::AppState;

#[get("")]
pub async fn get_settings(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let settings = state.settings.get(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(settings))
}

#[put("")]
pub async fn update_settings(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<UserSettingsUpdate>,
) -> Result<HttpResponse, AppError> {
    let settings = state.settings.update(&user.user_id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(settings))
}
