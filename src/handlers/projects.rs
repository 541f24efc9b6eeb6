//! 프로젝트 HTTP 핸들러 (`/api/projects`, 인증 필요)

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::admin::MessageResponse;
use crate::domain::dto::workspace::{CreateProjectRequest, UpdateProjectRequest};
use crate::domain::models::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::state::AppState;

#[get("")]
pub async fn list_projects(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let projects = state.projects.list(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[post("")]
pub async fn create_project(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let project = state.projects.create(&user.user_id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[get("/{project_id}")]
pub async fn get_project(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    project_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let project = state.projects.get(&user.user_id, &project_id).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[put("/{project_id}")]
pub async fn update_project(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    project_id: web::Path<String>,
    payload: web::Json<UpdateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let project = state.projects
        .update(&user.user_id, &project_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(project))
}

#[delete("/{project_id}")]
pub async fn delete_project(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    project_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.projects.delete(&user.user_id, &project_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Project deleted successfully")))
}
