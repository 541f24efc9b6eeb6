//! 대화 기록 HTTP 핸들러 (`/api/conversations`, 인증 필요)
//!
//! 메시지 추가는 기록만 합니다. AI 응답 생성은 이 서비스의 범위가 아닙니다.

use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::admin::MessageResponse;
use crate::domain::dto::workspace::{AppendMessageRequest, CreateConversationRequest};
use crate::domain::models::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::state::AppState;

#[get("")]
pub async fn list_conversations(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let conversations = state.conversations.list(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(conversations))
}

#[post("")]
pub async fn create_conversation(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<CreateConversationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let conversation = state.conversations
        .create(&user.user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(conversation))
}

#[get("/{conversation_id}")]
pub async fn get_conversation(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    conversation_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let conversation = state.conversations.get(&user.user_id, &conversation_id).await?;
    Ok(HttpResponse::Ok().json(conversation))
}

/// `POST /api/conversations/{conversation_id}/messages`
#[post("/{conversation_id}/messages")]
pub async fn append_message(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    conversation_id: web::Path<String>,
    payload: web::Json<AppendMessageRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let message = state.conversations
        .append_message(&user.user_id, &conversation_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(message))
}

#[delete("/{conversation_id}")]
pub async fn delete_conversation(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    conversation_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.conversations.delete(&user.user_id, &conversation_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Conversation deleted successfully")))
}
