use std::sync::Arc;
use chrono::Utc;
use crate::domain::dto::workspace::{AppendMessageRequest, CreateConversationRequest};
use crate::domain::entities::workspace::{ChatMessage, Conversation};
use crate::errors::errors::AppError;
use crate::repositories::ConversationStore;

pub struct ConversationService {
    conversations: Arc<dyn ConversationStore>,
}

fn conversation_not_found() -> AppError {
    AppError::NotFound("Conversation not found".to_string())
}

impl ConversationService {
    pub fn new(conversations: Arc<dyn ConversationStore>) -> Self {
        Self { conversations }
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<Conversation>, AppError> {
        self.conversations.find_by_user(user_id).await
    }

    pub async fn create(
        &self,
        user_id: &str,
        request: CreateConversationRequest,
    ) -> Result<Conversation, AppError> {
        let conversation = Conversation::new(user_id, request.title);
        self.conversations.insert(&conversation).await?;
        Ok(conversation)
    }

    pub async fn get(&self, user_id: &str, conversation_id: &str) -> Result<Conversation, AppError> {
        self.conversations
            .find_owned(conversation_id, user_id)
            .await?
            .ok_or_else(conversation_not_found)
    }

    /// 메시지를 끝에 추가하고 추가된 메시지를 반환합니다.
    pub async fn append_message(
        &self,
        user_id: &str,
        conversation_id: &str,
        request: AppendMessageRequest,
    ) -> Result<ChatMessage, AppError> {
        let message = ChatMessage::new(request.role, request.content);

        let pushed = self.conversations
            .push_message(conversation_id, user_id, &message, Utc::now())
            .await?;
        if !pushed {
            return Err(conversation_not_found());
        }

        Ok(message)
    }

    pub async fn delete(&self, user_id: &str, conversation_id: &str) -> Result<(), AppError> {
        if !self.conversations.delete_owned(conversation_id, user_id).await? {
            return Err(conversation_not_found());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::workspace::{MessageRole, DEFAULT_CONVERSATION_TITLE};
    use crate::repositories::MemoryStore;

    fn message(role: MessageRole, content: &str) -> AppendMessageRequest {
        AppendMessageRequest {
            role,
            content: content.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_create_uses_default_title() {
        let service = ConversationService::new(Arc::new(MemoryStore::new()));

        let untitled = service.create("u1", CreateConversationRequest::default()).await.unwrap();
        let titled = service
            .create("u1", CreateConversationRequest { title: Some("Portfolio".to_string()) })
            .await
            .unwrap();

        assert_eq!(untitled.title, DEFAULT_CONVERSATION_TITLE);
        assert_eq!(titled.title, "Portfolio");
        assert!(untitled.messages.is_empty());
    }

    #[actix_web::test]
    async fn test_messages_are_appended_in_order() {
        let service = ConversationService::new(Arc::new(MemoryStore::new()));
        let conversation = service.create("u1", CreateConversationRequest::default()).await.unwrap();

        service
            .append_message("u1", &conversation.id, message(MessageRole::User, "Build a blog"))
            .await
            .unwrap();
        service
            .append_message("u1", &conversation.id, message(MessageRole::Assistant, "Sure"))
            .await
            .unwrap();

        let stored = service.get("u1", &conversation.id).await.unwrap();
        let contents: Vec<&str> = stored.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["Build a blog", "Sure"]);
        assert_eq!(stored.messages[1].role, MessageRole::Assistant);
    }

    #[actix_web::test]
    async fn test_foreign_conversation_is_not_found() {
        let service = ConversationService::new(Arc::new(MemoryStore::new()));
        let conversation = service.create("owner", CreateConversationRequest::default()).await.unwrap();

        let append = service
            .append_message("intruder", &conversation.id, message(MessageRole::User, "hi"))
            .await;
        assert!(matches!(append, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.delete("intruder", &conversation.id).await,
            Err(AppError::NotFound(_))
        ));

        service.delete("owner", &conversation.id).await.unwrap();
        assert!(service.list("owner").await.unwrap().is_empty());
    }
}
