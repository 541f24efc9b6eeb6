//! `conversations` 컬렉션 리포지토리

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, to_bson}, options::IndexOptions, Collection, IndexModel};
use crate::db::{Database, CONVERSATIONS};
use crate::domain::entities::workspace::{ChatMessage, Conversation};
use crate::errors::errors::{AppError, ErrorContext};
use crate::repositories::iso_timestamp;

#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn insert(&self, conversation: &Conversation) -> Result<(), AppError>;

    /// 최신순
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Conversation>, AppError>;

    async fn find_owned(&self, id: &str, user_id: &str) -> Result<Option<Conversation>, AppError>;

    /// 메시지를 끝에 추가합니다. 대화가 없으면 `false`
    async fn push_message(
        &self,
        id: &str,
        user_id: &str,
        message: &ChatMessage,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError>;

    async fn delete_owned(&self, id: &str, user_id: &str) -> Result<bool, AppError>;
}

#[derive(Clone)]
pub struct ConversationRepository {
    collection: Collection<Conversation>,
}

impl ConversationRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Conversation>(CONVERSATIONS),
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("user_id_created_at".to_string())
                .build())
            .build();

        self.collection.create_index(owner_index).await?;

        Ok(())
    }
}

#[async_trait]
impl ConversationStore for ConversationRepository {
    async fn insert(&self, conversation: &Conversation) -> Result<(), AppError> {
        self.collection.insert_one(conversation).await?;
        Ok(())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Conversation>, AppError> {
        let cursor = self.collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_owned(&self, id: &str, user_id: &str) -> Result<Option<Conversation>, AppError> {
        Ok(self.collection
            .find_one(doc! { "id": id, "user_id": user_id })
            .await?)
    }

    async fn push_message(
        &self,
        id: &str,
        user_id: &str,
        message: &ChatMessage,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let message = to_bson(message).context("메시지 직렬화 실패")?;

        let result = self.collection
            .update_one(
                doc! { "id": id, "user_id": user_id },
                doc! {
                    "$push": { "messages": message },
                    "$set": { "updated_at": iso_timestamp(now) },
                },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete_owned(&self, id: &str, user_id: &str) -> Result<bool, AppError> {
        let result = self.collection
            .delete_one(doc! { "id": id, "user_id": user_id })
            .await?;

        Ok(result.deleted_count > 0)
    }
}
