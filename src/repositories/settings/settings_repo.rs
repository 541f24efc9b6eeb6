use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::db::{Database, USER_SETTINGS};
use crate::domain::entities::settings::UserSettings;
use crate::errors::errors::AppError;

/// 사용자별 연동 설정 저장소 (사용자당 문서 1개)
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn find(&self, user_id: &str) -> Result<Option<UserSettings>, AppError>;

    async fn upsert(&self, settings: &UserSettings) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct SettingsRepository {
    collection: Collection<UserSettings>,
}

impl SettingsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<UserSettings>(USER_SETTINGS),
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_id_unique".to_string())
                .build())
            .build();

        self.collection.create_index(user_index).await?;

        Ok(())
    }
}

#[async_trait]
impl SettingsStore for SettingsRepository {
    async fn find(&self, user_id: &str) -> Result<Option<UserSettings>, AppError> {
        Ok(self.collection.find_one(doc! { "user_id": user_id }).await?)
    }

    async fn upsert(&self, settings: &UserSettings) -> Result<(), AppError> {
        self.collection
            .replace_one(doc! { "user_id": &settings.user_id }, settings)
            .upsert(true)
            .await?;

        Ok(())
    }
}
