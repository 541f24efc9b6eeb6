//! 시스템 설정 단일 문서 저장소
//!
//! `system_config` 컬렉션에는 문서가 최대 1개만 존재합니다.

use async_trait::async_trait;
use mongodb::{bson::doc, Collection};
use crate::db::{Database, SYSTEM_CONFIG};
use crate::domain::entities::settings::SystemConfig;
use crate::errors::errors::AppError;

#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// 저장된 설정. 아직 한 번도 저장되지 않았으면 `None`
    async fn load(&self) -> Result<Option<SystemConfig>, AppError>;

    /// 문서 전체를 교체(없으면 생성)합니다.
    async fn save(&self, config: &SystemConfig) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct SystemConfigRepository {
    collection: Collection<SystemConfig>,
}

impl SystemConfigRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<SystemConfig>(SYSTEM_CONFIG),
        }
    }
}

#[async_trait]
impl ConfigStore for SystemConfigRepository {
    async fn load(&self) -> Result<Option<SystemConfig>, AppError> {
        Ok(self.collection.find_one(doc! {}).await?)
    }

    async fn save(&self, config: &SystemConfig) -> Result<(), AppError> {
        self.collection
            .replace_one(doc! {}, config)
            .upsert(true)
            .await?;

        Ok(())
    }
}
