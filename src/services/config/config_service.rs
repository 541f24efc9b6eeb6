//! 시스템 설정 접근 서비스

use std::sync::Arc;
use chrono::Utc;
use crate::domain::entities::settings::{SystemConfig, SystemConfigUpdate};
use crate::errors::errors::AppError;
use crate::repositories::ConfigStore;

pub struct ConfigService {
    store: Arc<dyn ConfigStore>,
}

impl ConfigService {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// 현재 설정. 저장된 문서가 없으면 기본값입니다.
    pub async fn get_config(&self) -> Result<SystemConfig, AppError> {
        Ok(self.store.load().await?.unwrap_or_default())
    }

    /// 패치를 병합해 저장하고 저장된 설정을 반환합니다. 수정한 관리자와 시각이 함께 기록됩니다.
    pub async fn update_config(
        &self,
        patch: SystemConfigUpdate,
        admin_id: &str,
    ) -> Result<SystemConfig, AppError> {
        let updated = self.get_config().await?.merged(patch, admin_id, Utc::now());
        self.store.save(&updated).await?;

        log::info!("시스템 설정 변경: 관리자 {}", admin_id);

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;

    #[actix_web::test]
    async fn test_defaults_when_nothing_stored() {
        let service = ConfigService::new(Arc::new(MemoryStore::new()));
        assert_eq!(service.get_config().await.unwrap(), SystemConfig::default());
    }

    #[actix_web::test]
    async fn test_update_persists_merge_with_audit() {
        let service = ConfigService::new(Arc::new(MemoryStore::new()));

        service
            .update_config(
                SystemConfigUpdate {
                    stripe_test_mode: Some(false),
                    ..SystemConfigUpdate::default()
                },
                "admin-1",
            )
            .await
            .unwrap();
        service
            .update_config(
                SystemConfigUpdate {
                    free_trial_days: Some(14),
                    ..SystemConfigUpdate::default()
                },
                "admin-2",
            )
            .await
            .unwrap();

        let stored = service.get_config().await.unwrap();
        assert!(!stored.stripe_test_mode);
        assert_eq!(stored.free_trial_days, 14);
        assert_eq!(stored.updated_by.as_deref(), Some("admin-2"));
        assert!(stored.updated_at.is_some());
    }
}
