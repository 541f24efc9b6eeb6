//! 사용자별 외부 연동 설정 서비스

use std::sync::Arc;
use chrono::Utc;
use crate::domain::entities::settings::{UserSettings, UserSettingsUpdate};
use crate::errors::errors::AppError;
use crate::repositories::SettingsStore;

pub struct SettingsService {
    settings: Arc<dyn SettingsStore>,
}

impl SettingsService {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }

    /// 저장된 설정이 없으면 빈 설정을 돌려줍니다 (404 아님).
    pub async fn get(&self, user_id: &str) -> Result<UserSettings, AppError> {
        Ok(self
            .settings
            .find(user_id)
            .await?
            .unwrap_or_else(|| UserSettings::empty(user_id)))
    }

    pub async fn update(&self, user_id: &str, update: UserSettingsUpdate) -> Result<UserSettings, AppError> {
        let mut settings = self.get(user_id).await?;
        settings.apply(update, Utc::now());

        self.settings.upsert(&settings).await?;
        log::debug!("사용자 설정 저장: {}", user_id);

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;

    #[actix_web::test]
    async fn test_get_without_stored_settings() {
        let service = SettingsService::new(Arc::new(MemoryStore::new()));

        let settings = service.get("u1").await.unwrap();

        assert_eq!(settings, UserSettings::empty("u1"));
    }

    #[actix_web::test]
    async fn test_update_merges_with_stored_values() {
        let service = SettingsService::new(Arc::new(MemoryStore::new()));

        service
            .update(
                "u1",
                UserSettingsUpdate {
                    github_token: Some("ghp_123".to_string()),
                    vercel_token: Some("vc_456".to_string()),
                    ..UserSettingsUpdate::default()
                },
            )
            .await
            .unwrap();
        service
            .update(
                "u1",
                UserSettingsUpdate {
                    vercel_token: Some("".to_string()),
                    ..UserSettingsUpdate::default()
                },
            )
            .await
            .unwrap();

        let stored = service.get("u1").await.unwrap();
        assert_eq!(stored.github_token.as_deref(), Some("ghp_123"));
        assert_eq!(stored.vercel_token, None);
        assert!(stored.updated_at.is_some());
        assert_eq!(service.get("u2").await.unwrap().github_token, None);
    }
}
