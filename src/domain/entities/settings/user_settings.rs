//! 사용자별 외부 연동 토큰 (`user_settings` 컬렉션)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::utils::string_utils::clean_optional_string;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub user_id: String,
    /// 코드 생성용 OpenRouter 키
    #[serde(default)]
    pub openrouter_api_key: Option<String>,
    /// GitHub 내보내기 토큰
    #[serde(default)]
    pub github_token: Option<String>,
    /// Vercel 배포 토큰
    #[serde(default)]
    pub vercel_token: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSettingsUpdate {
    pub openrouter_api_key: Option<String>,
    pub github_token: Option<String>,
    pub vercel_token: Option<String>,
}

impl UserSettings {
    /// 저장된 설정이 없는 사용자의 기본값
    pub fn empty(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            ..Self::default()
        }
    }

    /// 전달된 필드만 병합합니다. 공백 문자열은 해당 값을 지웁니다.
    pub fn apply(&mut self, update: UserSettingsUpdate, now: DateTime<Utc>) {
        if let Some(key) = update.openrouter_api_key {
            self.openrouter_api_key = clean_optional_string(Some(key));
        }
        if let Some(token) = update.github_token {
            self.github_token = clean_optional_string(Some(token));
        }
        if let Some(token) = update.vercel_token {
            self.vercel_token = clean_optional_string(Some(token));
        }
        self.updated_at = Some(now);
    }
}
