//! 시스템 전역 연동 설정 (`system_config` 컬렉션의 단일 문서)
//!
//! 관리자 대시보드에서 수정하는 Stripe, Resend 키와 구독 정책입니다.
//! 수정은 부분 패치를 기존 상태에 병합한 뒤 문서 전체를 교체하는 방식으로 저장됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::clean_optional_string;

fn default_true() -> bool {
    true
}

fn default_from_email() -> String {
    "noreply@devora.app".to_string()
}

fn default_subscription_price() -> f64 {
    9.90
}

fn default_max_failed_payments() -> u32 {
    3
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub stripe_api_key: Option<String>,
    #[serde(default)]
    pub stripe_webhook_secret: Option<String>,
    #[serde(default = "default_true")]
    pub stripe_test_mode: bool,
    #[serde(default)]
    pub resend_api_key: Option<String>,
    #[serde(default = "default_from_email")]
    pub resend_from_email: String,
    /// 월 구독 가격 (EUR)
    #[serde(default = "default_subscription_price")]
    pub subscription_price: f64,
    #[serde(default)]
    pub free_trial_days: u32,
    /// 이 횟수만큼 결제가 실패하면 구독이 `past_due`가 됩니다.
    #[serde(default = "default_max_failed_payments")]
    pub max_failed_payments: u32,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// 마지막으로 수정한 관리자 ID
    #[serde(default)]
    pub updated_by: Option<String>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            stripe_api_key: None,
            stripe_webhook_secret: None,
            stripe_test_mode: true,
            resend_api_key: None,
            resend_from_email: default_from_email(),
            subscription_price: default_subscription_price(),
            free_trial_days: 0,
            max_failed_payments: default_max_failed_payments(),
            updated_at: None,
            updated_by: None,
        }
    }
}

/// 설정 부분 수정 요청. 지정된 필드만 덮어씁니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SystemConfigUpdate {
    pub stripe_api_key: Option<String>,
    pub stripe_webhook_secret: Option<String>,
    pub stripe_test_mode: Option<bool>,
    pub resend_api_key: Option<String>,
    #[validate(email(message = "resend_from_email must be a valid email address"))]
    pub resend_from_email: Option<String>,
    #[validate(range(min = 0.0, message = "subscription_price must not be negative"))]
    pub subscription_price: Option<f64>,
    #[validate(range(max = 365, message = "free_trial_days must be at most 365"))]
    pub free_trial_days: Option<u32>,
    #[validate(range(min = 1, max = 20, message = "max_failed_payments must be between 1 and 20"))]
    pub max_failed_payments: Option<u32>,
}

impl SystemConfig {
    /// 패치를 병합한 새 설정을 반환합니다.
    ///
    /// 비밀 키 필드에 공백 문자열을 보내면 해당 키가 제거됩니다.
    pub fn merged(self, patch: SystemConfigUpdate, admin_id: &str, now: DateTime<Utc>) -> Self {
        fn secret(current: Option<String>, incoming: Option<String>) -> Option<String> {
            match incoming {
                Some(value) => clean_optional_string(Some(value)),
                None => current,
            }
        }

        Self {
            stripe_api_key: secret(self.stripe_api_key, patch.stripe_api_key),
            stripe_webhook_secret: secret(self.stripe_webhook_secret, patch.stripe_webhook_secret),
            stripe_test_mode: patch.stripe_test_mode.unwrap_or(self.stripe_test_mode),
            resend_api_key: secret(self.resend_api_key, patch.resend_api_key),
            resend_from_email: patch
                .resend_from_email
                .map(|email| email.trim().to_string())
                .unwrap_or(self.resend_from_email),
            subscription_price: patch.subscription_price.unwrap_or(self.subscription_price),
            free_trial_days: patch.free_trial_days.unwrap_or(self.free_trial_days),
            max_failed_payments: patch.max_failed_payments.unwrap_or(self.max_failed_payments),
            updated_at: Some(now),
            updated_by: Some(admin_id.to_string()),
        }
    }
}
