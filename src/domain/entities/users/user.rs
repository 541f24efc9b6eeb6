//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.
//! 사용자는 비활성화될 뿐 하드 삭제되지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date_utils::{add_months, deserialize_lenient_datetime};

/// 구독 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    #[default]
    Inactive,
    Active,
    Canceled,
    PastDue,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Inactive => "inactive",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::PastDue => "past_due",
        }
    }
}

fn default_true() -> bool {
    true
}

/// 사용자 엔티티
///
/// 이메일은 시스템 전체에서 유니크하며, 항상 소문자로 정규화되어 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// UUID v4 문자열
    pub id: String,
    pub email: String,
    /// bcrypt 해시. API 응답에는 절대 포함되지 않습니다.
    pub hashed_password: String,
    #[serde(default)]
    pub full_name: Option<String>,
    /// `false`이면 로그인이 차단됩니다.
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub stripe_customer_id: Option<String>,
    #[serde(default)]
    pub subscription_status: SubscriptionStatus,
    #[serde(default)]
    pub subscription_id: Option<String>,
    /// 해석할 수 없는 저장값은 `None`으로 읽습니다.
    #[serde(default, deserialize_with = "deserialize_lenient_datetime")]
    pub current_period_end: Option<DateTime<Utc>>,
    /// `Some(true)`이면 결제 대상에서 제외됩니다.
    #[serde(default)]
    pub billing_exempt: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 로컬 사용자 생성
    ///
    /// 구독 상태는 `inactive`, 계정은 활성 상태로 시작합니다.
    pub fn new(
        email: String,
        hashed_password: String,
        full_name: Option<String>,
        stripe_customer_id: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            email,
            hashed_password,
            full_name,
            is_active: true,
            is_admin: false,
            stripe_customer_id,
            subscription_status: SubscriptionStatus::Inactive,
            subscription_id: None,
            current_period_end: None,
            billing_exempt: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 선물 개월 수를 적용했을 때의 새 구독 종료일을 계산합니다.
    ///
    /// 기준일은 저장된 종료일과 `now` 중 늦은 쪽입니다. 종료일이 없으면 `now`부터 계산합니다.
    pub fn gifted_period_end(&self, months: u32, now: DateTime<Utc>) -> DateTime<Utc> {
        let base = match self.current_period_end {
            Some(end) if end > now => end,
            _ => now,
        };
        add_months(base, months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> User {
        User::new(
            "alice@example.com".to_string(),
            "$2b$04$hash".to_string(),
            Some("Alice".to_string()),
            None,
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();

        assert!(user.is_active);
        assert!(!user.is_admin);
        assert_eq!(user.subscription_status, SubscriptionStatus::Inactive);
        assert!(user.current_period_end.is_none());
        assert!(Uuid::parse_str(&user.id).is_ok());
    }

    #[test]
    fn test_gifted_period_end_from_past_end_uses_now() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        let mut user = sample_user();
        user.current_period_end = Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());

        assert_eq!(
            user.gifted_period_end(2, now),
            Utc.with_ymd_and_hms(2026, 12, 18, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_gifted_period_end_extends_future_end() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        let mut user = sample_user();
        user.current_period_end = Some(Utc.with_ymd_and_hms(2027, 1, 10, 0, 0, 0).unwrap());

        assert_eq!(
            user.gifted_period_end(1, now),
            Utc.with_ymd_and_hms(2027, 2, 10, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_deserialize_legacy_document() {
        let json = r#"{
            "_id": "65f0c0ffee",
            "id": "0b6f3c1e-4f7e-4c2a-9d0e-8a1b2c3d4e5f",
            "email": "legacy@example.com",
            "hashed_password": "$2b$12$abc",
            "subscription_status": "past_due",
            "current_period_end": "garbage",
            "created_at": "2025-02-01T10:00:00.123456+00:00",
            "updated_at": "2025-02-01T10:00:00.123456+00:00"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert!(user.is_active);
        assert!(!user.is_admin);
        assert_eq!(user.subscription_status, SubscriptionStatus::PastDue);
        assert!(user.current_period_end.is_none());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = r#"{"id": "x", "email": "a@b.c", "created_at": "2025-02-01T10:00:00Z", "updated_at": "2025-02-01T10:00:00Z"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
