//! 사용자 응답 DTO
//!
//! 두 투영 모두 `hashed_password`를 포함하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{SubscriptionStatus, User};

/// `GET /auth/me` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub subscription_status: SubscriptionStatus,
    pub current_period_end: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            full_name,
            is_active,
            is_admin,
            subscription_status,
            current_period_end,
            created_at,
            ..
        } = user;

        Self {
            id,
            email,
            full_name,
            is_active,
            is_admin,
            subscription_status,
            current_period_end,
            created_at,
        }
    }
}

/// 관리자 사용자 목록의 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserView {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub stripe_customer_id: Option<String>,
    pub subscription_status: SubscriptionStatus,
    pub subscription_id: Option<String>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub billing_exempt: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for AdminUserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            is_active: user.is_active,
            is_admin: user.is_admin,
            stripe_customer_id: user.stripe_customer_id,
            subscription_status: user.subscription_status,
            subscription_id: user.subscription_id,
            current_period_end: user.current_period_end,
            billing_exempt: user.billing_exempt,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
