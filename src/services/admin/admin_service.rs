//! 관리자 서비스
//!
//! 대시보드 통계, 사용자 관리, 구독 선물, 결제 면제, 시스템 설정을 담당합니다.
//!
//! ## 권한
//!
//! 관리자 여부는 `/admin` 스코프의 인증 미들웨어([`AuthMode::Admin`])가 한 번에 검사합니다.
//! 이 서비스의 메서드는 호출자가 이미 관리자임을 전제로 합니다.
//!
//! ## 동시성
//!
//! 구독 선물은 "읽고 계산한 뒤 쓰기"이며 트랜잭션이 아닙니다.
//! 같은 사용자에 대한 동시 수정은 마지막 쓰기가 이깁니다.
//!
//! [`AuthMode::Admin`]: crate::domain::models::AuthMode::Admin

use std::sync::Arc;
use chrono::Utc;
use crate::domain::dto::admin::{
    GiftMonthsResponse, MessageResponse, PaginationQuery, ToggleBillingResponse,
    UserInvoicesResponse, UserProjectsResponse, UsersPage,
};
use crate::domain::dto::users::AdminUserView;
use crate::domain::entities::settings::{SystemConfig, SystemConfigUpdate};
use crate::domain::entities::users::{SubscriptionStatus, User};
use crate::domain::models::AdminStats;
use crate::errors::errors::AppError;
use crate::repositories::{InvoiceStore, ProjectStore, UserStore};
use crate::services::config::ConfigService;
use crate::utils::date_utils::start_of_month_utc;

/// 구독 선물 허용 범위 (개월)
const MIN_GIFT_MONTHS: i64 = 1;
const MAX_GIFT_MONTHS: i64 = 12;

pub struct AdminService {
    users: Arc<dyn UserStore>,
    invoices: Arc<dyn InvoiceStore>,
    projects: Arc<dyn ProjectStore>,
    config: Arc<ConfigService>,
}

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

impl AdminService {
    pub fn new(
        users: Arc<dyn UserStore>,
        invoices: Arc<dyn InvoiceStore>,
        projects: Arc<dyn ProjectStore>,
        config: Arc<ConfigService>,
    ) -> Self {
        Self { users, invoices, projects, config }
    }

    async fn require_user(&self, user_id: &str) -> Result<User, AppError> {
        self.users.find_by_id(user_id).await?.ok_or_else(user_not_found)
    }

    /// 대시보드 통계
    ///
    /// - `total_revenue`: `paid` 인보이스만 합산
    /// - `new_users_this_month`: 현재 UTC 월의 1일 00:00 이후 가입자
    /// - `churn_rate`: `canceled / total × 100`, 사용자가 없으면 0
    pub async fn stats(&self) -> Result<AdminStats, AppError> {
        let total_users = self.users.count_all().await?;
        let active_subscriptions = self.users.count_by_status(SubscriptionStatus::Active).await?;
        let canceled = self.users.count_by_status(SubscriptionStatus::Canceled).await?;
        let total_revenue = self.invoices.sum_paid(None).await?;
        let total_projects = self.projects.count_all().await?;
        let new_users_this_month = self.users
            .count_created_since(start_of_month_utc(Utc::now()))
            .await?;

        Ok(AdminStats {
            total_users,
            active_subscriptions,
            total_revenue,
            total_projects,
            new_users_this_month,
            churn_rate: AdminStats::churn_rate(canceled, total_users),
        })
    }

    /// 사용자 목록 (비밀번호 해시 제외). `limit`은 1-200으로 제한됩니다.
    pub async fn list_users(&self, query: &PaginationQuery) -> Result<UsersPage, AppError> {
        let (skip, limit) = query.resolve();

        let users = self.users
            .list(skip, limit)
            .await?
            .into_iter()
            .map(AdminUserView::from)
            .collect();

        Ok(UsersPage { users, skip, limit })
    }

    /// 계정 활성화/비활성화. 비활성 계정은 로그인할 수 없습니다.
    pub async fn set_user_active(&self, user_id: &str, is_active: bool) -> Result<MessageResponse, AppError> {
        if !self.users.set_active(user_id, is_active, Utc::now()).await? {
            return Err(user_not_found());
        }

        log::info!("사용자 {} 활성 상태 변경: {}", user_id, is_active);

        let state = if is_active { "activated" } else { "deactivated" };
        Ok(MessageResponse::new(format!("User {} successfully", state)))
    }

    /// 관리자 권한 부여. 이미 관리자이면 변경 없이 성공합니다.
    pub async fn promote_admin(&self, user_id: &str) -> Result<MessageResponse, AppError> {
        let user = self.require_user(user_id).await?;

        if user.is_admin {
            return Ok(MessageResponse::new("User is already an admin"));
        }

        if !self.users.set_admin(user_id, true, Utc::now()).await? {
            return Err(user_not_found());
        }

        log::info!("관리자 권한 부여: {} ({})", user.email, user_id);
        Ok(MessageResponse::new("User promoted to admin successfully"))
    }

    /// 관리자 권한 회수
    ///
    /// 자기 자신의 권한은 회수할 수 없습니다 (`ValidationError`, 상태 변경 없음).
    pub async fn revoke_admin(&self, acting_admin_id: &str, user_id: &str) -> Result<MessageResponse, AppError> {
        if acting_admin_id == user_id {
            return Err(AppError::ValidationError(
                "You cannot revoke your own admin privileges".to_string(),
            ));
        }

        let user = self.require_user(user_id).await?;

        if !user.is_admin {
            return Ok(MessageResponse::new("User is not an admin"));
        }

        if !self.users.set_admin(user_id, false, Utc::now()).await? {
            return Err(user_not_found());
        }

        log::info!("관리자 권한 회수: {} ({}), 요청자 {}", user.email, user_id, acting_admin_id);
        Ok(MessageResponse::new("Admin privileges revoked successfully"))
    }

    /// 구독 개월 수 선물
    ///
    /// 새 종료일 = max(기존 종료일, 현재) + `months` 달력 개월. 상태는 `active`가 됩니다.
    pub async fn gift_months(&self, user_id: &str, months: i64) -> Result<GiftMonthsResponse, AppError> {
        if !(MIN_GIFT_MONTHS..=MAX_GIFT_MONTHS).contains(&months) {
            return Err(AppError::ValidationError(
                "Months must be between 1 and 12".to_string(),
            ));
        }
        let months = months as u32;

        let user = self.require_user(user_id).await?;
        let now = Utc::now();
        let new_end_date = user.gifted_period_end(months, now);

        if !self.users.activate_subscription_until(user_id, new_end_date, now).await? {
            return Err(user_not_found());
        }

        log::info!("구독 {}개월 선물: {} -> {}", months, user.email, new_end_date);

        Ok(GiftMonthsResponse {
            message: format!("Gifted {} month(s) to {}", months, user.email),
            new_end_date,
        })
    }

    /// 결제 활성화/면제 전환. `billing_exempt = !enable`
    pub async fn toggle_billing(&self, user_id: &str, enable: bool) -> Result<ToggleBillingResponse, AppError> {
        let billing_exempt = !enable;

        if !self.users.set_billing_exempt(user_id, billing_exempt, Utc::now()).await? {
            return Err(user_not_found());
        }

        log::info!("사용자 {} 결제 면제: {}", user_id, billing_exempt);

        let message = if enable {
            "Billing enabled for user"
        } else {
            "Billing disabled for user"
        };

        Ok(ToggleBillingResponse {
            message: message.to_string(),
            billing_exempt,
        })
    }

    pub async fn user_projects(&self, user_id: &str) -> Result<UserProjectsResponse, AppError> {
        let projects = self.projects.find_by_user(user_id).await?;
        Ok(UserProjectsResponse {
            count: projects.len(),
            projects,
        })
    }

    pub async fn user_invoices(&self, user_id: &str) -> Result<UserInvoicesResponse, AppError> {
        let invoices = self.invoices.find_by_user(user_id).await?;
        let total_paid = self.invoices.sum_paid(Some(user_id)).await?;

        Ok(UserInvoicesResponse {
            count: invoices.len(),
            invoices,
            total_paid,
        })
    }

    pub async fn get_config(&self) -> Result<SystemConfig, AppError> {
        self.config.get_config().await
    }

    pub async fn update_config(
        &self,
        patch: SystemConfigUpdate,
        acting_admin_id: &str,
    ) -> Result<SystemConfig, AppError> {
        self.config.update_config(patch, acting_admin_id).await
    }
}
