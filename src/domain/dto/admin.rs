//! 관리자 API DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::dto::users::AdminUserView;
use crate::domain::entities::billing::Invoice;
use crate::domain::entities::workspace::Project;

pub const DEFAULT_PAGE_SIZE: i64 = 50;
pub const MAX_PAGE_SIZE: i64 = 200;

/// `GET /admin/users?skip&limit`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

impl PaginationQuery {
    /// `(skip, limit)`를 반환합니다. `limit`은 1..=200으로 제한되며 기본값은 50입니다.
    pub fn resolve(&self) -> (u64, i64) {
        let limit = self
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        (self.skip.unwrap_or(0), limit)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub is_active: bool,
}

/// 범위 검사(1-12)는 서비스에서 수행합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct GiftMonthsRequest {
    pub months: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleBillingRequest {
    pub enable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UsersPage {
    pub users: Vec<AdminUserView>,
    pub skip: u64,
    pub limit: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserProjectsResponse {
    pub projects: Vec<Project>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserInvoicesResponse {
    pub invoices: Vec<Invoice>,
    pub count: usize,
    /// `paid` 인보이스 금액 합계
    pub total_paid: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftMonthsResponse {
    pub message: String,
    pub new_end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleBillingResponse {
    pub message: String,
    pub billing_exempt: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults_and_clamping() {
        assert_eq!(PaginationQuery::default().resolve(), (0, 50));

        let query = PaginationQuery { skip: Some(20), limit: Some(10_000) };
        assert_eq!(query.resolve(), (20, 200));

        let query = PaginationQuery { skip: None, limit: Some(0) };
        assert_eq!(query.resolve(), (0, 1));

        let query = PaginationQuery { skip: None, limit: Some(-5) };
        assert_eq!(query.resolve(), (0, 1));
    }
}
