//! 관리자 대시보드 통계 (요청 시점에 계산되며 저장되지 않음)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_users: u64,
    pub active_subscriptions: u64,
    /// `paid` 인보이스 금액 합계
    pub total_revenue: f64,
    pub total_projects: u64,
    /// 현재 UTC 월 1일 00:00 이후 가입자 수
    pub new_users_this_month: u64,
    /// 해지 사용자 비율 (%), 소수점 둘째 자리 반올림
    pub churn_rate: f64,
}

impl AdminStats {
    /// `canceled / total × 100`. 사용자가 없으면 0입니다.
    pub fn churn_rate(canceled: u64, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let rate = canceled as f64 / total as f64 * 100.0;
        (rate * 100.0).round() / 100.0
    }
}
