//! 결제 인보이스 엔티티
//!
//! `invoices` 컬렉션은 결제 게이트웨이 웹훅이 채우며, 이 서비스에서는 읽기 전용입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 인보이스 상태. 매출 집계에는 `Paid`만 포함됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Open,
    Void,
    Uncollectible,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub user_id: String,
    pub stripe_invoice_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub invoice_pdf: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(
        user_id: &str,
        stripe_invoice_id: &str,
        amount: f64,
        currency: &str,
        status: InvoiceStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            stripe_invoice_id: stripe_invoice_id.to_string(),
            amount,
            currency: currency.to_string(),
            status,
            invoice_pdf: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }
}
