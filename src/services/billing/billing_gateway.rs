//! 결제 게이트웨이 어댑터
//!
//! 회원가입 시 결제 고객(customer)을 생성합니다. 결제 제공자가 응답하지 않아도
//! 가입은 진행되어야 하므로, 실패는 로그로 남기고 `None`을 반환합니다.
//!
//! ```text
//! POST {api_base}/customers
//! Authorization: Bearer sk_...
//! Content-Type: application/x-www-form-urlencoded
//!
//! email=alice@example.com&name=Alice
//! ```

use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::config::StripeConfig;
use crate::errors::errors::AppError;

#[async_trait]
pub trait BillingGateway: Send + Sync {
    /// 결제 고객을 생성하고 고객 ID를 반환합니다. 어떤 실패든 `None`입니다.
    async fn create_customer(&self, email: &str, name: Option<&str>) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct StripeCustomer {
    id: String,
}

/// Stripe REST API 구현
pub struct StripeGateway {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl StripeGateway {
    pub fn new(api_key: String, api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    async fn request_customer(&self, email: &str, name: Option<&str>) -> Result<String, AppError> {
        let mut params = vec![("email", email)];
        if let Some(name) = name {
            params.push(("name", name));
        }

        let response = self.client
            .post(format!("{}/customers", self.api_base))
            .bearer_auth(&self.api_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 고객 생성 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Stripe 고객 생성 실패 ({}): {}", status, error_text
            )));
        }

        let customer = response
            .json::<StripeCustomer>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 응답 파싱 실패: {}", e)))?;

        Ok(customer.id)
    }
}

#[async_trait]
impl BillingGateway for StripeGateway {
    async fn create_customer(&self, email: &str, name: Option<&str>) -> Option<String> {
        match self.request_customer(email, name).await {
            Ok(customer_id) => {
                log::info!("Stripe 고객 생성: {} -> {}", email, customer_id);
                Some(customer_id)
            }
            Err(e) => {
                log::error!("Failed to create Stripe customer for {}: {}", email, e);
                None
            }
        }
    }
}

/// 결제 키가 설정되지 않은 환경용 구현. 항상 `None`을 반환합니다.
pub struct DisabledGateway;

#[async_trait]
impl BillingGateway for DisabledGateway {
    async fn create_customer(&self, email: &str, _name: Option<&str>) -> Option<String> {
        log::debug!("결제 연동 비활성화: {} 고객 생성 건너뜀", email);
        None
    }
}

/// 설정에 따라 게이트웨이 구현을 선택합니다.
pub fn gateway_from_config(config: &StripeConfig) -> Arc<dyn BillingGateway> {
    match &config.api_key {
        Some(api_key) => Arc::new(StripeGateway::new(api_key.clone(), config.api_base.clone())),
        None => {
            log::warn!("STRIPE_API_KEY 미설정: 결제 고객 생성이 비활성화됩니다");
            Arc::new(DisabledGateway)
        }
    }
}
