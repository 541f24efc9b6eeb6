//! 결제 게이트웨이(Stripe) 설정

use super::data_config::VarSource;

/// Stripe API 설정
///
/// `STRIPE_API_KEY`가 없으면 결제 고객 생성을 건너뜁니다.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub api_key: Option<String>,
    pub api_base: String,
}

impl StripeConfig {
    pub fn from_source(get: VarSource<'_>) -> Self {
        Self {
            api_key: get("STRIPE_API_KEY").filter(|key| !key.trim().is_empty()),
            api_base: get("STRIPE_API_BASE")
                .unwrap_or_else(|| "https://api.stripe.com/v1".to_string()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}
