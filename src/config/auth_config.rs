//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 관련된 설정을 관리합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use super::data_config::{Environment, VarSource};

/// 개발 환경에서만 허용되는 기본 서명 키
const DEV_FALLBACK_SECRET: &str = "devora-dev-secret-change-me";

/// JWT 토큰 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 서명 키
    pub secret: String,
    /// 액세스 토큰 유효 시간 (시간 단위)
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 읽습니다.
    ///
    /// 프로덕션에서 `JWT_SECRET`이 없으면 에러를 반환합니다.
    pub fn from_source(get: VarSource<'_>, environment: &Environment) -> Result<Self, String> {
        let secret = match get("JWT_SECRET").filter(|s| !s.trim().is_empty()) {
            Some(secret) => secret,
            None if environment.is_production() => {
                return Err("JWT_SECRET must be set in production".to_string());
            }
            None => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEV_FALLBACK_SECRET.to_string()
            }
        };

        let expiration_hours = get("JWT_EXPIRATION_HOURS")
            .and_then(|h| h.parse::<i64>().ok())
            .filter(|h| *h > 0)
            .unwrap_or(24);

        Ok(Self {
            secret,
            expiration_hours,
        })
    }
}
