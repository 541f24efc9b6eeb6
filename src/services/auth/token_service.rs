//! JWT 액세스 토큰 발급/검증 서비스
//!
//! HS256 서명, 클레임은 `{ sub, email, iat, exp }`입니다.
//! 서명 키와 만료 시간은 생성 시 [`JwtConfig`]로 주입되며 전역 상태를 읽지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::domain::models::token::token::{DecodedToken, TokenClaims};
use crate::errors::errors::AppError;

/// 모든 토큰 검증 실패에 사용하는 메시지
const INVALID_CREDENTIALS: &str = "Could not validate credentials";

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiration_hours: config.expiration_hours,
        }
    }

    /// 액세스 토큰 발급
    pub fn issue_token(&self, subject_id: &str, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: subject_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰 검증
    ///
    /// 서명 불일치, 형식 오류, 만료 모두 `AuthenticationError`입니다.
    pub fn decode_token(&self, token: &str) -> Result<DecodedToken, AppError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| DecodedToken::from(token_data.claims))
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {}", e);
                AppError::AuthenticationError(INVALID_CREDENTIALS.to_string())
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str, hours: i64) -> TokenService {
        TokenService::new(&JwtConfig {
            secret: secret.to_string(),
            expiration_hours: hours,
        })
    }

    #[test]
    fn test_issue_and_decode() {
        let tokens = service("test-secret", 24);

        let token = tokens.issue_token("user-1", "alice@example.com").unwrap();
        let decoded = tokens.decode_token(&token).unwrap();

        assert_eq!(decoded.subject_id, "user-1");
        assert_eq!(decoded.email, "alice@example.com");
    }

    #[test]
    fn test_wrong_signature_is_unauthorized() {
        let token = service("secret-a", 24).issue_token("user-1", "a@b.c").unwrap();

        let result = service("secret-b", 24).decode_token(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        // 기본 leeway(60초)보다 충분히 과거
        let token = service("secret", -2).issue_token("user-1", "a@b.c").unwrap();

        let result = service("secret", -2).decode_token(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_malformed_token_is_unauthorized() {
        let result = service("secret", 24).decode_token("not.a.jwt");
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let tokens = service("secret", 24);

        assert_eq!(tokens.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(tokens.extract_bearer_token("Basic abc").is_err());
        assert!(tokens.extract_bearer_token("Bearer ").is_err());
    }
}
