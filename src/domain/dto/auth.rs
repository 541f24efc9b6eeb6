//! 인증 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

/// 회원가입 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "Password must be between 1 and 128 characters"))]
    pub password: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "Full name must be at most 100 characters"))]
    pub full_name: Option<String>,
}

/// 로그인 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// 액세스 토큰 응답
///
/// ```json
/// { "access_token": "eyJhbGciOi...", "token_type": "bearer" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid: RegisterRequest = serde_json::from_str(
            r#"{"email": "alice@example.com", "password": "hunter22", "full_name": "  "}"#,
        )
        .unwrap();
        assert!(valid.validate().is_ok());
        assert!(valid.full_name.is_none());

        let invalid: RegisterRequest =
            serde_json::from_str(r#"{"email": "not-an-email", "password": ""}"#).unwrap();
        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_padded_email_is_trimmed_before_validation() {
        let login: LoginRequest =
            serde_json::from_str(r#"{"email": " a@example.com ", "password": "pw"}"#).unwrap();
        assert_eq!(login.email, "a@example.com");
        assert!(login.validate().is_ok());

        let register: RegisterRequest =
            serde_json::from_str(r#"{"email": "\tB@Example.com", "password": "pw"}"#).unwrap();
        assert_eq!(register.email, "B@Example.com");
        assert!(register.validate().is_ok());
    }

    #[test]
    fn test_token_response_shape() {
        let json = serde_json::to_value(TokenResponse::bearer("abc".to_string())).unwrap();
        assert_eq!(json["access_token"], "abc");
        assert_eq!(json["token_type"], "bearer");
    }
}
