//! JWT 액세스 토큰 클레임
//!
//! RFC 7519 표준 클레임(`sub`, `iat`, `exp`)에 이메일을 더한 구조입니다.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// 검증이 끝난 토큰에서 꺼낸 주체 정보
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    pub subject_id: String,
    pub email: String,
}

impl From<TokenClaims> for DecodedToken {
    fn from(claims: TokenClaims) -> Self {
        Self {
            subject_id: claims.sub,
            email: claims.email,
        }
    }
}
