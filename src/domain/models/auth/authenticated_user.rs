//! 인증된 사용자 컨텍스트
//!
//! 인증 미들웨어가 토큰 검증 후 request extensions에 저장하고,
//! 핸들러는 extractor로 꺼내 씁니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
//!     log::info!("요청 사용자: {}", user.user_id);
//!     // ...
//! }
//! ```

use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::errors::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 토큰의 `sub` 클레임
    pub user_id: String,
    pub email: String,
    /// 관리자 라우트에서 저장소로 확인된 경우에만 `true`입니다.
    pub is_admin: bool,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Not authenticated".to_string(),
            ))),
        }
    }
}
