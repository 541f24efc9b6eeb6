//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 담당합니다.
//!
//! # 인증 미들웨어 (AuthMiddleware)
//!
//! - `Authorization: Bearer <token>` 헤더의 JWT 검증
//! - 검증된 사용자를 request extension에 [`AuthenticatedUser`]로 저장
//! - [`AuthMiddleware::admin`]은 저장소의 최신 사용자 상태로 관리자 여부를 확인
//!
//! 실패 응답은 핸들러 에러와 같은 `{"error": "..."}` 형식입니다.
//!
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/api/admin")
//!             .wrap(AuthMiddleware::admin())
//!             .service(handlers::admin::stats)
//!     )
//! ```
//!
//! [`AuthenticatedUser`]: crate::domain::models::AuthenticatedUser

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
