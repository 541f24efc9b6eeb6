//! # Domain Models Module
//!
//! 저장되지 않는 도메인 값 객체입니다.
//!
//! ## Entities vs Models
//!
//! - `entities`: MongoDB 문서로 저장되며 고유 `id`를 가집니다.
//! - `models`: 요청 처리 중에만 존재하는 값입니다. 인증 컨텍스트, 토큰 클레임,
//!   요청 시점에 계산되는 관리자 통계가 여기에 속합니다.

pub mod auth;
pub mod token;
pub mod stats;

pub use auth::authenticated_user::AuthenticatedUser;
pub use auth::authentication_request::AuthMode;
pub use token::token::{DecodedToken, TokenClaims};
pub use stats::admin_stats::AdminStats;
