//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문을 정의합니다. 요청 DTO는 `validator`로 검증되고,
//! 응답 DTO는 엔티티에서 외부 노출 가능한 필드만 투영합니다.
//!
//! - [`auth`] - 회원가입, 로그인, 토큰 응답
//! - [`users`] - 사용자 공개 투영
//! - [`admin`] - 관리자 API 요청/응답
//! - [`workspace`] - 프로젝트, 대화 요청

pub mod auth;
pub mod users;
pub mod admin;
pub mod workspace;

pub use auth::*;
pub use users::*;
pub use admin::*;
pub use workspace::*;
