//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체(`Arc<dyn UserStore>` 등)를 생성자로 받습니다.
//! 애플리케이션 시작 시 한 번 조립되어 [`crate::state::AppState`]로 핸들러에 공유됩니다.
//!
//! - [`auth`] - 회원가입, 로그인, 비밀번호 해싱, JWT
//! - [`billing`] - Stripe 고객 생성 게이트웨이
//! - [`admin`] - 대시보드 통계와 사용자 관리
//! - [`config`] - 전역 시스템 설정
//! - [`workspace`] - 프로젝트와 대화 기록
//! - [`settings`] - 사용자별 외부 연동 토큰
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let auth = AuthService::new(users, passwords, tokens, billing);
//! let token = auth.login(request).await?;
//! ```

pub mod auth;
pub mod billing;
pub mod admin;
pub mod config;
pub mod workspace;
pub mod settings;
