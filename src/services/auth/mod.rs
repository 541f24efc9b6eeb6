//! 인증 관련 서비스
//!
//! - [`password_service`] - bcrypt 해싱/검증
//! - [`token_service`] - JWT 발급/검증
//! - [`auth_service`] - 회원가입, 로그인, 현재 사용자

pub mod password_service;
pub mod token_service;
pub mod auth_service;

pub use password_service::PasswordService;
pub use token_service::TokenService;
pub use auth_service::AuthService;
