//! Devora 백엔드
//!
//! AI 웹앱 빌더 Devora의 계정, 구독, 관리자 콘솔, 작업 공간 API 서버입니다.
//!
//! # Features
//!
//! - **인증**: 이메일/비밀번호 가입과 로그인, HS256 JWT
//! - **결제 연동**: 가입 시 Stripe 고객 생성 (실패해도 가입은 진행)
//! - **관리자 콘솔**: 통계, 사용자 관리, 구독 선물, 결제 면제, 시스템 설정
//! - **작업 공간**: 프로젝트, 대화 기록, 사용자별 연동 토큰
//! - **저장소**: MongoDB 또는 인메모리 (`STORE_BACKEND`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/* 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← JWT 검증, 관리자 확인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (AppState로 공유)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 저장소 trait + MongoDB/메모리 구현
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use devora_backend::state::{AppState, Stores};
//! use devora_backend::routes::configure_all_routes;
//!
//! let state = web::Data::new(AppState::new(Stores::in_memory(), billing, &config.password, &config.jwt));
//! let app = App::new().app_data(state).configure(configure_all_routes);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
