//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Web App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - JWT 검증, 관리자 확인
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 공통 패턴
//!
//! - 서비스는 `web::Data<AppState>`로 주입받습니다.
//! - 요청 본문은 `payload.validate()?`로 먼저 검증합니다.
//! - 인증된 요청자는 [`AuthenticatedUser`] extractor로 꺼냅니다.
//! - 모든 에러는 `AppError`로 반환되어 `{"error": "..."}` 응답이 됩니다.
//!
//! ```rust,ignore
//! #[get("/{project_id}")]
//! pub async fn get_project(
//!     state: web::Data<AppState>,
//!     user: AuthenticatedUser,
//!     project_id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let project = state.projects.get(&user.user_id, &project_id).await?;
//!     Ok(HttpResponse::Ok().json(project))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입, 로그인, 현재 사용자
//! - **`admin`**: 통계, 사용자 관리, 구독 선물, 시스템 설정
//! - **`projects`**: 프로젝트 CRUD
//! - **`conversations`**: 대화 기록과 메시지 추가
//! - **`settings`**: 사용자 연동 토큰
//!
//! [`AuthenticatedUser`]: crate::domain::models::AuthenticatedUser

pub mod auth;
pub mod admin;
pub mod projects;
pub mod conversations;
pub mod settings;
