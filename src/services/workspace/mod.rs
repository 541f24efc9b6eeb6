//! 사용자 작업 공간 서비스
//!
//! 모든 조회/수정은 소유자(`user_id`) 범위 안에서만 이루어집니다.
//! 다른 사용자의 리소스는 존재하지 않는 것과 같게 `NotFound`로 응답합니다.

pub mod project_service;
pub mod conversation_service;

pub use project_service::ProjectService;
pub use conversation_service::ConversationService;
