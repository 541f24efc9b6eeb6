//! 사용자 작업 공간: 프로젝트와 AI 대화

pub mod project;
pub mod conversation;

pub use project::{Project, ProjectFile};
pub use conversation::{ChatMessage, Conversation, MessageRole, DEFAULT_CONVERSATION_TITLE};
