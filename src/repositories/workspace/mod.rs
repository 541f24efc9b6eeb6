pub mod project_repo;
pub mod conversation_repo;

pub use project_repo::{ProjectRepository, ProjectStore};
pub use conversation_repo::{ConversationRepository, ConversationStore};
