//! 프로젝트, 대화 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::workspace::{MessageRole, ProjectFile};
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(max = 120, message = "Project name must be at most 120 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,

    #[serde(default)]
    pub files: Vec<ProjectFile>,
}

/// 부분 수정. 전달된 필드만 변경됩니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(max = 120, message = "Project name must be at most 120 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub files: Option<Vec<ProjectFile>>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateConversationRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppendMessageRequest {
    pub role: MessageRole,

    #[validate(length(min = 1, message = "Message content is required"))]
    pub content: String,
}
