use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 프로젝트에 포함된 소스 파일
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// 사용자가 생성한 코드 프로젝트 (`projects` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    /// 소유자 ID. 다른 사용자의 프로젝트는 존재하지 않는 것으로 취급합니다.
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub files: Vec<ProjectFile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        user_id: &str,
        name: String,
        description: Option<String>,
        files: Vec<ProjectFile>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name,
            description,
            files,
            created_at: now,
            updated_at: now,
        }
    }
}
