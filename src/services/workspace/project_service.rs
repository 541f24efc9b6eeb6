use std::sync::Arc;
use chrono::Utc;
use crate::domain::dto::workspace::{CreateProjectRequest, UpdateProjectRequest};
use crate::domain::entities::workspace::Project;
use crate::errors::errors::AppError;
use crate::repositories::ProjectStore;
use crate::utils::string_utils::{clean_optional_string, validate_required_string};

pub struct ProjectService {
    projects: Arc<dyn ProjectStore>,
}

fn project_not_found() -> AppError {
    AppError::NotFound("Project not found".to_string())
}

impl ProjectService {
    pub fn new(projects: Arc<dyn ProjectStore>) -> Self {
        Self { projects }
    }

    /// 최신 생성 순
    pub async fn list(&self, user_id: &str) -> Result<Vec<Project>, AppError> {
        self.projects.find_by_user(user_id).await
    }

    pub async fn create(&self, user_id: &str, request: CreateProjectRequest) -> Result<Project, AppError> {
        let name = validate_required_string(&request.name, "Project name")?;
        let project = Project::new(user_id, name, request.description, request.files);

        self.projects.insert(&project).await?;
        log::debug!("프로젝트 생성: {} (사용자 {})", project.id, user_id);

        Ok(project)
    }

    pub async fn get(&self, user_id: &str, project_id: &str) -> Result<Project, AppError> {
        self.projects
            .find_owned(project_id, user_id)
            .await?
            .ok_or_else(project_not_found)
    }

    /// 전달된 필드만 바꿉니다. 이름은 공백일 수 없고, 설명은 공백이면 지워집니다.
    pub async fn update(
        &self,
        user_id: &str,
        project_id: &str,
        request: UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        let mut project = self.get(user_id, project_id).await?;

        if let Some(name) = request.name {
            project.name = validate_required_string(&name, "Project name")?;
        }
        if let Some(description) = request.description {
            project.description = clean_optional_string(Some(description));
        }
        if let Some(files) = request.files {
            project.files = files;
        }
        project.updated_at = Utc::now();

        if !self.projects.replace(&project).await? {
            return Err(project_not_found());
        }

        Ok(project)
    }

    pub async fn delete(&self, user_id: &str, project_id: &str) -> Result<(), AppError> {
        if !self.projects.delete_owned(project_id, user_id).await? {
            return Err(project_not_found());
        }

        log::debug!("프로젝트 삭제: {} (사용자 {})", project_id, user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::workspace::ProjectFile;
    use crate::repositories::MemoryStore;

    fn create_request(name: &str) -> CreateProjectRequest {
        CreateProjectRequest {
            name: name.to_string(),
            description: None,
            files: vec![ProjectFile {
                name: "index.html".to_string(),
                content: "<h1>hi</h1>".to_string(),
                language: Some("html".to_string()),
            }],
        }
    }

    #[actix_web::test]
    async fn test_create_trims_name_and_rejects_blank() {
        let service = ProjectService::new(Arc::new(MemoryStore::new()));

        let project = service.create("u1", create_request("  Landing  ")).await.unwrap();
        assert_eq!(project.name, "Landing");
        assert_eq!(project.files.len(), 1);

        let blank = service.create("u1", create_request("   ")).await;
        assert!(matches!(blank, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_other_users_project_is_not_found() {
        let service = ProjectService::new(Arc::new(MemoryStore::new()));
        let project = service.create("owner", create_request("Mine")).await.unwrap();

        assert!(matches!(service.get("intruder", &project.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.delete("intruder", &project.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(service.get("owner", &project.id).await.is_ok());
    }

    #[actix_web::test]
    async fn test_partial_update() {
        let service = ProjectService::new(Arc::new(MemoryStore::new()));
        let mut request = create_request("Shop");
        request.description = Some("old".to_string());
        let project = service.create("u1", request).await.unwrap();

        let updated = service
            .update(
                "u1",
                &project.id,
                UpdateProjectRequest {
                    description: Some("  ".to_string()),
                    ..UpdateProjectRequest::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Shop");
        assert_eq!(updated.description, None);
        assert_eq!(updated.files.len(), 1);
        assert!(updated.updated_at >= project.updated_at);

        let blank_name = service
            .update(
                "u1",
                &project.id,
                UpdateProjectRequest {
                    name: Some(" ".to_string()),
                    ..UpdateProjectRequest::default()
                },
            )
            .await;
        assert!(matches!(blank_name, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_delete_then_list() {
        let service = ProjectService::new(Arc::new(MemoryStore::new()));
        let first = service.create("u1", create_request("One")).await.unwrap();
        service.create("u1", create_request("Two")).await.unwrap();

        service.delete("u1", &first.id).await.unwrap();

        let remaining = service.list("u1").await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Two");
    }
}
