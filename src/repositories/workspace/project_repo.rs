use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::db::{Database, PROJECTS};
use crate::domain::entities::workspace::Project;
use crate::errors::errors::AppError;

/// 프로젝트 저장소
///
/// `*_owned` 메서드는 `(id, user_id)` 쌍으로 조회하므로 다른 사용자의 문서는 보이지 않습니다.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn insert(&self, project: &Project) -> Result<(), AppError>;

    /// 최신순
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Project>, AppError>;

    async fn find_owned(&self, id: &str, user_id: &str) -> Result<Option<Project>, AppError>;

    /// 문서 전체를 교체합니다. 대상이 없으면 `false`
    async fn replace(&self, project: &Project) -> Result<bool, AppError>;

    async fn delete_owned(&self, id: &str, user_id: &str) -> Result<bool, AppError>;

    async fn count_all(&self) -> Result<u64, AppError>;
}

#[derive(Clone)]
pub struct ProjectRepository {
    collection: Collection<Project>,
}

impl ProjectRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Project>(PROJECTS),
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("user_id_created_at".to_string())
                .build())
            .build();

        self.collection.create_index(owner_index).await?;

        Ok(())
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn insert(&self, project: &Project) -> Result<(), AppError> {
        self.collection.insert_one(project).await?;
        Ok(())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Project>, AppError> {
        let cursor = self.collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_owned(&self, id: &str, user_id: &str) -> Result<Option<Project>, AppError> {
        Ok(self.collection
            .find_one(doc! { "id": id, "user_id": user_id })
            .await?)
    }

    async fn replace(&self, project: &Project) -> Result<bool, AppError> {
        let result = self.collection
            .replace_one(doc! { "id": &project.id, "user_id": &project.user_id }, project)
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete_owned(&self, id: &str, user_id: &str) -> Result<bool, AppError> {
        let result = self.collection
            .delete_one(doc! { "id": id, "user_id": user_id })
            .await?;

        Ok(result.deleted_count > 0)
    }

    async fn count_all(&self) -> Result<u64, AppError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}
