//! In-memory store
//!
//! 모든 저장소 trait을 하나의 구조체로 구현합니다. 컬렉션마다 `tokio::sync::RwLock`으로
//! 보호되며 프로세스가 끝나면 데이터가 사라집니다. 테스트와 `STORE_BACKEND=memory`
//! 로컬 실행에 사용합니다.

use std::collections::HashMap;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use crate::domain::entities::billing::Invoice;
use crate::domain::entities::settings::{SystemConfig, UserSettings};
use crate::domain::entities::users::{SubscriptionStatus, User};
use crate::domain::entities::workspace::{ChatMessage, Conversation, Project};
use crate::errors::errors::AppError;
use crate::repositories::{
    ConfigStore, ConversationStore, InvoiceStore, ProjectStore, SettingsStore, UserStore,
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    /// 삽입 순서를 유지합니다 (목록 조회 순서).
    users: RwLock<Vec<User>>,
    invoices: RwLock<Vec<Invoice>>,
    projects: RwLock<Vec<Project>>,
    conversations: RwLock<Vec<Conversation>>,
    settings: RwLock<HashMap<String, UserSettings>>,
    system_config: RwLock<Option<SystemConfig>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `id`가 일치하는 사용자에 `apply`를 적용합니다. 사용자가 없으면 `false`
    async fn update_user<F>(&self, id: &str, now: DateTime<Utc>, apply: F) -> bool
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                apply(user);
                user.updated_at = now;
                true
            }
            None => false,
        }
    }
}

fn newest_first<T, F>(mut items: Vec<T>, created_at: F) -> Vec<T>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    items
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError("Email already registered".to_string()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn list(&self, skip: u64, limit: i64) -> Result<Vec<User>, AppError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .skip(skip as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn set_active(&self, id: &str, is_active: bool, now: DateTime<Utc>) -> Result<bool, AppError> {
        Ok(self.update_user(id, now, |user| user.is_active = is_active).await)
    }

    async fn set_admin(&self, id: &str, is_admin: bool, now: DateTime<Utc>) -> Result<bool, AppError> {
        Ok(self.update_user(id, now, |user| user.is_admin = is_admin).await)
    }

    async fn activate_subscription_until(
        &self,
        id: &str,
        period_end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        Ok(self
            .update_user(id, now, |user| {
                user.current_period_end = Some(period_end);
                user.subscription_status = SubscriptionStatus::Active;
            })
            .await)
    }

    async fn set_billing_exempt(&self, id: &str, exempt: bool, now: DateTime<Utc>) -> Result<bool, AppError> {
        Ok(self.update_user(id, now, |user| user.billing_exempt = Some(exempt)).await)
    }

    async fn count_all(&self) -> Result<u64, AppError> {
        Ok(self.users.read().await.len() as u64)
    }

    async fn count_by_status(&self, status: SubscriptionStatus) -> Result<u64, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|user| user.subscription_status == status).count() as u64)
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|user| user.created_at >= since).count() as u64)
    }
}

#[async_trait]
impl InvoiceStore for MemoryStore {
    async fn insert(&self, invoice: &Invoice) -> Result<(), AppError> {
        self.invoices.write().await.push(invoice.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Invoice>, AppError> {
        let invoices = self.invoices.read().await;
        let owned = invoices
            .iter()
            .filter(|invoice| invoice.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(owned, |invoice| invoice.created_at))
    }

    async fn sum_paid(&self, user_id: Option<&str>) -> Result<f64, AppError> {
        let invoices = self.invoices.read().await;
        Ok(invoices
            .iter()
            .filter(|invoice| invoice.is_paid())
            .filter(|invoice| user_id.is_none_or(|id| invoice.user_id == id))
            .map(|invoice| invoice.amount)
            .sum())
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn insert(&self, project: &Project) -> Result<(), AppError> {
        self.projects.write().await.push(project.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Project>, AppError> {
        let projects = self.projects.read().await;
        let owned = projects
            .iter()
            .filter(|project| project.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(owned, |project| project.created_at))
    }

    async fn find_owned(&self, id: &str, user_id: &str) -> Result<Option<Project>, AppError> {
        let projects = self.projects.read().await;
        Ok(projects
            .iter()
            .find(|project| project.id == id && project.user_id == user_id)
            .cloned())
    }

    async fn replace(&self, project: &Project) -> Result<bool, AppError> {
        let mut projects = self.projects.write().await;
        match projects
            .iter_mut()
            .find(|existing| existing.id == project.id && existing.user_id == project.user_id)
        {
            Some(existing) => {
                *existing = project.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_owned(&self, id: &str, user_id: &str) -> Result<bool, AppError> {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|project| !(project.id == id && project.user_id == user_id));
        Ok(projects.len() < before)
    }

    async fn count_all(&self) -> Result<u64, AppError> {
        Ok(self.projects.read().await.len() as u64)
    }
}

#[async_trait]
impl ConversationStore for MemoryStore {
    async fn insert(&self, conversation: &Conversation) -> Result<(), AppError> {
        self.conversations.write().await.push(conversation.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Conversation>, AppError> {
        let conversations = self.conversations.read().await;
        let owned = conversations
            .iter()
            .filter(|conversation| conversation.user_id == user_id)
            .cloned()
            .collect();
        Ok(newest_first(owned, |conversation| conversation.created_at))
    }

    async fn find_owned(&self, id: &str, user_id: &str) -> Result<Option<Conversation>, AppError> {
        let conversations = self.conversations.read().await;
        Ok(conversations
            .iter()
            .find(|conversation| conversation.id == id && conversation.user_id == user_id)
            .cloned())
    }

    async fn push_message(
        &self,
        id: &str,
        user_id: &str,
        message: &ChatMessage,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let mut conversations = self.conversations.write().await;
        match conversations
            .iter_mut()
            .find(|conversation| conversation.id == id && conversation.user_id == user_id)
        {
            Some(conversation) => {
                conversation.messages.push(message.clone());
                conversation.updated_at = now;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_owned(&self, id: &str, user_id: &str) -> Result<bool, AppError> {
        let mut conversations = self.conversations.write().await;
        let before = conversations.len();
        conversations.retain(|conversation| !(conversation.id == id && conversation.user_id == user_id));
        Ok(conversations.len() < before)
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn find(&self, user_id: &str) -> Result<Option<UserSettings>, AppError> {
        Ok(self.settings.read().await.get(user_id).cloned())
    }

    async fn upsert(&self, settings: &UserSettings) -> Result<(), AppError> {
        self.settings
            .write()
            .await
            .insert(settings.user_id.clone(), settings.clone());
        Ok(())
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn load(&self) -> Result<Option<SystemConfig>, AppError> {
        Ok(self.system_config.read().await.clone())
    }

    async fn save(&self, config: &SystemConfig) -> Result<(), AppError> {
        *self.system_config.write().await = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::billing::InvoiceStatus;

    fn user(email: &str) -> User {
        User::new(email.to_string(), "hash".to_string(), None, None)
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let store = MemoryStore::new();
        UserStore::insert(&store, &user("dup@example.com")).await.unwrap();

        let result = UserStore::insert(&store, &user("dup@example.com")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(UserStore::count_all(&store).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_update_reports_matched_even_without_change() {
        let store = MemoryStore::new();
        let alice = user("alice@example.com");
        UserStore::insert(&store, &alice).await.unwrap();

        assert!(store.set_active(&alice.id, true, Utc::now()).await.unwrap());
        assert!(!store.set_active("missing", true, Utc::now()).await.unwrap());
    }

    #[actix_web::test]
    async fn test_list_pagination_keeps_insertion_order() {
        let store = MemoryStore::new();
        for i in 0..5 {
            UserStore::insert(&store, &user(&format!("u{}@example.com", i))).await.unwrap();
        }

        let page = store.list(1, 2).await.unwrap();

        let emails: Vec<_> = page.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["u1@example.com", "u2@example.com"]);
    }

    #[actix_web::test]
    async fn test_sum_paid_filters_status_and_user() {
        let store = MemoryStore::new();
        for invoice in [
            Invoice::new("a", "in_1", 9.9, "eur", InvoiceStatus::Paid),
            Invoice::new("a", "in_2", 9.9, "eur", InvoiceStatus::Open),
            Invoice::new("b", "in_3", 20.0, "eur", InvoiceStatus::Paid),
            Invoice::new("b", "in_4", 50.0, "eur", InvoiceStatus::Void),
        ] {
            InvoiceStore::insert(&store, &invoice).await.unwrap();
        }

        assert!((store.sum_paid(None).await.unwrap() - 29.9).abs() < 1e-9);
        assert!((store.sum_paid(Some("a")).await.unwrap() - 9.9).abs() < 1e-9);
        assert_eq!(store.sum_paid(Some("nobody")).await.unwrap(), 0.0);
    }

    #[actix_web::test]
    async fn test_projects_are_scoped_to_owner() {
        let store = MemoryStore::new();
        let project = Project::new("owner", "Site".to_string(), None, Vec::new());
        ProjectStore::insert(&store, &project).await.unwrap();

        assert!(ProjectStore::find_owned(&store, &project.id, "owner").await.unwrap().is_some());
        assert!(ProjectStore::find_owned(&store, &project.id, "intruder").await.unwrap().is_none());
        assert!(!ProjectStore::delete_owned(&store, &project.id, "intruder").await.unwrap());
        assert!(ProjectStore::delete_owned(&store, &project.id, "owner").await.unwrap());
    }
}
