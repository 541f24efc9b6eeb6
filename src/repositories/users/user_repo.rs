//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션의 데이터 액세스 계층입니다.
//!
//! ## 인덱스
//!
//! - `email` (unique) - 중복 가입 방지의 최종 보루
//! - `id` (unique) - 모든 단건 조회/수정의 키
//! - `created_at` (desc) - 월간 신규 가입자 집계
//!
//! ## 에러 처리
//!
//! - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류, 스키마에 맞지 않는 문서
//! - **ConflictError**: 이메일 유니크 인덱스 위반

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::db::{Database, USERS};
use crate::domain::entities::users::{SubscriptionStatus, User};
use crate::errors::errors::AppError;
use crate::repositories::{is_duplicate_key, iso_timestamp};

/// 사용자 저장소
///
/// 수정 메서드는 대상 문서가 존재했는지(`matched`)를 `bool`로 돌려줍니다.
/// 값이 이미 같아서 실제 변경이 없어도 문서가 있으면 `true`입니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자 저장. 이메일이 이미 있으면 `ConflictError`
    async fn insert(&self, user: &User) -> Result<(), AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 저장 순서대로 `skip`개를 건너뛰고 최대 `limit`개
    async fn list(&self, skip: u64, limit: i64) -> Result<Vec<User>, AppError>;

    async fn set_active(&self, id: &str, is_active: bool, now: DateTime<Utc>) -> Result<bool, AppError>;

    async fn set_admin(&self, id: &str, is_admin: bool, now: DateTime<Utc>) -> Result<bool, AppError>;

    /// 구독 종료일을 갱신하고 상태를 `active`로 바꿉니다.
    async fn activate_subscription_until(
        &self,
        id: &str,
        period_end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError>;

    async fn set_billing_exempt(&self, id: &str, exempt: bool, now: DateTime<Utc>) -> Result<bool, AppError>;

    async fn count_all(&self) -> Result<u64, AppError>;

    async fn count_by_status(&self, status: SubscriptionStatus) -> Result<u64, AppError>;

    /// `created_at >= since`인 사용자 수. 해석할 수 없는 `created_at`은 제외합니다.
    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, AppError>;
}

/// MongoDB 기반 [`UserStore`]
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<User>(USERS),
        }
    }

    /// 컬렉션 인덱스 생성 (애플리케이션 시작 시 1회)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("id_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, id_index, created_at_index])
            .await?;

        Ok(())
    }

    async fn set_fields(&self, id: &str, mut fields: Document, now: DateTime<Utc>) -> Result<bool, AppError> {
        fields.insert("updated_at", iso_timestamp(now));

        let result = self.collection
            .update_one(doc! { "id": id }, doc! { "$set": fields })
            .await?;

        Ok(result.matched_count > 0)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, user: &User) -> Result<(), AppError> {
        self.collection
            .insert_one(user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("Email already registered".to_string())
                } else {
                    AppError::from(e)
                }
            })?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    async fn list(&self, skip: u64, limit: i64) -> Result<Vec<User>, AppError> {
        let cursor = self.collection
            .find(doc! {})
            .skip(skip)
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn set_active(&self, id: &str, is_active: bool, now: DateTime<Utc>) -> Result<bool, AppError> {
        self.set_fields(id, doc! { "is_active": is_active }, now).await
    }

    async fn set_admin(&self, id: &str, is_admin: bool, now: DateTime<Utc>) -> Result<bool, AppError> {
        self.set_fields(id, doc! { "is_admin": is_admin }, now).await
    }

    async fn activate_subscription_until(
        &self,
        id: &str,
        period_end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let fields = doc! {
            "current_period_end": iso_timestamp(period_end),
            "subscription_status": SubscriptionStatus::Active.as_str(),
        };
        self.set_fields(id, fields, now).await
    }

    async fn set_billing_exempt(&self, id: &str, exempt: bool, now: DateTime<Utc>) -> Result<bool, AppError> {
        self.set_fields(id, doc! { "billing_exempt": exempt }, now).await
    }

    async fn count_all(&self) -> Result<u64, AppError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn count_by_status(&self, status: SubscriptionStatus) -> Result<u64, AppError> {
        Ok(self.collection
            .count_documents(doc! { "subscription_status": status.as_str() })
            .await?)
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, AppError> {
        // created_at은 문자열로 저장되므로 날짜로 변환한 뒤 비교합니다.
        let since = mongodb::bson::DateTime::from_millis(since.timestamp_millis());
        let pipeline = vec![
            doc! {
                "$addFields": {
                    "created_at_date": {
                        "$dateFromString": { "dateString": "$created_at", "onError": Bson::Null }
                    }
                }
            },
            doc! { "$match": { "created_at_date": { "$gte": since } } },
            doc! { "$count": "count" },
        ];

        let mut cursor = self.collection.aggregate(pipeline).await?;

        match cursor.try_next().await? {
            Some(result) => Ok(count_from(&result)),
            None => Ok(0),
        }
    }
}

/// `$count` 단계 결과에서 정수를 꺼냅니다 (서버가 int32/int64 중 하나로 반환).
fn count_from(result: &Document) -> u64 {
    match result.get("count") {
        Some(Bson::Int32(n)) => (*n).max(0) as u64,
        Some(Bson::Int64(n)) => (*n).max(0) as u64,
        _ => 0,
    }
}
