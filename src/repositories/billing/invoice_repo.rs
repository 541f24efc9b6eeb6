//! `invoices` 컬렉션 리포지토리
//!
//! 인보이스는 결제 게이트웨이 웹훅이 기록합니다. 관리자 API는 조회와 매출 집계만 합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::db::{Database, INVOICES};
use crate::domain::entities::billing::Invoice;
use crate::errors::errors::AppError;

#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn insert(&self, invoice: &Invoice) -> Result<(), AppError>;

    /// 사용자의 인보이스, 최신순
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Invoice>, AppError>;

    /// `status = paid` 인보이스의 `amount` 합계. `user_id`가 없으면 전체 합계입니다.
    async fn sum_paid(&self, user_id: Option<&str>) -> Result<f64, AppError>;
}

#[derive(Clone)]
pub struct InvoiceRepository {
    collection: Collection<Invoice>,
}

impl InvoiceRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Invoice>(INVOICES),
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.collection.create_index(user_index).await?;

        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for InvoiceRepository {
    async fn insert(&self, invoice: &Invoice) -> Result<(), AppError> {
        self.collection.insert_one(invoice).await?;
        Ok(())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Invoice>, AppError> {
        let cursor = self.collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn sum_paid(&self, user_id: Option<&str>) -> Result<f64, AppError> {
        let mut filter = doc! { "status": "paid" };
        if let Some(user_id) = user_id {
            filter.insert("user_id", user_id);
        }

        let pipeline = vec![
            doc! { "$match": filter },
            doc! { "$group": { "_id": Bson::Null, "total": { "$sum": "$amount" } } },
        ];

        let mut cursor = self.collection.aggregate(pipeline).await?;

        match cursor.try_next().await? {
            Some(result) => Ok(total_from(&result)),
            None => Ok(0.0),
        }
    }
}

/// `$sum` 결과는 저장된 숫자 타입에 따라 double/int32/int64 중 하나입니다.
fn total_from(result: &Document) -> f64 {
    match result.get("total") {
        Some(Bson::Double(total)) => *total,
        Some(Bson::Int32(total)) => f64::from(*total),
        Some(Bson::Int64(total)) => *total as f64,
        _ => 0.0,
    }
}
