//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 드라이버가 연결 풀을 관리하므로 [`Database`]는 복제해서 공유해도 됩니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::connect(&config.database).await?;
//! let users = database.collection::<User>(USERS);
//! ```

use mongodb::{bson::doc, options::ClientOptions, Client, Collection};
use log::info;
use serde::{de::DeserializeOwned, Serialize};
use crate::config::DatabaseConfig;
use crate::errors::errors::AppError;

pub const USERS: &str = "users";
pub const INVOICES: &str = "invoices";
pub const PROJECTS: &str = "projects";
pub const CONVERSATIONS: &str = "conversations";
pub const USER_SETTINGS: &str = "user_settings";
pub const SYSTEM_CONFIG: &str = "system_config";

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 생성하고 `ping`으로 연결 상태를 검증합니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.mongo_url).await?;

        // 서버 측 로그에서 연결 출처를 구분하기 위한 이름
        client_options.app_name = Some("devora_backend".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들
    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync + Serialize + DeserializeOwned,
    {
        self.get_database().collection::<T>(name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
