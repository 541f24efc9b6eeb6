//! 애플리케이션 공유 상태
//!
//! 저장소 구현을 고르고 서비스를 한 번 조립해 `web::Data<AppState>`로 등록합니다.
//! 핸들러와 인증 미들웨어는 모두 이 상태를 통해 서비스에 접근합니다.
//!
//! ```rust,ignore
//! let stores = Stores::mongo(&database).await?;
//! let state = web::Data::new(AppState::new(stores, billing, &config.password, &config.jwt));
//!
//! HttpServer::new(move || App::new().app_data(state.clone()))
//! ```

use std::sync::Arc;
use crate::config::{JwtConfig, PasswordConfig};
use crate::db::Database;
use crate::errors::errors::AppError;
use crate::repositories::{
    ConfigStore, ConversationRepository, ConversationStore, InvoiceRepository, InvoiceStore,
    MemoryStore, ProjectRepository, ProjectStore, SettingsRepository, SettingsStore,
    SystemConfigRepository, UserRepository, UserStore,
};
use crate::services::admin::AdminService;
use crate::services::auth::{AuthService, PasswordService, TokenService};
use crate::services::billing::BillingGateway;
use crate::services::config::ConfigService;
use crate::services::settings::SettingsService;
use crate::services::workspace::{ConversationService, ProjectService};

/// 컬렉션별 저장소 묶음
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub invoices: Arc<dyn InvoiceStore>,
    pub projects: Arc<dyn ProjectStore>,
    pub conversations: Arc<dyn ConversationStore>,
    pub settings: Arc<dyn SettingsStore>,
    pub system_config: Arc<dyn ConfigStore>,
}

impl Stores {
    /// MongoDB 저장소를 만들고 인덱스를 생성합니다.
    pub async fn mongo(db: &Database) -> Result<Self, AppError> {
        let users = UserRepository::new(db);
        let invoices = InvoiceRepository::new(db);
        let projects = ProjectRepository::new(db);
        let conversations = ConversationRepository::new(db);
        let settings = SettingsRepository::new(db);

        users.create_indexes().await?;
        invoices.create_indexes().await?;
        projects.create_indexes().await?;
        conversations.create_indexes().await?;
        settings.create_indexes().await?;

        log::info!("MongoDB 인덱스 준비 완료: {}", db.database_name());

        Ok(Self {
            users: Arc::new(users),
            invoices: Arc::new(invoices),
            projects: Arc::new(projects),
            conversations: Arc::new(conversations),
            settings: Arc::new(settings),
            system_config: Arc::new(SystemConfigRepository::new(db)),
        })
    }

    /// 모든 컬렉션이 하나의 [`MemoryStore`]를 공유합니다.
    pub fn in_memory() -> Self {
        Self::from_memory(Arc::new(MemoryStore::new()))
    }

    pub fn from_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            invoices: store.clone(),
            projects: store.clone(),
            conversations: store.clone(),
            settings: store.clone(),
            system_config: store,
        }
    }
}

pub struct AppState {
    pub auth: Arc<AuthService>,
    pub admin: Arc<AdminService>,
    pub projects: Arc<ProjectService>,
    pub conversations: Arc<ConversationService>,
    pub settings: Arc<SettingsService>,
    /// 인증 미들웨어의 토큰 검증용
    pub tokens: Arc<TokenService>,
    /// 관리자 라우트에서 요청자의 최신 상태를 확인하는 용도
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(
        stores: Stores,
        billing: Arc<dyn BillingGateway>,
        password_config: &PasswordConfig,
        jwt_config: &JwtConfig,
    ) -> Self {
        let passwords = Arc::new(PasswordService::new(password_config));
        let tokens = Arc::new(TokenService::new(jwt_config));
        let config = Arc::new(ConfigService::new(stores.system_config.clone()));

        let auth = AuthService::new(stores.users.clone(), passwords, tokens.clone(), billing);
        let admin = AdminService::new(
            stores.users.clone(),
            stores.invoices.clone(),
            stores.projects.clone(),
            config,
        );

        Self {
            auth: Arc::new(auth),
            admin: Arc::new(admin),
            projects: Arc::new(ProjectService::new(stores.projects.clone())),
            conversations: Arc::new(ConversationService::new(stores.conversations.clone())),
            settings: Arc::new(SettingsService::new(stores.settings.clone())),
            tokens,
            users: stores.users,
        }
    }
}
