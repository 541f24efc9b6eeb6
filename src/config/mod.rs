//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 프로세스 시작 시 한 번 읽어 [`AppConfig`]로 묶고,
//! 이후에는 생성자 인자로 각 컴포넌트에 전달합니다. 전역 상태는 두지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 환경, 서버, 데이터베이스, 패스워드, Rate Limit, CORS 설정
//! - [`auth_config`] - JWT 설정
//! - [`billing_config`] - Stripe 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8001"
//! export MONGO_URL="mongodb://localhost:27017"
//! export DB_NAME="devora"
//! export STORE_BACKEND="mongodb"    # mongodb | memory
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export BCRYPT_COST="12"           # 4-15 범위
//! export STRIPE_API_KEY="sk_live_..."
//! export CORS_ORIGINS="https://devora.app"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod billing_config;

pub use data_config::*;
pub use auth_config::*;
pub use billing_config::*;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub password: PasswordConfig,
    pub jwt: JwtConfig,
    pub stripe: StripeConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, String> {
        Self::from_source(&process_env)
    }

    /// 임의의 변수 조회 함수로부터 설정을 구성합니다.
    pub fn from_source(get: VarSource<'_>) -> Result<Self, String> {
        let environment = Environment::from_source(get);

        Ok(Self {
            server: ServerConfig::from_source(get),
            database: DatabaseConfig::from_source(get),
            password: PasswordConfig::from_source(get, &environment),
            jwt: JwtConfig::from_source(get, &environment)?,
            stripe: StripeConfig::from_source(get),
            rate_limit: RateLimitConfig::from_source(get),
            cors: CorsConfig::from_source(get),
            environment,
        })
    }
}
