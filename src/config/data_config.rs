//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, 패스워드 해싱, Rate Limiting, CORS 설정을 관리합니다.
//! 모든 값은 프로세스 시작 시 한 번만 읽습니다.

use std::env;

/// 환경 변수 조회 함수 타입
///
/// 실제 프로세스 환경 대신 테스트에서 임의의 값을 주입할 수 있도록 합니다.
pub type VarSource<'a> = &'a dyn Fn(&str) -> Option<String>;

/// 실제 프로세스 환경 변수 조회
pub fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로부터 실행 환경을 결정합니다.
    ///
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn from_source(get: VarSource<'_>) -> Self {
        Self::from_str(&get("ENVIRONMENT").unwrap_or_else(|| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost (4-15)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST`가 4-15 범위면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn from_source(get: VarSource<'_>, environment: &Environment) -> Self {
        let bcrypt_cost = get("BCRYPT_COST")
            .and_then(|cost| cost.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(environment));

        Self { bcrypt_cost }
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 호스트 주소. 기본값: "0.0.0.0"
    pub host: String,
    /// 포트 번호. 기본값: 8001
    pub port: u16,
    /// 워커 스레드 수. 기본값: 4
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_source(get: VarSource<'_>) -> Self {
        Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: get("PORT").and_then(|p| p.parse().ok()).unwrap_or(8001),
            workers: get("WORKERS").and_then(|w| w.parse().ok()).unwrap_or(4),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 문서 저장소 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// MongoDB (운영 기본값)
    MongoDb,
    /// 프로세스 메모리 (로컬 개발용, 재시작 시 데이터 소실)
    Memory,
}

/// 데이터베이스 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI (`MONGO_URL`)
    pub mongo_url: String,
    /// 데이터베이스 이름 (`DB_NAME`)
    pub database_name: String,
    /// 저장소 종류 (`STORE_BACKEND`)
    pub backend: StoreBackend,
}

impl DatabaseConfig {
    pub fn from_source(get: VarSource<'_>) -> Self {
        let backend = match get("STORE_BACKEND").as_deref().map(str::to_lowercase).as_deref() {
            Some("memory") => StoreBackend::Memory,
            _ => StoreBackend::MongoDb,
        };

        Self {
            mongo_url: get("MONGO_URL").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: get("DB_NAME").unwrap_or_else(|| "devora_dev".to_string()),
            backend,
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND` (기본 100), `RATE_LIMIT_BURST_SIZE` (기본 200)
    pub fn from_source(get: VarSource<'_>) -> Self {
        let per_second = match get("RATE_LIMIT_PER_SECOND").map(|v| v.parse::<u64>()) {
            Some(Ok(value)) if value > 0 => value,
            Some(_) => {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패. 기본값 100 사용");
                100
            }
            None => 100,
        };

        let burst_size = match get("RATE_LIMIT_BURST_SIZE").map(|v| v.parse::<u32>()) {
            Some(Ok(value)) if value > 0 => value,
            Some(_) => {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패. 기본값 200 사용");
                200
            }
            None => 200,
        };

        Self { per_second, burst_size }
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// 허용 Origin 목록. 비어 있으면 모든 Origin 허용
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// `CORS_ORIGINS` (콤마 구분). `*` 또는 미설정이면 모든 Origin을 허용합니다.
    pub fn from_source(get: VarSource<'_>) -> Self {
        let allowed_origins = get("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty() && *origin != "*")
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { allowed_origins }
    }
}
