//! 인증 서비스
//!
//! 회원가입, 로그인, 현재 사용자 조회를 담당합니다.
//!
//! ## 주요 기능
//!
//! - **회원가입**: 이메일 중복 확인 → 결제 고객 생성(실패해도 계속) → 비밀번호 해싱 → 저장 → 토큰 발급
//! - **로그인**: 이메일/비밀번호 검증 → 계정 활성 상태 확인 → 토큰 발급
//! - **현재 사용자**: 토큰 주체를 저장소에서 다시 읽어 공개 투영으로 반환
//!
//! ## 보안
//!
//! 존재하지 않는 이메일과 틀린 비밀번호는 같은 메시지의 `AuthenticationError`를 반환합니다.
//! 없는 이메일도 더미 해시로 bcrypt 검증을 거치므로 응답 시간으로도 가입 여부를 알 수 없습니다.

use std::sync::Arc;
use crate::domain::dto::auth::{LoginRequest, RegisterRequest, TokenResponse};
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::users::User;
use crate::errors::errors::AppError;
use crate::repositories::UserStore;
use crate::services::auth::{PasswordService, TokenService};
use crate::services::billing::BillingGateway;
use crate::utils::string_utils::normalize_email;

const INCORRECT_CREDENTIALS: &str = "Incorrect email or password";

pub struct AuthService {
    users: Arc<dyn UserStore>,
    passwords: Arc<PasswordService>,
    tokens: Arc<TokenService>,
    billing: Arc<dyn BillingGateway>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        passwords: Arc<PasswordService>,
        tokens: Arc<TokenService>,
        billing: Arc<dyn BillingGateway>,
    ) -> Self {
        Self { users, passwords, tokens, billing }
    }

    /// 회원가입
    ///
    /// # 에러
    ///
    /// * `ConflictError` - 이미 가입된 이메일 (동시 가입 경합은 유니크 인덱스가 막습니다)
    ///
    /// 결제 고객 생성 실패는 에러가 아닙니다. 이 경우 `stripe_customer_id`가 비어 있는 채로 가입됩니다.
    pub async fn register(&self, request: RegisterRequest) -> Result<TokenResponse, AppError> {
        let email = normalize_email(&request.email);

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError("Email already registered".to_string()));
        }

        let stripe_customer_id = self.billing
            .create_customer(&email, request.full_name.as_deref())
            .await;

        let hashed_password = self.passwords.hash(&request.password)?;

        let user = User::new(email, hashed_password, request.full_name, stripe_customer_id);
        self.users.insert(&user).await?;

        let access_token = self.tokens.issue_token(&user.id, &user.email)?;

        log::info!("New user registered: {}", user.email);

        Ok(TokenResponse::bearer(access_token))
    }

    /// 로그인
    ///
    /// # 에러
    ///
    /// * `AuthenticationError` - 이메일이 없거나 비밀번호 불일치 (동일 메시지)
    /// * `AuthorizationError` - 비활성화된 계정 (비밀번호가 맞는 경우에만 알려줍니다)
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, AppError> {
        let email = normalize_email(&request.email);

        let verified = match self.users.find_by_email(&email).await? {
            Some(user) => self.passwords.verify(&request.password, &user.hashed_password).then_some(user),
            None => {
                self.passwords.verify_dummy(&request.password);
                None
            }
        };

        let user = match verified {
            Some(user) => user,
            None => {
                log::warn!("로그인 실패: {}", email);
                return Err(AppError::AuthenticationError(INCORRECT_CREDENTIALS.to_string()));
            }
        };

        if !user.is_active {
            log::warn!("비활성 계정 로그인 시도: {}", user.email);
            return Err(AppError::AuthorizationError("Account is deactivated".to_string()));
        }

        let access_token = self.tokens.issue_token(&user.id, &user.email)?;

        log::info!("User logged in: {}", user.email);

        Ok(TokenResponse::bearer(access_token))
    }

    /// 토큰 주체의 공개 정보
    ///
    /// 토큰은 유효하지만 사용자가 더 이상 존재하지 않으면 `NotFound`입니다.
    pub async fn current_user(&self, user_id: &str) -> Result<UserResponse, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::config::{JwtConfig, PasswordConfig};
    use crate::domain::entities::users::SubscriptionStatus;
    use crate::repositories::MemoryStore;
    use crate::services::billing::DisabledGateway;

    /// 항상 실패하는 결제 제공자 (네트워크 장애 상황)
    struct UnreachableGateway;

    #[async_trait]
    impl BillingGateway for UnreachableGateway {
        async fn create_customer(&self, _email: &str, _name: Option<&str>) -> Option<String> {
            None
        }
    }

    struct FixedGateway;

    #[async_trait]
    impl BillingGateway for FixedGateway {
        async fn create_customer(&self, _email: &str, _name: Option<&str>) -> Option<String> {
            Some("cus_test_1".to_string())
        }
    }

    fn service_with(store: Arc<MemoryStore>, billing: Arc<dyn BillingGateway>) -> AuthService {
        AuthService::new(
            store,
            Arc::new(PasswordService::new(&PasswordConfig { bcrypt_cost: 4 })),
            Arc::new(TokenService::new(&JwtConfig {
                secret: "test-secret".to_string(),
                expiration_hours: 1,
            })),
            billing,
        )
    }

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: Some("Test User".to_string()),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_twice_is_conflict() {
        let service = service_with(Arc::new(MemoryStore::new()), Arc::new(DisabledGateway));

        assert!(service.register(register_request("dup@example.com", "pw-1")).await.is_ok());
        let second = service.register(register_request("DUP@example.com ", "pw-2")).await;

        assert!(matches!(second, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_registered_user_defaults() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone(), Arc::new(FixedGateway));

        let token = service.register(register_request("new@example.com", "pw")).await.unwrap();
        assert_eq!(token.token_type, "bearer");

        let user = store.find_by_email("new@example.com").await.unwrap().unwrap();
        assert_eq!(user.subscription_status, SubscriptionStatus::Inactive);
        assert!(user.is_active);
        assert!(!user.is_admin);
        assert_eq!(user.stripe_customer_id.as_deref(), Some("cus_test_1"));
        assert_ne!(user.hashed_password, "pw");
    }

    #[actix_web::test]
    async fn test_register_succeeds_when_billing_fails() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone(), Arc::new(UnreachableGateway));

        assert!(service.register(register_request("nobill@example.com", "pw")).await.is_ok());

        let user = store.find_by_email("nobill@example.com").await.unwrap().unwrap();
        assert!(user.stripe_customer_id.is_none());
    }

    #[actix_web::test]
    async fn test_login_errors_do_not_reveal_which_part_failed() {
        let service = service_with(Arc::new(MemoryStore::new()), Arc::new(DisabledGateway));
        service.register(register_request("alice@example.com", "right")).await.unwrap();

        let wrong_password = service.login(login_request("alice@example.com", "wrong")).await;
        let unknown_email = service.login(login_request("nobody@example.com", "right")).await;

        match (wrong_password, unknown_email) {
            (Err(AppError::AuthenticationError(a)), Err(AppError::AuthenticationError(b))) => {
                assert_eq!(a, b)
            }
            other => panic!("Expected two AuthenticationErrors, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_login_deactivated_user_is_forbidden() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone(), Arc::new(DisabledGateway));
        service.register(register_request("bob@example.com", "secret")).await.unwrap();
        let bob = store.find_by_email("bob@example.com").await.unwrap().unwrap();
        store.set_active(&bob.id, false, chrono::Utc::now()).await.unwrap();

        let result = service.login(login_request("bob@example.com", "secret")).await;

        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
    }

    #[actix_web::test]
    async fn test_login_success_and_current_user() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(store.clone(), Arc::new(DisabledGateway));
        service.register(register_request("carol@example.com", "pw")).await.unwrap();

        assert!(service.login(login_request("Carol@Example.com", "pw")).await.is_ok());

        let carol = store.find_by_email("carol@example.com").await.unwrap().unwrap();
        let me = service.current_user(&carol.id).await.unwrap();
        assert_eq!(me.email, "carol@example.com");

        assert!(matches!(service.current_user("gone").await, Err(AppError::NotFound(_))));
    }
}
