//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 유효한 토큰만 요구
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 활성 상태의 관리자만 허용
    pub fn admin() -> Self {
        Self::new(AuthMode::Admin)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{get, test, web, App, HttpResponse};
    use chrono::Utc;
    use crate::config::{JwtConfig, PasswordConfig};
    use crate::domain::entities::users::User;
    use crate::domain::models::AuthenticatedUser;
    use crate::repositories::{MemoryStore, UserStore};
    use crate::services::billing::DisabledGateway;
    use crate::state::{AppState, Stores};

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().json(user)
    }

    fn test_state(store: Arc<MemoryStore>) -> web::Data<AppState> {
        web::Data::new(AppState::new(
            Stores::from_memory(store),
            Arc::new(DisabledGateway),
            &PasswordConfig { bcrypt_cost: 4 },
            &JwtConfig {
                secret: "middleware-test-secret".to_string(),
                expiration_hours: 1,
            },
        ))
    }

    #[actix_web::test]
    async fn test_required_mode_rejects_missing_and_bad_tokens() {
        let state = test_state(Arc::new(MemoryStore::new()));
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(web::scope("/p").wrap(AuthMiddleware::required()).service(whoami)),
        )
        .await;

        let missing = test::call_service(&app, test::TestRequest::get().uri("/p/whoami").to_request()).await;
        assert_eq!(missing.status(), 401);

        let garbage = test::TestRequest::get()
            .uri("/p/whoami")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        assert_eq!(test::call_service(&app, garbage).await.status(), 401);

        let token = state.tokens.issue_token("u1", "u1@example.com").unwrap();
        let ok = test::TestRequest::get()
            .uri("/p/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, ok).await;
        assert_eq!(body["user_id"], "u1");
        assert_eq!(body["is_admin"], false);
    }

    #[actix_web::test]
    async fn test_admin_mode_checks_stored_user() {
        let store = Arc::new(MemoryStore::new());
        let state = test_state(store.clone());
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(web::scope("/a").wrap(AuthMiddleware::admin()).service(whoami)),
        )
        .await;

        let user = User::new("plain@example.com".to_string(), "h".to_string(), None, None);
        UserStore::insert(&*store, &user).await.unwrap();
        let token = state.tokens.issue_token(&user.id, &user.email).unwrap();
        let request = |token: &str| {
            test::TestRequest::get()
                .uri("/a/whoami")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request()
        };

        assert_eq!(test::call_service(&app, request(&token)).await.status(), 403);

        store.set_admin(&user.id, true, Utc::now()).await.unwrap();
        assert_eq!(test::call_service(&app, request(&token)).await.status(), 200);

        store.set_active(&user.id, false, Utc::now()).await.unwrap();
        assert_eq!(test::call_service(&app, request(&token)).await.status(), 403);

        let ghost = state.tokens.issue_token("ghost", "ghost@example.com").unwrap();
        assert_eq!(test::call_service(&app, request(&ghost)).await.status(), 401);
    }
}
