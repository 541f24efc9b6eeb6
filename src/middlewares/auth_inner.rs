//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::{AuthMode, AuthenticatedUser};
use crate::errors::errors::AppError;
use crate::state::AppState;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            match authenticate(&req, mode).await {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {} ({:?})", user.user_id, mode);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패 [{} {}]: {}", req.method(), req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Bearer 토큰을 검증하고, 관리자 모드이면 저장소에서 요청자 상태를 확인합니다.
///
/// - 토큰 없음/무효/만료 → 401
/// - 관리자 모드에서 사용자 없음 → 401
/// - 관리자 모드에서 관리자가 아니거나 비활성 계정 → 403
async fn authenticate(req: &ServiceRequest, mode: AuthMode) -> Result<AuthenticatedUser, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("AppState가 등록되지 않았습니다".to_string()))?;

    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Not authenticated".to_string()))?;

    let token = state.tokens.extract_bearer_token(auth_header)?;
    let decoded = state.tokens.decode_token(token)?;

    match mode {
        AuthMode::Required => Ok(AuthenticatedUser {
            user_id: decoded.subject_id,
            email: decoded.email,
            is_admin: false,
        }),
        AuthMode::Admin => {
            let user = state.users
                .find_by_id(&decoded.subject_id)
                .await?
                .ok_or_else(|| AppError::AuthenticationError("User not found".to_string()))?;

            if !user.is_admin || !user.is_active {
                return Err(AppError::AuthorizationError("Admin access required".to_string()));
            }

            Ok(AuthenticatedUser {
                user_id: user.id,
                email: user.email,
                is_admin: true,
            })
        }
    }
}
