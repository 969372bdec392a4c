//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::AppError;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::auth::authentication_request::{AuthMode, RequiredRole};
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
    pub required_role: Option<RequiredRole>,
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
        let mode = self.mode.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let token_service = TokenService::instance();
            let auth_result = extract_token_from_request(&req, &token_service).await;

            match (&mode, auth_result) {
                // Required 모드: 인증 실패 시 즉시 401
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {}", err);
                    return Ok(deny(
                        req,
                        StatusCode::UNAUTHORIZED,
                        "authentication_required",
                        "유효한 인증 토큰이 필요합니다",
                    ));
                },
                // Required 모드: 역할까지 통과해야 진행
                (AuthMode::Required, Ok(user)) => {
                    if !role_satisfied(&required_role, &user) {
                        log::warn!("권한 부족: 사용자 ID {} ({:?}), 필요 권한: {:?}",
                            user.user_id, user.roles, required_role);
                        return Ok(deny(
                            req,
                            StatusCode::FORBIDDEN,
                            "insufficient_permissions",
                            "접근 권한이 부족합니다",
                        ));
                    }

                    req.extensions_mut().insert(user.clone());
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                },
                // Optional 모드: 역할 미달이면 익명으로 진행
                (AuthMode::Optional, Ok(user)) => {
                    if role_satisfied(&required_role, &user) {
                        req.extensions_mut().insert(user.clone());
                        log::debug!("선택적 인증 성공: 사용자 ID {}", user.user_id);
                    } else {
                        log::debug!("선택적 인증: 권한 부족하지만 진행 허용");
                    }
                },
                // Optional 모드: 토큰 없이도 진행
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 토큰 없음, 요청 진행");
                },
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청을 차단하고 에러 JSON 응답으로 단락시킵니다
fn deny<B>(
    req: ServiceRequest,
    status: StatusCode,
    error: &str,
    message: &str,
) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::build(status)
        .json(serde_json::json!({
            "error": error,
            "message": message
        }));

    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

/// 역할 요구사항 충족 여부 (요구사항이 없으면 항상 통과)
fn role_satisfied(required_role: &Option<RequiredRole>, user: &AuthenticatedUser) -> bool {
    match required_role {
        Some(required) => required.is_satisfied(&user.roles),
        None => true,
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증
async fn extract_token_from_request(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> actix_web::Result<AuthenticatedUser, AppError> {
    // Authorization 헤더 추출
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    // Bearer 토큰 추출
    let token = token_service.extract_bearer_token(auth_header)?;

    // 토큰 검증 및 클레임 추출
    let claims = token_service.verify_token(token)?;

    // AuthenticatedUser 구조체 생성
    Ok(AuthenticatedUser {
        user_id: claims.sub,
        provider_type: claims.provider_type,
        roles: claims.roles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use crate::config::{AuthProviderType, RoleType};

    fn user_with_roles(roles: Vec<RoleType>) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "user-1".to_string(),
            provider_type: AuthProviderType::Email,
            roles,
        }
    }

    #[actix_web::test]
    async fn test_missing_authorization_header_is_rejected() {
        let req = TestRequest::default().to_srv_request();
        let token_service = TokenService {};

        let result = extract_token_from_request(&req, &token_service).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_role_satisfied_without_requirement() {
        let user = user_with_roles(vec![]);
        assert!(role_satisfied(&None, &user));
    }

    #[test]
    fn test_role_satisfied_checks_required_role() {
        let patient = user_with_roles(vec![RoleType::Patient]);
        let doctor = user_with_roles(vec![RoleType::Doctor]);
        let required = Some(RequiredRole::Single(RoleType::Patient));

        assert!(role_satisfied(&required, &patient));
        assert!(!role_satisfied(&required, &doctor));
    }
}
