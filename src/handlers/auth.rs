//! Authentication HTTP Handlers
//!
//! 회원가입, 패스워드 로그인, Google OAuth 로그인의 HTTP 엔드포인트를
//! 처리하는 핸들러 함수들입니다.
//!
//! # Auth Providers
//!
//! - **로컬 인증**: 이메일/패스워드 방식 (`POST /auth/signup`, `POST /auth/login`)
//! - **OAuth 2.0**: Google OAuth 인증 (`GET /auth/google/login`, `/callback`)
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    config::RoleType,
    services::auth::{AuthService, GoogleAuthService},
};
use crate::domain::dto::auth::request::{LoginRequest, OAuthCallbackQuery, SignupRequest};
use crate::errors::errors::AppError;

/// 회원가입 핸들러
///
/// User 계정과 Patient 프로필을 함께 생성합니다. 셀프서비스 경로이므로
/// 역할은 항상 `Patient`로 고정되며, 요청 본문에 역할 필드가 있어도
/// 무시됩니다.
///
/// # Endpoint
/// `POST /auth/signup`
#[post("/signup")]
pub async fn signup(
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = AuthService::instance();

    let response = auth_service
        .sign_up(
            &payload.username,
            &payload.password,
            &payload.name,
            vec![RoleType::Patient],
        )
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// 패스워드 로그인 핸들러
///
/// 이메일과 패스워드를 사용한 전통적인 로그인을 처리합니다.
/// 실패 사유(계정 없음/비밀번호 불일치)는 구분하지 않고 동일하게 응답합니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = AuthService::instance();

    let response = auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Google OAuth 로그인 URL 생성 핸들러
///
/// Google OAuth 2.0 인증을 시작하기 위한 인증 URL을 생성합니다.
///
/// # Endpoint
/// `GET /auth/google/login`
#[get("/google/login")]
pub async fn google_login_url() -> Result<HttpResponse, AppError> {
    let google_service = GoogleAuthService::instance();
    let url_response = google_service.get_login_url()?;

    Ok(HttpResponse::Ok().json(url_response))
}

/// Google OAuth 콜백 처리 핸들러
///
/// Google OAuth 인증 완료 후 리다이렉트되는 콜백을 처리합니다.
/// 프로바이더 통신은 `GoogleAuthService`가, 계정 정합과 토큰 발급은
/// `AuthService::oauth_login`이 담당합니다.
///
/// # Endpoint
/// `GET /auth/google/callback?code={code}&state={state}`
#[get("/google/callback")]
pub async fn google_oauth_callback(
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    // 에러 체크 (사용자가 거부했거나 에러 발생)
    if let Some(error) = &query.error {
        let error_msg = query.error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("Google OAuth 에러: {} - {}", error, error_msg);
        return Err(AppError::AuthenticationError(error_msg.to_string()));
    }

    // 유효성 검사
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let google_service = GoogleAuthService::instance();
    let auth_service = AuthService::instance();

    // 프로바이더 통신: code → 정규화된 사용자 클레임
    let claims = google_service
        .fetch_user_claims(&query.code, &query.state)
        .await?;

    // 계정 정합 + JWT 발급
    let response = auth_service.oauth_login("google", claims).await?;

    log::info!("Google OAuth 로그인 성공: user_id={}", response.user_id);
    Ok(HttpResponse::Ok().json(response))
}
