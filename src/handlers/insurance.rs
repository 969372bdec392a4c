//! Insurance HTTP Handlers
//!
//! 인증된 환자 본인의 보험 등록/조회 엔드포인트를 처리합니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    domain::dto::clinic::request::CreateInsuranceRequest,
    domain::models::auth::authenticated_user::AuthenticatedUser,
    errors::errors::AppError,
    services::clinic::InsuranceService,
};

/// 보험 등록 핸들러
///
/// # Endpoint
/// `POST /insurance`
#[post("")]
pub async fn create_insurance(
    user: AuthenticatedUser,
    payload: web::Json<CreateInsuranceRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let insurance_service = InsuranceService::instance();
    let insurance = insurance_service
        .create_insurance(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(insurance))
}

/// 본인 보험 목록 조회 핸들러
///
/// # Endpoint
/// `GET /insurance`
#[get("")]
pub async fn list_insurance(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let insurance_service = InsuranceService::instance();
    let policies = insurance_service.list_insurance(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(policies))
}
