//! Patient HTTP Handlers
//!
//! 환자 프로필과 예약 관련 엔드포인트를 처리합니다.
//! 모든 엔드포인트는 인증이 필요하며, 환자는 JWT에서 파생된
//! 인증 사용자 ID로 식별됩니다. 다른 환자의 데이터에 접근하는
//! 경로는 제공하지 않습니다.

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    domain::dto::clinic::request::CreateAppointmentRequest,
    domain::models::auth::authenticated_user::AuthenticatedUser,
    errors::errors::AppError,
    services::clinic::{AppointmentService, PatientService},
};

/// 본인 환자 프로필 조회 핸들러
///
/// # Endpoint
/// `GET /patients/profile`
#[get("/profile")]
pub async fn get_profile(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let patient_service = PatientService::instance();
    let profile = patient_service.get_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 예약 생성 핸들러
///
/// 예약의 환자는 인증 사용자로 결정되며, 요청 본문에는 의사 ID와
/// 예약 시간, 방문 사유만 담깁니다.
///
/// # Endpoint
/// `POST /patients/appointments`
#[post("/appointments")]
pub async fn create_appointment(
    user: AuthenticatedUser,
    payload: web::Json<CreateAppointmentRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let appointment_service = AppointmentService::instance();
    let appointment = appointment_service
        .create_appointment(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(appointment))
}

/// 본인 예약 목록 조회 핸들러
///
/// # Endpoint
/// `GET /patients/appointments`
#[get("/appointments")]
pub async fn list_appointments(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let appointment_service = AppointmentService::instance();
    let appointments = appointment_service.list_appointments(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(appointments))
}
