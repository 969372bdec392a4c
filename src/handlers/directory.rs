//! Directory HTTP Handlers
//!
//! 의사/진료과 목록 조회 엔드포인트를 처리합니다.
//! 예약 전에 둘러보는 공개 데이터이므로 인증이 필요하지 않습니다.

use actix_web::{get, HttpResponse};
use crate::{
    errors::errors::AppError,
    services::clinic::DirectoryService,
};

/// 의사 목록 조회 핸들러
///
/// # Endpoint
/// `GET /doctors`
#[get("")]
pub async fn list_doctors() -> Result<HttpResponse, AppError> {
    let directory_service = DirectoryService::instance();
    let doctors = directory_service.list_doctors().await?;

    Ok(HttpResponse::Ok().json(doctors))
}

/// 진료과 목록 조회 핸들러
///
/// # Endpoint
/// `GET /departments`
#[get("")]
pub async fn list_departments() -> Result<HttpResponse, AppError> {
    let directory_service = DirectoryService::instance();
    let departments = directory_service.list_departments().await?;

    Ok(HttpResponse::Ok().json(departments))
}
