//! 환자 프로필 서비스 구현

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    domain::dto::clinic::response::PatientResponse,
    errors::errors::AppError,
    repositories::clinic::patient_repo::PatientRepository,
};

/// 환자 프로필 조회 서비스
///
/// 인증된 사용자 ID로 본인의 환자 프로필을 조회합니다.
/// 다른 환자의 프로필에 접근하는 경로는 제공하지 않습니다.
#[service(name = "patient")]
pub struct PatientService {
    /// 환자 프로필 리포지토리 (자동 주입)
    patient_repo: Arc<PatientRepository>,
}

impl PatientService {
    /// 인증 사용자의 환자 프로필 조회
    ///
    /// # Arguments
    ///
    /// * `user_id` - JWT에서 파생된 인증 사용자 ID
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 사용자의 환자 프로필이 없음
    pub async fn get_profile(&self, user_id: &str) -> Result<PatientResponse, AppError> {
        let patient = self.patient_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("환자 프로필을 찾을 수 없습니다".to_string()))?;

        Ok(PatientResponse::from(patient))
    }
}
