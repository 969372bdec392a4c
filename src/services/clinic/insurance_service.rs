//! 보험 서비스 구현
//!
//! 인증된 환자 본인의 보험 등록과 목록 조회를 담당합니다.
//! 증권 번호 유효성이나 보험사 연동 검증은 수행하지 않습니다.

use std::sync::Arc;
use log::info;
use mongodb::bson::DateTime;
use singleton_macro::service;
use crate::{
    domain::dto::clinic::request::CreateInsuranceRequest,
    domain::dto::clinic::response::InsuranceResponse,
    domain::entities::clinic::insurance::Insurance,
    errors::errors::AppError,
    repositories::clinic::insurance_repo::InsuranceRepository,
    repositories::clinic::patient_repo::PatientRepository,
};

/// 보험 비즈니스 로직 서비스
#[service(name = "insurance")]
pub struct InsuranceService {
    /// 환자 프로필 리포지토리 (자동 주입)
    patient_repo: Arc<PatientRepository>,

    /// 보험 리포지토리 (자동 주입)
    insurance_repo: Arc<InsuranceRepository>,
}

impl InsuranceService {
    /// 새 보험 등록
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 환자 프로필이 존재하지 않음
    pub async fn create_insurance(
        &self,
        user_id: &str,
        request: CreateInsuranceRequest,
    ) -> Result<InsuranceResponse, AppError> {
        let patient = self.patient_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("환자 프로필을 찾을 수 없습니다".to_string()))?;

        let patient_id = patient.id
            .ok_or_else(|| AppError::InternalError("환자 ID가 없습니다".to_string()))?;

        let insurance = Insurance::new(
            patient_id,
            request.policy_number,
            request.provider,
            DateTime::from_millis(request.valid_until.timestamp_millis()),
        );

        let created = self.insurance_repo.insert(insurance).await?;

        info!("✅ 보험 등록 완료: patient={}", patient_id.to_hex());

        Ok(InsuranceResponse::from(created))
    }

    /// 인증 사용자의 보험 목록 조회 (최근 등록 순)
    pub async fn list_insurance(&self, user_id: &str) -> Result<Vec<InsuranceResponse>, AppError> {
        let patient = self.patient_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("환자 프로필을 찾을 수 없습니다".to_string()))?;

        let patient_id = patient.id
            .ok_or_else(|| AppError::InternalError("환자 ID가 없습니다".to_string()))?;

        let policies = self.insurance_repo.find_by_patient_id(&patient_id).await?;

        Ok(policies.into_iter().map(InsuranceResponse::from).collect())
    }
}
