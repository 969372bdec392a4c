//! 예약 서비스 구현
//!
//! 예약 생성과 본인 예약 목록 조회를 담당합니다.
//! 예약 시간 충돌 검사나 스케줄 최적화는 수행하지 않습니다.

use std::sync::Arc;
use log::info;
use mongodb::bson::DateTime;
use singleton_macro::service;
use crate::{
    domain::dto::clinic::request::CreateAppointmentRequest,
    domain::dto::clinic::response::AppointmentResponse,
    domain::entities::clinic::appointment::Appointment,
    errors::errors::AppError,
    repositories::clinic::appointment_repo::AppointmentRepository,
    repositories::clinic::doctor_repo::DoctorRepository,
    repositories::clinic::patient_repo::PatientRepository,
};

/// 예약 비즈니스 로직 서비스
#[service(name = "appointment")]
pub struct AppointmentService {
    /// 환자 프로필 리포지토리 (자동 주입)
    patient_repo: Arc<PatientRepository>,

    /// 의사 리포지토리 (자동 주입)
    doctor_repo: Arc<DoctorRepository>,

    /// 예약 리포지토리 (자동 주입)
    appointment_repo: Arc<AppointmentRepository>,
}

impl AppointmentService {
    /// 새 예약 생성
    ///
    /// 환자는 인증 사용자 ID로 식별하고, 담당 의사는 요청 본문의 ID로
    /// 지정합니다. 존재하지 않는 의사를 지정하면 거부됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 환자 프로필 또는 의사가 존재하지 않음
    /// * `AppError::ValidationError` - 잘못된 의사 ID 형식
    pub async fn create_appointment(
        &self,
        user_id: &str,
        request: CreateAppointmentRequest,
    ) -> Result<AppointmentResponse, AppError> {
        let patient = self.patient_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("환자 프로필을 찾을 수 없습니다".to_string()))?;

        let doctor = self.doctor_repo
            .find_by_id(&request.doctor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("의사를 찾을 수 없습니다".to_string()))?;

        let patient_id = patient.id
            .ok_or_else(|| AppError::InternalError("환자 ID가 없습니다".to_string()))?;
        let doctor_id = doctor.id
            .ok_or_else(|| AppError::InternalError("의사 ID가 없습니다".to_string()))?;

        let appointment = Appointment::new(
            patient_id,
            doctor_id,
            to_bson_datetime(request.appointment_time),
            request.reason,
        );

        let created = self.appointment_repo.insert(appointment).await?;

        info!(
            "✅ 예약 생성 완료: patient={}, doctor={}",
            patient_id.to_hex(),
            doctor_id.to_hex()
        );

        Ok(AppointmentResponse::from(created))
    }

    /// 인증 사용자의 예약 목록 조회 (예약 시간 오름차순)
    pub async fn list_appointments(&self, user_id: &str) -> Result<Vec<AppointmentResponse>, AppError> {
        let patient = self.patient_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("환자 프로필을 찾을 수 없습니다".to_string()))?;

        let patient_id = patient.id
            .ok_or_else(|| AppError::InternalError("환자 ID가 없습니다".to_string()))?;

        let appointments = self.appointment_repo.find_by_patient_id(&patient_id).await?;

        Ok(appointments.into_iter().map(AppointmentResponse::from).collect())
    }
}

/// chrono UTC 시각을 BSON DateTime으로 변환
fn to_bson_datetime(dt: chrono::DateTime<chrono::Utc>) -> DateTime {
    DateTime::from_millis(dt.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_bson_datetime_preserves_instant() {
        let chrono_dt = chrono::Utc.with_ymd_and_hms(2026, 9, 1, 10, 30, 0).unwrap();
        let bson_dt = to_bson_datetime(chrono_dt);

        assert_eq!(bson_dt.timestamp_millis(), chrono_dt.timestamp_millis());
    }
}
