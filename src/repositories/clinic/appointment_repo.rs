//! 예약 리포지토리 구현

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::clinic::appointment::Appointment,
    errors::errors::AppError,
};
use singleton_macro::repository;

/// 예약 데이터 액세스 리포지토리
///
/// 예약은 쓰기 직후 목록에 보여야 하므로 캐싱하지 않습니다.
#[repository(name = "appointment", collection = "appointments")]
pub struct AppointmentRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl AppointmentRepository {
    /// 새 예약 삽입
    pub async fn insert(&self, mut appointment: Appointment) -> Result<Appointment, AppError> {
        let result = self.collection::<Appointment>()
            .insert_one(&appointment)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        appointment.id = result.inserted_id.as_object_id();

        Ok(appointment)
    }

    /// 환자의 예약 목록 조회 (예약 시간 오름차순)
    pub async fn find_by_patient_id(&self, patient_id: &ObjectId) -> Result<Vec<Appointment>, AppError> {
        self.collection::<Appointment>()
            .find(doc! { "patient_id": patient_id })
            .sort(doc! { "appointment_time": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let patient_index = IndexModel::builder()
            .keys(doc! { "patient_id": 1, "appointment_time": 1 })
            .options(IndexOptions::builder()
                .name("patient_time".to_string())
                .build())
            .build();

        self.collection::<Appointment>()
            .create_indexes([patient_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
