//! 의사 리포지토리 구현

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::clinic::doctor::Doctor,
    errors::errors::AppError,
};
use singleton_macro::repository;

/// 의사 데이터 액세스 리포지토리
///
/// 의사 목록은 변경이 드물고 조회가 잦은 공개 데이터이므로
/// 목록 전체를 1시간 캐싱합니다.
#[repository(name = "doctor", collection = "doctors")]
pub struct DoctorRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl DoctorRepository {
    /// 전체 의사 목록 조회 (캐시 우선)
    pub async fn find_all(&self) -> Result<Vec<Doctor>, AppError> {
        let cache_key = "doctor:all";

        if let Ok(Some(cached)) = self.redis.get::<Vec<Doctor>>(cache_key).await {
            return Ok(cached);
        }

        let doctors: Vec<Doctor> = self.collection::<Doctor>()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.redis
            .set_with_expiry(cache_key, &doctors, 3600)
            .await;

        Ok(doctors)
    }

    /// ID로 의사 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Doctor>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<Doctor>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 의사 등록 (관리/시딩용)
    pub async fn insert(&self, mut doctor: Doctor) -> Result<Doctor, AppError> {
        let result = self.collection::<Doctor>()
            .insert_one(&doctor)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        doctor.id = result.inserted_id.as_object_id();

        let _ = self.redis.del("doctor:all").await;

        Ok(doctor)
    }
}
