//! 보험 리포지토리 구현

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
    domain::entities::clinic::insurance::Insurance,
    errors::errors::AppError,
};
use singleton_macro::repository;

/// 보험 데이터 액세스 리포지토리
#[repository(name = "insurance", collection = "insurances")]
pub struct InsuranceRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl InsuranceRepository {
    /// 새 보험 등록
    pub async fn insert(&self, mut insurance: Insurance) -> Result<Insurance, AppError> {
        let result = self.collection::<Insurance>()
            .insert_one(&insurance)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        insurance.id = result.inserted_id.as_object_id();

        Ok(insurance)
    }

    /// 환자의 보험 목록 조회 (최근 등록 순)
    pub async fn find_by_patient_id(&self, patient_id: &ObjectId) -> Result<Vec<Insurance>, AppError> {
        self.collection::<Insurance>()
            .find(doc! { "patient_id": patient_id })
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let patient_index = IndexModel::builder()
            .keys(doc! { "patient_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("patient_created".to_string())
                .build())
            .build();

        self.collection::<Insurance>()
            .create_indexes([patient_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
