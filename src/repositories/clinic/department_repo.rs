//! 진료과 리포지토리 구현

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::clinic::department::Department,
    errors::errors::AppError,
};
use singleton_macro::repository;

/// 진료과 데이터 액세스 리포지토리
///
/// 진료과 목록은 사실상 정적인 공개 데이터이므로 1시간 캐싱합니다.
#[repository(name = "department", collection = "departments")]
pub struct DepartmentRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl DepartmentRepository {
    /// 전체 진료과 목록 조회 (캐시 우선)
    pub async fn find_all(&self) -> Result<Vec<Department>, AppError> {
        let cache_key = "department:all";

        if let Ok(Some(cached)) = self.redis.get::<Vec<Department>>(cache_key).await {
            return Ok(cached);
        }

        let departments: Vec<Department> = self.collection::<Department>()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.redis
            .set_with_expiry(cache_key, &departments, 3600)
            .await;

        Ok(departments)
    }

    /// 새 진료과 등록 (관리/시딩용)
    pub async fn insert(&self, mut department: Department) -> Result<Department, AppError> {
        let result = self.collection::<Department>()
            .insert_one(&department)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        department.id = result.inserted_id.as_object_id();

        let _ = self.redis.del("department:all").await;

        Ok(department)
    }
}
