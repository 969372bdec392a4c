//! # 환자 리포지토리 구현
//!
//! 환자 프로필의 데이터 액세스 계층입니다. 회원가입 트랜잭션에서
//! User와 함께 생성되므로 세션 변형 삽입을 제공합니다.

use std::sync::Arc;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    ClientSession, IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::clinic::patient::Patient,
    errors::errors::{is_duplicate_key_error, AppError},
};
use singleton_macro::repository;

/// 환자 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **user_id 기반 프로필 조회**: `patient:user:{user_id}`, TTL 600초.
///   `GET /patients/profile`이 가장 빈번한 조회 경로입니다.
///
/// ## 인덱스
///
/// - `user_id` (unique) — User와의 1:1 관계 보장
#[repository(name = "patient", collection = "patients")]
pub struct PatientRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl PatientRepository {
    /// 인증 계정 ID로 환자 프로필 조회 (캐시 우선)
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Patient>, AppError> {
        let object_id = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = format!("patient:user:{}", user_id);

        if let Ok(Some(cached)) = self.redis.get::<Patient>(&cache_key).await {
            return Ok(Some(cached));
        }

        let patient = self.collection::<Patient>()
            .find_one(doc! { "user_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref patient) = patient {
            let _ = self.redis
                .set_with_expiry(&cache_key, patient, 600)
                .await;
        }

        Ok(patient)
    }

    /// ID로 환자 프로필 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Patient>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<Patient>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 세션 내에서 환자 프로필 삽입
    ///
    /// 회원가입 트랜잭션에서 User 삽입 직후 호출됩니다.
    pub async fn insert_in_session(
        &self,
        mut patient: Patient,
        session: &mut ClientSession,
    ) -> Result<Patient, AppError> {
        let result = self.collection::<Patient>()
            .insert_one(&patient)
            .session(&mut *session)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::UserAlreadyExists
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        patient.id = result.inserted_id.as_object_id();

        Ok(patient)
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_id_unique".to_string())
                .build())
            .build();

        self.collection::<Patient>()
            .create_indexes([user_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
