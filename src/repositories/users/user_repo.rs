//! # 사용자 리포지토리 구현
//!
//! 인증 계정 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **트랜잭션 지원**: 계정 정합 시퀀스를 위한 `*_in_session` 변형 제공
//! - **데이터 무결성**: 유니크 인덱스가 경합의 최종 방어선

use std::sync::Arc;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    ClientSession, IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    config::AuthProviderType,
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::User,
};
use singleton_macro::repository;
use crate::errors::errors::{is_duplicate_key_error, AppError};

/// 사용자 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **개별 사용자**: `user:{user_id}`, TTL 600초
/// - **트랜잭션 내 조회는 캐시를 거치지 않음**: `*_in_session` 변형은
///   항상 세션을 통해 DB를 직접 읽습니다. 계정 정합의 read-decide-write
///   시퀀스에 낡은 캐시가 끼어들면 결정 자체가 틀어지기 때문입니다.
///
/// ## 인덱스
///
/// - `username` (unique) — 이메일 겸용 식별자의 중복 방지
/// - `(provider_id, provider_type)` (unique, partial) — OAuth 계정의
///   재로그인 식별. `provider_id`가 있는 문서에만 적용됩니다.
/// - `created_at` (desc)
///
/// 유니크 인덱스는 동시 가입/동시 OAuth 로그인 경합에서 패배한 쪽을
/// duplicate-key 에러로 만들어 주는 최종 방어선입니다.
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 사용자명(이메일 겸용)으로 사용자 조회
    ///
    /// 유니크 인덱스를 사용하므로 최대 1개의 결과만 반환됩니다.
    /// 인증 판정에 쓰이는 조회이므로 캐싱하지 않습니다.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 세션 내에서 사용자명으로 사용자 조회
    pub async fn find_by_username_in_session(
        &self,
        username: &str,
        session: &mut ClientSession,
    ) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "username": username })
            .session(&mut *session)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// OAuth 식별자 쌍으로 사용자 조회
    ///
    /// `(provider_id, provider_type)` 쌍은 OAuth 계정의 1차 식별자입니다.
    pub async fn find_by_provider(
        &self,
        provider_id: &str,
        provider_type: AuthProviderType,
    ) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! {
                "provider_id": provider_id,
                "provider_type": provider_type.as_str(),
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 세션 내에서 OAuth 식별자 쌍으로 사용자 조회
    pub async fn find_by_provider_in_session(
        &self,
        provider_id: &str,
        provider_type: AuthProviderType,
        session: &mut ClientSession,
    ) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! {
                "provider_id": provider_id,
                "provider_type": provider_type.as_str(),
            })
            .session(&mut *session)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// 가장 빈번한 조회 패턴이므로 캐시 우선 조회를 적용합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:{id}` (리포지토리 매크로의 `cache_key()` 사용)
    /// - **TTL**: 600초 (10분)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let user = self.collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, 600)
                .await;
        }

        Ok(user)
    }

    /// 새 사용자 삽입
    ///
    /// 사전 중복 검사는 호출자(서비스 계층)의 책임입니다. 이 메서드는
    /// 유니크 인덱스 위반(경합에서 패배한 경우)을 `UserAlreadyExists`로
    /// 변환해 돌려줍니다.
    pub async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::UserAlreadyExists
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(user)
    }

    /// 세션 내에서 새 사용자 삽입
    ///
    /// 트랜잭션 커밋 시점에 드러나는 duplicate-key 에러는 커밋 쪽에서
    /// 분류되지만, WriteConflict 이전에 바로 드러나는 경우도 같은 방식으로
    /// `UserAlreadyExists`로 변환합니다.
    pub async fn insert_in_session(
        &self,
        mut user: User,
        session: &mut ClientSession,
    ) -> Result<User, AppError> {
        let result = self.collection::<User>()
            .insert_one(&user)
            .session(&mut *session)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::UserAlreadyExists
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 세션 내에서 사용자명 갱신 (이메일 드리프트 정합)
    ///
    /// OAuth 프로바이더가 내려준 이메일이 저장된 username과 달라졌을 때
    /// 프로바이더 쪽 값으로 덮어씁니다. 새 username이 이미 다른 계정에
    /// 점유된 경우 유니크 인덱스가 막아주며 `UserAlreadyExists`가 됩니다.
    pub async fn update_username_in_session(
        &self,
        id: &ObjectId,
        new_username: &str,
        session: &mut ClientSession,
    ) -> Result<(), AppError> {
        self.collection::<User>()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "username": new_username,
                    "updated_at": mongodb::bson::DateTime::now(),
                }},
            )
            .session(&mut *session)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::UserAlreadyExists
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        // 세션 밖에서 읽힌 낡은 사본 제거
        let _ = self.invalidate_cache(&id.to_hex()).await;

        Ok(())
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행됩니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **username 유니크 인덱스** — 이메일 겸용 식별자 중복 방지
    /// 2. **(provider_id, provider_type) 유니크 부분 인덱스** —
    ///    OAuth 계정 식별. `provider_id`가 존재하는 문서에만 적용되므로
    ///    로컬 계정(provider_id 없음)끼리는 충돌하지 않습니다.
    /// 3. **created_at 내림차순 인덱스** — 최근 가입 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        // 사용자명 유니크 인덱스
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        // OAuth 식별자 쌍 유니크 부분 인덱스
        let provider_index = IndexModel::builder()
            .keys(doc! { "provider_id": 1, "provider_type": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .partial_filter_expression(doc! { "provider_id": { "$exists": true } })
                .name("provider_identity_unique".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([username_index, provider_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
