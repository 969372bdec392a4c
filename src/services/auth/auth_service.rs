//! # 인증 서비스 구현
//!
//! 패스워드 로그인, 회원가입, 소셜 로그인의 계정 정책을 담당하는
//! 핵심 비즈니스 로직 계층입니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 서비스 |
//! |--------|----------|
//! | `AuthenticationManager.authenticate()` | `login()` |
//! | `@Transactional` 회원가입 서비스 | `sign_up()` + MongoDB 트랜잭션 |
//! | `OAuth2UserService` 계정 연결 로직 | `oauth_login()` + `reconcile()` |
//!
//! ## 계정 정합 (identity reconciliation)
//!
//! 이 시스템에서 유일하게 자명하지 않은 로직입니다. 같은 사람이
//! 패스워드 경로와 소셜 경로로 번갈아 들어와도 계정이 일관되게
//! 유지되어야 합니다. 판정은 순수 함수 `reconcile()`에 격리되어 있고,
//! 조회와 쓰기는 하나의 MongoDB 트랜잭션 안에서 수행됩니다.

use std::sync::Arc;
use log::{debug, info};
use singleton_macro::service;
use crate::{
    config::{AuthProviderType, PasswordConfig, RoleType},
    db::Database,
    domain::dto::auth::response::{LoginResponse, SignupResponse},
    domain::entities::clinic::patient::Patient,
    domain::entities::users::user::User,
    domain::models::oauth::google::OAuthUserClaims,
    errors::errors::{is_duplicate_key_error, AppError},
    repositories::clinic::patient_repo::PatientRepository,
    repositories::users::user_repo::UserRepository,
    services::auth::token_service::TokenService,
};
use mongodb::ClientSession;

/// 소셜 로그인 계정 정합 판정 결과
///
/// `reconcile()`이 내리는 결정입니다. 충돌은 결과가 아니라
/// `AppError::IdentityConflict` 에러로 표현됩니다.
#[derive(Debug, Clone, PartialEq)]
enum OAuthOutcome {
    /// 신규 가입: 계산된 username으로 User + Patient 생성
    Register { username: String },
    /// 기존 계정 로그인. 프로바이더 이메일이 저장값과 달라졌으면
    /// `synced_username`으로 덮어씁니다.
    Login { synced_username: Option<String> },
}

/// 인증 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// 의존하는 리포지토리와 서비스가 자동으로 주입됩니다.
#[service(name = "auth")]
pub struct AuthService {
    /// MongoDB 연결 (트랜잭션 세션 시작용, 자동 주입)
    db: Arc<Database>,

    /// 사용자 데이터 액세스 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,

    /// 환자 프로필 리포지토리 (자동 주입)
    patient_repo: Arc<PatientRepository>,

    /// JWT 토큰 발급 서비스 (자동 주입)
    token_service: Arc<TokenService>,
}

impl AuthService {
    /// 패스워드 로그인
    ///
    /// # Arguments
    ///
    /// * `username` - 이메일 겸용 사용자명
    /// * `password` - 평문 비밀번호
    ///
    /// # Returns
    ///
    /// * `Ok(LoginResponse)` - JWT 토큰과 사용자 ID
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - 인증 실패
    ///
    /// # 보안 특징
    ///
    /// 존재하지 않는 사용자, 소셜 전용 계정(비밀번호 없음), 비밀번호
    /// 불일치는 모두 동일한 `InvalidCredentials`로 응답합니다.
    /// 실패 사유를 구분해서 돌려주면 계정 존재 여부를 탐지하는
    /// enumeration 공격에 악용될 수 있습니다. 실패 경로는 어떤 상태도
    /// 변경하지 않습니다.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        let start_time = std::time::Instant::now();

        let user = match self.user_repo.find_by_username(username).await? {
            Some(user) => user,
            None => {
                debug!("로그인 실패: 존재하지 않는 사용자");
                return Err(AppError::InvalidCredentials);
            }
        };

        // 소셜 전용 계정은 비밀번호 해시가 없음
        let password_hash = match user.password_hash.as_deref() {
            Some(hash) if user.provider_type.supports_password() => hash,
            _ => {
                debug!("로그인 실패: 패스워드 인증을 지원하지 않는 계정");
                return Err(AppError::InvalidCredentials);
            }
        };

        let is_valid = bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            debug!("로그인 실패: 비밀번호 불일치");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.token_service.generate_access_token(&user)?;
        let user_id = user.id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        info!("✅ 로그인 성공: user_id={} (took {:?})", user_id, start_time.elapsed());

        Ok(LoginResponse::new(token, user_id))
    }

    /// 회원가입 (로컬 계정)
    ///
    /// User 계정과 Patient 프로필을 하나의 MongoDB 트랜잭션 안에서
    /// 생성합니다. 둘 중 하나라도 실패하면 전체가 롤백됩니다.
    ///
    /// # Arguments
    ///
    /// * `username` - 이메일 겸용 사용자명
    /// * `password` - 평문 비밀번호 (bcrypt로 해싱됨)
    /// * `name` - 환자 표시 이름
    /// * `roles` - 부여할 역할 목록. HTTP 셀프서비스 경로는 항상
    ///   `[Patient]`를 전달하며, 이 매개변수는 운영 경로를 위한 것입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UserAlreadyExists` - 사용자명 중복 (사전 검사 또는
    ///   유니크 인덱스 위반)
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn sign_up(
        &self,
        username: &str,
        password: &str,
        name: &str,
        roles: Vec<RoleType>,
    ) -> Result<SignupResponse, AppError> {
        let start_time = std::time::Instant::now();

        // 사전 중복 검사 (경합은 유니크 인덱스가 최종 방어)
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::UserAlreadyExists);
        }

        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        info!("Password hashing took: {:?}", hash_start.elapsed());

        let mut session = self.start_transaction().await?;

        let result = self
            .sign_up_in_session(username, password_hash, name, roles, &mut session)
            .await;

        let user = Self::finish_transaction(session, result).await?;

        info!("✅ 회원가입 완료: username={} (took {:?})", user.username, start_time.elapsed());

        Ok(SignupResponse::from(user))
    }

    /// 소셜 로그인 (OAuth 콜백 처리의 계정 정책 부분)
    ///
    /// 프로바이더 통신이 끝난 뒤, 정규화된 클레임을 받아
    /// 조회 → 판정 → 쓰기를 하나의 트랜잭션으로 수행하고
    /// JWT를 발급합니다.
    ///
    /// # Arguments
    ///
    /// * `registration_id` - 프로바이더 식별 문자열 ("google", "github")
    /// * `claims` - 프로바이더 중립적인 사용자 클레임
    ///
    /// # Errors
    ///
    /// * `AppError::UnknownProvider` - 매핑에 없는 registration id
    /// * `AppError::IdentityConflict` - 이메일이 다른 인증 수단의 계정에
    ///   이미 점유됨. 어떤 상태도 변경하지 않고 트랜잭션이 롤백됩니다.
    /// * `AppError::UserAlreadyExists` - 동시 가입 경합에서 패배
    pub async fn oauth_login(
        &self,
        registration_id: &str,
        claims: OAuthUserClaims,
    ) -> Result<LoginResponse, AppError> {
        let start_time = std::time::Instant::now();

        let provider_type = AuthProviderType::from_registration_id(registration_id)?;

        let mut session = self.start_transaction().await?;

        let result = self
            .oauth_login_in_session(provider_type, &claims, &mut session)
            .await;

        let user = Self::finish_transaction(session, result).await?;

        let token = self.token_service.generate_access_token(&user)?;
        let user_id = user.id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        info!(
            "✅ 소셜 로그인 성공: provider={}, user_id={} (took {:?})",
            provider_type, user_id, start_time.elapsed()
        );

        Ok(LoginResponse::new(token, user_id))
    }

    /// 트랜잭션 세션 시작
    async fn start_transaction(&self) -> Result<ClientSession, AppError> {
        let mut session = self.db.client()
            .start_session()
            .await
            .map_err(|e| AppError::DatabaseError(format!("세션 시작 실패: {}", e)))?;

        session.start_transaction()
            .await
            .map_err(|e| AppError::DatabaseError(format!("트랜잭션 시작 실패: {}", e)))?;

        Ok(session)
    }

    /// 트랜잭션 커밋 또는 롤백
    ///
    /// 커밋 시점에 드러나는 유니크 인덱스 위반은 경합에서 패배한
    /// 경우이므로 `UserAlreadyExists`로 분류합니다.
    async fn finish_transaction<T>(
        mut session: ClientSession,
        result: Result<T, AppError>,
    ) -> Result<T, AppError> {
        match result {
            Ok(value) => {
                session.commit_transaction()
                    .await
                    .map_err(|e| {
                        if is_duplicate_key_error(&e) {
                            AppError::UserAlreadyExists
                        } else {
                            AppError::DatabaseError(format!("트랜잭션 커밋 실패: {}", e))
                        }
                    })?;
                Ok(value)
            }
            Err(e) => {
                let _ = session.abort_transaction().await;
                Err(e)
            }
        }
    }

    /// 회원가입 트랜잭션 본문
    async fn sign_up_in_session(
        &self,
        username: &str,
        password_hash: String,
        name: &str,
        roles: Vec<RoleType>,
        session: &mut ClientSession,
    ) -> Result<User, AppError> {
        let user = User::new_email(username.to_string(), password_hash, roles);
        let user = self.user_repo.insert_in_session(user, session).await?;

        let user_id = user.id
            .ok_or_else(|| AppError::InternalError("삽입된 사용자의 ID가 없습니다".to_string()))?;

        let patient = Patient::new(name.to_string(), username.to_string(), user_id);
        self.patient_repo.insert_in_session(patient, session).await?;

        Ok(user)
    }

    /// 소셜 로그인 트랜잭션 본문
    ///
    /// 조회 두 번(프로바이더 식별자, 이메일) → `reconcile()` 판정 →
    /// 판정에 따른 쓰기. 모든 조회와 쓰기가 같은 세션을 사용합니다.
    async fn oauth_login_in_session(
        &self,
        provider_type: AuthProviderType,
        claims: &OAuthUserClaims,
        session: &mut ClientSession,
    ) -> Result<User, AppError> {
        let by_provider = self.user_repo
            .find_by_provider_in_session(&claims.subject_id, provider_type, session)
            .await?;

        // 이메일이 없으면 이메일 기반 연결 후보도 없음
        let by_email = match claims.email.as_deref() {
            Some(email) => {
                self.user_repo
                    .find_by_username_in_session(email, session)
                    .await?
            }
            None => None,
        };

        match Self::reconcile(by_provider.as_ref(), by_email.as_ref(), claims, provider_type)? {
            OAuthOutcome::Register { username } => {
                debug!("소셜 신규 가입: provider={}, username={}", provider_type, username);

                let user = User::new_oauth(
                    username.clone(),
                    provider_type,
                    claims.subject_id.clone(),
                    vec![RoleType::Patient],
                );
                let user = self.user_repo.insert_in_session(user, session).await?;

                let user_id = user.id
                    .ok_or_else(|| AppError::InternalError("삽입된 사용자의 ID가 없습니다".to_string()))?;

                let patient = Patient::new(claims.name.clone(), username, user_id);
                self.patient_repo.insert_in_session(patient, session).await?;

                Ok(user)
            }
            OAuthOutcome::Login { synced_username } => {
                let mut user = by_provider.ok_or_else(|| {
                    AppError::InternalError("정합 판정과 조회 결과가 일치하지 않습니다".to_string())
                })?;

                if let Some(new_username) = synced_username {
                    let id = user.id.ok_or_else(|| {
                        AppError::InternalError("사용자 ID가 없습니다".to_string())
                    })?;

                    debug!("이메일 드리프트 정합: {} → {}", user.username, new_username);
                    self.user_repo
                        .update_username_in_session(&id, &new_username, session)
                        .await?;
                    user.username = new_username;
                }

                Ok(user)
            }
        }
    }

    /// 소셜 로그인 계정 정합 판정 (순수 함수)
    ///
    /// 조회 결과만 입력으로 받아 어떤 쓰기를 해야 하는지 결정합니다.
    /// I/O가 없으므로 판정 규칙 전체를 단위 테스트로 검증할 수 있습니다.
    ///
    /// # 판정 규칙
    ///
    /// | 프로바이더 일치 | 이메일 일치 | 결과 |
    /// |----------------|------------|------|
    /// | 있음 | (무관) | 로그인. 프로바이더 이메일이 저장값과 다르면 동기화 |
    /// | 없음 | 있음 | `IdentityConflict` — 기존 계정의 인증 수단을 담아 거부 |
    /// | 없음 | 없음 | 신규 가입 |
    ///
    /// 신규 가입의 username은 프로바이더 이메일을 사용하고, 이메일이
    /// 없으면 `{provider}:{subject_id}` 형태의 합성 식별자를 사용합니다.
    /// 합성 식별자는 이메일 형식이 아니므로 이후의 이메일 기반 연결
    /// 후보가 되지 않습니다.
    fn reconcile(
        by_provider: Option<&User>,
        by_email: Option<&User>,
        claims: &OAuthUserClaims,
        provider_type: AuthProviderType,
    ) -> Result<OAuthOutcome, AppError> {
        // 1순위: 프로바이더 식별자 일치 — 재로그인
        if let Some(user) = by_provider {
            let synced_username = match claims.email.as_deref() {
                Some(email) if email != user.username => Some(email.to_string()),
                _ => None,
            };
            return Ok(OAuthOutcome::Login { synced_username });
        }

        // 2순위: 이메일만 일치 — 다른 인증 수단의 기존 계정과 충돌
        if let Some(existing) = by_email {
            return Err(AppError::IdentityConflict {
                provider: existing.provider_type,
            });
        }

        // 3순위: 둘 다 없음 — 신규 가입
        let username = match claims.email.as_deref() {
            Some(email) => email.to_string(),
            None => format!(
                "{}:{}",
                provider_type.as_str().to_lowercase(),
                claims.subject_id
            ),
        };

        Ok(OAuthOutcome::Register { username })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn claims(subject_id: &str, email: Option<&str>) -> OAuthUserClaims {
        OAuthUserClaims {
            subject_id: subject_id.to_string(),
            email: email.map(String::from),
            name: "홍길동".to_string(),
        }
    }

    fn oauth_user(username: &str, provider_type: AuthProviderType, provider_id: &str) -> User {
        let mut user = User::new_oauth(
            username.to_string(),
            provider_type,
            provider_id.to_string(),
            vec![RoleType::Patient],
        );
        user.id = Some(ObjectId::new());
        user
    }

    fn email_user(username: &str) -> User {
        let mut user = User::new_email(
            username.to_string(),
            "$2b$04$hash".to_string(),
            vec![RoleType::Patient],
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_reconcile_fresh_account_uses_email_as_username() {
        let claims = claims("108234", Some("hong@example.com"));

        let outcome =
            AuthService::reconcile(None, None, &claims, AuthProviderType::Google).unwrap();

        assert_eq!(outcome, OAuthOutcome::Register {
            username: "hong@example.com".to_string(),
        });
    }

    #[test]
    fn test_reconcile_fresh_account_without_email_uses_synthetic_username() {
        let claims = claims("108234", None);

        let outcome =
            AuthService::reconcile(None, None, &claims, AuthProviderType::Google).unwrap();

        assert_eq!(outcome, OAuthOutcome::Register {
            username: "google:108234".to_string(),
        });
    }

    #[test]
    fn test_reconcile_provider_match_is_plain_login() {
        let user = oauth_user("hong@example.com", AuthProviderType::Google, "108234");
        let claims = claims("108234", Some("hong@example.com"));

        let outcome = AuthService::reconcile(
            Some(&user),
            Some(&user),
            &claims,
            AuthProviderType::Google,
        ).unwrap();

        assert_eq!(outcome, OAuthOutcome::Login { synced_username: None });
    }

    #[test]
    fn test_reconcile_provider_match_syncs_drifted_email() {
        let user = oauth_user("old@example.com", AuthProviderType::Google, "108234");
        let claims = claims("108234", Some("new@example.com"));

        let outcome =
            AuthService::reconcile(Some(&user), None, &claims, AuthProviderType::Google).unwrap();

        assert_eq!(outcome, OAuthOutcome::Login {
            synced_username: Some("new@example.com".to_string()),
        });
    }

    #[test]
    fn test_reconcile_provider_match_without_email_claim_skips_sync() {
        let user = oauth_user("hong@example.com", AuthProviderType::Google, "108234");
        let claims = claims("108234", None);

        let outcome =
            AuthService::reconcile(Some(&user), None, &claims, AuthProviderType::Google).unwrap();

        assert_eq!(outcome, OAuthOutcome::Login { synced_username: None });
    }

    #[test]
    fn test_reconcile_email_only_match_is_conflict_with_local_account() {
        let existing = email_user("hong@example.com");
        let claims = claims("108234", Some("hong@example.com"));

        let error = AuthService::reconcile(
            None,
            Some(&existing),
            &claims,
            AuthProviderType::Google,
        ).unwrap_err();

        match error {
            AppError::IdentityConflict { provider } => {
                assert_eq!(provider, AuthProviderType::Email);
            }
            other => panic!("예상하지 못한 에러: {:?}", other),
        }
    }

    #[test]
    fn test_reconcile_email_only_match_reports_other_oauth_provider() {
        let existing = oauth_user("hong@example.com", AuthProviderType::Github, "gh-77");
        let claims = claims("108234", Some("hong@example.com"));

        let error = AuthService::reconcile(
            None,
            Some(&existing),
            &claims,
            AuthProviderType::Google,
        ).unwrap_err();

        match error {
            AppError::IdentityConflict { provider } => {
                assert_eq!(provider, AuthProviderType::Github);
            }
            other => panic!("예상하지 못한 에러: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_registration_id_is_rejected() {
        let error = AuthProviderType::from_registration_id("kakao").unwrap_err();
        assert!(matches!(error, AppError::UnknownProvider(_)));
    }

    #[test]
    fn test_bcrypt_roundtrip_rejects_wrong_password() {
        // 테스트 환경의 낮은 cost 사용
        let hash = bcrypt::hash("Password123", 4).unwrap();

        assert!(bcrypt::verify("Password123", &hash).unwrap());
        assert!(!bcrypt::verify("password123", &hash).unwrap());
    }
}
