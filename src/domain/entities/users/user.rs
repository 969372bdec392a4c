//! User Entity Implementation
//!
//! 인증 계정 엔티티의 핵심 구현체입니다.
//! 로컬 인증(이메일/패스워드)과 OAuth 인증이 같은 컬렉션으로 수렴하는
//! 단일 계정 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::{AuthProviderType, RoleType};

/// 사용자 엔티티
///
/// 시스템의 모든 계정을 표현하는 핵심 도메인 엔티티입니다.
///
/// ## 식별 규칙
///
/// - `username`은 유니크하며 이메일 주소를 겸합니다. OAuth 프로바이더가
///   이메일을 제공하지 않는 경우 `"{provider}:{subject_id}"` 형태의
///   프로바이더 한정 username이 사용됩니다.
/// - `(provider_id, provider_type)` 쌍은 OAuth 계정에 한해 유니크합니다.
///   로컬(Email) 계정은 `provider_id`가 None입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 식별자 (unique, 이메일 주소 겸용)
    pub username: String,
    /// 해시된 비밀번호 (OAuth 사용자의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 인증 프로바이더 타입
    pub provider_type: AuthProviderType,
    /// OAuth 프로바이더에서의 사용자 ID (로컬 계정은 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    /// 사용자 역할 목록
    pub roles: Vec<RoleType>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    pub fn new_email(username: String, password_hash: String, roles: Vec<RoleType>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            password_hash: Some(password_hash),
            provider_type: AuthProviderType::Email,
            provider_id: None,
            roles,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 OAuth 사용자 생성
    ///
    /// OAuth 프로바이더를 통해 인증된 사용자를 생성합니다. 비밀번호가 없으며,
    /// `(provider_id, provider_type)` 쌍으로 재로그인 시 식별됩니다.
    pub fn new_oauth(
        username: String,
        provider_type: AuthProviderType,
        provider_id: String,
        roles: Vec<RoleType>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            password_hash: None,
            provider_type,
            provider_id: Some(provider_id),
            roles,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 로컬 인증 사용자인지 확인
    pub fn is_local(&self) -> bool {
        matches!(self.provider_type, AuthProviderType::Email)
    }

    /// OAuth 인증 사용자인지 확인
    pub fn is_federated(&self) -> bool {
        !self.is_local()
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_local() && self.password_hash.is_some()
    }

    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: RoleType) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_email_user() {
        let user = User::new_email(
            "patient@example.com".to_string(),
            "$2b$04$hash".to_string(),
            vec![RoleType::Patient],
        );

        assert_eq!(user.provider_type, AuthProviderType::Email);
        assert!(user.provider_id.is_none());
        assert!(user.can_authenticate_with_password());
        assert!(user.is_local());
        assert!(!user.is_federated());
        assert!(user.has_role(RoleType::Patient));
        assert!(!user.has_role(RoleType::Admin));
    }

    #[test]
    fn test_new_oauth_user() {
        let user = User::new_oauth(
            "patient@gmail.com".to_string(),
            AuthProviderType::Google,
            "108234567890".to_string(),
            vec![RoleType::Patient],
        );

        assert!(user.password_hash.is_none());
        assert!(!user.can_authenticate_with_password());
        assert!(user.is_federated());
        assert_eq!(user.provider_id.as_deref(), Some("108234567890"));
    }

    #[test]
    fn test_id_string_before_persist() {
        let user = User::new_email(
            "a@b.com".to_string(),
            "hash".to_string(),
            vec![RoleType::Patient],
        );
        assert!(user.id_string().is_none());
    }
}
