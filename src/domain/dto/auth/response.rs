//! 인증 응답 관련 DTO

use serde::Serialize;
use crate::config::RoleType;
use crate::domain::entities::users::user::User;

/// 로그인 응답 DTO (JWT 토큰 포함)
///
/// 로컬 로그인과 OAuth 콜백이 같은 형태로 응답합니다.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// 액세스 토큰 (API 접근용)
    pub token: String,
    /// 인증된 사용자 ID
    pub user_id: String,
}

impl LoginResponse {
    pub fn new(token: String, user_id: String) -> Self {
        Self { token, user_id }
    }
}

/// 회원가입 응답 DTO
///
/// 민감한 정보(password_hash)는 노출하지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct SignupResponse {
    pub id: String,
    pub username: String,
    pub roles: Vec<RoleType>,
}

impl From<User> for SignupResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            username: user.username,
            roles: user.roles,
        }
    }
}

/// OAuth 로그인 URL 응답 DTO
///
/// 클라이언트가 리다이렉트할 프로바이더 인증 URL과 CSRF 방지용
/// state 값을 전달합니다.
#[derive(Debug, Clone, Serialize)]
pub struct OAuthLoginUrlResponse {
    pub login_url: String,
    pub state: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProviderType;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_signup_response_hides_password_hash() {
        let mut user = User::new_email(
            "patient@example.com".to_string(),
            "$2b$04$secret".to_string(),
            vec![RoleType::Patient],
        );
        user.id = Some(ObjectId::new());

        let response = SignupResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("secret"));
        assert!(json.contains("patient@example.com"));
        assert!(json.contains("PATIENT"));
    }

    #[test]
    fn test_signup_response_from_oauth_user() {
        let mut user = User::new_oauth(
            "google:108234".to_string(),
            AuthProviderType::Google,
            "108234".to_string(),
            vec![RoleType::Patient],
        );
        user.id = Some(ObjectId::new());

        let response = SignupResponse::from(user);
        assert_eq!(response.username, "google:108234");
    }
}
