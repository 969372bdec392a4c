//! # Google OAuth 와이어 모델
//!
//! Google OAuth 2.0 인증 플로우에서 주고받는 응답 구조체와,
//! 프로바이더 중립적인 사용자 클레임 변환을 정의합니다.
//!
//! Spring Security OAuth2의 `DefaultOAuth2UserService`가 수행하는
//! 속성 매핑과 유사한 역할을 합니다.

use serde::Deserialize;
use crate::utils::string_utils::{clean_optional_string, deserialize_optional_string};

/// Google OAuth 2.0 토큰 엔드포인트 응답
///
/// Authorization code를 교환했을 때 Google이 내려주는 응답입니다.
///
/// 엔드포인트: `https://oauth2.googleapis.com/token`
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// API 호출용 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 액세스 토큰 유효 시간 (초)
    pub expires_in: i32,
    /// 리프레시 토큰 (access_type=offline인 경우에만)
    pub refresh_token: Option<String>,
    /// 승인된 스코프 목록
    pub scope: Option<String>,
}

/// Google OAuth 2.0 UserInfo 엔드포인트 응답
///
/// 엔드포인트: `https://www.googleapis.com/oauth2/v2/userinfo`
///
/// `id`는 Google 전체에서 유일하고 변경되지 않는 식별자로,
/// `(provider_id, provider_type)` 조회의 키가 됩니다.
/// `email`은 스코프나 계정 설정에 따라 없거나 빈 문자열일 수 있으므로
/// 역직렬화 단계에서 빈 문자열을 None으로 정규화합니다.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 사용자 고유 식별자 (불변)
    pub id: String,
    /// 사용자 이메일 주소 (빈 문자열은 None으로 정규화)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
    /// 사용자 전체 이름
    #[serde(default)]
    pub name: Option<String>,
    /// 프로필 사진 URL
    #[serde(default)]
    pub picture: Option<String>,
    /// 이메일 검증 상태
    #[serde(default)]
    pub verified_email: bool,
}

/// 프로바이더 중립적인 OAuth 사용자 클레임
///
/// 계정 정책(`AuthService::oauth_login`)이 소비하는 유일한 입력 형태입니다.
/// 프로바이더별 응답 구조의 차이는 이 타입으로 변환하면서 흡수됩니다.
#[derive(Debug, Clone)]
pub struct OAuthUserClaims {
    /// 프로바이더에서의 사용자 고유 ID
    pub subject_id: String,
    /// 이메일 주소 (없거나 비공개일 수 있음, 빈 문자열은 None)
    pub email: Option<String>,
    /// 표시 이름
    pub name: String,
}

impl From<GoogleUserInfo> for OAuthUserClaims {
    fn from(info: GoogleUserInfo) -> Self {
        let name = clean_optional_string(info.name)
            .unwrap_or_else(|| "Google User".to_string());

        Self {
            subject_id: info.id,
            email: info.email,
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_userinfo_blank_email_normalized() {
        let json = r#"{"id": "108234", "email": "  ", "name": "홍길동", "verified_email": true}"#;
        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.email, None);

        let claims = OAuthUserClaims::from(info);
        assert_eq!(claims.subject_id, "108234");
        assert_eq!(claims.email, None);
        assert_eq!(claims.name, "홍길동");
    }

    #[test]
    fn test_userinfo_missing_optional_fields() {
        let json = r#"{"id": "108234"}"#;
        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.email, None);
        assert!(!info.verified_email);

        let claims = OAuthUserClaims::from(info);
        assert_eq!(claims.name, "Google User");
    }

    #[test]
    fn test_token_response_deserialization() {
        let json = r#"{
            "access_token": "ya29.a0AfH6...",
            "token_type": "Bearer",
            "expires_in": 3599,
            "scope": "openid email profile"
        }"#;
        let token: GoogleTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3599);
        assert!(token.refresh_token.is_none());
    }
}
