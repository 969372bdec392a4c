//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, JWT 토큰, 인증 프로바이더/역할 타입 등
//! 인증 관련 설정을 관리하는 모듈입니다.
//! Spring Security의 OAuth2 및 JWT 설정과 유사한 역할을 수행합니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **이메일 인증**: username(이메일)/패스워드 기반 전통적인 인증
//! 2. **Google OAuth 2.0**: Google 계정을 통한 소셜 로그인
//! 3. **GitHub OAuth**: GitHub 계정을 통한 소셜 로그인
//! 4. **JWT 토큰**: Stateless 인증을 위한 JSON Web Token
//!
//! ## Spring Security 와의 비교
//!
//! | Spring Security | 이 모듈 |
//! |-----------------|---------|
//! | `@EnableOAuth2Login` | `GoogleOAuthConfig` |
//! | `jwt.secret` | `JwtConfig::secret()` |
//! | `oauth2.client.registration.{id}` | `AuthProviderType::from_registration_id` |
//! | `GrantedAuthority` | `RoleType` |
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/auth/google/callback"
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! ```

use std::env;
use std::fmt;

use crate::errors::AppError;

/// Google OAuth 2.0 설정을 관리하는 구조체
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
/// Spring Security의 `spring.security.oauth2.client.registration.google` 설정과
/// 동일한 역할을 합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID")
            .expect("GOOGLE_CLIENT_ID must be set")
    }

    /// Google OAuth Client Secret을 반환합니다.
    ///
    /// 서버 사이드에서만 사용되며, 토큰 교환 시 사용됩니다.
    /// 로그에 출력하지 마세요.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET")
            .expect("GOOGLE_CLIENT_SECRET must be set")
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// 이 URI는 Google Cloud Console의 승인된 리디렉션 URI 목록에
    /// 등록되어 있어야 합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_REDIRECT_URI` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .expect("GOOGLE_REDIRECT_URI must be set")
    }

    /// Google OAuth 인증 서버의 인증 엔드포인트 URI를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://accounts.google.com/o/oauth2/auth`
    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string())
    }

    /// Google OAuth 토큰 교환 엔드포인트 URI를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://oauth2.googleapis.com/token`
    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }
}

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// Spring Security JWT의 설정과 유사한 역할을 수행하며,
/// 토큰 서명 키와 만료 시간을 관리합니다.
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 24시간
/// - **프로덕션**: 액세스 토큰 1시간 이하
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 24시간
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// OAuth 일반 설정을 관리하는 구조체
///
/// 모든 OAuth 프로바이더에 공통으로 적용되는 보안 설정을 관리합니다.
/// CSRF 공격 방지를 위한 state 매개변수 생성에 사용됩니다.
pub struct OAuthConfig;

impl OAuthConfig {
    /// OAuth State 검증용 비밀키를 반환합니다.
    ///
    /// CSRF 공격 방지를 위한 state 매개변수 생성 및 검증에 사용됩니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "oauth-state-secret"을 사용하지만,
    /// 프로덕션에서는 경고 로그가 출력됩니다.
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
                "oauth-state-secret".to_string()
            })
    }
}

/// 계정이 소속된 인증 프로바이더를 나타내는 열거형
///
/// Spring Security의 OAuth2 Client Registration과 유사한 개념입니다.
/// 모든 계정은 정확히 하나의 프로바이더에 소속되며,
/// `Email` 계정만 패스워드 해시를 가집니다.
///
/// MongoDB에는 `"EMAIL"` / `"GOOGLE"` / `"GITHUB"` 문자열로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthProviderType {
    /// 이메일/패스워드 인증 계정
    ///
    /// username이 곧 이메일이며, bcrypt 패스워드 해시를 가집니다.
    Email,

    /// Google OAuth 2.0 계정
    Google,

    /// GitHub OAuth 계정
    Github,
}

impl AuthProviderType {
    /// OAuth registration id를 프로바이더 타입으로 변환합니다.
    ///
    /// 소셜 로그인 진입점은 registration id 문자열("google", "github")로
    /// 프로바이더를 식별합니다. 매핑에 없는 id는 `UnknownProvider` 에러로
    /// 즉시 거부됩니다. `Email`은 패스워드 경로 전용이므로 registration id가
    /// 아닙니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// use crate::config::AuthProviderType;
    ///
    /// let provider = AuthProviderType::from_registration_id("google")?;
    /// assert_eq!(provider, AuthProviderType::Google);
    ///
    /// assert!(AuthProviderType::from_registration_id("kakao").is_err());
    /// assert!(AuthProviderType::from_registration_id("email").is_err());
    /// ```
    pub fn from_registration_id(registration_id: &str) -> Result<Self, AppError> {
        match registration_id.to_lowercase().as_str() {
            "google" => Ok(AuthProviderType::Google),
            "github" => Ok(AuthProviderType::Github),
            other => Err(AppError::UnknownProvider(other.to_string())),
        }
    }

    /// 저장/표시용 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProviderType::Email => "EMAIL",
            AuthProviderType::Google => "GOOGLE",
            AuthProviderType::Github => "GITHUB",
        }
    }

    /// 저장된 문자열에서 프로바이더 타입을 복원합니다.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_uppercase().as_str() {
            "EMAIL" => Ok(AuthProviderType::Email),
            "GOOGLE" => Ok(AuthProviderType::Google),
            "GITHUB" => Ok(AuthProviderType::Github),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// 패스워드 로그인이 가능한 프로바이더인지 여부
    pub fn supports_password(&self) -> bool {
        matches!(self, AuthProviderType::Email)
    }
}

impl fmt::Display for AuthProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 역할을 나타내는 열거형
///
/// Spring Security의 `GrantedAuthority`에 해당합니다.
/// 셀프서비스 회원가입과 소셜 로그인 최초 가입은 항상 `Patient` 역할만 부여하며,
/// `Doctor` / `Admin` 역할은 운영 경로에서만 부여됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleType {
    /// 환자 (기본 역할)
    Patient,
    /// 의사
    Doctor,
    /// 관리자
    Admin,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Patient => "PATIENT",
            RoleType::Doctor => "DOCTOR",
            RoleType::Admin => "ADMIN",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_uppercase().as_str() {
            "PATIENT" => Ok(RoleType::Patient),
            "DOCTOR" => Ok(RoleType::Doctor),
            "ADMIN" => Ok(RoleType::Admin),
            _ => Err(format!("Unsupported role: {}", s)),
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_registration_id() {
        assert_eq!(
            AuthProviderType::from_registration_id("google").unwrap(),
            AuthProviderType::Google
        );
        assert_eq!(
            AuthProviderType::from_registration_id("github").unwrap(),
            AuthProviderType::Github
        );

        // 대소문자 무관
        assert_eq!(
            AuthProviderType::from_registration_id("GOOGLE").unwrap(),
            AuthProviderType::Google
        );
    }

    #[test]
    fn test_unknown_registration_id_is_rejected() {
        // 매핑에 없는 registration id는 UnknownProvider로 거부
        let err = AuthProviderType::from_registration_id("kakao").unwrap_err();
        assert!(matches!(err, AppError::UnknownProvider(ref id) if id == "kakao"));

        // Email은 패스워드 경로 전용이므로 registration id가 아니다
        assert!(AuthProviderType::from_registration_id("email").is_err());
    }

    #[test]
    fn test_provider_string_roundtrip() {
        let providers = [
            AuthProviderType::Email,
            AuthProviderType::Google,
            AuthProviderType::Github,
        ];

        for provider in providers {
            assert_eq!(
                AuthProviderType::from_str(provider.as_str()).unwrap(),
                provider
            );
        }

        assert!(AuthProviderType::from_str("facebook").is_err());
    }

    #[test]
    fn test_provider_serialization() {
        // MongoDB 저장 포맷과 일치해야 한다
        let json = serde_json::to_string(&AuthProviderType::Google).unwrap();
        assert_eq!(json, "\"GOOGLE\"");

        let deserialized: AuthProviderType = serde_json::from_str("\"EMAIL\"").unwrap();
        assert_eq!(deserialized, AuthProviderType::Email);
    }

    #[test]
    fn test_supports_password() {
        assert!(AuthProviderType::Email.supports_password());
        assert!(!AuthProviderType::Google.supports_password());
        assert!(!AuthProviderType::Github.supports_password());
    }

    #[test]
    fn test_role_string_roundtrip() {
        let roles = [RoleType::Patient, RoleType::Doctor, RoleType::Admin];

        for role in roles {
            assert_eq!(RoleType::from_str(role.as_str()).unwrap(), role);
        }

        assert!(RoleType::from_str("nurse").is_err());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&RoleType::Patient).unwrap();
        assert_eq!(json, "\"PATIENT\"");
    }
}
