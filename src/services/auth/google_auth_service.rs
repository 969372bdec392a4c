//! # Google OAuth 2.0 연동 서비스
//!
//! Google Authorization Code 플로우의 프로바이더 측 통신을 담당합니다.
//!
//! ## 책임 범위
//!
//! 이 서비스는 **프로바이더 어댑터**입니다. Google과의 HTTP 통신과
//! 응답 정규화까지만 담당하고, 계정 생성/연결/충돌 판정은
//! `AuthService::oauth_login`이 수행합니다.
//!
//! | 단계 | 담당 |
//! |------|------|
//! | 로그인 URL 생성, state 발급 | `GoogleAuthService` |
//! | Authorization code → 액세스 토큰 교환 | `GoogleAuthService` |
//! | UserInfo 조회 및 `OAuthUserClaims` 변환 | `GoogleAuthService` |
//! | 기존 계정 조회, 신규 가입, 이메일 충돌 판정 | `AuthService` |
//!
//! ## OAuth 2.0 플로우
//!
//! ```text
//! 1. GET /auth/google/login  → get_login_url() → Google 로그인 페이지로 리다이렉트
//! 2. 사용자 동의 후 Google이 콜백 URL로 code + state 전달
//! 3. GET /auth/google/callback → fetch_user_claims(code, state)
//!    ├─ state 검증 (CSRF 방지)
//!    ├─ code를 액세스 토큰으로 교환
//!    └─ UserInfo 조회 → OAuthUserClaims 반환
//! 4. AuthService::oauth_login(claims) → JWT 발급
//! ```

use log::{debug, info};
use singleton_macro::service;
use crate::{
    config::{GoogleOAuthConfig, OAuthConfig},
    domain::dto::auth::response::OAuthLoginUrlResponse,
    domain::models::oauth::google::{GoogleTokenResponse, GoogleUserInfo, OAuthUserClaims},
    errors::errors::AppError,
};

/// Google OAuth 2.0 프로바이더 어댑터
///
/// 외부 의존성 없이 설정값(`GoogleOAuthConfig`)과 HTTP 클라이언트만 사용합니다.
#[service(name = "google_auth")]
pub struct GoogleAuthService {
    // 외부 의존성 없음
}

impl GoogleAuthService {
    /// Google OAuth 로그인 URL 생성
    ///
    /// 사용자를 리다이렉트할 Google 인증 페이지 URL과
    /// CSRF 방지용 state 값을 함께 반환합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(OAuthLoginUrlResponse)` - 로그인 URL과 state
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - state 생성 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let google_auth = GoogleAuthService::instance();
    /// let response = google_auth.get_login_url()?;
    /// // https://accounts.google.com/o/oauth2/v2/auth?client_id=...&state=...
    /// ```
    pub fn get_login_url(&self) -> Result<OAuthLoginUrlResponse, AppError> {
        let state = self.generate_oauth_state()?;
        let login_url = Self::build_login_url(
            &GoogleOAuthConfig::client_id(),
            &GoogleOAuthConfig::redirect_uri(),
            &state,
        );

        info!("🔗 Google OAuth 로그인 URL 생성 완료");
        debug!("생성된 state: {}", state);

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    /// 인증 페이지 URL 조립
    ///
    /// 설정 조회(`client_id`/`redirect_uri`)와 쿼리 스트링 조립을 분리합니다.
    fn build_login_url(client_id: &str, redirect_uri: &str, state: &str) -> String {
        let params = [
            ("client_id", client_id),
            ("redirect_uri", redirect_uri),
            ("scope", "openid email profile"),
            ("response_type", "code"),
            ("state", state),
        ];

        let query_string = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", GoogleOAuthConfig::auth_uri(), query_string)
    }

    /// 콜백으로 받은 code를 사용자 클레임으로 변환
    ///
    /// state 검증 → 토큰 교환 → UserInfo 조회를 순서대로 수행하고,
    /// 프로바이더 중립적인 `OAuthUserClaims`를 반환합니다.
    /// 계정 정책 판단은 하지 않습니다.
    ///
    /// # Arguments
    ///
    /// * `auth_code` - Google 콜백으로 전달된 authorization code
    /// * `state` - 콜백으로 전달된 state 매개변수
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - state 검증 실패
    /// * `AppError::ExternalServiceError` - Google API 호출 실패
    pub async fn fetch_user_claims(
        &self,
        auth_code: &str,
        state: &str,
    ) -> Result<OAuthUserClaims, AppError> {
        self.verify_oauth_state(state)?;

        let token_response = self.exchange_code_for_token(auth_code).await?;
        let user_info = self.get_user_info(&token_response.access_token).await?;

        info!("✅ Google 사용자 정보 조회 완료: subject_id={}", user_info.id);

        Ok(OAuthUserClaims::from(user_info))
    }

    /// Authorization Code를 액세스 토큰으로 교환
    ///
    /// Google 토큰 엔드포인트에 POST 요청을 보내
    /// 일회용 authorization code를 액세스 토큰으로 교환합니다.
    async fn exchange_code_for_token(&self, auth_code: &str) -> Result<GoogleTokenResponse, AppError> {
        let client = reqwest::Client::new();

        let params = [
            ("code", auth_code.to_string()),
            ("client_id", GoogleOAuthConfig::client_id()),
            ("client_secret", GoogleOAuthConfig::client_secret()),
            ("redirect_uri", GoogleOAuthConfig::redirect_uri()),
            ("grant_type", "authorization_code".to_string()),
        ];

        let response = client
            .post(&GoogleOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "응답 본문 읽기 실패".to_string());
            return Err(AppError::ExternalServiceError(
                format!("Google 토큰 교환 실패: {}", error_text)
            ));
        }

        response.json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("토큰 응답 파싱 실패: {}", e)))
    }

    /// 액세스 토큰으로 Google UserInfo 조회
    async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let client = reqwest::Client::new();

        let response = client
            .get("https://www.googleapis.com/oauth2/v2/userinfo")
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google UserInfo 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "응답 본문 읽기 실패".to_string());
            return Err(AppError::ExternalServiceError(
                format!("Google UserInfo 조회 실패: {}", error_text)
            ));
        }

        response.json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("UserInfo 응답 파싱 실패: {}", e)))
    }

    /// CSRF 방지용 OAuth state 생성
    ///
    /// 타임스탬프와 서버 비밀키를 조합한 해시를 state로 사용합니다.
    fn generate_oauth_state(&self) -> Result<String, AppError> {
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::InternalError(format!("시간 계산 실패: {}", e)))?
            .as_secs();

        let state_data = format!("{}:{}", timestamp, OAuthConfig::state_secret());

        // 간단한 해시 생성 (실제로는 더 안전한 방법 사용 권장)
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        state_data.hash(&mut hasher);

        Ok(format!("{:x}", hasher.finish()))
    }

    /// OAuth state 매개변수 검증
    ///
    /// 콜백에서 받은 state 값이 유효한지 검증하여 CSRF 공격을 방지합니다.
    ///
    /// 현재 구현은 빈 값 여부만 확인합니다. 프로덕션에서는 Redis에
    /// state를 임시 저장하고 일회성/만료를 보장하는 방식이 권장됩니다.
    fn verify_oauth_state(&self, state: &str) -> Result<(), AppError> {
        if state.is_empty() {
            return Err(AppError::AuthenticationError("유효하지 않은 OAuth state".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> GoogleAuthService {
        GoogleAuthService {}
    }

    #[test]
    fn test_login_url_contains_required_params() {
        let url = GoogleAuthService::build_login_url(
            "client-123",
            "http://localhost:8080/auth/google/callback",
            "a1b2c3",
        );

        assert!(url.contains("client_id=client-123"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fauth%2Fgoogle%2Fcallback"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=openid%20email%20profile"));
        assert!(url.contains("state=a1b2c3"));
    }

    #[test]
    fn test_generate_oauth_state_is_hex() {
        let svc = service();
        let state = svc.generate_oauth_state().unwrap();

        assert!(!state.is_empty());
        assert!(state.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_verify_oauth_state_rejects_empty() {
        let svc = service();
        assert!(svc.verify_oauth_state("").is_err());
        assert!(svc.verify_oauth_state("a1b2c3").is_ok());
    }
}
