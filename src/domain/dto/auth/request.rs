//! 인증 요청 관련 DTO
//!
//! 회원가입, 로그인, OAuth 콜백 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 회원가입 요청 DTO
///
/// 역할(roles) 필드는 의도적으로 없습니다. 셀프 서비스 가입은
/// 서버에서 항상 환자 역할로 생성되며, 클라이언트가 역할을
/// 지정할 수 없습니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    /// 사용자 이메일 주소 (username 겸용, RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub username: String,

    /// 계정 비밀번호 (최소 8자, 대소문자+숫자 포함)
    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// 표시 이름 (1-50자, 유니코드 지원)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub name: String,
}

/// 비밀번호 보안 강도 검증 (대문자, 소문자, 숫자 필수 포함)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_digit(10));

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

/// 로그인 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// OAuth 콜백 쿼리 파라미터 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,

    #[validate(length(min = 1, message = "State가 필요합니다"))]
    pub state: String,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_valid() {
        let req = SignupRequest {
            username: "patient@example.com".to_string(),
            password: "Str0ngPass".to_string(),
            name: "홍길동".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_signup_request_invalid_email() {
        let req = SignupRequest {
            username: "not-an-email".to_string(),
            password: "Str0ngPass".to_string(),
            name: "홍길동".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_signup_request_weak_password() {
        // 숫자 없음
        let req = SignupRequest {
            username: "patient@example.com".to_string(),
            password: "OnlyLetters".to_string(),
            name: "홍길동".to_string(),
        };
        assert!(req.validate().is_err());

        // 8자 미만
        let req = SignupRequest {
            username: "patient@example.com".to_string(),
            password: "Ab1".to_string(),
            name: "홍길동".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_signup_request_rejects_roles_field() {
        // 클라이언트가 roles를 끼워 넣어도 역직렬화 대상 필드가 아니므로 무시됨
        let json = r#"{
            "username": "patient@example.com",
            "password": "Str0ngPass",
            "name": "홍길동",
            "roles": ["ADMIN"]
        }"#;
        let req: SignupRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_login_request_empty_password() {
        let req = LoginRequest {
            username: "patient@example.com".to_string(),
            password: "".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
