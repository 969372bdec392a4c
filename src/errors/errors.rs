//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 예약 백엔드 전체를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 인증/계정 조정(identity reconciliation)에서 발생하는 에러들은
//! 문자열이 아닌 전용 배리언트로 구분됩니다. 핸들러는 `?`로 전파만 하면
//! HTTP 상태 코드 매핑이 자동으로 적용됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn sign_up(req: SignupRequest) -> Result<User, AppError> {
//!     if user_repo.find_by_username(&req.username).await?.is_some() {
//!         return Err(AppError::UserAlreadyExists);
//!     }
//!     // ...
//! }
//! ```

use thiserror::Error;

use crate::config::AuthProviderType;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 로그인 실패 (401 Unauthorized)
    ///
    /// 존재하지 않는 계정과 비밀번호 불일치를 의도적으로 구분하지 않습니다.
    /// 계정 존재 여부가 응답으로 노출되면 안 되기 때문입니다.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// 회원가입/계정 생성 시 username 중복 (409 Conflict)
    #[error("User already exists")]
    UserAlreadyExists,

    /// 매핑되지 않은 OAuth registration id (400 Bad Request)
    #[error("Unknown OAuth provider: {0}")]
    UnknownProvider(String),

    /// 소셜 로그인 이메일이 다른 인증 경로의 기존 계정과 충돌 (409 Conflict)
    ///
    /// 기존 계정이 어떤 프로바이더 소속인지 함께 전달하여
    /// 클라이언트가 "Google 대신 이메일로 로그인하세요" 류의 안내를 할 수 있게 합니다.
    #[error("Account already exists with provider {provider}")]
    IdentityConflict { provider: AuthProviderType },

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::UserAlreadyExists => StatusCode::CONFLICT,
            AppError::UnknownProvider(_) => StatusCode::BAD_REQUEST,
            AppError::IdentityConflict { .. } => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// MongoDB duplicate key 에러(E11000) 여부 판별
///
/// username / (provider_id, provider_type) 유니크 인덱스는 동시 가입 레이스의
/// 최종 방어선입니다. 트랜잭션 커밋이 이 에러로 실패하면 레이스에서 진 것이므로
/// 호출부에서 중복 가입과 동일한 에러로 변환합니다.
pub fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(we)) => we.code == 11000,
        ErrorKind::Command(ce) => ce.code == 11000,
        ErrorKind::BulkWrite(be) => be
            .write_errors
            .iter()
            .any(|(_, we)| we.code == 11000),
        _ => false,
    }
}

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_invalid_credentials_response() {
        let error = AppError::InvalidCredentials;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_credentials_message_is_uniform() {
        // 계정 존재 여부가 메시지로 새지 않아야 한다
        let error = AppError::InvalidCredentials;
        assert_eq!(error.to_string(), "Invalid username or password");
    }

    #[test]
    fn test_user_already_exists_response() {
        let error = AppError::UserAlreadyExists;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_unknown_provider_response() {
        let error = AppError::UnknownProvider("kakao".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert!(error.to_string().contains("kakao"));
    }

    #[test]
    fn test_identity_conflict_response() {
        let error = AppError::IdentityConflict {
            provider: AuthProviderType::Google,
        };
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
        assert!(error.to_string().contains("GOOGLE"));
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Patient not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_key_command_error_classified() {
        use mongodb::bson::doc;
        use mongodb::error::{CommandError, Error, ErrorKind};

        // 서버가 반환하는 형태 그대로의 E11000 커맨드 에러
        let command_error: CommandError = mongodb::bson::from_document(doc! {
            "code": 11000,
            "codeName": "DuplicateKey",
            "errmsg": "E11000 duplicate key error collection: users index: username_unique",
        })
        .unwrap();
        let error = Error::from(ErrorKind::Command(command_error));

        assert!(is_duplicate_key_error(&error));
    }

    #[test]
    fn test_non_duplicate_error_not_classified() {
        let error = mongodb::error::Error::custom("connection reset");
        assert!(!is_duplicate_key_error(&error));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
