//! 인증 및 보안 서비스 모듈
//!
//! 패스워드/소셜 로그인의 계정 정책과 JWT 토큰 관리를 담당하는
//! 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 패스워드 로그인, 회원가입, 소셜 로그인 계정 정합 (`AuthService`)
//! - JWT 액세스 토큰 생성/검증 (`TokenService`)
//! - Google OAuth 2.0 프로바이더 연동 (`GoogleAuthService`)
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - bcrypt 비밀번호 해싱
//! - CSRF 방지 (OAuth State 매개변수)
//! - 균일한 인증 실패 응답 (계정 존재 여부 비노출)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, GoogleAuthService};
//!
//! // 패스워드 로그인
//! let auth_service = AuthService::instance();
//! let response = auth_service.login("hong@example.com", "password").await?;
//!
//! // Google OAuth 로그인 URL
//! let google_auth = GoogleAuthService::instance();
//! let login_url = google_auth.get_login_url()?;
//! ```

pub mod auth_service;
pub mod token_service;
pub mod google_auth_service;

pub use auth_service::*;
pub use token_service::*;
pub use google_auth_service::*;
