//! Users Entity Module
//!
//! 인증 계정 엔티티를 정의하는 모듈입니다.
//! 로컬 인증과 OAuth 인증을 모두 지원하는 통합 User 엔티티를 포함합니다.
//!
//! # 주요 구성 요소
//!
//! ### User Entity
//! - **로컬 인증**: 이메일(username)/패스워드 기반 인증
//! - **OAuth 인증**: Google, GitHub 외부 인증 프로바이더 지원
//! - **단일 계정 테이블**: 두 경로가 같은 `users` 컬렉션으로 수렴
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! // 로컬 사용자 생성
//! let user = User::new_email(
//!     "user@example.com".to_string(),
//!     hashed_password,
//!     vec![RoleType::Patient],
//! );
//!
//! // OAuth 사용자 생성
//! let oauth_user = User::new_oauth(
//!     "user@gmail.com".to_string(),
//!     AuthProviderType::Google,
//!     "google_subject_123".to_string(),
//!     vec![RoleType::Patient],
//! );
//! ```

pub mod user;

pub use user::*;
