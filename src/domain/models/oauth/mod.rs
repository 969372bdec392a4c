//! # OAuth Domain Models Module
//!
//! OAuth 2.0 인증 플로우와 관련된 도메인 모델들을 정의하는 모듈입니다.
//!
//! ## 설계 철학
//!
//! ### 프로바이더 독립성
//!
//! 프로바이더별 와이어 모델(토큰 응답, userinfo 응답)은 각 서브모듈이
//! 담당하고, 계정 정책(`AuthService::oauth_login`)은 프로바이더 중립적인
//! [`OAuthUserClaims`]만 알고 동작합니다:
//!
//! ```text
//! GoogleUserInfo ──┐
//! GithubUserInfo ──┼──▶ OAuthUserClaims ──▶ oauth_login(...)
//!   (향후 확장)    ─┘
//! ```
//!
//! ### 타입 안전성
//!
//! Rust의 타입 시스템을 활용해 프로바이더별 응답을 잘못된 경로로
//! 전달하는 실수를 컴파일 타임에 방지합니다.

pub mod google;

pub use google::*;
