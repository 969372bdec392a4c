//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델과 값 객체(Value Objects)를 정의하는 모듈입니다.
//! 데이터베이스 문서와 직접 매핑되는 `entities`와 달리,
//! 외부 시스템 통합과 요청 컨텍스트 표현을 담당합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **예시**: `User`, `Patient`, `Appointment`
//!
//! ### Models (`./`)
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - **불변성**: 일반적으로 불변 객체로 설계
//! - **예시**: `TokenClaims`, `AuthenticatedUser`, `GoogleUserInfo`
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 요청 컨텍스트의 인증 사용자, 미들웨어 인증 모드/역할 요구사항
//! - [`token`] - JWT 클레임 구조체
//! - [`oauth`] - Google OAuth 와이어 모델과 프로바이더 중립 클레임

pub mod auth;
pub mod token;
pub mod oauth;

pub use auth::*;
pub use token::*;
pub use oauth::*;
