//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 인증/보안과 진료 예약 기능을 담당합니다.
//!
//! # Features
//!
//! - 패스워드/소셜 로그인과 회원가입 (`auth`)
//! - 환자 프로필, 예약, 보험, 의료진 디렉터리 (`clinic`)
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthService, clinic::PatientService};
//!
//! let auth_service = AuthService::instance();
//! let patient_service = PatientService::instance();
//! ```

pub mod auth;
pub mod clinic;
