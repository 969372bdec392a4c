//! 진료 예약 서비스 백엔드
//!
//! Rust 기반의 진료 예약 및 환자 관리 서비스입니다.
//! JWT 토큰 기반 인증, Google OAuth 2.0 소셜 로그인,
//! 그리고 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **계정 관리**: 회원가입, 패스워드/소셜 로그인, 계정 정합
//! - **환자 관리**: 본인 프로필 조회
//! - **예약**: 예약 생성과 본인 예약 목록 조회
//! - **보험**: 보험 등록과 본인 보험 목록 조회
//! - **의료진 디렉터리**: 의사/진료과 공개 목록
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 데이터 영구 저장 및 트랜잭션
//! - **Redis**: 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use appointment_service_backend::services::auth::AuthService;
//! use appointment_service_backend::services::clinic::PatientService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let auth_service = AuthService::instance();
//! let patient_service = PatientService::instance();
//!
//! // 로그인 및 프로필 조회
//! let login = auth_service.login("hong@example.com", "password").await?;
//! let profile = patient_service.get_profile(&login.user_id).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
