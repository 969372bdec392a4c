//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 도메인 규칙을 담당합니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (JPA Entity와 유사)
//! ├── DTOs         - 데이터 전송 객체 (Request/Response)
//! └── Models       - 외부 시스템 통합 모델 (OAuth, JWT 등)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | Domain Models | `models` 모듈 | 외부 시스템 통합 |
//! | `@Valid` | `validator` derive | 데이터 유효성 검사 |
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB에 저장되는 영속 객체들입니다. 인증 계정([`entities::users`])과
//! 예약 도메인 객체들([`entities::clinic`] - 환자, 의사, 진료과, 예약, 보험)로
//! 구성됩니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//! 요청 DTO는 `validator` derive로 입력 검증을 수행하고,
//! 응답 DTO는 `From<Entity>` 변환으로 민감 정보를 걸러냅니다.
//!
//! ### [`models`] - 외부 시스템 통합 모델
//!
//! Google OAuth 응답, JWT 클레임, 요청 컨텍스트의 인증 사용자 등
//! 영속되지 않는 통합 모델들입니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
