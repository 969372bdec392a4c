//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! | 모듈 | 담당 엔드포인트 |
//! |------|----------------|
//! | `auth` | `POST /auth/signup`, `POST /auth/login`, `GET /auth/google/*` |
//! | `patients` | `GET /patients/profile`, `POST·GET /patients/appointments` |
//! | `directory` | `GET /doctors`, `GET /departments` |
//! | `insurance` | `POST·GET /insurance` |
//!
//! 핸들러는 요청 검증과 응답 변환만 담당하고,
//! 비즈니스 로직은 전부 서비스 계층에 위임합니다.

pub mod auth;
pub mod patients;
pub mod directory;
pub mod insurance;
