//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |
//! | `ResponseEntity<T>` | `Result<T, AppError>` | 상태 코드와 함께 응답 |
//!
//! ## 설계 원칙
//!
//! ### 1. API 계약 우선 (API Contract First)
//! 클라이언트가 기대할 수 있는 명확한 데이터 구조를 정의합니다.
//!
//! ### 2. 유효성 검증 내장 (Built-in Validation)
//! 요청 DTO는 `validator` derive로 비즈니스 규칙을 검증합니다.
//!
//! ### 3. 도메인 분리 (Domain Separation)
//! Entity와 DTO를 명확히 분리해 민감한 정보(password_hash 등)의
//! 노출을 방지합니다. 특히 가입 요청 DTO는 역할(roles) 필드를
//! 받지 않습니다. 셀프 서비스 가입은 항상 환자 역할로 생성됩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── auth/               # 인증 관련 DTO
//! │   ├── request.rs      # 가입/로그인/OAuth 콜백 요청
//! │   └── response.rs     # 토큰/가입 응답
//! └── clinic/             # 예약 도메인 DTO
//!     ├── request.rs      # 예약/보험 생성 요청
//!     └── response.rs     # 환자/의사/진료과/예약/보험 응답
//! ```

pub mod auth;
pub mod clinic;

pub use auth::*;
pub use clinic::*;
