//! 진료 예약 도메인 서비스 모듈
//!
//! 환자 프로필, 예약, 보험, 의료진 디렉터리의 비즈니스 로직을 제공합니다.
//! 쓰기 작업의 환자 식별은 항상 JWT에서 파생된 인증 사용자 ID로 수행하며,
//! 요청 본문의 환자 ID는 신뢰하지 않습니다.

pub mod patient_service;
pub mod appointment_service;
pub mod directory_service;
pub mod insurance_service;

pub use patient_service::*;
pub use appointment_service::*;
pub use directory_service::*;
pub use insurance_service::*;
