//! 예약 도메인 데이터 액세스 계층
//!
//! 환자, 의사, 진료과, 예약, 보험 컬렉션에 대한 리포지토리들입니다.
//! 모두 `#[repository]` 매크로로 싱글톤 관리되며, 조회 빈도가 높고
//! 변경이 드문 의사/진료과 목록은 Redis 캐싱을 사용합니다.

pub mod patient_repo;
pub mod doctor_repo;
pub mod department_repo;
pub mod appointment_repo;
pub mod insurance_repo;
