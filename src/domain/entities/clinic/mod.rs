//! Clinic Entity Module
//!
//! 예약 도메인의 영속 엔티티들을 정의하는 모듈입니다.
//! 인증 계정([`super::users::User`])과 1:1로 연결되는 환자 프로필과,
//! 단순 CRUD 대상인 의사/진료과/예약/보험 엔티티를 포함합니다.

pub mod patient;
pub mod doctor;
pub mod department;
pub mod appointment;
pub mod insurance;

pub use patient::*;
pub use doctor::*;
pub use department::*;
pub use appointment::*;
pub use insurance::*;
