//! 예약 도메인 요청 DTO
//!
//! 예약/보험 생성 요청 데이터 구조를 정의합니다.
//! 환자 ID는 요청 본문이 아닌 JWT에서 파생된 인증 사용자로부터 결정됩니다.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// 예약 생성 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    /// 담당 의사 ID (ObjectId hex 문자열)
    #[validate(length(min = 1, message = "의사 ID가 필요합니다"))]
    pub doctor_id: String,

    /// 예약 시간
    pub appointment_time: DateTime<Utc>,

    /// 방문 사유 (1-200자)
    #[validate(length(
        min = 1,
        max = 200,
        message = "방문 사유는 1-200자 사이여야 합니다"
    ))]
    pub reason: String,
}

/// 보험 등록 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInsuranceRequest {
    /// 증권 번호 (1-50자)
    #[validate(length(
        min = 1,
        max = 50,
        message = "증권 번호는 1-50자 사이여야 합니다"
    ))]
    pub policy_number: String,

    /// 보험사 이름 (1-100자)
    #[validate(length(
        min = 1,
        max = 100,
        message = "보험사 이름은 1-100자 사이여야 합니다"
    ))]
    pub provider: String,

    /// 보험 만료일
    pub valid_until: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_appointment_request_deserialization() {
        let json = r#"{
            "doctor_id": "665f1c0a9b3e2d0012345678",
            "appointment_time": "2026-09-01T10:30:00Z",
            "reason": "정기 검진"
        }"#;
        let req: CreateAppointmentRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.reason, "정기 검진");
    }

    #[test]
    fn test_create_appointment_request_empty_reason() {
        let req = CreateAppointmentRequest {
            doctor_id: "665f1c0a9b3e2d0012345678".to_string(),
            appointment_time: Utc::now(),
            reason: "".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_insurance_request_valid() {
        let req = CreateInsuranceRequest {
            policy_number: "POL-2026-0001".to_string(),
            provider: "국민건강보험".to_string(),
            valid_until: Utc::now(),
        };
        assert!(req.validate().is_ok());
    }
}
