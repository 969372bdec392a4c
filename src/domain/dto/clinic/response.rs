//! 예약 도메인 응답 DTO
//!
//! 엔티티를 API 응답 형태로 변환합니다. ObjectId는 hex 문자열로,
//! BSON DateTime은 RFC 3339 문자열로 직렬화합니다.

use mongodb::bson::DateTime;
use serde::Serialize;
use crate::domain::entities::clinic::{
    appointment::Appointment,
    department::Department,
    doctor::Doctor,
    insurance::Insurance,
    patient::{BloodGroupType, Patient},
};

fn to_rfc3339(dt: DateTime) -> String {
    dt.try_to_rfc3339_string().unwrap_or_default()
}

/// 환자 프로필 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct PatientResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroupType>,
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: patient.name,
            email: patient.email,
            gender: patient.gender,
            birth_date: patient.birth_date.map(to_rfc3339),
            blood_group: patient.blood_group,
        }
    }
}

/// 예약 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentResponse {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_time: String,
    pub reason: String,
    pub created_at: String,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.map(|id| id.to_hex()).unwrap_or_default(),
            patient_id: appointment.patient_id.to_hex(),
            doctor_id: appointment.doctor_id.to_hex(),
            appointment_time: to_rfc3339(appointment.appointment_time),
            reason: appointment.reason,
            created_at: to_rfc3339(appointment.created_at),
        }
    }
}

/// 의사 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct DoctorResponse {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub department_id: String,
}

impl From<Doctor> for DoctorResponse {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doctor.name,
            specialization: doctor.specialization,
            department_id: doctor.department_id.to_hex(),
        }
    }
}

/// 진료과 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: department.name,
        }
    }
}

/// 보험 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct InsuranceResponse {
    pub id: String,
    pub policy_number: String,
    pub provider: String,
    pub valid_until: String,
    pub created_at: String,
}

impl From<Insurance> for InsuranceResponse {
    fn from(insurance: Insurance) -> Self {
        Self {
            id: insurance.id.map(|id| id.to_hex()).unwrap_or_default(),
            policy_number: insurance.policy_number,
            provider: insurance.provider,
            valid_until: to_rfc3339(insurance.valid_until),
            created_at: to_rfc3339(insurance.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_patient_response_optional_fields_skipped() {
        let patient = Patient::new(
            "홍길동".to_string(),
            "hong@example.com".to_string(),
            ObjectId::new(),
        );
        let response = PatientResponse::from(patient);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("gender"));
        assert!(!json.contains("blood_group"));
        assert!(json.contains("hong@example.com"));
    }

    #[test]
    fn test_appointment_response_hex_ids() {
        let patient_id = ObjectId::new();
        let doctor_id = ObjectId::new();
        let mut appointment = Appointment::new(
            patient_id,
            doctor_id,
            DateTime::now(),
            "정기 검진".to_string(),
        );
        appointment.id = Some(ObjectId::new());

        let response = AppointmentResponse::from(appointment);
        assert_eq!(response.patient_id, patient_id.to_hex());
        assert_eq!(response.doctor_id, doctor_id.to_hex());
        assert!(!response.appointment_time.is_empty());
    }
}
