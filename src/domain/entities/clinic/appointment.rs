//! Appointment Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 예약 엔티티
///
/// 환자와 의사를 연결하는 진료 예약입니다.
/// 예약 시간 충돌 검사나 스케줄 최적화는 수행하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 예약한 환자 ID
    pub patient_id: ObjectId,
    /// 담당 의사 ID
    pub doctor_id: ObjectId,
    /// 예약 시간
    pub appointment_time: DateTime,
    /// 방문 사유
    pub reason: String,
    pub created_at: DateTime,
}

impl Appointment {
    pub fn new(
        patient_id: ObjectId,
        doctor_id: ObjectId,
        appointment_time: DateTime,
        reason: String,
    ) -> Self {
        Self {
            id: None,
            patient_id,
            doctor_id,
            appointment_time,
            reason,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
