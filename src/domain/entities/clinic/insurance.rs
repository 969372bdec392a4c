//! Insurance Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 보험 엔티티
///
/// 환자가 등록한 보험 증권 정보입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insurance {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 보험 가입 환자 ID
    pub patient_id: ObjectId,
    /// 증권 번호
    pub policy_number: String,
    /// 보험사 이름
    pub provider: String,
    /// 보험 만료일
    pub valid_until: DateTime,
    pub created_at: DateTime,
}

impl Insurance {
    pub fn new(
        patient_id: ObjectId,
        policy_number: String,
        provider: String,
        valid_until: DateTime,
    ) -> Self {
        Self {
            id: None,
            patient_id,
            policy_number,
            provider,
            valid_until,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
