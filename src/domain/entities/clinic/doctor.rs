//! Doctor Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 의사 엔티티
///
/// 진료과에 소속된 의사 정보입니다. `GET /doctors` 공개 조회의 대상이며,
/// 의사 계정이 발급된 경우 `user_id`로 인증 계정과 연결됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 의사 이름
    pub name: String,
    /// 전문 분야
    pub specialization: String,
    /// 소속 진료과 ID
    pub department_id: ObjectId,
    /// 연결된 인증 계정 ID (계정이 없으면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ObjectId>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Doctor {
    pub fn new(name: String, specialization: String, department_id: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            specialization,
            department_id,
            user_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
