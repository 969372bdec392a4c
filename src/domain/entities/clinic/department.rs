//! Department Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 진료과 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 진료과 이름 (예: 내과, 정형외과)
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Department {
    pub fn new(name: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
