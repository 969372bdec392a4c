//! Patient Entity Implementation
//!
//! 환자 프로필 엔티티입니다. 회원가입 시 User와 같은 트랜잭션 안에서
//! 함께 생성되며, `user_id`로 인증 계정과 1:1 연결됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 혈액형 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BloodGroupType {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    OPositive,
    ONegative,
    AbPositive,
    AbNegative,
}

/// 환자 엔티티
///
/// 회원가입 직후에는 이름/이메일만 채워지고, 성별/생년월일/혈액형 등
/// 프로필 필드는 이후에 채워질 수 있으므로 모두 Option입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 환자 이름 (표시 이름)
    pub name: String,
    /// 환자 이메일 (가입 시 username과 동일)
    pub email: String,
    /// 연결된 인증 계정 ID (1:1)
    pub user_id: ObjectId,
    /// 성별
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// 생년월일
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<DateTime>,
    /// 혈액형
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<BloodGroupType>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Patient {
    /// 새 환자 프로필 생성
    ///
    /// 회원가입 시 User와 함께 생성되는 최소 프로필입니다.
    pub fn new(name: String, email: String, user_id: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            user_id,
            gender: None,
            birth_date: None,
            blood_group: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_patient_minimal_profile() {
        let user_id = ObjectId::new();
        let patient = Patient::new(
            "홍길동".to_string(),
            "hong@example.com".to_string(),
            user_id,
        );

        assert_eq!(patient.user_id, user_id);
        assert!(patient.gender.is_none());
        assert!(patient.birth_date.is_none());
        assert!(patient.blood_group.is_none());
    }

    #[test]
    fn test_blood_group_serde_format() {
        let json = serde_json::to_string(&BloodGroupType::OPositive).unwrap();
        assert_eq!(json, "\"O_POSITIVE\"");

        let parsed: BloodGroupType = serde_json::from_str("\"AB_NEGATIVE\"").unwrap();
        assert_eq!(parsed, BloodGroupType::AbNegative);
    }
}
