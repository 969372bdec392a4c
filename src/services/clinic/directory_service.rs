//! 의료진 디렉터리 서비스 구현
//!
//! 의사/진료과 목록은 인증 없이 조회할 수 있는 공개 데이터입니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    domain::dto::clinic::response::{DepartmentResponse, DoctorResponse},
    errors::errors::AppError,
    repositories::clinic::department_repo::DepartmentRepository,
    repositories::clinic::doctor_repo::DoctorRepository,
};

/// 의료진 디렉터리 조회 서비스
#[service(name = "directory")]
pub struct DirectoryService {
    /// 의사 리포지토리 (자동 주입)
    doctor_repo: Arc<DoctorRepository>,

    /// 진료과 리포지토리 (자동 주입)
    department_repo: Arc<DepartmentRepository>,
}

impl DirectoryService {
    /// 전체 의사 목록 조회
    pub async fn list_doctors(&self) -> Result<Vec<DoctorResponse>, AppError> {
        let doctors = self.doctor_repo.find_all().await?;
        Ok(doctors.into_iter().map(DoctorResponse::from).collect())
    }

    /// 전체 진료과 목록 조회
    pub async fn list_departments(&self) -> Result<Vec<DepartmentResponse>, AppError> {
        let departments = self.department_repo.find_all().await?;
        Ok(departments.into_iter().map(DepartmentResponse::from).collect())
    }
}
