//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 환자, 의료진 디렉터리, 보험 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 회원가입/로그인/소셜 로그인 API 엔드포인트
//! - 환자 프로필/예약/보험 API 엔드포인트
//! - 역할 기반 접근 제어 미들웨어 적용
//! - 헬스체크 엔드포인트
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용할 수 있습니다:
//!
//! ## 인증 불필요 (Public 라우트)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/auth")
//!         .service(handlers::auth::login)   // 로그인 자체는 인증 불필요
//!         .service(handlers::auth::signup)  // 회원가입은 인증 불필요
//! );
//! ```
//!
//! ## 인증 필요 + 역할 기반 권한 검증
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/patients")
//!         .wrap(AuthMiddleware::required_with_role(RoleType::Patient))
//!         .service(handlers::patients::get_profile)  // Patient 역할 필요
//! );
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use crate::config::RoleType;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_patient_routes(cfg);
    configure_directory_routes(cfg);
    configure_insurance_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 회원가입, 로그인, OAuth 인증 API 엔드포인트를 등록합니다.
/// 모든 인증 라우트는 Public 접근이 가능합니다 (인증을 위한 엔드포인트이므로).
///
/// # Available Routes
///
/// ## 로컬 인증
/// - `POST /auth/signup` - 회원가입 (User + Patient 프로필 생성)
/// - `POST /auth/login` - 이메일/비밀번호 로그인
///
/// ## OAuth (Google)
/// - `GET /auth/google/login` - Google OAuth 로그인 URL 생성
/// - `GET /auth/google/callback` - Google OAuth 콜백 처리
///
/// # Examples
///
/// ```bash
/// # 회원가입
/// curl -X POST http://localhost:8080/auth/signup \
///   -H "Content-Type: application/json" \
///   -d '{"username":"hong@example.com","password":"Password123","name":"홍길동"}'
///
/// # 로컬 로그인
/// curl -X POST http://localhost:8080/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"username":"hong@example.com","password":"Password123"}'
///
/// # Google OAuth 시작
/// curl http://localhost:8080/auth/google/login
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            // 로컬 인증
            .service(handlers::auth::signup)
            .service(handlers::auth::login)
            // Google OAuth
            .service(handlers::auth::google_login_url)
            .service(handlers::auth::google_oauth_callback)
    );
}

/// 환자 관련 라우트를 설정합니다
///
/// 모든 환자 라우트는 인증과 `Patient` 역할이 필요합니다.
/// 환자 식별은 JWT에서 파생된 인증 사용자로 수행합니다.
///
/// # Available Routes
///
/// - `GET /patients/profile` - 본인 프로필 조회
/// - `POST /patients/appointments` - 예약 생성
/// - `GET /patients/appointments` - 본인 예약 목록 조회
fn configure_patient_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/patients")
            .wrap(AuthMiddleware::required_with_role(RoleType::Patient))
            .service(handlers::patients::get_profile)
            .service(handlers::patients::create_appointment)
            .service(handlers::patients::list_appointments)
    );
}

/// 의료진 디렉터리 라우트를 설정합니다
///
/// 예약 전에 둘러보는 공개 데이터이므로 인증이 필요하지 않습니다.
///
/// # Available Routes
///
/// - `GET /doctors` - 의사 목록 조회
/// - `GET /departments` - 진료과 목록 조회
fn configure_directory_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/doctors")
            .service(handlers::directory::list_doctors)
    );

    cfg.service(
        web::scope("/departments")
            .service(handlers::directory::list_departments)
    );
}

/// 보험 관련 라우트를 설정합니다
///
/// 인증과 `Patient` 역할이 필요합니다.
///
/// # Available Routes
///
/// - `POST /insurance` - 보험 등록
/// - `GET /insurance` - 본인 보험 목록 조회
fn configure_insurance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/insurance")
            .wrap(AuthMiddleware::required_with_role(RoleType::Patient))
            .service(handlers::insurance::create_insurance)
            .service(handlers::insurance::list_insurance)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `features`: 사용 중인 기술 스택
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "appointment_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "appointment_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
