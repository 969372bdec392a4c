//! 인증 컨텍스트 모델
//!
//! JWT 검증을 통과한 요청의 사용자 정보([`AuthenticatedUser`])와
//! 미들웨어의 인증 모드/역할 요구사항([`AuthMode`], [`RequiredRole`])을 정의합니다.

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::*;
pub use authentication_request::*;
