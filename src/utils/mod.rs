//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 변환 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{validate_required_string, clean_optional_string};
//!
//! let clean_name = validate_required_string("  John  ", "name")?;
//! let email = clean_optional_string(oauth_profile.email); // 빈 문자열 → None
//! ```

pub mod string_utils;
