//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 이메일 정규화
//! - [`date_utils`] - 월 단위 날짜 계산, 관대한 시간 역직렬화
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::validate_required_string;
//! use crate::utils::date_utils::add_months;
//!
//! let name = validate_required_string("  Landing page  ", "Project name")?;
//! let end = add_months(chrono::Utc::now(), 3);
//! ```

pub mod string_utils;
pub mod date_utils;
