//! 문자열 처리 유틸리티
//!
//! 요청 입력값의 공백 정리와 필수값 검증, 이메일 정규화를 담당합니다.

use serde::Deserialize;
use crate::errors::errors::AppError;

/// 필수 문자열 필드를 검증합니다.
///
/// 앞뒤 공백을 제거한 뒤 비어 있으면 `ValidationError`를 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let name = validate_required_string("  My app  ", "Project name")?;
/// assert_eq!(name, "My app");
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열을 정리합니다. 공백뿐인 값은 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 이메일 주소를 저장/조회용 형태로 정규화합니다 (공백 제거 + 소문자).
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// serde용 역직렬화 함수: 공백 문자열을 `None`으로 취급합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// serde용 역직렬화 함수: 앞뒤 공백을 제거합니다.
///
/// `#[validate(email)]` 같은 형식 검증이 공백 때문에 실패하지 않도록 검증 전에 적용됩니다.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}
