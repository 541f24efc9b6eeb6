//! 날짜 계산 유틸리티

use chrono::{DateTime, Datelike, Months, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// 현재 UTC 월의 첫 순간 (1일 00:00:00)
pub fn start_of_month_utc(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

/// 달력 기준으로 `months`개월을 더합니다.
///
/// 대상 월에 같은 날짜가 없으면 그 달의 마지막 날로 맞춥니다 (1월 31일 + 1개월 = 2월 28/29일).
pub fn add_months(from: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    from.checked_add_months(Months::new(months)).unwrap_or(from)
}

/// RFC 3339 문자열을 읽되, 해석할 수 없는 값은 `None`으로 취급합니다.
///
/// 과거 데이터에 잘못된 형식의 `current_period_end`가 남아 있어도 문서 전체를 읽을 수 있어야 합니다.
pub fn deserialize_lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let raw = Option::<RawValue>::deserialize(deserializer)?;

    Ok(match raw {
        Some(RawValue::Text(value)) => DateTime::parse_from_rfc3339(value.trim())
            .map(|parsed| parsed.with_timezone(&Utc))
            .ok(),
        Some(RawValue::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_start_of_month() {
        assert_eq!(start_of_month_utc(utc(2026, 10, 18, 15)), utc(2026, 10, 1, 0));
        assert_eq!(start_of_month_utc(utc(2026, 1, 1, 0)), utc(2026, 1, 1, 0));
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_months(utc(2026, 1, 31, 12), 1), utc(2026, 2, 28, 12));
        assert_eq!(add_months(utc(2026, 11, 15, 0), 3), utc(2027, 2, 15, 0));
        assert_eq!(add_months(utc(2026, 5, 10, 0), 12), utc(2027, 5, 10, 0));
    }

    #[test]
    fn test_lenient_datetime() {
        #[derive(Deserialize)]
        struct Doc {
            #[serde(default, deserialize_with = "deserialize_lenient_datetime")]
            current_period_end: Option<DateTime<Utc>>,
        }

        let doc: Doc =
            serde_json::from_str(r#"{"current_period_end": "2026-03-01T00:00:00+00:00"}"#).unwrap();
        assert_eq!(doc.current_period_end, Some(utc(2026, 3, 1, 0)));

        let doc: Doc = serde_json::from_str(r#"{"current_period_end": "next tuesday"}"#).unwrap();
        assert_eq!(doc.current_period_end, None);

        let doc: Doc = serde_json::from_str(r#"{"current_period_end": 1767225600}"#).unwrap();
        assert_eq!(doc.current_period_end, None);

        let doc: Doc = serde_json::from_str(r#"{"current_period_end": null}"#).unwrap();
        assert_eq!(doc.current_period_end, None);

        let doc: Doc = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.current_period_end, None);
    }
}
