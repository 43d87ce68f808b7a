//! 타임스탬프 추출
//!
//! 환경 로그의 속성에서 실제 발생 시각을 찾아냅니다. 수집 경로가
//! 붙여 준 `timestamp` 필드보다 페이로드 안의 원본 시각이 더 정확한
//! 경우가 많기 때문입니다.

use chrono::{DateTime, Utc};
use logbridge_core::types::EnvironmentLogWithMetadata;

/// 통상적인 타임스탬프 속성 키 목록
const COMMON_TIMESTAMP_KEYS: &[&str] = &["timestamp", "time", "ts", "datetime", "@timestamp"];

/// 키가 통상적인 타임스탬프 속성인지 판별합니다 (대소문자 무시).
pub fn is_common_timestamp_attribute(key: &str) -> bool {
    COMMON_TIMESTAMP_KEYS
        .iter()
        .any(|candidate| key.eq_ignore_ascii_case(candidate))
}

/// 로그 속성에서 타임스탬프를 추출합니다.
///
/// 통상 키를 가진 속성을 순서대로 확인하여 처음으로 파싱에 성공한
/// 값을 반환합니다. 어떤 속성도 파싱되지 않으면 `None`입니다.
pub fn try_extract_timestamp(log: &EnvironmentLogWithMetadata) -> Option<DateTime<Utc>> {
    log.log
        .attributes
        .iter()
        .filter(|attr| is_common_timestamp_attribute(&attr.key))
        .find_map(|attr| parse_timestamp(&attr.value))
}

/// 문자열 값을 타임스탬프로 파싱합니다.
///
/// RFC3339를 먼저 시도하고, 실패하면 정수로 해석하여 자릿수 기준으로
/// 초/밀리초/나노초 중 하나로 판별합니다.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    let number: i64 = trimmed.parse().ok()?;
    if number > 99_999_999_999_999_999 {
        // 18자리 이상: 나노초
        Some(DateTime::from_timestamp_nanos(number))
    } else if number > 99_999_999_999 {
        // 12자리 이상: 밀리초
        DateTime::from_timestamp_millis(number)
    } else {
        DateTime::from_timestamp(number, 0)
    }
}
