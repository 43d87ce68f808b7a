//! 환경 로그 -> OTLP 레코드 변환

use logbridge_core::types::EnvironmentLogWithMetadata;

use crate::ansi::strip_ansi;
use crate::assemble::unix_nanos;
use crate::otlp::{Attribute, Body, LogRecord};
use crate::severity::severity_number;
use crate::timestamp::{is_common_timestamp_attribute, try_extract_timestamp};

/// 환경 로그 하나를 OTLP 레코드로 변환합니다.
///
/// 타임스탬프는 속성에서 추출한 값이 있으면 그것을, 없으면 플랫폼
/// 타임스탬프를 사용합니다. 통상적인 타임스탬프 속성은 레코드
/// 속성에서 제외하고, 나머지 속성 값은 JSON 문자열 형태라면
/// 언쿼트합니다. 본문은 ANSI 이스케이프를 제거한 메시지이고,
/// 심각도 텍스트는 원본 라벨을 그대로 보존합니다.
pub(crate) fn build_environment_record(
    log: &EnvironmentLogWithMetadata,
    observed_nanos: &str,
) -> LogRecord {
    let timestamp = try_extract_timestamp(log).unwrap_or(log.log.timestamp);

    let attributes: Vec<Attribute> = log
        .log
        .attributes
        .iter()
        .filter(|attr| !is_common_timestamp_attribute(&attr.key))
        .map(|attr| {
            let value = unquote(&attr.value).unwrap_or_else(|| attr.value.clone());
            Attribute::string(&attr.key, value)
        })
        .collect();

    LogRecord {
        time_unix_nano: unix_nanos(&timestamp),
        observed_time_unix_nano: observed_nanos.to_owned(),
        severity_number: severity_number(&log.log.severity),
        severity_text: log.log.severity.clone(),
        body: Body::new(strip_ansi(&log.log.message)),
        attributes,
    }
}

/// JSON 문자열 리터럴 형태의 값을 언쿼트합니다.
///
/// 양끝이 큰따옴표인 값만 시도하며, 유효한 JSON 문자열이 아니면
/// `None`을 반환합니다.
fn unquote(value: &str) -> Option<String> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        serde_json::from_str::<String>(value).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use logbridge_core::types::{EnvironmentLog, LogAttribute, Metadata};

    use super::*;

    fn event(severity: &str, message: &str, attributes: Vec<LogAttribute>) -> EnvironmentLogWithMetadata {
        EnvironmentLogWithMetadata {
            log: EnvironmentLog {
                timestamp: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
                severity: severity.to_owned(),
                message: message.to_owned(),
                attributes,
            },
            metadata: Metadata::new(),
        }
    }

    #[test]
    fn platform_timestamp_used_when_no_attribute_overrides() {
        let log = event("info", "started", vec![]);
        let record = build_environment_record(&log, "42");
        assert_eq!(record.time_unix_nano, unix_nanos(&log.log.timestamp));
        assert_eq!(record.observed_time_unix_nano, "42");
    }

    #[test]
    fn extracted_timestamp_overrides_platform_timestamp() {
        let log = event(
            "info",
            "started",
            vec![LogAttribute::new("timestamp", "2026-06-01T00:00:00Z")],
        );
        let record = build_environment_record(&log, "42");
        let expected = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(record.time_unix_nano, unix_nanos(&expected));
    }

    #[test]
    fn common_timestamp_attributes_are_dropped_from_record() {
        let log = event(
            "info",
            "started",
            vec![
                LogAttribute::new("timestamp", "2026-06-01T00:00:00Z"),
                LogAttribute::new("Time", "garbage"),
                LogAttribute::new("request_id", "abc"),
            ],
        );
        let record = build_environment_record(&log, "42");
        assert_eq!(record.attributes.len(), 1);
        assert_eq!(record.attributes[0].key, "request_id");
    }

    #[test]
    fn severity_text_preserves_raw_label() {
        let log = event(" Warning ", "careful", vec![]);
        let record = build_environment_record(&log, "42");
        assert_eq!(record.severity_text, " Warning ");
        assert_eq!(record.severity_number, 13);
    }

    #[test]
    fn body_has_ansi_stripped() {
        let log = event("error", "\x1b[31mboom\x1b[0m", vec![]);
        let record = build_environment_record(&log, "42");
        assert_eq!(record.body.string_value, "boom");
    }

    #[test]
    fn quoted_attribute_values_are_unquoted() {
        let log = event(
            "info",
            "msg",
            vec![
                LogAttribute::new("quoted", r#""hello \"world\"""#),
                LogAttribute::new("plain", "hello"),
                LogAttribute::new("lone_quote", "\""),
                LogAttribute::new("broken", "\"unterminated"),
            ],
        );
        let record = build_environment_record(&log, "42");
        let values: Vec<&str> = record
            .attributes
            .iter()
            .map(|a| a.value.string_value.as_deref().unwrap())
            .collect();
        assert_eq!(values, vec![r#"hello "world""#, "hello", "\"", "\"unterminated"]);
    }

    #[test]
    fn unquote_helper_edge_cases() {
        assert_eq!(unquote(r#""plain""#), Some("plain".to_owned()));
        assert_eq!(unquote(r#""\n""#), Some("\n".to_owned()));
        assert_eq!(unquote("no quotes"), None);
        assert_eq!(unquote("\""), None);
        assert_eq!(unquote(r#""bad \x escape""#), None);
    }
}
