//! HTTP 액세스 로그 -> OTLP 레코드 변환

use logbridge_core::types::HttpLogWithMetadata;

use crate::assemble::unix_nanos;
use crate::flatten::payload_to_attributes;
use crate::otlp::{Attribute, Body, LogRecord};
use crate::severity::severity_number;

/// 상태 코드 구간별 심각도 텍스트
fn severity_for_status(status_code: i64) -> &'static str {
    if status_code >= 500 {
        "ERROR"
    } else if status_code >= 400 {
        "WARN"
    } else {
        "INFO"
    }
}

/// HTTP 액세스 로그 하나를 OTLP 레코드로 변환합니다.
///
/// 심각도는 응답 상태 코드 구간에서 유도합니다 (5xx -> ERROR,
/// 4xx -> WARN, 나머지 -> INFO). 속성은 상태 코드 정수 속성 뒤에
/// 평탄화된 페이로드 속성이 이어지고, 본문은 요청 경로입니다.
pub(crate) fn build_http_record(
    log: &HttpLogWithMetadata,
    observed_nanos: &str,
    max_payload_bytes: usize,
) -> LogRecord {
    let severity_text = severity_for_status(log.status_code);

    let mut attributes = vec![Attribute::int(
        "http.response.status_code",
        log.status_code,
    )];
    attributes.extend(payload_to_attributes(&log.payload, max_payload_bytes));

    LogRecord {
        time_unix_nano: unix_nanos(&log.timestamp),
        observed_time_unix_nano: observed_nanos.to_owned(),
        severity_number: severity_number(severity_text),
        severity_text: severity_text.to_owned(),
        body: Body::new(&log.path),
        attributes,
    }
}
