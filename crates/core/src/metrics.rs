//! 메트릭 상수 및 설명 등록
//!
//! 모든 Prometheus 메트릭의 이름과 설명을 중앙에서 정의합니다.
//! 각 크레이트는 이 상수를 사용하여 `metrics::counter!()` 매크로를
//! 호출합니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `logbridge_`
//! - 모듈명: `reconstruct_`
//! - 접미어: `_total` (counter)

// ─── 레이블 키 상수 ────────────────────────────────────────────────

/// 로그 소스 레이블 키 (environment, http)
pub const LABEL_SOURCE: &str = "source";

// ─── Reconstruct 메트릭 ─────────────────────────────────────────────

/// Reconstruct: 생성된 로그 레코드 수 (counter, label: source)
pub const RECONSTRUCT_RECORDS_TOTAL: &str = "logbridge_reconstruct_records_total";

/// Reconstruct: 생성된 리소스 블록 수 (counter, label: source)
pub const RECONSTRUCT_RESOURCES_TOTAL: &str = "logbridge_reconstruct_resources_total";

/// Reconstruct: 페이로드 파싱 실패 수 (counter)
pub const RECONSTRUCT_PAYLOAD_PARSE_FAILURES_TOTAL: &str =
    "logbridge_reconstruct_payload_parse_failures_total";

// ─── 설명 등록 함수 ─────────────────────────────────────────────────

/// 모든 메트릭의 설명(description)을 등록합니다.
///
/// `metrics::describe_counter!()`를 호출하여 Prometheus HELP 텍스트를
/// 설정합니다. 전역 레코더 설치 후 한 번만 호출해야 합니다.
pub fn describe_all() {
    use metrics::describe_counter;

    describe_counter!(
        RECONSTRUCT_RECORDS_TOTAL,
        "Total number of OTLP log records built"
    );
    describe_counter!(
        RECONSTRUCT_RESOURCES_TOTAL,
        "Total number of OTLP resource blocks emitted"
    );
    describe_counter!(
        RECONSTRUCT_PAYLOAD_PARSE_FAILURES_TOTAL,
        "Total number of HTTP log payloads that failed to parse as JSON"
    );
}
