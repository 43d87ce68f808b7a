//! 페이로드 평탄화 — 중첩 JSON을 dot notation 속성 목록으로 변환
//!
//! HTTP 로그의 원시 구조화 페이로드를 재귀적으로 순회하여 평탄한
//! 문자열 속성 목록을 만듭니다. 객체 멤버는 키, 배열 요소는 인덱스를
//! 경로 세그먼트로 사용합니다.
//!
//! 잘못된 페이로드는 에러가 아닙니다. 파싱에 실패하거나 크기 제한을
//! 넘으면 빈 목록을 반환하고 호출자는 계속 진행합니다.

use logbridge_core::metrics::RECONSTRUCT_PAYLOAD_PARSE_FAILURES_TOTAL;
use metrics::counter;
use serde_json::Value;
use tracing::warn;

use crate::otlp::Attribute;

/// 원시 JSON 바이트를 평탄화하여 속성 목록으로 변환합니다.
///
/// 문서 순서(객체는 삽입 순서, 배열은 인덱스 순서)가 출력 목록에
/// 그대로 유지됩니다. 최상위가 단독 스칼라이면 경로가 없으므로 아무
/// 속성도 생성하지 않습니다.
pub fn payload_to_attributes(payload: &[u8], max_bytes: usize) -> Vec<Attribute> {
    if payload.len() > max_bytes {
        warn!(
            size = payload.len(),
            max = max_bytes,
            "payload exceeds size limit, skipping attributes"
        );
        counter!(RECONSTRUCT_PAYLOAD_PARSE_FAILURES_TOTAL).increment(1);
        return Vec::new();
    }

    let parsed: Value = match serde_json::from_slice(payload) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "payload is not valid JSON, skipping attributes");
            counter!(RECONSTRUCT_PAYLOAD_PARSE_FAILURES_TOTAL).increment(1);
            return Vec::new();
        }
    };

    let mut attrs = Vec::new();
    flatten_value("", &parsed, &mut attrs);
    attrs
}

/// JSON 값을 재귀적으로 평탄화합니다.
///
/// 빈 객체/배열은 해당 서브트리에서 아무 속성도 만들지 않지만 형제
/// 서브트리 순회는 계속됩니다.
fn flatten_value(prefix: &str, value: &Value, attrs: &mut Vec<Attribute>) {
    match value {
        Value::Object(members) => {
            for (key, member) in members {
                flatten_value(&join_path(prefix, key), member, attrs);
            }
        }
        Value::Array(elements) => {
            for (index, element) in elements.iter().enumerate() {
                flatten_value(&join_path(prefix, &index.to_string()), element, attrs);
            }
        }
        scalar => {
            // 최상위 단독 스칼라는 경로가 없어 생략
            if prefix.is_empty() {
                return;
            }
            attrs.push(Attribute::string(prefix, scalar_text(scalar)));
        }
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}.{segment}")
    }
}

/// 스칼라 값의 정규 문자열 표현을 반환합니다. null은 빈 문자열입니다.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
