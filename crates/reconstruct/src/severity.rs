//! 심각도 정규화
//!
//! 자유 형식 심각도 라벨을 OTLP `severityNumber` 값으로 변환합니다.
//! 변환은 전함수(total)이며, 알 수 없는 라벨은 `info` 값으로
//! 폴백합니다.

use std::collections::HashMap;
use std::sync::LazyLock;

/// 심각도 텍스트 -> severityNumber 매핑 테이블
///
/// 프로세스 전역 읽기 전용 상수입니다. 동시 호출에서 안전하게
/// 공유됩니다.
static SEVERITY_TEXT_TO_NUMBER: LazyLock<HashMap<&'static str, i32>> = LazyLock::new(|| {
    HashMap::from([
        ("trace", 1),
        ("debug", 5),
        ("info", 9),
        ("warn", 13),
        ("error", 17),
        ("fatal", 21),
    ])
});

/// 심각도 라벨을 severityNumber로 정규화합니다.
///
/// 앞뒤 공백을 제거하고 소문자로 변환한 뒤 동의어를 치환하여
/// 테이블에서 조회합니다. 테이블에 없는 라벨은 `info` 값(9)으로
/// 폴백하며, 테이블 자체에 `info` 항목이 없을 때만 0(미상)을
/// 반환합니다.
pub fn severity_number(severity: &str) -> i32 {
    let lowered = severity.trim().to_lowercase();
    let normalized = match lowered.as_str() {
        "warning" => "warn",
        "err" => "error",
        "critical" => "fatal",
        other => other,
    };

    if let Some(&number) = SEVERITY_TEXT_TO_NUMBER.get(normalized) {
        return number;
    }

    if let Some(&number) = SEVERITY_TEXT_TO_NUMBER.get("info") {
        return number;
    }

    0
}
