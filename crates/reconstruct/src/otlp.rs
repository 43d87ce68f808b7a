//! OTLP logs JSON 스키마 타입
//!
//! `resourceLogs / scopeLogs / logRecords` 계층 구조를 serde `Serialize`
//! 구조체로 정의합니다. 필드명은 OTLP JSON 인코딩 규칙(camelCase)을
//! 따르고, 타임스탬프와 정수 속성 값은 10진수 문자열로 인코딩합니다.

use serde::Serialize;

/// 최상위 OTLP logs 문서
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsData {
    /// 리소스 단위 로그 블록 (그룹 최초 등장 순서)
    pub resource_logs: Vec<ResourceLog>,
}

/// 리소스 블록 — 동일 출처 메타데이터를 공유하는 레코드 묶음
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLog {
    /// 리소스 속성
    pub resource: Resource,
    /// 스코프 블록 (리소스당 하나)
    pub scope_logs: Vec<ScopeLog>,
}

/// 리소스 속성 컨테이너
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    /// 리소스 수준 속성 목록
    pub attributes: Vec<Attribute>,
}

/// 스코프 블록
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeLog {
    /// 스코프 식별자
    pub scope: Scope,
    /// 로그 레코드 목록 (입력 순서 유지)
    pub log_records: Vec<LogRecord>,
}

/// 스코프 식별자 — 이 시스템이 생성한 배치임을 표시하는 고정 네임스페이스
#[derive(Debug, Clone, Serialize)]
pub struct Scope {
    /// 스코프 이름
    pub name: String,
}

/// 표준화된 로그 레코드
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// 이벤트 발생 시각 (Unix 나노초, 10진수 문자열)
    pub time_unix_nano: String,
    /// 관측 시각 (Unix 나노초, 10진수 문자열) — 한 호출 내 모든
    /// 레코드가 동일한 값을 공유합니다.
    pub observed_time_unix_nano: String,
    /// 표준 심각도 숫자 (0–24)
    pub severity_number: i32,
    /// 심각도 텍스트
    pub severity_text: String,
    /// 레코드 본문
    pub body: Body,
    /// 레코드 속성 (비어 있으면 필드 자체를 생략)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

/// 레코드 본문 (항상 문자열)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// 본문 문자열
    pub string_value: String,
}

impl Body {
    /// 본문을 생성합니다.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            string_value: value.into(),
        }
    }
}

/// 키-값 속성
#[derive(Debug, Clone, Serialize)]
pub struct Attribute {
    /// 속성 키
    pub key: String,
    /// 속성 값
    pub value: AttributeValue,
}

/// 속성 값 — `string_value` 또는 `int_value` 중 정확히 하나만 채워집니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValue {
    /// 문자열 값
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    /// 정수 값 (10진수 문자열로 인코딩)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int_value: Option<String>,
}

impl Attribute {
    /// 문자열 값 속성을 생성합니다.
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: AttributeValue {
                string_value: Some(value.into()),
                int_value: None,
            },
        }
    }

    /// 정수 값 속성을 생성합니다. 값은 10진수 문자열로 인코딩됩니다.
    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value: AttributeValue {
                string_value: None,
                int_value: Some(value.to_string()),
            },
        }
    }
}
