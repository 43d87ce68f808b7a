//! 도메인 타입 — 시스템 전역에서 사용되는 공통 타입
//!
//! 업스트림에서 수신한 원시 로그 이벤트 타입을 정의합니다.
//! 재구성 엔진은 이 타입들을 입력으로 받아 OTLP 문서로 변환합니다.

use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 리소스 메타데이터
///
/// 로그의 출처를 식별하는 키-값 매핑입니다 (`service_name`,
/// `environment_name` 외 임의 키 포함). 내용이 완전히 같은 두 매핑은
/// 그룹핑 시 같은 리소스로 취급됩니다.
pub type Metadata = HashMap<String, String>;

/// 메타데이터 접근 trait
///
/// 환경 로그와 HTTP 로그가 그룹핑 관점에서 동일하게 동작하도록 하는
/// 공용 인터페이스입니다. 두 이벤트 타입은 상속 없이 각각 이 trait을
/// 구현합니다.
pub trait MetadataProvider {
    /// 이벤트에 부착된 메타데이터를 반환합니다.
    fn metadata(&self) -> &Metadata;
}

/// 로그 속성 (키-값 쌍)
///
/// 환경 로그가 들고 오는 구조화 필드입니다. 입력 순서가 의미를 가지므로
/// 맵이 아닌 리스트로 유지합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogAttribute {
    /// 속성 키
    pub key: String,
    /// 속성 값 (항상 문자열)
    pub value: String,
}

impl LogAttribute {
    /// 키-값 쌍으로 속성을 생성합니다.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// 환경(플랫폼) 로그
///
/// 서비스 런타임이 출력한 한 줄의 로그를 나타냅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentLog {
    /// 플랫폼이 기록한 타임스탬프
    pub timestamp: DateTime<Utc>,
    /// 원본 심각도 라벨 (자유 형식 문자열)
    pub severity: String,
    /// 로그 메시지 (ANSI 이스케이프 포함 가능)
    pub message: String,
    /// 구조화 속성 (입력 순서 유지)
    pub attributes: Vec<LogAttribute>,
}

impl fmt::Display for EnvironmentLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// 메타데이터가 부착된 환경 로그
#[derive(Debug, Clone)]
pub struct EnvironmentLogWithMetadata {
    /// 원본 환경 로그
    pub log: EnvironmentLog,
    /// 출처 메타데이터
    pub metadata: Metadata,
}

impl MetadataProvider for EnvironmentLogWithMetadata {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// 메타데이터가 부착된 배포 HTTP 액세스 로그
///
/// 엣지 프록시가 기록한 요청 단위 로그입니다. `payload`는 업스트림이
/// 보낸 원시 JSON 바이트로, 파싱 여부를 보장하지 않습니다.
#[derive(Debug, Clone)]
pub struct HttpLogWithMetadata {
    /// 요청 처리 시각
    pub timestamp: DateTime<Utc>,
    /// HTTP 응답 상태 코드
    pub status_code: i64,
    /// 요청 경로
    pub path: String,
    /// 원시 구조화 페이로드 (불투명 JSON 바이트)
    pub payload: Bytes,
    /// 출처 메타데이터
    pub metadata: Metadata,
}

impl MetadataProvider for HttpLogWithMetadata {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl fmt::Display for HttpLogWithMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status_code, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metadata() -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert("service_name".to_owned(), "api".to_owned());
        metadata.insert("environment_name".to_owned(), "prod".to_owned());
        metadata
    }

    #[test]
    fn environment_log_display() {
        let log = EnvironmentLog {
            timestamp: Utc::now(),
            severity: "warn".to_owned(),
            message: "disk usage above 80%".to_owned(),
            attributes: vec![],
        };
        let display = log.to_string();
        assert!(display.contains("warn"));
        assert!(display.contains("disk usage"));
    }

    #[test]
    fn http_log_display() {
        let log = HttpLogWithMetadata {
            timestamp: Utc::now(),
            status_code: 502,
            path: "/api/v1/users".to_owned(),
            payload: Bytes::new(),
            metadata: Metadata::new(),
        };
        let display = log.to_string();
        assert!(display.contains("502"));
        assert!(display.contains("/api/v1/users"));
    }

    #[test]
    fn metadata_provider_returns_attached_metadata() {
        let env_log = EnvironmentLogWithMetadata {
            log: EnvironmentLog {
                timestamp: Utc::now(),
                severity: "info".to_owned(),
                message: "started".to_owned(),
                attributes: vec![],
            },
            metadata: sample_metadata(),
        };
        assert_eq!(
            env_log.metadata().get("service_name").map(String::as_str),
            Some("api")
        );

        let http_log = HttpLogWithMetadata {
            timestamp: Utc::now(),
            status_code: 200,
            path: "/".to_owned(),
            payload: Bytes::from_static(b"{}"),
            metadata: sample_metadata(),
        };
        assert_eq!(
            http_log
                .metadata()
                .get("environment_name")
                .map(String::as_str),
            Some("prod")
        );
    }

    #[test]
    fn log_attribute_new() {
        let attr = LogAttribute::new("request_id", "abc-123");
        assert_eq!(attr.key, "request_id");
        assert_eq!(attr.value, "abc-123");
    }

    #[test]
    fn environment_log_serialize_roundtrip() {
        let log = EnvironmentLog {
            timestamp: Utc::now(),
            severity: "error".to_owned(),
            message: "boom".to_owned(),
            attributes: vec![LogAttribute::new("code", "E42")],
        };
        let json = serde_json::to_string(&log).unwrap();
        let deserialized: EnvironmentLog = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.severity, "error");
        assert_eq!(deserialized.attributes.len(), 1);
    }
}
