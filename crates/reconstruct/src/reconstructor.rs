//! 재구성 엔진 공개 API
//!
//! [`OtelReconstructor`]는 원시 로그 이벤트 배치를 받아 직렬화된
//! OTLP logs JSON 바이트를 반환합니다. 내부 상태를 갖지 않으므로
//! 하나의 인스턴스를 여러 호출에서 공유해도 안전합니다.

use chrono::{DateTime, Utc};
use logbridge_core::types::{EnvironmentLogWithMetadata, HttpLogWithMetadata};

use crate::assemble::build_logs_data;
use crate::config::ReconstructConfig;
use crate::environment::build_environment_record;
use crate::error::ReconstructError;
use crate::http::build_http_record;

/// OTLP logs 재구성 엔진
#[derive(Debug, Clone, Default)]
pub struct OtelReconstructor {
    config: ReconstructConfig,
}

impl OtelReconstructor {
    /// 설정으로 엔진을 생성합니다.
    pub fn new(config: ReconstructConfig) -> Self {
        Self { config }
    }

    /// 환경 로그 배치를 OTLP logs JSON 바이트로 재구성합니다.
    ///
    /// 관측 시각은 호출 시점의 현재 시각입니다.
    pub fn environment_logs(
        &self,
        logs: &[EnvironmentLogWithMetadata],
    ) -> Result<Vec<u8>, ReconstructError> {
        self.environment_logs_at(logs, Utc::now())
    }

    /// 관측 시각을 지정하여 환경 로그 배치를 재구성합니다.
    ///
    /// 동일한 입력과 동일한 관측 시각은 바이트 단위로 동일한 출력을
    /// 만듭니다.
    pub fn environment_logs_at(
        &self,
        logs: &[EnvironmentLogWithMetadata],
        observed: DateTime<Utc>,
    ) -> Result<Vec<u8>, ReconstructError> {
        let data = build_logs_data(logs, observed, "environment", build_environment_record);
        Ok(serde_json::to_vec(&data)?)
    }

    /// HTTP 액세스 로그 배치를 OTLP logs JSON 바이트로 재구성합니다.
    ///
    /// 관측 시각은 호출 시점의 현재 시각입니다.
    pub fn http_logs(&self, logs: &[HttpLogWithMetadata]) -> Result<Vec<u8>, ReconstructError> {
        self.http_logs_at(logs, Utc::now())
    }

    /// 관측 시각을 지정하여 HTTP 액세스 로그 배치를 재구성합니다.
    pub fn http_logs_at(
        &self,
        logs: &[HttpLogWithMetadata],
        observed: DateTime<Utc>,
    ) -> Result<Vec<u8>, ReconstructError> {
        let max_payload_bytes = self.config.max_payload_bytes;
        let data = build_logs_data(logs, observed, "http", |log, observed_nanos| {
            build_http_record(log, observed_nanos, max_payload_bytes)
        });
        Ok(serde_json::to_vec(&data)?)
    }
}
