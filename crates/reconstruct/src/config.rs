//! 재구성 엔진 설정

use logbridge_core::config::ExportConfig;

/// 재구성 동작을 제어하는 설정
#[derive(Debug, Clone)]
pub struct ReconstructConfig {
    /// HTTP 페이로드 평탄화에 허용되는 최대 바이트 수.
    /// 초과하는 페이로드는 속성 없이 처리됩니다.
    pub max_payload_bytes: usize,
}

impl Default for ReconstructConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 1024 * 1024,
        }
    }
}

impl From<&ExportConfig> for ReconstructConfig {
    fn from(export: &ExportConfig) -> Self {
        Self {
            max_payload_bytes: export.max_payload_bytes,
        }
    }
}
