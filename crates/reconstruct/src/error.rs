//! 재구성 엔진 에러 타입
//!
//! [`ReconstructError`]는 재구성 과정에서 발생할 수 있는 에러를 표현합니다.
//! `From<ReconstructError> for LogbridgeError` 변환이 구현되어 있어
//! 상위 레이어에서 `?` 연산자로 자연스럽게 전파할 수 있습니다.
//!
//! 재구성은 구조적으로 항상 성공하도록 설계되어 있습니다. 잘못된
//! 페이로드는 빈 속성 목록으로 처리되므로, 실제 실패 지점은 조립된
//! 문서의 최종 직렬화 하나뿐입니다.

use logbridge_core::error::{ExportError, LogbridgeError};

/// 재구성 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum ReconstructError {
    /// OTLP 문서 직렬화 실패
    #[error("otlp serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<ReconstructError> for LogbridgeError {
    fn from(err: ReconstructError) -> Self {
        LogbridgeError::Export(ExportError::Serialize(err.to_string()))
    }
}
