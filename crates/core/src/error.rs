//! 에러 타입 — 도메인별 에러 정의

/// Logbridge 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum LogbridgeError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 내보내기(재구성/직렬화) 에러
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 내보내기 에러
///
/// 재구성된 OTLP 문서를 외부 표현으로 만드는 단계의 에러입니다.
/// 재구성 자체는 구조적으로 항상 성공하므로, 실패 지점은 직렬화뿐입니다.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// OTLP 문서 직렬화 실패
    #[error("serialize failed: {0}")]
    Serialize(String),
}
