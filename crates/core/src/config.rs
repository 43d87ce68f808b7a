//! 설정 관리 — logbridge.toml 파싱 및 런타임 설정
//!
//! [`LogbridgeConfig`]는 모든 크레이트의 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. 환경변수 (`LOGBRIDGE_EXPORT_MAX_PAYLOAD_BYTES=65536` 형식)
//! 2. 설정 파일 (`logbridge.toml`)
//! 3. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), logbridge_core::error::LogbridgeError> {
//! use logbridge_core::config::LogbridgeConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = LogbridgeConfig::load("logbridge.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = LogbridgeConfig::parse("[general]\nlog_level = \"debug\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, LogbridgeError};

/// Logbridge 통합 설정
///
/// `logbridge.toml` 파일의 최상위 구조를 나타냅니다.
/// 각 크레이트는 자기 섹션만 읽어 사용합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogbridgeConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// OTLP 내보내기 설정
    #[serde(default)]
    pub export: ExportConfig,
}

impl LogbridgeConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LogbridgeError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, LogbridgeError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogbridgeError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                LogbridgeError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, LogbridgeError> {
        toml::from_str(toml_str).map_err(|e| {
            LogbridgeError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `LOGBRIDGE_{SECTION}_{FIELD}`
    /// 예: `LOGBRIDGE_GENERAL_LOG_LEVEL=debug`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "LOGBRIDGE_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "LOGBRIDGE_GENERAL_LOG_FORMAT");

        // Export
        override_usize(
            &mut self.export.max_payload_bytes,
            "LOGBRIDGE_EXPORT_MAX_PAYLOAD_BYTES",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), LogbridgeError> {
        // log_level 검증
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        // log_format 검증
        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        // max_payload_bytes 검증
        if self.export.max_payload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "export.max_payload_bytes".to_owned(),
                reason: "must be greater than zero".to_owned(),
            }
            .into());
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "json".to_owned(),
        }
    }
}

/// OTLP 내보내기 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// HTTP 로그 페이로드 최대 허용 크기 (바이트)
    ///
    /// 이 크기를 넘는 페이로드는 속성 평탄화를 건너뜁니다.
    pub max_payload_bytes: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: 1024 * 1024, // 1MiB
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_usize(target: &mut usize, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<usize>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse usize from env var, ignoring"
            ),
        }
    }
}
