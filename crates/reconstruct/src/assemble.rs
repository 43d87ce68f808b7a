//! 문서 조립 — 그룹핑 결과를 OTLP logs 문서로 합성
//!
//! 환경/HTTP 경로가 공유하는 공통 골격입니다. 이벤트를 리소스 단위로
//! 분할하고, 그룹마다 리소스 속성과 레코드 목록을 만들어 최상위
//! [`LogsData`] 문서를 완성합니다. 레코드 자체를 만드는 방법은
//! 호출자가 클로저로 주입합니다.

use chrono::{DateTime, Utc};
use logbridge_core::metrics::{
    LABEL_SOURCE, RECONSTRUCT_RECORDS_TOTAL, RECONSTRUCT_RESOURCES_TOTAL,
};
use logbridge_core::types::{Metadata, MetadataProvider};
use metrics::counter;
use tracing::debug;

use crate::group::group_by_metadata;
use crate::otlp::{Attribute, LogRecord, LogsData, Resource, ResourceLog, Scope, ScopeLog};

/// 이 시스템이 생성한 배치임을 표시하는 스코프 이름
pub const SCOPE_NAME: &str = "logbridge";

/// 메타데이터 키 -> OTel 리소스 속성 키 매핑
const SERVICE_NAME_KEY: &str = "service_name";
const ENVIRONMENT_NAME_KEY: &str = "environment_name";

/// 타임스탬프를 Unix 나노초 10진수 문자열로 변환합니다.
///
/// 나노초 범위를 벗어나는 시각(약 2262년 이후)은 0으로 수렴합니다.
pub(crate) fn unix_nanos(timestamp: &DateTime<Utc>) -> String {
    timestamp.timestamp_nanos_opt().unwrap_or(0).to_string()
}

/// 메타데이터를 OTLP 리소스 속성 목록으로 변환합니다.
///
/// 잘 알려진 키는 OTel 시맨틱 컨벤션 이름으로 바꿔 고정 위치에
/// 먼저 배치합니다: `service_name` -> `service.name`,
/// `environment_name` -> `deployment.environment.name`. 나머지 키는
/// 그대로 뒤에 붙습니다.
pub fn build_resource_attributes(metadata: &Metadata) -> Vec<Attribute> {
    let mut attributes = Vec::with_capacity(metadata.len());

    if let Some(service) = metadata.get(SERVICE_NAME_KEY) {
        attributes.push(Attribute::string("service.name", service));
    }
    if let Some(environment) = metadata.get(ENVIRONMENT_NAME_KEY) {
        attributes.push(Attribute::string(
            "deployment.environment.name",
            environment,
        ));
    }

    for (key, value) in metadata {
        if key == SERVICE_NAME_KEY || key == ENVIRONMENT_NAME_KEY {
            continue;
        }
        attributes.push(Attribute::string(key, value));
    }

    attributes
}

/// 이벤트 목록을 OTLP logs 문서로 조립합니다.
///
/// `observed`는 이 호출의 관측 시각으로, 모든 레코드의
/// `observedTimeUnixNano`에 동일하게 들어갑니다. `build_record`는
/// (이벤트, 관측 나노초 문자열)로 레코드 하나를 만듭니다.
pub(crate) fn build_logs_data<T, F>(
    events: &[T],
    observed: DateTime<Utc>,
    source: &'static str,
    mut build_record: F,
) -> LogsData
where
    T: MetadataProvider,
    F: FnMut(&T, &str) -> LogRecord,
{
    let observed_nanos = unix_nanos(&observed);
    let groups = group_by_metadata(events);

    let resource_logs: Vec<ResourceLog> = groups
        .iter()
        .map(|group| {
            let log_records: Vec<LogRecord> = group
                .events
                .iter()
                .map(|event| build_record(event, &observed_nanos))
                .collect();

            ResourceLog {
                resource: Resource {
                    attributes: build_resource_attributes(group.metadata),
                },
                scope_logs: vec![ScopeLog {
                    scope: Scope {
                        name: SCOPE_NAME.to_owned(),
                    },
                    log_records,
                }],
            }
        })
        .collect();

    counter!(RECONSTRUCT_RECORDS_TOTAL, LABEL_SOURCE => source).increment(events.len() as u64);
    counter!(RECONSTRUCT_RESOURCES_TOTAL, LABEL_SOURCE => source)
        .increment(resource_logs.len() as u64);
    debug!(
        source,
        records = events.len(),
        resources = resource_logs.len(),
        "assembled otlp logs document"
    );

    LogsData { resource_logs }
}
